//! CLI-specific error types and mappings.
//!
//! Maps `CoreError` to exit codes and user-facing messages.

use kontak_core::CoreError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Input rejected by the contact rules.
    #[error("Invalid contact: {0}")]
    Invalid(String),

    /// The named contact does not exist.
    #[error("{0} not found")]
    NotFound(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),
}

impl CliError {
    /// Map error to an exit code, following sysexits.h where one fits.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Invalid(_) => 65,  // EX_DATAERR
            Self::NotFound(_) => 66, // EX_NOINPUT
            Self::Database(_) => 74, // EX_IOERR
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Repository(repo_err) => Self::Database(repo_err.to_string()),
            CoreError::Validation(errors) => Self::Invalid(
                errors
                    .iter()
                    .map(|e| e.message)
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
            CoreError::NotFound(what) => Self::NotFound(what),
        }
    }
}

/// Exit code for an error that reached `main`.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<CliError>().map_or(1, CliError::exit_code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kontak_core::RepositoryError;
    use kontak_core::validation::{Field, ValidationErrors};

    #[test]
    fn validation_lists_every_message() {
        let mut errors = ValidationErrors::new();
        errors.push(Field::Email, "Invalid email address.");
        errors.push(Field::Phone, "Invalid phone number.");

        let err = CliError::from(CoreError::Validation(errors));
        assert_eq!(
            err.to_string(),
            "Invalid contact: Invalid email address. Invalid phone number."
        );
        assert_eq!(err.exit_code(), 65);
    }

    #[test]
    fn exit_codes_survive_anyhow() {
        let err: anyhow::Error = CliError::from(CoreError::NotFound("Contact 'Bob'".into())).into();
        assert_eq!(err.to_string(), "Contact 'Bob' not found");
        assert_eq!(exit_code_for(&err), 66);

        let err: anyhow::Error =
            CliError::from(CoreError::Repository(RepositoryError::Storage("locked".into()))).into();
        assert_eq!(exit_code_for(&err), 74);

        assert_eq!(exit_code_for(&anyhow::anyhow!("other")), 1);
    }
}
