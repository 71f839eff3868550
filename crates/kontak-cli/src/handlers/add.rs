//! Add command handler.

use anyhow::Result;
use kontak_core::{Contact, ContactInput};

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Create a contact through the same validation as the web form.
pub async fn execute(ctx: &CliContext, input: ContactInput) -> Result<Contact> {
    let committed = ctx.contacts.create(input).await.map_err(CliError::from)?;
    println!("{} (ID: {})", committed.feedback, committed.value.id);
    Ok(committed.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kontak_db::TestDb;

    #[tokio::test]
    async fn adds_valid_contact() {
        let db = TestDb::new().await.unwrap();
        let ctx = CliContext::new(db.contact_service());

        let contact = execute(
            &ctx,
            ContactInput::new("Alice", "a@x.com", "+6281234567890"),
        )
        .await
        .unwrap();
        assert_eq!(contact.name, "Alice");
        assert_eq!(ctx.contacts.list().await.unwrap(), vec![contact]);
    }

    #[tokio::test]
    async fn rejected_contact_exits_with_data_error() {
        let db = TestDb::new().await.unwrap();
        let ctx = CliContext::new(db.contact_service());

        let err = execute(&ctx, ContactInput::new("Alice", "nope", "081234567890"))
            .await
            .unwrap_err();
        assert_eq!(crate::error::exit_code_for(&err), 65);
        assert!(err.to_string().contains("Invalid email address."));
        assert!(ctx.contacts.list().await.unwrap().is_empty());
    }
}
