//! Contact domain types.
//!
//! These types represent contacts in the system, independent of any
//! infrastructure concerns (database, HTTP forms, etc.).

use serde::{Deserialize, Serialize};

/// A contact that exists in the store with an assigned ID.
///
/// Use `NewContact` for contacts that haven't been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Store-assigned identifier. Never changes after creation.
    pub id: i64,
    /// Display name, unique across all contacts.
    pub name: String,
    /// Email address. Optional at the storage level.
    pub email: Option<String>,
    /// Mobile phone number.
    pub phone: String,
}

/// A contact to be inserted (no ID yet).
///
/// Also used as the full-replace payload for updates, since an update
/// rewrites every mutable field at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContact {
    pub name: String,
    pub email: Option<String>,
    pub phone: String,
}

impl NewContact {
    /// Attach a store-assigned ID, producing the persisted form.
    pub fn with_id(self, id: i64) -> Contact {
        Contact {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
        }
    }
}

/// Raw field values as submitted through a form.
///
/// Nothing here has been checked yet; see [`crate::validation`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInput {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl ContactInput {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// Convert an accepted submission into a store payload.
    ///
    /// An empty email becomes `None`.
    pub fn into_new_contact(self) -> NewContact {
        let email = if self.email.trim().is_empty() {
            None
        } else {
            Some(self.email)
        };
        NewContact {
            name: self.name,
            email,
            phone: self.phone,
        }
    }
}

impl From<&Contact> for ContactInput {
    fn from(contact: &Contact) -> Self {
        Self {
            name: contact.name.clone(),
            email: contact.email.clone().unwrap_or_default(),
            phone: contact.phone.clone(),
        }
    }
}

/// An edit submission: the target ID, the new field values, and the name the
/// record had when the edit form was opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactUpdate {
    pub id: i64,
    pub input: ContactInput,
    pub old_name: String,
}

impl ContactUpdate {
    /// True when the submission keeps the record's original name.
    pub fn keeps_name(&self) -> bool {
        self.input.name == self.old_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_email_is_stored_as_none() {
        let new = ContactInput::new("Alice", "  ", "081234567890").into_new_contact();
        assert_eq!(new.email, None);
    }

    #[test]
    fn with_id_keeps_fields() {
        let contact = NewContact {
            name: "Alice".to_string(),
            email: Some("alice@x.com".to_string()),
            phone: "081234567890".to_string(),
        }
        .with_id(7);
        assert_eq!(contact.id, 7);
        assert_eq!(contact.name, "Alice");
    }

    #[test]
    fn keeps_name_compares_case_sensitively() {
        let update = ContactUpdate {
            id: 1,
            input: ContactInput::new("alice", "a@x.com", "081234567890"),
            old_name: "Alice".to_string(),
        };
        assert!(!update.keeps_name());
    }
}
