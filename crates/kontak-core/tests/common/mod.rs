//! Shared fakes for kontak-core integration tests.

use async_trait::async_trait;
use std::sync::Mutex;

use kontak_core::{Contact, ContactRepository, NewContact, RepositoryError};

/// In-memory repository that enforces name uniqueness like the SQLite store.
#[derive(Default)]
pub struct InMemoryContacts {
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    contacts: Vec<Contact>,
    next_id: i64,
}

impl InMemoryContacts {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContacts {
    async fn list(&self) -> Result<Vec<Contact>, RepositoryError> {
        Ok(self.state.lock().unwrap().contacts.clone())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Contact>, RepositoryError> {
        let state = self.state.lock().unwrap();
        Ok(state.contacts.iter().find(|c| c.name == name).cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Contact>, RepositoryError> {
        let state = self.state.lock().unwrap();
        Ok(state.contacts.iter().find(|c| c.id == id).cloned())
    }

    async fn insert(&self, contact: &NewContact) -> Result<Contact, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        if state.contacts.iter().any(|c| c.name == contact.name) {
            return Err(RepositoryError::AlreadyExists(contact.name.clone()));
        }
        state.next_id += 1;
        let stored = contact.clone().with_id(state.next_id);
        state.contacts.push(stored.clone());
        Ok(stored)
    }

    async fn update_by_id(&self, id: i64, fields: &NewContact) -> Result<(), RepositoryError> {
        let mut state = self.state.lock().unwrap();
        if state
            .contacts
            .iter()
            .any(|c| c.id != id && c.name == fields.name)
        {
            return Err(RepositoryError::AlreadyExists(fields.name.clone()));
        }
        let slot = state
            .contacts
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| RepositoryError::NotFound(format!("Contact with ID {id}")))?;
        *slot = fields.clone().with_id(id);
        Ok(())
    }

    async fn delete_by_name(&self, name: &str) -> Result<bool, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        let before = state.contacts.len();
        if let Some(idx) = state.contacts.iter().position(|c| c.name == name) {
            state.contacts.remove(idx);
        }
        Ok(state.contacts.len() != before)
    }
}
