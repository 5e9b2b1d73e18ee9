//! Personal contacts kept in local storage under `personal-contacts`.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::db::{DatabaseError, LocalStorage, PERSONAL_CONTACTS_KEY};
use crate::models::PersonalContact;

/// Optional leading `+`, then digits with spaces, dashes, dots or brackets.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9()][0-9 ().-]{2,19}$").expect("valid regex"));

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("Contact {0} is required")]
    MissingField(&'static str),

    #[error("Not a valid phone number: {0}")]
    InvalidNumber(String),

    #[error("No contact at position {0}")]
    NotFound(usize),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

/// Trim the fields and check them.
pub fn validate(contact: &PersonalContact) -> Result<PersonalContact, ContactError> {
    let name = contact.name.trim();
    let relation = contact.relation.trim();
    let number = contact.number.trim();

    if name.is_empty() {
        return Err(ContactError::MissingField("name"));
    }
    if relation.is_empty() {
        return Err(ContactError::MissingField("relation"));
    }
    if number.is_empty() {
        return Err(ContactError::MissingField("number"));
    }
    let digits = number.chars().filter(char::is_ascii_digit).count();
    if !PHONE_RE.is_match(number) || digits < 3 {
        return Err(ContactError::InvalidNumber(number.to_string()));
    }

    Ok(PersonalContact {
        name: name.to_string(),
        relation: relation.to_string(),
        number: number.to_string(),
    })
}

/// In-memory copy of the stored list. Every change writes the whole list
/// back before it is applied here, so a failed write leaves both unchanged.
#[derive(Debug, Clone, Default)]
pub struct PersonalContactBook {
    contacts: Vec<PersonalContact>,
}

impl PersonalContactBook {
    /// Load the stored list. A missing or unreadable document gives an empty book.
    pub fn load(storage: &LocalStorage) -> Self {
        let contacts = match storage.load::<Vec<PersonalContact>>(PERSONAL_CONTACTS_KEY) {
            Ok(stored) => stored.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring unreadable personal contacts");
                Vec::new()
            }
        };
        Self { contacts }
    }

    pub fn contacts(&self) -> &[PersonalContact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn add(
        &mut self,
        storage: &LocalStorage,
        contact: PersonalContact,
    ) -> Result<&PersonalContact, ContactError> {
        let contact = validate(&contact)?;

        let mut next = self.contacts.clone();
        next.push(contact);
        storage.save(PERSONAL_CONTACTS_KEY, &next)?;

        self.contacts = next;
        tracing::info!(count = self.contacts.len(), "Personal contact added");
        Ok(&self.contacts[self.contacts.len() - 1])
    }

    pub fn remove(
        &mut self,
        storage: &LocalStorage,
        index: usize,
    ) -> Result<PersonalContact, ContactError> {
        if index >= self.contacts.len() {
            return Err(ContactError::NotFound(index));
        }

        let mut next = self.contacts.clone();
        let removed = next.remove(index);
        storage.save(PERSONAL_CONTACTS_KEY, &next)?;

        self.contacts = next;
        tracing::info!(count = self.contacts.len(), "Personal contact removed");
        Ok(removed)
    }
}
