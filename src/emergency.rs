//! Emergency panel: a one-tap overlay listing hotlines. Picking a contact
//! yields its `tel:` link and closes the panel.

use crate::directory::tel_link;
use crate::models::ContactRecord;

#[derive(Debug, Clone)]
pub struct EmergencyPanel<'a> {
    contacts: &'a [ContactRecord],
    active: bool,
}

impl<'a> EmergencyPanel<'a> {
    pub fn new(contacts: &'a [ContactRecord]) -> Self {
        Self {
            contacts,
            active: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Open the panel and return the contacts to show.
    pub fn activate(&mut self) -> &'a [ContactRecord] {
        tracing::info!(contacts = self.contacts.len(), "Emergency mode activated");
        self.active = true;
        self.contacts
    }

    /// Contacts while the panel is open, empty otherwise.
    pub fn visible(&self) -> &'a [ContactRecord] {
        if self.active {
            self.contacts
        } else {
            &[]
        }
    }

    /// Dial link for the contact at `index`. Closes the panel.
    ///
    /// Returns None, and leaves the panel as it was, when the panel is closed
    /// or the index is out of range.
    pub fn call(&mut self, index: usize) -> Option<String> {
        if !self.active {
            return None;
        }
        let contact = self.contacts.get(index)?;
        tracing::info!(contact = %contact.name, "Calling emergency contact");
        self.active = false;
        Some(tel_link(&contact.number))
    }

    pub fn dismiss(&mut self) {
        self.active = false;
    }
}
