//! Contact Store Module
//!
//! Insertion-ordered contact list with a monotonically increasing id counter.

use crate::contacts::{Contact, FIRST_CONTACT_ID};

// == Contact Store ==
/// In-memory contact repository.
///
/// Owns every [`Contact`] exclusively. Callers only ever receive clones, so
/// nothing outside the store can mutate its state.
#[derive(Debug)]
pub struct ContactStore {
    /// Contacts in creation order
    contacts: Vec<Contact>,
    /// Id assigned to the next created contact
    next_id: u64,
}

impl Default for ContactStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactStore {
    // == Constructor ==
    /// Creates an empty store whose first contact will receive id 1.
    pub fn new() -> Self {
        Self {
            contacts: Vec::new(),
            next_id: FIRST_CONTACT_ID,
        }
    }

    // == List All ==
    /// Returns a snapshot of all contacts in creation order.
    pub fn list_all(&self) -> Vec<Contact> {
        self.contacts.clone()
    }

    // == Get By Id ==
    /// Looks up a contact by id.
    pub fn get_by_id(&self, id: u64) -> Option<Contact> {
        self.contacts.iter().find(|c| c.id == id).cloned()
    }

    // == Create ==
    /// Appends a new contact and returns it with its assigned id.
    ///
    /// Ids are never reused, even after the contact holding one is deleted.
    pub fn create(&mut self, name: String, email: String) -> Contact {
        let contact = Contact::new(self.next_id, name, email);
        self.next_id += 1;
        self.contacts.push(contact.clone());
        contact
    }

    // == Update ==
    /// Replaces the name and email of an existing contact in place.
    ///
    /// Returns the updated record, or `None` if no contact has this id. The
    /// store is left untouched in the `None` case.
    pub fn update(&mut self, id: u64, name: String, email: String) -> Option<Contact> {
        let contact = self.contacts.iter_mut().find(|c| c.id == id)?;
        contact.name = name;
        contact.email = email;
        Some(contact.clone())
    }

    // == Delete ==
    /// Removes a contact, returning it if it existed.
    pub fn delete(&mut self, id: u64) -> Option<Contact> {
        let index = self.contacts.iter().position(|c| c.id == id)?;
        Some(self.contacts.remove(index))
    }

    // == Length ==
    /// Returns the number of live contacts.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no contacts.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}
