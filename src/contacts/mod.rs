//! Contacts Module
//!
//! Provides the in-memory contact repository and its record type.

mod contact;
mod store;


// Re-export public types
pub use contact::Contact;
pub use store::ContactStore;

// == Public Constants ==
/// First id handed out by a fresh store
pub const FIRST_CONTACT_ID: u64 = 1;
