pub mod contact_entry;

pub use contact_entry::ContactEntry;
