pub mod contact_entries;
