pub mod form;
pub mod keys;
pub mod notification;

pub use form::{submit, Accepted, Draft, Field, Rejected, SubmissionRecord, SubmitError};
pub use keys::KeyGenerator;
pub use notification::{Notification, Variant};
