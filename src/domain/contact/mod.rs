//! Contact module - website leads and their intake errors.

mod errors;
mod submission;

pub use errors::ContactError;
pub use submission::{ContactSubmission, CONTACT_COLLECTION};
