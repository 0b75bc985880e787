//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

mod check_health;
mod submit_contact;

pub use check_health::{CheckHealthHandler, CheckHealthQuery, HealthReport};
pub use submit_contact::{SubmitContactCommand, SubmitContactHandler, SubmitContactResult};
