//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Pure domain logic (recommendations, redesign variants) is called directly
//! from the HTTP adapter and has no handler here.

pub mod handlers;

pub use handlers::{
    CheckHealthHandler, CheckHealthQuery, HealthReport, SubmitContactCommand,
    SubmitContactHandler, SubmitContactResult,
};
