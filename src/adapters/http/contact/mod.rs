//! HTTP adapter for contact-form intake.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::contact_routes;
