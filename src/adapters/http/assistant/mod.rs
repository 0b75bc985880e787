//! HTTP adapter for the mocked AI assistant endpoints.
//!
//! - `POST /api/redesign` - Style variants for an uploaded room photo
//! - `POST /api/chatbot` - Keyword-driven design concept

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::assistant_routes;
