//! Interior Studio - Backend for an interior-design studio website
//!
//! Serves the showroom catalog (materials, portfolio projects, room
//! hotspots), mocked AI redesign and concept endpoints, and contact-form
//! intake backed by a document store.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
