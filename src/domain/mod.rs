//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `catalog` - Materials, portfolio projects and room hotspots
//! - `contact` - Contact-form submissions and intake errors
//! - `recommendation` - Style categorisation and concept composition
//! - `redesign` - Mocked style-transfer variants

pub mod catalog;
pub mod contact;
pub mod foundation;
pub mod recommendation;
pub mod redesign;
