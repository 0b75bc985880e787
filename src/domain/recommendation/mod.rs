//! Recommendation module - keyword-driven design concepts for the chatbot.
//!
//! A style description is bucketed into a [`StyleCategory`] and the
//! [`RecommendationComposer`] fills a fixed concept template from it.
//! Everything here is pure; no ports are involved.

mod composer;
mod style_category;

pub use composer::{
    RecommendationBundle, RecommendationComposer, RecommendationRequest, ESTIMATE, TIMELINE,
};
pub use style_category::{StyleCategory, BOHO_PALETTE, NEUTRAL_PALETTE};
