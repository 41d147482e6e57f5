//! Toolmatch - AI tool directory with explainable smart matching
//!
//! The matching core scores every published tool against a short
//! questionnaire (budget, goal, tech stack, features, experience) and
//! returns the best matches with human-readable reasons. Around it sits an
//! actix-web service for browsing the catalog, rating, reviewing,
//! favoriting and submitting tools.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{calculate_match_score, slugify, Matcher};
pub use models::{Label, MatchResult, MatchingRequest, PricingType, QueryProfile, Tool};
