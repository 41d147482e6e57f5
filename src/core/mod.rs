// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod scoring;
pub mod slug;

pub use filters::{goal_keyword_hits, has_feature, is_beginner_friendly, supports_technology};
pub use matcher::{Matcher, DEFAULT_MIN_SCORE, DEFAULT_TOP_N};
pub use scoring::{calculate_match_score, CriterionScore};
pub use slug::{slugify, unique_slug};
