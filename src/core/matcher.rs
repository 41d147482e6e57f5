use crate::models::{MatchResult, QueryProfile, Tool};
use crate::core::scoring::calculate_match_score;

/// Scores at or below this floor are not considered a meaningful match
pub const DEFAULT_MIN_SCORE: u8 = 15;

/// Number of recommendations returned when the caller does not choose one
pub const DEFAULT_TOP_N: usize = 10;

/// Main matching orchestrator
///
/// # Pipeline Stages
/// 1. Score every tool in the catalog against the profile
/// 2. Drop tools scoring at or below the floor
/// 3. Stable sort by descending score (ties keep catalog order)
/// 4. Truncate to the requested count
///
/// The matcher holds no per-request state and can be shared freely.
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    min_score: u8,
}

impl Matcher {
    pub fn new(min_score: u8) -> Self {
        Self { min_score }
    }

    pub fn min_score(&self) -> u8 {
        self.min_score
    }

    /// Score a single tool against a profile
    pub fn score<'a>(&self, tool: &'a Tool, profile: &QueryProfile) -> MatchResult<'a> {
        let (score, reasons) = calculate_match_score(tool, profile);
        MatchResult { tool, score, reasons }
    }

    /// Rank the catalog for a profile
    ///
    /// # Arguments
    /// * `tools` - Snapshot of the published catalog
    /// * `profile` - The user's questionnaire answers
    /// * `top_n` - Maximum number of results to return
    ///
    /// # Returns
    /// Results scoring above the floor, best first
    pub fn rank_top<'a>(
        &self,
        tools: &'a [Tool],
        profile: &QueryProfile,
        top_n: usize,
    ) -> Vec<MatchResult<'a>> {
        let mut results: Vec<MatchResult<'a>> = tools
            .iter()
            .map(|tool| self.score(tool, profile))
            .filter(|result| result.score > self.min_score)
            .collect();

        // sort_by is stable, so equal scores keep catalog order
        results.sort_by(|a, b| b.score.cmp(&a.score));
        results.truncate(top_n);

        results
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_SCORE)
    }
}
