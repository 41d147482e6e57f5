use serde::{Deserialize, Serialize};
use crate::models::domain::{Category, MatchResult, Rating, Review, Submission, Tool};
use crate::models::requests::MatchingRequest;

/// Response for the smart-match endpoint
#[derive(Debug, Clone, Serialize)]
pub struct MatchingResponse<'a> {
    pub matches: Vec<MatchResult<'a>>,
    pub input: MatchingRequest,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: i64,
    #[serde(rename = "totalPages")]
    pub total_pages: i64,
}

impl Pagination {
    pub fn new(page: u32, limit: u32, total: i64) -> Self {
        let limit_i = i64::from(limit.max(1));
        Self {
            page,
            limit,
            total,
            total_pages: (total + limit_i - 1) / limit_i,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolListResponse {
    pub tools: Vec<Tool>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDetailResponse {
    pub tool: Tool,
    pub reviews: Vec<Review>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryListResponse {
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingResponse {
    pub rating: Rating,
    #[serde(rename = "averageRating")]
    pub average_rating: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteStatusResponse {
    #[serde(rename = "toolId")]
    pub tool_id: String,
    pub favorited: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionListResponse {
    pub submissions: Vec<Submission>,
}

/// Result of approving a submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApprovalResponse {
    pub submission: Submission,
    pub tool: Tool,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
