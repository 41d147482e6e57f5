// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Budget, Category, ExperienceLevel, Goal, Label, MatchResult, PricingType, ProjectType,
    QueryProfile, Rating, Review, Role, Session, Submission, SubmissionStatus, Tool,
};
pub use requests::{
    CreateToolRequest, FavoriteRequest, MatchingRequest, RatingRequest, RejectSubmissionRequest, ReviewRequest,
    SubmissionListQuery, SubmissionRequest, ToolFilters, ToolIdQuery, ToolListQuery, ToolSort,
    UpdateToolRequest,
};
pub use responses::{
    ApprovalResponse, CategoryListResponse, ErrorResponse, FavoriteStatusResponse,
    HealthResponse, MatchingResponse, Pagination, RatingResponse, SubmissionListResponse,
    ToolDetailResponse, ToolListResponse,
};
