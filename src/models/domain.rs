use serde::{Deserialize, Serialize};

/// Pricing classification of a tool
///
/// The data layer stores these in SCREAMING_SNAKE_CASE; lower-case and
/// hyphenated spellings are accepted on input as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PricingType {
    #[serde(alias = "free")]
    Free,
    #[serde(alias = "freemium")]
    Freemium,
    #[serde(alias = "paid")]
    Paid,
    #[serde(alias = "subscription")]
    Subscription,
    #[serde(alias = "open_source", alias = "open-source")]
    OpenSource,
}

impl PricingType {
    pub const ALL: [PricingType; 5] = [
        PricingType::Free,
        PricingType::Freemium,
        PricingType::Paid,
        PricingType::Subscription,
        PricingType::OpenSource,
    ];

    /// Column value used in the `tools.pricing_type` TEXT column
    pub fn as_db_str(&self) -> &'static str {
        match self {
            PricingType::Free => "FREE",
            PricingType::Freemium => "FREEMIUM",
            PricingType::Paid => "PAID",
            PricingType::Subscription => "SUBSCRIPTION",
            PricingType::OpenSource => "OPEN_SOURCE",
        }
    }

    /// Parse any accepted spelling, case-insensitively
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().replace('-', "_").as_str() {
            "free" => Some(PricingType::Free),
            "freemium" => Some(PricingType::Freemium),
            "paid" => Some(PricingType::Paid),
            "subscription" => Some(PricingType::Subscription),
            "open_source" => Some(PricingType::OpenSource),
            _ => None,
        }
    }

    /// Free of charge outright (no paid plan needed at all)
    pub fn is_free(&self) -> bool {
        matches!(self, PricingType::Free | PricingType::OpenSource)
    }
}

/// A category or tag attached to a tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
    pub slug: String,
}

impl Label {
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
        }
    }
}

/// A catalog entry for one AI product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    #[serde(rename = "longDescription", default)]
    pub long_description: Option<String>,
    #[serde(rename = "websiteUrl", default)]
    pub website_url: String,
    #[serde(rename = "logoUrl", default)]
    pub logo_url: Option<String>,
    #[serde(rename = "pricingType")]
    pub pricing_type: PricingType,
    #[serde(rename = "pricingDetails", default)]
    pub pricing_details: Option<String>,
    #[serde(rename = "hasFreeTier", default)]
    pub has_free_tier: bool,
    #[serde(default)]
    pub categories: Vec<Label>,
    #[serde(default)]
    pub tags: Vec<Label>,
    #[serde(rename = "averageRating", default)]
    pub average_rating: Option<f64>,
    #[serde(rename = "reviewCount", default)]
    pub review_count: i32,
    #[serde(rename = "favoriteCount", default)]
    pub favorite_count: i32,
    #[serde(rename = "viewCount", default)]
    pub view_count: i32,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Kind of project the user is working on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectType {
    WebApp,
    MobileApp,
    DataAnalysis,
    Research,
    Creative,
    Other(String),
}

impl ProjectType {
    pub fn as_str(&self) -> &str {
        match self {
            ProjectType::WebApp => "web-app",
            ProjectType::MobileApp => "mobile-app",
            ProjectType::DataAnalysis => "data-analysis",
            ProjectType::Research => "research",
            ProjectType::Creative => "creative",
            ProjectType::Other(raw) => raw,
        }
    }
}

impl From<String> for ProjectType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "web-app" => ProjectType::WebApp,
            "mobile-app" => ProjectType::MobileApp,
            "data-analysis" => ProjectType::DataAnalysis,
            "research" => ProjectType::Research,
            "creative" => ProjectType::Creative,
            _ => ProjectType::Other(value),
        }
    }
}

impl From<ProjectType> for String {
    fn from(value: ProjectType) -> Self {
        value.as_str().to_string()
    }
}

/// Monthly spend the user is willing to commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Budget {
    Free,
    Under20,
    Under50,
    Flexible,
    Other(String),
}

impl Budget {
    pub fn as_str(&self) -> &str {
        match self {
            Budget::Free => "free",
            Budget::Under20 => "under-20",
            Budget::Under50 => "under-50",
            Budget::Flexible => "flexible",
            Budget::Other(raw) => raw,
        }
    }
}

impl From<String> for Budget {
    fn from(value: String) -> Self {
        match value.as_str() {
            "free" => Budget::Free,
            "under-20" => Budget::Under20,
            "under-50" => Budget::Under50,
            "flexible" => Budget::Flexible,
            _ => Budget::Other(value),
        }
    }
}

impl From<Budget> for String {
    fn from(value: Budget) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
    Other(String),
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &str {
        match self {
            ExperienceLevel::Beginner => "beginner",
            ExperienceLevel::Intermediate => "intermediate",
            ExperienceLevel::Advanced => "advanced",
            ExperienceLevel::Other(raw) => raw,
        }
    }
}

impl From<String> for ExperienceLevel {
    fn from(value: String) -> Self {
        match value.as_str() {
            "beginner" => ExperienceLevel::Beginner,
            "intermediate" => ExperienceLevel::Intermediate,
            "advanced" => ExperienceLevel::Advanced,
            _ => ExperienceLevel::Other(value),
        }
    }
}

impl From<ExperienceLevel> for String {
    fn from(value: ExperienceLevel) -> Self {
        value.as_str().to_string()
    }
}

/// What the user primarily wants the tool for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Goal {
    Coding,
    Design,
    Writing,
    Research,
    Automation,
    Other(String),
}

impl Goal {
    pub fn as_str(&self) -> &str {
        match self {
            Goal::Coding => "coding",
            Goal::Design => "design",
            Goal::Writing => "writing",
            Goal::Research => "research",
            Goal::Automation => "automation",
            Goal::Other(raw) => raw,
        }
    }

    /// Category/tag slug fragments that indicate a tool serves this goal
    pub fn keyword_family(&self) -> &'static [&'static str] {
        match self {
            Goal::Coding => &["development", "code-completion", "debugging"],
            Goal::Design => &["design", "image-generation", "creative"],
            Goal::Writing => &["writing", "content", "copywriting"],
            Goal::Research => &["research", "productivity", "analysis"],
            Goal::Automation => &["productivity", "automation", "workflow"],
            Goal::Other(_) => &[],
        }
    }
}

impl From<String> for Goal {
    fn from(value: String) -> Self {
        match value.as_str() {
            "coding" => Goal::Coding,
            "design" => Goal::Design,
            "writing" => Goal::Writing,
            "research" => Goal::Research,
            "automation" => Goal::Automation,
            _ => Goal::Other(value),
        }
    }
}

impl From<Goal> for String {
    fn from(value: Goal) -> Self {
        value.as_str().to_string()
    }
}

/// The questionnaire answers a tool is matched against
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryProfile {
    #[serde(rename = "projectType")]
    pub project_type: ProjectType,
    #[serde(rename = "techStack", default)]
    pub tech_stack: Vec<String>,
    pub budget: Budget,
    #[serde(rename = "experienceLevel")]
    pub experience_level: ExperienceLevel,
    #[serde(rename = "primaryGoal")]
    pub primary_goal: Goal,
    #[serde(default)]
    pub features: Vec<String>,
}

/// Score and explanation for one tool against one profile
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult<'a> {
    pub tool: &'a Tool,
    pub score: u8,
    pub reasons: Vec<String>,
}

/// Browsable category with the number of tools filed under it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    #[serde(rename = "order")]
    pub sort_order: i32,
    #[serde(rename = "toolCount")]
    pub tool_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rating {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "toolId")]
    pub tool_id: String,
    pub score: i16,
    #[serde(rename = "updatedAt")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "toolId")]
    pub tool_id: String,
    pub title: String,
    pub content: String,
    pub pros: Option<String>,
    pub cons: Option<String>,
    #[serde(rename = "isApproved")]
    pub is_approved: bool,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmissionStatus {
    Pending,
    Approved,
    Rejected,
}

impl SubmissionStatus {
    pub fn as_db_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Pending => "PENDING",
            SubmissionStatus::Approved => "APPROVED",
            SubmissionStatus::Rejected => "REJECTED",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_uppercase().as_str() {
            "PENDING" => Some(SubmissionStatus::Pending),
            "APPROVED" => Some(SubmissionStatus::Approved),
            "REJECTED" => Some(SubmissionStatus::Rejected),
            _ => None,
        }
    }
}

/// A tool listing proposed by a user, awaiting moderation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "longDescription")]
    pub long_description: Option<String>,
    #[serde(rename = "websiteUrl")]
    pub website_url: String,
    #[serde(rename = "logoUrl")]
    pub logo_url: Option<String>,
    #[serde(rename = "pricingType")]
    pub pricing_type: PricingType,
    #[serde(rename = "pricingDetails")]
    pub pricing_details: Option<String>,
    #[serde(rename = "hasFreeTier")]
    pub has_free_tier: bool,
    #[serde(rename = "categoryIds")]
    pub category_ids: Vec<String>,
    #[serde(rename = "tagIds")]
    pub tag_ids: Vec<String>,
    pub status: SubmissionStatus,
    #[serde(rename = "rejectionReason")]
    pub rejection_reason: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "reviewedAt")]
    pub reviewed_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Caller role carried by a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    User,
    Admin,
}

/// Authenticated caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub role: Role,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
