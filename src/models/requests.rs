use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{PricingType, QueryProfile, Submission};

/// Request for smart-match recommendations
///
/// Required fields are optional here so a missing one can be reported
/// with a 400 instead of a deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchingRequest {
    #[validate(required, length(min = 1))]
    #[serde(rename = "projectType", default)]
    pub project_type: Option<String>,
    #[serde(rename = "techStack", default)]
    pub tech_stack: Option<Vec<String>>,
    #[validate(required, length(min = 1))]
    #[serde(default)]
    pub budget: Option<String>,
    #[validate(required, length(min = 1))]
    #[serde(rename = "experienceLevel", default)]
    pub experience_level: Option<String>,
    #[validate(required, length(min = 1))]
    #[serde(rename = "primaryGoal", default)]
    pub primary_goal: Option<String>,
    #[serde(default)]
    pub features: Option<Vec<String>>,
}

impl MatchingRequest {
    /// Build the matcher profile, or `None` when a required field is missing
    ///
    /// Enum answers are passed through as sent, so `" free "` is an
    /// unrecognized budget. Tech and feature lists default to empty; blank
    /// entries are dropped.
    pub fn to_profile(&self) -> Option<QueryProfile> {
        Some(QueryProfile {
            project_type: non_empty(&self.project_type)?.into(),
            tech_stack: clean_list(&self.tech_stack),
            budget: non_empty(&self.budget)?.into(),
            experience_level: non_empty(&self.experience_level)?.into(),
            primary_goal: non_empty(&self.primary_goal)?.into(),
            features: clean_list(&self.features),
        })
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
}

fn clean_list(values: &Option<Vec<String>>) -> Vec<String> {
    values
        .iter()
        .flatten()
        .filter(|v| !v.trim().is_empty())
        .cloned()
        .collect()
}

/// Sort order for tool listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolSort {
    #[default]
    Newest,
    Popular,
    Rating,
}

impl ToolSort {
    pub fn parse(value: &str) -> Self {
        match value {
            "popular" => ToolSort::Popular,
            "rating" => ToolSort::Rating,
            _ => ToolSort::Newest,
        }
    }
}

/// Query string for `GET /tools`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolListQuery {
    pub category: Option<String>,
    pub tags: Option<String>,
    #[serde(alias = "pricingType")]
    pub pricing: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// Normalized listing filters handed to the data store
#[derive(Debug, Clone, PartialEq)]
pub struct ToolFilters {
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub pricing: Vec<PricingType>,
    pub search: Option<String>,
    pub sort: ToolSort,
    pub page: u32,
    pub limit: u32,
}

impl ToolFilters {
    pub fn offset(&self) -> u64 {
        (self.page as u64 - 1) * self.limit as u64
    }
}

impl ToolListQuery {
    /// Normalize the query, clamping paging to `1..` and `1..=max_limit`
    pub fn into_filters(self, default_limit: u32, max_limit: u32) -> ToolFilters {
        let split = |raw: Option<String>| -> Vec<String> {
            raw.unwrap_or_default()
                .split(',')
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect()
        };

        ToolFilters {
            categories: split(self.category),
            tags: split(self.tags),
            // unknown pricing values are ignored rather than rejected
            pricing: split(self.pricing)
                .iter()
                .filter_map(|p| PricingType::parse(p))
                .collect(),
            search: self
                .search
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            sort: self.sort.as_deref().map(ToolSort::parse).unwrap_or_default(),
            page: self.page.unwrap_or(1).max(1),
            limit: self.limit.unwrap_or(default_limit).clamp(1, max_limit.max(1)),
        }
    }
}

/// Query string carrying a single tool id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolIdQuery {
    #[serde(rename = "toolId")]
    pub tool_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RatingRequest {
    #[validate(length(min = 1))]
    #[serde(rename = "toolId")]
    pub tool_id: String,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5 stars"))]
    pub score: i16,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReviewRequest {
    #[validate(length(min = 1))]
    #[serde(rename = "toolId")]
    pub tool_id: String,
    #[validate(length(min = 5, max = 100, message = "Title must be at least 5 characters"))]
    pub title: String,
    #[validate(length(min = 20, max = 5000, message = "Review must be at least 20 characters"))]
    pub content: String,
    #[validate(length(max = 1000))]
    #[serde(default)]
    pub pros: Option<String>,
    #[validate(length(max = 1000))]
    #[serde(default)]
    pub cons: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FavoriteRequest {
    #[validate(length(min = 1))]
    #[serde(rename = "toolId")]
    pub tool_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmissionRequest {
    #[validate(length(min = 2, max = 100, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[validate(length(min = 10, message = "Description must be at least 10 characters"))]
    pub description: String,
    #[serde(rename = "longDescription", default)]
    pub long_description: Option<String>,
    #[validate(url(message = "Must be a valid URL"))]
    #[serde(rename = "websiteUrl")]
    pub website_url: String,
    #[validate(url(message = "Must be a valid URL"))]
    #[serde(rename = "logoUrl", default)]
    pub logo_url: Option<String>,
    #[serde(rename = "pricingType")]
    pub pricing_type: PricingType,
    #[serde(rename = "pricingDetails", default)]
    pub pricing_details: Option<String>,
    #[serde(rename = "hasFreeTier", default)]
    pub has_free_tier: bool,
    #[validate(length(min = 1, message = "Select at least one category"))]
    #[serde(rename = "categoryIds")]
    pub category_ids: Vec<String>,
    #[serde(rename = "tagIds", default)]
    pub tag_ids: Vec<String>,
}

/// Admin payload for adding a tool straight to the catalog
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateToolRequest {
    #[validate(length(min = 2, max = 100, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[validate(length(min = 10, message = "Description must be at least 10 characters"))]
    pub description: String,
    #[serde(rename = "longDescription", default)]
    pub long_description: Option<String>,
    #[validate(url(message = "Must be a valid URL"))]
    #[serde(rename = "websiteUrl")]
    pub website_url: String,
    #[validate(url(message = "Must be a valid URL"))]
    #[serde(rename = "logoUrl", default)]
    pub logo_url: Option<String>,
    #[serde(rename = "pricingType")]
    pub pricing_type: PricingType,
    #[serde(rename = "pricingDetails", default)]
    pub pricing_details: Option<String>,
    #[serde(rename = "hasFreeTier", default)]
    pub has_free_tier: bool,
    #[serde(rename = "categoryIds", default)]
    pub category_ids: Vec<String>,
    #[serde(rename = "tagIds", default)]
    pub tag_ids: Vec<String>,
}

impl From<&Submission> for CreateToolRequest {
    fn from(submission: &Submission) -> Self {
        Self {
            name: submission.name.clone(),
            description: submission.description.clone(),
            long_description: submission.long_description.clone(),
            website_url: submission.website_url.clone(),
            logo_url: submission.logo_url.clone(),
            pricing_type: submission.pricing_type,
            pricing_details: submission.pricing_details.clone(),
            has_free_tier: submission.has_free_tier,
            category_ids: submission.category_ids.clone(),
            tag_ids: submission.tag_ids.clone(),
        }
    }
}

/// Admin partial update; absent fields are left unchanged
///
/// `categoryIds` / `tagIds`, when present, replace the existing links.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateToolRequest {
    #[validate(length(min = 2, max = 100, message = "Name must be at least 2 characters"))]
    pub name: Option<String>,
    pub slug: Option<String>,
    #[validate(length(min = 10, message = "Description must be at least 10 characters"))]
    pub description: Option<String>,
    #[serde(rename = "longDescription")]
    pub long_description: Option<String>,
    #[validate(url(message = "Must be a valid URL"))]
    #[serde(rename = "websiteUrl")]
    pub website_url: Option<String>,
    #[validate(url(message = "Must be a valid URL"))]
    #[serde(rename = "logoUrl")]
    pub logo_url: Option<String>,
    #[serde(rename = "pricingType")]
    pub pricing_type: Option<PricingType>,
    #[serde(rename = "pricingDetails")]
    pub pricing_details: Option<String>,
    #[serde(rename = "hasFreeTier")]
    pub has_free_tier: Option<bool>,
    #[serde(rename = "isPublished")]
    pub is_published: Option<bool>,
    #[serde(rename = "categoryIds")]
    pub category_ids: Option<Vec<String>>,
    #[serde(rename = "tagIds")]
    pub tag_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RejectSubmissionRequest {
    #[validate(length(max = 1000))]
    #[serde(default)]
    pub reason: Option<String>,
}

/// Query string for `GET /submissions`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmissionListQuery {
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::{Budget, Goal};

    #[test]
    fn test_matching_request_requires_fields() {
        let req: MatchingRequest = serde_json::from_str(
            r#"{"projectType": "web-app", "budget": "free", "experienceLevel": "beginner"}"#,
        )
        .unwrap();

        assert!(req.validate().is_err());
        assert!(req.to_profile().is_none());
    }

    #[test]
    fn test_matching_request_rejects_blank_fields() {
        let req: MatchingRequest = serde_json::from_str(
            r#"{"projectType": "web-app", "budget": "", "experienceLevel": "beginner", "primaryGoal": "coding"}"#,
        )
        .unwrap();

        assert!(req.validate().is_err());
        assert!(req.to_profile().is_none());
    }

    #[test]
    fn test_matching_request_defaults_lists() {
        let req: MatchingRequest = serde_json::from_str(
            r#"{"projectType": "research", "budget": "under-50", "experienceLevel": "advanced",
                "primaryGoal": "writing", "techStack": ["Python", "  "], "features": null}"#,
        )
        .unwrap();

        assert!(req.validate().is_ok());
        let profile = req.to_profile().unwrap();
        assert_eq!(profile.budget, Budget::Under50);
        assert_eq!(profile.primary_goal, Goal::Writing);
        assert_eq!(profile.tech_stack, vec!["Python"]);
        assert!(profile.features.is_empty());
    }

    #[test]
    fn test_matching_request_keeps_raw_enum_values() {
        let req: MatchingRequest = serde_json::from_str(
            r#"{"projectType": "web-app", "budget": " free ", "experienceLevel": "beginner",
                "primaryGoal": "design", "techStack": [" React "], "features": [""]}"#,
        )
        .unwrap();

        let profile = req.to_profile().unwrap();

        assert_eq!(profile.budget, Budget::Other(" free ".to_string()));
        assert_eq!(profile.tech_stack, vec![" React "]);
        assert!(profile.features.is_empty());
    }

    #[test]
    fn test_tool_list_query_accepts_pricing_type_param() {
        let query = actix_web::web::Query::<ToolListQuery>::from_query("pricingType=FREE,PAID&page=2")
            .unwrap()
            .into_inner();

        let filters = query.into_filters(20, 100);

        assert_eq!(filters.pricing, vec![PricingType::Free, PricingType::Paid]);
        assert_eq!(filters.page, 2);
    }

    #[test]
    fn test_update_tool_request_is_partial() {
        let update: UpdateToolRequest =
            serde_json::from_str(r#"{"isPublished": false, "pricingType": "PAID"}"#).unwrap();

        assert!(update.validate().is_ok());
        assert_eq!(update.is_published, Some(false));
        assert_eq!(update.pricing_type, Some(PricingType::Paid));
        assert!(update.name.is_none());
        assert!(update.category_ids.is_none());

        let bad: UpdateToolRequest = serde_json::from_str(r#"{"websiteUrl": "nowhere"}"#).unwrap();
        assert!(bad.validate().unwrap_err().field_errors().contains_key("website_url"));
    }

    #[test]
    fn test_tool_list_query_normalization() {
        let query = ToolListQuery {
            category: Some("Design, image-generation,".to_string()),
            tags: None,
            pricing: Some("free,open-source,bogus".to_string()),
            search: Some("   ".to_string()),
            sort: Some("rating".to_string()),
            page: Some(0),
            limit: Some(500),
        };

        let filters = query.into_filters(20, 100);

        assert_eq!(filters.categories, vec!["design", "image-generation"]);
        assert!(filters.tags.is_empty());
        assert_eq!(filters.pricing, vec![PricingType::Free, PricingType::OpenSource]);
        assert_eq!(filters.search, None);
        assert_eq!(filters.sort, ToolSort::Rating);
        assert_eq!(filters.page, 1);
        assert_eq!(filters.limit, 100);
        assert_eq!(filters.offset(), 0);
    }

    #[test]
    fn test_tool_list_query_defaults() {
        let filters = ToolListQuery { page: Some(3), ..Default::default() }.into_filters(20, 100);

        assert_eq!(filters.sort, ToolSort::Newest);
        assert_eq!(filters.limit, 20);
        assert_eq!(filters.offset(), 40);
    }

    #[test]
    fn test_rating_range_validation() {
        let valid = RatingRequest { tool_id: "t1".to_string(), score: 5 };
        let invalid = RatingRequest { tool_id: "t1".to_string(), score: 6 };

        assert!(valid.validate().is_ok());
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_submission_validation() {
        let json = r#"{
            "name": "Cursor",
            "description": "AI-first code editor built on VS Code",
            "websiteUrl": "https://cursor.sh",
            "pricingType": "FREEMIUM",
            "categoryIds": ["cat_dev"]
        }"#;
        let mut submission: SubmissionRequest = serde_json::from_str(json).unwrap();
        assert!(submission.validate().is_ok());
        assert!(!submission.has_free_tier);

        submission.category_ids.clear();
        submission.website_url = "not a url".to_string();
        let errors = submission.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("category_ids"));
        assert!(errors.field_errors().contains_key("website_url"));
    }
}
