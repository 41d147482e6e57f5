use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::config::{CatalogSettings, MatchingSettings};
use crate::core::Matcher;
use crate::models::{HealthResponse, MatchingRequest, MatchingResponse, Tool};
use crate::routes::{error_response, store_error};
use crate::services::{CacheError, CacheKey, CacheManager, PostgresClient, PostgresError, SessionValidator};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub postgres: Arc<PostgresClient>,
    pub cache: Arc<CacheManager>,
    pub sessions: Arc<SessionValidator>,
    pub matcher: Matcher,
    pub matching: MatchingSettings,
    pub catalog: CatalogSettings,
}

const MISSING_FIELDS: &str = "projectType, budget, experienceLevel, and primaryGoal are required";

/// Configure health and smart-match routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matching", web::post().to(smart_match));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let pg_healthy = state.postgres.health_check().await.unwrap_or(false);

    let status = if pg_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Smart-match endpoint
///
/// POST /api/v1/matching
///
/// Request body:
/// ```json
/// {
///   "projectType": "web-app",
///   "techStack": ["React"],
///   "budget": "free",
///   "experienceLevel": "beginner",
///   "primaryGoal": "coding",
///   "features": ["code-completion"]
/// }
/// ```
async fn smart_match(
    state: web::Data<AppState>,
    req: web::Json<MatchingRequest>,
) -> impl Responder {
    let profile = match req.to_profile() {
        Some(profile) if req.validate().is_ok() => profile,
        _ => {
            tracing::info!("Rejected matching request with missing fields: {:?}", req);
            return error_response(StatusCode::BAD_REQUEST, "Missing required fields", MISSING_FIELDS);
        }
    };

    let tools = match load_catalog(&state).await {
        Ok(tools) => tools,
        Err(e) => return store_error("Failed to load catalog", e),
    };

    let matches = state
        .matcher
        .rank_top(&tools, &profile, state.matching.top_n);

    tracing::info!(
        "Matched {} of {} tools (goal: {}, budget: {})",
        matches.len(),
        tools.len(),
        profile.primary_goal.as_str(),
        profile.budget.as_str()
    );

    HttpResponse::Ok().json(MatchingResponse {
        matches,
        input: req.into_inner(),
        total_candidates: tools.len(),
    })
}

/// Published catalog snapshot, from cache when possible
///
/// Cache failures are logged and fall through to the database.
async fn load_catalog(state: &AppState) -> Result<Vec<Tool>, PostgresError> {
    let key = CacheKey::catalog();

    match state.cache.get::<Vec<Tool>>(&key).await {
        Ok(tools) => return Ok(tools),
        Err(CacheError::CacheMiss(_)) => {}
        Err(e) => tracing::warn!("Catalog cache read failed: {}", e),
    }

    let tools = state
        .postgres
        .published_tools(state.matching.catalog_limit)
        .await?;

    if let Err(e) = state.cache.set(&key, &tools).await {
        tracing::warn!("Failed to cache catalog: {}", e);
    }

    Ok(tools)
}
