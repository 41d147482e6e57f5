// Route exports
pub mod community;
pub mod matching;
pub mod moderation;
pub mod tools;

pub use matching::AppState;

use actix_web::http::{header, StatusCode};
use actix_web::{web, HttpRequest, HttpResponse};
use crate::models::{ErrorResponse, Session};
use crate::services::{CacheKey, PostgresError};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(matching::configure)
            .configure(tools::configure)
            .configure(community::configure)
            .configure(moderation::configure),
    );
}

pub(crate) fn error_response(status: StatusCode, error: &str, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse {
        error: error.to_string(),
        message: message.into(),
        status_code: status.as_u16(),
    })
}

pub(crate) fn validation_error(errors: validator::ValidationErrors) -> HttpResponse {
    error_response(StatusCode::BAD_REQUEST, "Validation failed", errors.to_string())
}

/// Map a store failure onto the matching HTTP status
pub(crate) fn store_error(context: &str, err: PostgresError) -> HttpResponse {
    match err {
        PostgresError::NotFound(what) => {
            error_response(StatusCode::NOT_FOUND, "Not found", format!("{} not found", what))
        }
        PostgresError::Conflict(message) => error_response(StatusCode::CONFLICT, "Conflict", message),
        PostgresError::InvalidInput(message) => {
            error_response(StatusCode::BAD_REQUEST, "Invalid input", message)
        }
        other => {
            tracing::error!("{}: {}", context, other);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, context, other.to_string())
        }
    }
}

/// Resolve the caller's session, or the 401 to send back
pub(crate) fn require_session(state: &AppState, req: &HttpRequest) -> Result<Session, HttpResponse> {
    let header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    state.sessions.validate_header(header).map_err(|e| {
        tracing::debug!("Rejected session on {}: {}", req.path(), e);
        error_response(StatusCode::UNAUTHORIZED, "Unauthorized", "Sign in required")
    })
}

/// Like `require_session`, but the caller must also be an admin (403 otherwise)
pub(crate) fn require_admin(state: &AppState, req: &HttpRequest) -> Result<Session, HttpResponse> {
    let session = require_session(state, req)?;
    if !session.is_admin() {
        return Err(error_response(StatusCode::FORBIDDEN, "Forbidden", "Admin access required"));
    }
    Ok(session)
}

/// Drop cached catalog data after a mutation; failures are only logged
pub(crate) async fn invalidate_catalog(state: &AppState) {
    for key in [CacheKey::catalog(), CacheKey::categories()] {
        if let Err(e) = state.cache.delete(&key).await {
            tracing::warn!("Failed to invalidate cache key {}: {}", key, e);
        }
    }
}
