use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use validator::Validate;
use crate::models::{
    ApprovalResponse, RejectSubmissionRequest, SubmissionListQuery, SubmissionListResponse,
    SubmissionRequest, SubmissionStatus,
};
use crate::routes::{
    error_response, invalidate_catalog, require_admin, require_session, store_error,
    validation_error, AppState,
};

/// Configure tool submission and review moderation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/submissions", web::post().to(create_submission))
        .route("/submissions", web::get().to(list_submissions))
        .route("/submissions/{id}/approve", web::post().to(approve_submission))
        .route("/submissions/{id}/reject", web::post().to(reject_submission))
        .route("/reviews/pending", web::get().to(pending_reviews))
        .route("/reviews/{id}/approve", web::post().to(approve_review));
}

/// Propose a new tool listing
///
/// POST /api/v1/submissions
async fn create_submission(
    state: web::Data<AppState>,
    http_req: HttpRequest,
    req: web::Json<SubmissionRequest>,
) -> impl Responder {
    let session = match require_session(&state, &http_req) {
        Ok(session) => session,
        Err(resp) => return resp,
    };

    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    match state.postgres.create_submission(&session.user_id, &req).await {
        Ok(submission) => HttpResponse::Created().json(submission),
        Err(e) => store_error("Failed to create submission", e),
    }
}

/// GET /api/v1/submissions?status=PENDING
async fn list_submissions(
    state: web::Data<AppState>,
    http_req: HttpRequest,
    query: web::Query<SubmissionListQuery>,
) -> impl Responder {
    if let Err(resp) = require_admin(&state, &http_req) {
        return resp;
    }

    let status = match query.status.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        None => None,
        Some(raw) => match SubmissionStatus::parse(raw) {
            Some(status) => Some(status),
            None => {
                return error_response(
                    StatusCode::BAD_REQUEST,
                    "Invalid status",
                    "status must be one of: PENDING, APPROVED, REJECTED",
                );
            }
        },
    };

    match state.postgres.list_submissions(status).await {
        Ok(submissions) => HttpResponse::Ok().json(SubmissionListResponse { submissions }),
        Err(e) => store_error("Failed to list submissions", e),
    }
}

/// Publish a pending submission as a tool
///
/// POST /api/v1/submissions/{id}/approve
async fn approve_submission(
    state: web::Data<AppState>,
    http_req: HttpRequest,
    path: web::Path<String>,
) -> impl Responder {
    let admin = match require_admin(&state, &http_req) {
        Ok(session) => session,
        Err(resp) => return resp,
    };
    let submission_id = path.into_inner();

    match state.postgres.approve_submission(&submission_id).await {
        Ok((submission, tool)) => {
            tracing::info!("{} approved submission {}", admin.user_id, submission_id);
            invalidate_catalog(&state).await;
            HttpResponse::Ok().json(ApprovalResponse { submission, tool })
        }
        Err(e) => store_error("Failed to approve submission", e),
    }
}

/// POST /api/v1/submissions/{id}/reject
async fn reject_submission(
    state: web::Data<AppState>,
    http_req: HttpRequest,
    path: web::Path<String>,
    body: Option<web::Json<RejectSubmissionRequest>>,
) -> impl Responder {
    let admin = match require_admin(&state, &http_req) {
        Ok(session) => session,
        Err(resp) => return resp,
    };
    let submission_id = path.into_inner();
    let body = body.map(web::Json::into_inner).unwrap_or_default();

    if let Err(errors) = body.validate() {
        return validation_error(errors);
    }

    let reason = body.reason.as_deref().map(str::trim).filter(|r| !r.is_empty());

    match state.postgres.reject_submission(&submission_id, reason).await {
        Ok(submission) => {
            tracing::info!("{} rejected submission {}", admin.user_id, submission_id);
            HttpResponse::Ok().json(submission)
        }
        Err(e) => store_error("Failed to reject submission", e),
    }
}

/// GET /api/v1/reviews/pending
async fn pending_reviews(state: web::Data<AppState>, http_req: HttpRequest) -> impl Responder {
    if let Err(resp) = require_admin(&state, &http_req) {
        return resp;
    }

    match state.postgres.pending_reviews().await {
        Ok(reviews) => HttpResponse::Ok().json(serde_json::json!({ "reviews": reviews })),
        Err(e) => store_error("Failed to fetch pending reviews", e),
    }
}

/// POST /api/v1/reviews/{id}/approve
async fn approve_review(
    state: web::Data<AppState>,
    http_req: HttpRequest,
    path: web::Path<String>,
) -> impl Responder {
    if let Err(resp) = require_admin(&state, &http_req) {
        return resp;
    }

    match state.postgres.approve_review(&path.into_inner()).await {
        Ok(review) => HttpResponse::Ok().json(review),
        Err(e) => store_error("Failed to approve review", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::test_support::{bearer, test_state};
    use actix_web::http::header;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_submission_listing_requires_admin() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(crate::routes::configure_routes),
        )
        .await;

        let anonymous = test::TestRequest::get().uri("/api/v1/submissions").to_request();
        let resp = test::call_service(&app, anonymous).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let user = test::TestRequest::get()
            .uri("/api/v1/submissions")
            .insert_header((header::AUTHORIZATION, bearer("user_1", "USER")))
            .to_request();
        let resp = test::call_service(&app, user).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_unknown_status_filter_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(crate::routes::configure_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/submissions?status=archived")
            .insert_header((header::AUTHORIZATION, bearer("admin_1", "ADMIN")))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_invalid_submission_rejected_before_store() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(crate::routes::configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/submissions")
            .insert_header((header::AUTHORIZATION, bearer("user_1", "USER")))
            .set_json(serde_json::json!({
                "name": "X",
                "description": "short",
                "websiteUrl": "nope",
                "pricingType": "FREE",
                "categoryIds": []
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_review_approval_forbidden_for_users() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(crate::routes::configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/reviews/rev_1/approve")
            .insert_header((header::AUTHORIZATION, bearer("user_1", "USER")))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }
}
