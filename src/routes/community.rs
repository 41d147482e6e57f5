use actix_web::{web, HttpRequest, HttpResponse, Responder};
use validator::Validate;
use crate::models::{FavoriteRequest, FavoriteStatusResponse, RatingRequest, RatingResponse, ReviewRequest, ToolIdQuery};
use crate::routes::{invalidate_catalog, require_session, store_error, validation_error, AppState};

/// Configure rating, review and favorite routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/ratings", web::post().to(rate_tool))
        .route("/reviews", web::get().to(list_reviews))
        .route("/reviews", web::post().to(create_review))
        .route("/favorites", web::get().to(list_favorites))
        .route("/favorites", web::post().to(add_favorite))
        .route("/favorites/check", web::get().to(check_favorite))
        .route("/favorites/{tool_id}", web::delete().to(remove_favorite));
}

/// Rate a tool (1-5), replacing any earlier rating by the same user
///
/// POST /api/v1/ratings
async fn rate_tool(
    state: web::Data<AppState>,
    http_req: HttpRequest,
    req: web::Json<RatingRequest>,
) -> impl Responder {
    let session = match require_session(&state, &http_req) {
        Ok(session) => session,
        Err(resp) => return resp,
    };

    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    match state
        .postgres
        .upsert_rating(&session.user_id, &req.tool_id, req.score)
        .await
    {
        Ok((rating, average_rating)) => {
            invalidate_catalog(&state).await;
            HttpResponse::Ok().json(RatingResponse { rating, average_rating })
        }
        Err(e) => store_error("Failed to save rating", e),
    }
}

/// Approved reviews for a tool
///
/// GET /api/v1/reviews?toolId={toolId}
async fn list_reviews(
    state: web::Data<AppState>,
    query: web::Query<ToolIdQuery>,
) -> impl Responder {
    match state.postgres.approved_reviews(&query.tool_id, None).await {
        Ok(reviews) => HttpResponse::Ok().json(serde_json::json!({
            "toolId": query.tool_id,
            "reviews": reviews,
        })),
        Err(e) => store_error("Failed to fetch reviews", e),
    }
}

/// Submit a review for moderation
///
/// POST /api/v1/reviews
async fn create_review(
    state: web::Data<AppState>,
    http_req: HttpRequest,
    req: web::Json<ReviewRequest>,
) -> impl Responder {
    let session = match require_session(&state, &http_req) {
        Ok(session) => session,
        Err(resp) => return resp,
    };

    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    match state.postgres.create_review(&session.user_id, &req).await {
        Ok(review) => {
            tracing::info!("Review {} submitted for {} by {}", review.id, review.tool_id, session.user_id);
            HttpResponse::Created().json(review)
        }
        Err(e) => store_error("Failed to create review", e),
    }
}

async fn list_favorites(state: web::Data<AppState>, http_req: HttpRequest) -> impl Responder {
    let session = match require_session(&state, &http_req) {
        Ok(session) => session,
        Err(resp) => return resp,
    };

    match state.postgres.list_favorites(&session.user_id).await {
        Ok(tools) => HttpResponse::Ok().json(serde_json::json!({
            "tools": tools,
            "count": tools.len(),
        })),
        Err(e) => store_error("Failed to fetch favorites", e),
    }
}

/// Add a favorite; repeating the call is a no-op
///
/// POST /api/v1/favorites
async fn add_favorite(
    state: web::Data<AppState>,
    http_req: HttpRequest,
    req: web::Json<FavoriteRequest>,
) -> impl Responder {
    let session = match require_session(&state, &http_req) {
        Ok(session) => session,
        Err(resp) => return resp,
    };

    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    match state.postgres.add_favorite(&session.user_id, &req.tool_id).await {
        Ok(inserted) => {
            let body = FavoriteStatusResponse {
                tool_id: req.tool_id.clone(),
                favorited: true,
            };
            if inserted {
                invalidate_catalog(&state).await;
                HttpResponse::Created().json(body)
            } else {
                HttpResponse::Ok().json(body)
            }
        }
        Err(e) => store_error("Failed to add favorite", e),
    }
}

/// DELETE /api/v1/favorites/{toolId}
async fn remove_favorite(
    state: web::Data<AppState>,
    http_req: HttpRequest,
    path: web::Path<String>,
) -> impl Responder {
    let session = match require_session(&state, &http_req) {
        Ok(session) => session,
        Err(resp) => return resp,
    };
    let tool_id = path.into_inner();

    match state.postgres.remove_favorite(&session.user_id, &tool_id).await {
        Ok(removed) => {
            if removed {
                invalidate_catalog(&state).await;
            }
            HttpResponse::Ok().json(FavoriteStatusResponse { tool_id, favorited: false })
        }
        Err(e) => store_error("Failed to remove favorite", e),
    }
}

/// GET /api/v1/favorites/check?toolId={toolId}
async fn check_favorite(
    state: web::Data<AppState>,
    http_req: HttpRequest,
    query: web::Query<ToolIdQuery>,
) -> impl Responder {
    let session = match require_session(&state, &http_req) {
        Ok(session) => session,
        Err(resp) => return resp,
    };

    match state.postgres.is_favorited(&session.user_id, &query.tool_id).await {
        Ok(favorited) => HttpResponse::Ok().json(FavoriteStatusResponse {
            tool_id: query.into_inner().tool_id,
            favorited,
        }),
        Err(e) => store_error("Failed to check favorite", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::test_support::{bearer, test_state};
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_rating_requires_session() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(crate::routes::configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/ratings")
            .set_json(serde_json::json!({ "toolId": "tool_1", "score": 4 }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status_code"], 401);
    }

    #[actix_web::test]
    async fn test_rating_out_of_range_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(crate::routes::configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/ratings")
            .insert_header((header::AUTHORIZATION, bearer("user_1", "USER")))
            .set_json(serde_json::json!({ "toolId": "tool_1", "score": 9 }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_short_review_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(crate::routes::configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/reviews")
            .insert_header((header::AUTHORIZATION, bearer("user_1", "USER")))
            .set_json(serde_json::json!({
                "toolId": "tool_1",
                "title": "Nice",
                "content": "too short"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Validation failed");
    }

    #[actix_web::test]
    async fn test_favorite_check_rejects_bad_token() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(crate::routes::configure_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/favorites/check?toolId=tool_1")
            .insert_header((header::AUTHORIZATION, "Bearer not-a-jwt"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
