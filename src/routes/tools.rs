use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use validator::Validate;
use crate::models::{
    Category, CategoryListResponse, CreateToolRequest, Pagination, ToolDetailResponse,
    ToolListQuery, ToolListResponse, UpdateToolRequest,
};
use crate::routes::{
    error_response, invalidate_catalog, require_admin, store_error, validation_error, AppState,
};
use crate::services::{CacheError, CacheKey};

/// Approved reviews shown on a tool page
const DETAIL_REVIEW_LIMIT: u32 = 10;

/// Configure catalog browsing routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/tools", web::get().to(list_tools))
        .route("/tools", web::post().to(create_tool))
        .route("/tools/id/{id}", web::get().to(get_tool_by_id))
        .route("/tools/id/{id}", web::patch().to(update_tool))
        .route("/tools/id/{id}", web::delete().to(delete_tool))
        .route("/tools/{slug}", web::get().to(get_tool))
        .route("/categories", web::get().to(list_categories));
}

/// List published tools
///
/// GET /api/v1/tools?category=design,writing&pricing=free&sort=popular&page=1&limit=20
async fn list_tools(
    state: web::Data<AppState>,
    query: web::Query<ToolListQuery>,
) -> impl Responder {
    let filters = query
        .into_inner()
        .into_filters(state.catalog.default_limit, state.catalog.max_limit);

    match state.postgres.list_tools(&filters).await {
        Ok((tools, total)) => {
            tracing::debug!("Listed {} of {} tools (page {})", tools.len(), total, filters.page);
            HttpResponse::Ok().json(ToolListResponse {
                tools,
                pagination: Pagination::new(filters.page, filters.limit, total),
            })
        }
        Err(e) => store_error("Failed to list tools", e),
    }
}

/// Tool detail with its latest approved reviews
///
/// GET /api/v1/tools/{slug}
async fn get_tool(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let slug = path.into_inner();

    let tool = match state.postgres.get_tool_by_slug(&slug).await {
        Ok(Some(tool)) => tool,
        Ok(None) => {
            return error_response(StatusCode::NOT_FOUND, "Not found", format!("tool '{}' not found", slug));
        }
        Err(e) => return store_error("Failed to fetch tool", e),
    };

    if let Err(e) = state.postgres.increment_view_count(&tool.id).await {
        tracing::warn!("Failed to record view for {}: {}", tool.id, e);
    }

    let reviews = match state
        .postgres
        .approved_reviews(&tool.id, Some(DETAIL_REVIEW_LIMIT))
        .await
    {
        Ok(reviews) => reviews,
        Err(e) => return store_error("Failed to fetch reviews", e),
    };

    HttpResponse::Ok().json(ToolDetailResponse { tool, reviews })
}

/// Add a tool directly to the catalog
///
/// POST /api/v1/tools
async fn create_tool(
    state: web::Data<AppState>,
    http_req: HttpRequest,
    req: web::Json<CreateToolRequest>,
) -> impl Responder {
    let admin = match require_admin(&state, &http_req) {
        Ok(session) => session,
        Err(resp) => return resp,
    };

    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    match state.postgres.create_tool(&req).await {
        Ok(tool) => {
            tracing::info!("{} created tool {}", admin.user_id, tool.slug);
            invalidate_catalog(&state).await;
            HttpResponse::Created().json(tool)
        }
        Err(e) => store_error("Failed to create tool", e),
    }
}

/// Any tool by id, including unpublished ones
///
/// GET /api/v1/tools/id/{id}
async fn get_tool_by_id(
    state: web::Data<AppState>,
    http_req: HttpRequest,
    path: web::Path<String>,
) -> impl Responder {
    if let Err(resp) = require_admin(&state, &http_req) {
        return resp;
    }
    let tool_id = path.into_inner();

    match state.postgres.get_tool_by_id(&tool_id).await {
        Ok(Some(tool)) => HttpResponse::Ok().json(tool),
        Ok(None) => error_response(StatusCode::NOT_FOUND, "Not found", format!("tool {} not found", tool_id)),
        Err(e) => store_error("Failed to fetch tool", e),
    }
}

/// PATCH /api/v1/tools/id/{id}
async fn update_tool(
    state: web::Data<AppState>,
    http_req: HttpRequest,
    path: web::Path<String>,
    req: web::Json<UpdateToolRequest>,
) -> impl Responder {
    let admin = match require_admin(&state, &http_req) {
        Ok(session) => session,
        Err(resp) => return resp,
    };

    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    match state.postgres.update_tool(&path.into_inner(), &req).await {
        Ok(tool) => {
            tracing::info!("{} updated tool {}", admin.user_id, tool.id);
            invalidate_catalog(&state).await;
            HttpResponse::Ok().json(tool)
        }
        Err(e) => store_error("Failed to update tool", e),
    }
}

/// DELETE /api/v1/tools/id/{id}
async fn delete_tool(
    state: web::Data<AppState>,
    http_req: HttpRequest,
    path: web::Path<String>,
) -> impl Responder {
    let admin = match require_admin(&state, &http_req) {
        Ok(session) => session,
        Err(resp) => return resp,
    };
    let tool_id = path.into_inner();

    match state.postgres.delete_tool(&tool_id).await {
        Ok(()) => {
            tracing::info!("{} deleted tool {}", admin.user_id, tool_id);
            invalidate_catalog(&state).await;
            HttpResponse::Ok().json(serde_json::json!({ "deleted": true, "id": tool_id }))
        }
        Err(e) => store_error("Failed to delete tool", e),
    }
}

/// Categories in display order with tool counts
///
/// GET /api/v1/categories
async fn list_categories(state: web::Data<AppState>) -> impl Responder {
    let key = CacheKey::categories();

    match state.cache.get::<Vec<Category>>(&key).await {
        Ok(categories) => return HttpResponse::Ok().json(CategoryListResponse { categories }),
        Err(CacheError::CacheMiss(_)) => {}
        Err(e) => tracing::warn!("Category cache read failed: {}", e),
    }

    match state.postgres.list_categories().await {
        Ok(categories) => {
            if let Err(e) = state.cache.set(&key, &categories).await {
                tracing::warn!("Failed to cache categories: {}", e);
            }
            HttpResponse::Ok().json(CategoryListResponse { categories })
        }
        Err(e) => store_error("Failed to list categories", e),
    }
}
