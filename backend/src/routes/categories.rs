//! Category API routes

use crate::error::ApiError;
use crate::services::CategoryService;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use recipe_book_shared::types::CategoryResponse;

/// Create category routes
pub fn category_routes() -> Router<AppState> {
    Router::new().route("/", get(list_categories))
}

/// GET /api/v1/categories - All categories with recipe counts
async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryResponse>>, ApiError> {
    let categories = CategoryService::list_categories(state.db()).await?;

    Ok(Json(
        categories.into_iter().map(CategoryResponse::from).collect(),
    ))
}
