//! Recipe API routes

use crate::error::ApiError;
use crate::services::RecipeService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use recipe_book_shared::types::{
    CreateRecipeRequest, RecipeListQuery, RecipeListResponse, RecipeResponse, UpdateRecipeRequest,
};
use uuid::Uuid;

/// Create recipe routes
pub fn recipe_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_recipes).post(create_recipe))
        .route(
            "/:id",
            get(get_recipe).put(update_recipe).delete(delete_recipe),
        )
}

fn parse_recipe_id(id: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(id).map_err(|_| ApiError::Validation("Invalid recipe ID".to_string()))
}

/// GET /api/v1/recipes - List recipes with pagination
///
/// Supports `category` (name or slug), `limit` (default: 20, max: 100)
/// and `offset` parameters.
async fn list_recipes(
    State(state): State<AppState>,
    Query(query): Query<RecipeListQuery>,
) -> Result<Json<RecipeListResponse>, ApiError> {
    let query = query.normalize();

    let (recipes, total_count) = RecipeService::list_recipes(state.db(), &query).await?;

    let items: Vec<RecipeResponse> = recipes.into_iter().map(RecipeResponse::from).collect();
    let has_more = query.offset + (items.len() as i64) < total_count;

    Ok(Json(RecipeListResponse {
        items,
        total_count,
        limit: query.limit,
        offset: query.offset,
        has_more,
    }))
}

/// POST /api/v1/recipes - Create a recipe
async fn create_recipe(
    State(state): State<AppState>,
    Json(req): Json<CreateRecipeRequest>,
) -> Result<(StatusCode, Json<RecipeResponse>), ApiError> {
    let recipe = RecipeService::create_recipe(state.db(), req).await?;

    Ok((StatusCode::CREATED, Json(recipe.into())))
}

/// GET /api/v1/recipes/:id - Get a single recipe
async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RecipeResponse>, ApiError> {
    let recipe_id = parse_recipe_id(&id)?;

    let recipe = RecipeService::get_recipe(state.db(), recipe_id).await?;

    Ok(Json(recipe.into()))
}

/// PUT /api/v1/recipes/:id - Update a recipe
///
/// Only the fields present in the body are changed.
async fn update_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateRecipeRequest>,
) -> Result<Json<RecipeResponse>, ApiError> {
    let recipe_id = parse_recipe_id(&id)?;

    let recipe = RecipeService::update_recipe(state.db(), recipe_id, req).await?;

    Ok(Json(recipe.into()))
}

/// DELETE /api/v1/recipes/:id - Delete a recipe
async fn delete_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let recipe_id = parse_recipe_id(&id)?;

    RecipeService::delete_recipe(state.db(), recipe_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
