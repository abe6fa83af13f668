//! Recipe service
//!
//! Business rules for the recipe collection:
//! - Input validation and defaults; name and ingredients are stored as given
//! - Category resolution by name or slug
//! - `updated_at` refresh on every update, `created_at` never touched

use crate::error::ApiError;
use crate::repositories::{CategoryRepository, CreateRecipe, RecipeRepository, UpdateRecipe};
use recipe_book_shared::models::{Difficulty, Recipe, DEFAULT_RATING};
use recipe_book_shared::types::{CreateRecipeRequest, NormalizedRecipeQuery, UpdateRecipeRequest};
use recipe_book_shared::validation::{
    validate_ingredients, validate_rating, validate_recipe_name, ValidationError,
};
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::{debug, info};
use uuid::Uuid;
use validator::Validate;

/// Recipe service for business logic
pub struct RecipeService;

impl RecipeService {
    /// Validate and store a new recipe
    pub async fn create_recipe(
        pool: &PgPool,
        req: CreateRecipeRequest,
    ) -> Result<Recipe, ApiError> {
        let mut input = Self::prepare_create(req)?;
        input.category = Self::resolve_category(pool, input.category).await?;

        let record = RecipeRepository::create(pool, input)
            .await
            .map_err(ApiError::from_repository)?;

        info!(recipe_id = %record.id, name = %record.name, "Recipe created");
        Ok(Recipe::try_from(record)?)
    }

    /// Get a single recipe
    pub async fn get_recipe(pool: &PgPool, id: Uuid) -> Result<Recipe, ApiError> {
        let record = RecipeRepository::find_by_id(pool, id)
            .await
            .map_err(ApiError::from_repository)?
            .ok_or_else(|| ApiError::NotFound("Recipe not found".to_string()))?;

        Ok(Recipe::try_from(record)?)
    }

    /// List recipes with pagination
    ///
    /// Returns the page and the total number of matching recipes.
    /// A filter naming an unknown category matches nothing.
    pub async fn list_recipes(
        pool: &PgPool,
        query: &NormalizedRecipeQuery,
    ) -> Result<(Vec<Recipe>, i64), ApiError> {
        let category = match &query.category {
            Some(filter) => {
                match CategoryRepository::find_by_name_or_slug(pool, filter)
                    .await
                    .map_err(ApiError::from_repository)?
                {
                    Some(category) => Some(category.name),
                    None => {
                        debug!(category = %filter, "Unknown category filter");
                        return Ok((Vec::new(), 0));
                    }
                }
            }
            None => None,
        };

        let records = RecipeRepository::list(pool, category.as_deref(), query.limit, query.offset)
            .await
            .map_err(ApiError::from_repository)?;
        let total_count = RecipeRepository::count(pool, category.as_deref())
            .await
            .map_err(ApiError::from_repository)?;

        let recipes = records
            .into_iter()
            .map(Recipe::try_from)
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok((recipes, total_count))
    }

    /// Apply a partial update
    pub async fn update_recipe(
        pool: &PgPool,
        id: Uuid,
        req: UpdateRecipeRequest,
    ) -> Result<Recipe, ApiError> {
        let mut input = Self::prepare_update(req)?;
        input.category = Self::resolve_category(pool, input.category).await?;

        let record = RecipeRepository::update(pool, id, input)
            .await
            .map_err(ApiError::from_repository)?
            .ok_or_else(|| ApiError::NotFound("Recipe not found".to_string()))?;

        info!(recipe_id = %record.id, "Recipe updated");
        Ok(Recipe::try_from(record)?)
    }

    /// Delete a recipe
    pub async fn delete_recipe(pool: &PgPool, id: Uuid) -> Result<(), ApiError> {
        let deleted = RecipeRepository::delete(pool, id)
            .await
            .map_err(ApiError::from_repository)?;

        if !deleted {
            return Err(ApiError::NotFound("Recipe not found".to_string()));
        }

        info!(recipe_id = %id, "Recipe deleted");
        Ok(())
    }

    /// Validate a create request and turn it into repository input
    ///
    /// The category is passed through unresolved.
    pub fn prepare_create(req: CreateRecipeRequest) -> Result<CreateRecipe, ApiError> {
        req.validate()?;

        validate_recipe_name(&req.name).map_err(|e| ValidationError::new("name", &e))?;
        validate_ingredients(&req.ingredients)
            .map_err(|e| ValidationError::new("ingredients", &e))?;

        let difficulty = match req.difficulty.as_deref().map(str::trim) {
            Some(d) if !d.is_empty() => parse_difficulty(d)?,
            _ => Difficulty::default(),
        };

        Ok(CreateRecipe {
            name: req.name,
            ingredients: req.ingredients,
            description: clean_text(req.description),
            category: clean_text(req.category),
            difficulty,
            cooking_time_minutes: req.cooking_time_minutes,
            servings: req.servings,
            rating: rating_to_decimal(req.rating.unwrap_or(DEFAULT_RATING))?,
            instructions: clean_text(req.instructions),
            tips: clean_text(req.tips),
            image_url: clean_text(req.image_url),
        })
    }

    /// Validate an update request and turn it into repository input
    ///
    /// Blank optional text fields are treated as absent.
    pub fn prepare_update(req: UpdateRecipeRequest) -> Result<UpdateRecipe, ApiError> {
        if req.is_empty() {
            return Err(ApiError::Validation("No fields to update".to_string()));
        }
        req.validate()?;

        if let Some(name) = &req.name {
            validate_recipe_name(name).map_err(|e| ValidationError::new("name", &e))?;
        }
        if let Some(ingredients) = &req.ingredients {
            validate_ingredients(ingredients)
                .map_err(|e| ValidationError::new("ingredients", &e))?;
        }

        let difficulty = req
            .difficulty
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(parse_difficulty)
            .transpose()?;

        let rating = req.rating.map(rating_to_decimal).transpose()?;

        Ok(UpdateRecipe {
            name: req.name,
            ingredients: req.ingredients,
            description: clean_text(req.description),
            category: clean_text(req.category),
            difficulty,
            cooking_time_minutes: req.cooking_time_minutes,
            servings: req.servings,
            rating,
            instructions: clean_text(req.instructions),
            tips: clean_text(req.tips),
            image_url: clean_text(req.image_url),
        })
    }

    /// Map a user-supplied category to its stored name
    async fn resolve_category(
        pool: &PgPool,
        category: Option<String>,
    ) -> Result<Option<String>, ApiError> {
        let Some(name) = category else {
            return Ok(None);
        };

        let found = CategoryRepository::find_by_name_or_slug(pool, &name)
            .await
            .map_err(ApiError::from_repository)?;

        match found {
            Some(category) => Ok(Some(category.name)),
            None => Err(ValidationError::new(
                "category",
                &format!("Unknown category '{}'", name),
            )
            .into()),
        }
    }
}

fn parse_difficulty(value: &str) -> Result<Difficulty, ApiError> {
    value
        .parse::<Difficulty>()
        .map_err(|e| ValidationError::new("difficulty", &e.to_string()).into())
}

/// Ratings are stored with one decimal place
fn rating_to_decimal(rating: f64) -> Result<Decimal, ApiError> {
    validate_rating(rating).map_err(|e| ValidationError::new("rating", &e))?;

    Decimal::from_f64_retain(rating)
        .map(|d| d.round_dp(1))
        .ok_or_else(|| ValidationError::new("rating", "Rating must be a valid number").into())
}

/// Trim optional text, dropping it when nothing is left
fn clean_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
