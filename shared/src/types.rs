//! API request and response types

use crate::models::{Category, Recipe};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Page size used when a listing request does not ask for one
pub const DEFAULT_PAGE_LIMIT: i64 = 20;

/// Largest page a listing request may ask for
pub const MAX_PAGE_LIMIT: i64 = 100;

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

// ============================================================================
// Recipes
// ============================================================================

/// Query parameters for listing recipes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeListQuery {
    pub category: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Listing query with pagination resolved to concrete values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRecipeQuery {
    pub category: Option<String>,
    pub limit: i64,
    pub offset: i64,
}

impl RecipeListQuery {
    /// Apply defaults and clamp pagination into its accepted range
    ///
    /// A blank category is treated as no filter.
    pub fn normalize(self) -> NormalizedRecipeQuery {
        NormalizedRecipeQuery {
            category: self
                .category
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty()),
            limit: self
                .limit
                .unwrap_or(DEFAULT_PAGE_LIMIT)
                .clamp(1, MAX_PAGE_LIMIT),
            offset: self.offset.unwrap_or(0).max(0),
        }
    }
}

/// Create recipe request
///
/// Field aliases accept the camelCase names used by the browser client.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateRecipeRequest {
    /// Checked after trimming by `validate_recipe_name`
    pub name: String,
    #[validate(length(min = 1))]
    pub ingredients: String,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<String>,
    #[serde(alias = "cookingTime")]
    #[validate(range(min = 1, max = 1440))]
    pub cooking_time_minutes: Option<i32>,
    #[validate(range(min = 1, max = 100))]
    pub servings: Option<i32>,
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: Option<f64>,
    pub instructions: Option<String>,
    pub tips: Option<String>,
    #[serde(alias = "image")]
    #[validate(url)]
    pub image_url: Option<String>,
}

/// Update recipe request; absent fields keep their stored value
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateRecipeRequest {
    pub name: Option<String>,
    #[validate(length(min = 1))]
    pub ingredients: Option<String>,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<String>,
    #[serde(alias = "cookingTime")]
    #[validate(range(min = 1, max = 1440))]
    pub cooking_time_minutes: Option<i32>,
    #[validate(range(min = 1, max = 100))]
    pub servings: Option<i32>,
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: Option<f64>,
    pub instructions: Option<String>,
    pub tips: Option<String>,
    #[serde(alias = "image")]
    #[validate(url)]
    pub image_url: Option<String>,
}

impl UpdateRecipeRequest {
    /// True when the request would not change anything
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.ingredients.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.difficulty.is_none()
            && self.cooking_time_minutes.is_none()
            && self.servings.is_none()
            && self.rating.is_none()
            && self.instructions.is_none()
            && self.tips.is_none()
            && self.image_url.is_none()
    }
}

/// Recipe response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeResponse {
    pub id: String,
    pub name: String,
    pub ingredients: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub difficulty: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cooking_time_minutes: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servings: Option<i32>,
    pub rating: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tips: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id.to_string(),
            name: recipe.name,
            ingredients: recipe.ingredients,
            description: recipe.description,
            category: recipe.category,
            difficulty: recipe.difficulty.to_string(),
            cooking_time_minutes: recipe.cooking_time_minutes,
            servings: recipe.servings,
            rating: recipe.rating,
            instructions: recipe.instructions,
            tips: recipe.tips,
            image_url: recipe.image_url,
            created_at: recipe.created_at,
            updated_at: recipe.updated_at,
        }
    }
}

/// Paginated recipe listing response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeListResponse {
    pub items: Vec<RecipeResponse>,
    pub total_count: i64,
    pub limit: i64,
    pub offset: i64,
    pub has_more: bool,
}

// ============================================================================
// Categories
// ============================================================================

/// Category response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryResponse {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub recipe_count: i64,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.to_string(),
            name: category.name,
            slug: category.slug,
            recipe_count: category.recipe_count,
        }
    }
}
