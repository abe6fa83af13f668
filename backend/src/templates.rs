//! Askama templates
//!
//! Template structs for the server-rendered pages. Template sources live
//! in `backend/templates/`.

use crate::error::ApiError;
use askama::Template;
use axum::response::Html;
use recipe_book_shared::models::{Category, Recipe};

/// Recipe listing page (`recipes/recipes.html`)
#[derive(Template)]
#[template(path = "recipes/recipes.html")]
pub struct RecipesTemplate {
    pub title: String,
    pub recipes: Vec<Recipe>,
    pub total_count: i64,
    pub categories: Vec<CategoryLink>,
    pub active_category: Option<String>,
}

/// Single recipe page
#[derive(Template)]
#[template(path = "recipes/detail.html")]
pub struct RecipeDetailTemplate {
    pub title: String,
    pub recipe: Recipe,
}

/// Category listing page (`categories/categories.html`)
#[derive(Template)]
#[template(path = "categories/categories.html")]
pub struct CategoriesTemplate {
    pub title: String,
    pub categories: Vec<Category>,
}

/// Error page shown for failed page requests
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub status: u16,
    pub message: String,
}

/// Sidebar entry on the recipes page
pub struct CategoryLink {
    pub name: String,
    pub slug: String,
    pub active: bool,
}

impl CategoryLink {
    /// Build sidebar links, marking the one matching the active filter
    ///
    /// The filter may be given as a name or a slug.
    pub fn from_categories(categories: Vec<Category>, active: Option<&str>) -> Vec<Self> {
        let active_slug = active.map(Category::slug_for);

        categories
            .into_iter()
            .map(|category| CategoryLink {
                active: active_slug.as_deref() == Some(category.slug.as_str()),
                name: category.name,
                slug: category.slug,
            })
            .collect()
    }
}

/// Render a template into an HTML response body
pub fn render<T: Template>(template: &T) -> Result<Html<String>, ApiError> {
    Ok(Html(template.render()?))
}
