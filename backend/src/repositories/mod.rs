//! Database repositories
//!
//! Provides data access layer for database operations.

pub mod category;
pub mod recipe;

pub use category::{CategoryRecord, CategoryRepository};
pub use recipe::{CreateRecipe, RecipeRecord, RecipeRepository, UpdateRecipe};
