//! Recipe Book Shared Library
//!
//! This crate contains shared types, models, and utilities used by
//! the backend and any other client of the recipe API.

pub mod errors;
pub mod models;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use models::{Category, Difficulty, Recipe, DEFAULT_CATEGORIES, DEFAULT_RATING};
pub use types::*;
