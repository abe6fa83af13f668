//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and the HTTP layer.

pub mod category;
pub mod recipe;

pub use category::CategoryService;
pub use recipe::RecipeService;
