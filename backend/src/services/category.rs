//! Category service

use crate::error::ApiError;
use crate::repositories::CategoryRepository;
use recipe_book_shared::models::Category;
use sqlx::PgPool;

/// Category service for business logic
pub struct CategoryService;

impl CategoryService {
    /// All categories with their recipe counts, ordered by name
    pub async fn list_categories(pool: &PgPool) -> Result<Vec<Category>, ApiError> {
        let records = CategoryRepository::list_with_counts(pool)
            .await
            .map_err(ApiError::from_repository)?;

        Ok(records.into_iter().map(Category::from).collect())
    }
}
