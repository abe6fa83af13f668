//! Category repository for database operations

use anyhow::Result;
use recipe_book_shared::models::Category;
use sqlx::PgPool;
use uuid::Uuid;

/// Category row joined with its recipe count
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CategoryRecord {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub recipe_count: i64,
}

impl From<CategoryRecord> for Category {
    fn from(record: CategoryRecord) -> Self {
        Category {
            id: record.id,
            name: record.name,
            slug: record.slug,
            recipe_count: record.recipe_count,
        }
    }
}

/// Category repository for database operations
pub struct CategoryRepository;

impl CategoryRepository {
    /// All categories ordered by name, each with the number of recipes in it
    pub async fn list_with_counts(pool: &PgPool) -> Result<Vec<CategoryRecord>> {
        let records = sqlx::query_as::<_, CategoryRecord>(
            r#"
            SELECT c.id, c.name, c.slug, COUNT(r.id) AS recipe_count
            FROM categories c
            LEFT JOIN recipes r ON r.category = c.name
            GROUP BY c.id, c.name, c.slug
            ORDER BY c.name
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Find a category by its exact name or by its slug
    pub async fn find_by_name_or_slug(
        pool: &PgPool,
        name: &str,
    ) -> Result<Option<CategoryRecord>> {
        let slug = Category::slug_for(name);

        let record = sqlx::query_as::<_, CategoryRecord>(
            r#"
            SELECT c.id, c.name, c.slug, COUNT(r.id) AS recipe_count
            FROM categories c
            LEFT JOIN recipes r ON r.category = c.name
            WHERE c.name = $1 OR c.slug = $2
            GROUP BY c.id, c.name, c.slug
            "#,
        )
        .bind(name)
        .bind(&slug)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }
}
