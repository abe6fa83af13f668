//! Recipe repository for database operations

use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use recipe_book_shared::models::{Difficulty, Recipe};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// Recipe record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RecipeRecord {
    pub id: Uuid,
    pub name: String,
    pub ingredients: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub difficulty: String,
    pub cooking_time_minutes: Option<i32>,
    pub servings: Option<i32>,
    pub rating: Decimal,
    pub instructions: Option<String>,
    pub tips: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<RecipeRecord> for Recipe {
    type Error = anyhow::Error;

    fn try_from(record: RecipeRecord) -> Result<Self> {
        let difficulty = record
            .difficulty
            .parse::<Difficulty>()
            .map_err(|e| anyhow!("recipe {} has corrupt difficulty: {}", record.id, e))?;
        let rating = record
            .rating
            .to_f64()
            .ok_or_else(|| anyhow!("recipe {} has unreadable rating {}", record.id, record.rating))?;

        Ok(Recipe {
            id: record.id,
            name: record.name,
            ingredients: record.ingredients,
            description: record.description,
            category: record.category,
            difficulty,
            cooking_time_minutes: record.cooking_time_minutes,
            servings: record.servings,
            rating,
            instructions: record.instructions,
            tips: record.tips,
            image_url: record.image_url,
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }
}

/// Input for creating a recipe
#[derive(Debug, Clone)]
pub struct CreateRecipe {
    pub name: String,
    pub ingredients: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub difficulty: Difficulty,
    pub cooking_time_minutes: Option<i32>,
    pub servings: Option<i32>,
    pub rating: Decimal,
    pub instructions: Option<String>,
    pub tips: Option<String>,
    pub image_url: Option<String>,
}

/// Input for a partial recipe update; `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct UpdateRecipe {
    pub name: Option<String>,
    pub ingredients: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub cooking_time_minutes: Option<i32>,
    pub servings: Option<i32>,
    pub rating: Option<Decimal>,
    pub instructions: Option<String>,
    pub tips: Option<String>,
    pub image_url: Option<String>,
}

/// Recipe repository for database operations
pub struct RecipeRepository;

impl RecipeRepository {
    /// Create a new recipe; both timestamps are set by the database
    pub async fn create(pool: &PgPool, input: CreateRecipe) -> Result<RecipeRecord> {
        let record = sqlx::query_as::<_, RecipeRecord>(
            r#"
            INSERT INTO recipes
                (name, ingredients, description, category, difficulty,
                 cooking_time_minutes, servings, rating, instructions, tips, image_url)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id, name, ingredients, description, category, difficulty,
                      cooking_time_minutes, servings, rating, instructions, tips, image_url,
                      created_at, updated_at
            "#,
        )
        .bind(&input.name)
        .bind(&input.ingredients)
        .bind(&input.description)
        .bind(&input.category)
        .bind(input.difficulty.as_str())
        .bind(input.cooking_time_minutes)
        .bind(input.servings)
        .bind(input.rating)
        .bind(&input.instructions)
        .bind(&input.tips)
        .bind(&input.image_url)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Find recipe by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<RecipeRecord>> {
        let record = sqlx::query_as::<_, RecipeRecord>(
            r#"
            SELECT id, name, ingredients, description, category, difficulty,
                   cooking_time_minutes, servings, rating, instructions, tips, image_url,
                   created_at, updated_at
            FROM recipes
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// List recipes, newest first, optionally restricted to one category
    pub async fn list(
        pool: &PgPool,
        category: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<RecipeRecord>> {
        let records = sqlx::query_as::<_, RecipeRecord>(
            r#"
            SELECT id, name, ingredients, description, category, difficulty,
                   cooking_time_minutes, servings, rating, instructions, tips, image_url,
                   created_at, updated_at
            FROM recipes
            WHERE ($1::text IS NULL OR category = $1)
            ORDER BY created_at DESC, id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(category)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Count recipes, optionally restricted to one category
    pub async fn count(pool: &PgPool, category: Option<&str>) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*)
            FROM recipes
            WHERE ($1::text IS NULL OR category = $1)
            "#,
        )
        .bind(category)
        .fetch_one(pool)
        .await?;

        Ok(count)
    }

    /// Apply a partial update and refresh `updated_at`
    ///
    /// Returns `None` when no recipe has the given ID.
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        input: UpdateRecipe,
    ) -> Result<Option<RecipeRecord>> {
        let record = sqlx::query_as::<_, RecipeRecord>(
            r#"
            UPDATE recipes SET
                name = COALESCE($2, name),
                ingredients = COALESCE($3, ingredients),
                description = COALESCE($4, description),
                category = COALESCE($5, category),
                difficulty = COALESCE($6, difficulty),
                cooking_time_minutes = COALESCE($7, cooking_time_minutes),
                servings = COALESCE($8, servings),
                rating = COALESCE($9, rating),
                instructions = COALESCE($10, instructions),
                tips = COALESCE($11, tips),
                image_url = COALESCE($12, image_url),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, ingredients, description, category, difficulty,
                      cooking_time_minutes, servings, rating, instructions, tips, image_url,
                      created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.ingredients)
        .bind(&input.description)
        .bind(&input.category)
        .bind(input.difficulty.map(|d| d.as_str()))
        .bind(input.cooking_time_minutes)
        .bind(input.servings)
        .bind(input.rating)
        .bind(&input.instructions)
        .bind(&input.tips)
        .bind(&input.image_url)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Delete a recipe
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM recipes
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(difficulty: &str) -> RecipeRecord {
        let now = Utc::now();
        RecipeRecord {
            id: Uuid::new_v4(),
            name: "Greek Salad".to_string(),
            ingredients: "cucumber\nfeta".to_string(),
            description: None,
            category: Some("Salad".to_string()),
            difficulty: difficulty.to_string(),
            cooking_time_minutes: Some(10),
            servings: Some(2),
            rating: Decimal::new(45, 1),
            instructions: None,
            tips: None,
            image_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_record_converts_to_recipe() {
        let recipe = Recipe::try_from(record("Easy")).unwrap();
        assert_eq!(recipe.difficulty, Difficulty::Easy);
        assert!((recipe.rating - 4.5).abs() < f64::EPSILON);
        assert_eq!(recipe.ingredients, "cucumber\nfeta");
    }

    #[test]
    fn test_record_rating_bounds_convert_exactly() {
        for (stored, expected) in [(Decimal::ZERO, 0.0), (Decimal::new(50, 1), 5.0)] {
            let mut row = record("Hard");
            row.rating = stored;
            assert_eq!(Recipe::try_from(row).unwrap().rating, expected);
        }
    }

    #[test]
    fn test_record_with_unknown_difficulty_fails() {
        assert!(Recipe::try_from(record("Extreme")).is_err());
    }
}
