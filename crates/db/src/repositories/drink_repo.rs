//! Repository for the `drinks` table.

use canteen_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::drink::{Drink, Ingredient};

const COLUMNS: &str = "id, title, recipe";

/// CRUD operations for drinks.
pub struct DrinkRepo;

impl DrinkRepo {
    /// List every drink ordered by ID.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Drink>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM drinks ORDER BY id ASC");
        sqlx::query_as::<_, Drink>(&query).fetch_all(pool).await
    }

    /// Find a drink by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Drink>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM drinks WHERE id = $1");
        sqlx::query_as::<_, Drink>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new drink, returning the created row.
    pub async fn create(
        pool: &PgPool,
        title: &str,
        recipe: &[Ingredient],
    ) -> Result<Drink, sqlx::Error> {
        let query = format!(
            "INSERT INTO drinks (title, recipe) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Drink>(&query)
            .bind(title)
            .bind(Json(recipe))
            .fetch_one(pool)
            .await
    }

    /// Update a drink. Only non-`None` fields are applied. Returns `None`
    /// if no row had that ID.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        title: Option<&str>,
        recipe: Option<&[Ingredient]>,
    ) -> Result<Option<Drink>, sqlx::Error> {
        let query = format!(
            "UPDATE drinks SET \
                title = COALESCE($2, title), \
                recipe = COALESCE($3, recipe), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Drink>(&query)
            .bind(id)
            .bind(title)
            .bind(recipe.map(Json))
            .fetch_optional(pool)
            .await
    }

    /// Delete a drink. Returns `false` if no row had that ID.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM drinks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
