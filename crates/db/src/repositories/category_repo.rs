//! Repository for the `categories` table.

use canteen_core::types::DbId;
use sqlx::PgPool;

use crate::models::category::Category;

const COLUMNS: &str = "id, name";

/// Read operations for categories. Categories are seed data; there is no
/// write path.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List all categories ordered by display name.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY name ASC");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// Find a category by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
