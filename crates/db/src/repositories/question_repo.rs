//! Repository for the `questions` table.
//!
//! Listing queries return the full ordered selection; the fixed-size page
//! window is applied by the caller via `canteen_core::pagination`.

use canteen_core::types::DbId;
use sqlx::PgPool;

use crate::models::question::Question;

const COLUMNS: &str = "id, question, answer, category_id, difficulty";

/// CRUD and filtered listing for questions.
pub struct QuestionRepo;

impl QuestionRepo {
    /// List every question ordered by ID.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions ORDER BY id ASC");
        sqlx::query_as::<_, Question>(&query).fetch_all(pool).await
    }

    /// Case-insensitive substring search over the question text, ordered by
    /// ID. An empty term matches everything.
    pub async fn search(pool: &PgPool, term: &str) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM questions \
             WHERE question ILIKE '%' || $1 || '%' \
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(term)
            .fetch_all(pool)
            .await
    }

    /// List questions belonging to one category, ordered by ID.
    pub async fn list_by_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM questions WHERE category_id = $1 ORDER BY id ASC"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// Quiz candidate set: excludes already-seen IDs, optionally restricted
    /// to one category. An empty exclusion list excludes nothing; a `None`
    /// category applies no category filter.
    pub async fn quiz_candidates(
        pool: &PgPool,
        category_id: Option<DbId>,
        exclude: &[DbId],
    ) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM questions \
             WHERE id <> ALL($1) \
               AND ($2::BIGINT IS NULL OR category_id = $2) \
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(exclude.to_vec())
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// Insert a new question, returning the created row.
    pub async fn create(
        pool: &PgPool,
        question: &str,
        answer: &str,
        category_id: Option<DbId>,
        difficulty: i32,
    ) -> Result<Question, sqlx::Error> {
        let query = format!(
            "INSERT INTO questions (question, answer, category_id, difficulty) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(question)
            .bind(answer)
            .bind(category_id)
            .bind(difficulty)
            .fetch_one(pool)
            .await
    }

    /// Delete a question. Returns `false` if no row had that ID.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
