//! Handlers for the category listing.

use std::collections::BTreeMap;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use canteen_core::types::DbId;
use canteen_db::repositories::CategoryRepo;
use canteen_db::DbPool;
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

/// Payload of `GET /categories`.
#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    pub success: bool,
    /// Map of category id to display name. Integer keys serialize as JSON
    /// strings, matching the legacy wire format.
    pub categories: BTreeMap<DbId, String>,
    pub total_categories: usize,
}

/// GET /categories
///
/// List all categories as an id-to-name map.
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = category_map(&state.pool).await?;
    let total_categories = categories.len();

    Ok(Json(CategoryListResponse {
        success: true,
        categories,
        total_categories,
    }))
}

/// Fetch all categories as an id-to-name map, ordered by name.
///
/// Several question endpoints embed this map in their payload.
pub(crate) async fn category_map(pool: &DbPool) -> Result<BTreeMap<DbId, String>, sqlx::Error> {
    let categories = CategoryRepo::list_all(pool).await?;
    Ok(categories.into_iter().map(|c| (c.id, c.name)).collect())
}
