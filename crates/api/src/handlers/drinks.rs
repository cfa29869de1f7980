//! Handlers for the drink catalog.
//!
//! The public listing exposes the short representation (no ingredient
//! names); everything else requires a scoped token.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use canteen_core::types::DbId;
use canteen_db::models::drink::{CreateDrink, DrinkLong, DrinkShort, RecipeInput, UpdateDrink};
use canteen_db::repositories::DrinkRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::middleware::scopes::{
    RequireDrinksCreate, RequireDrinksDelete, RequireDrinksDetail, RequireDrinksUpdate,
};
use crate::state::AppState;

/// Payload of `GET /drinks`.
#[derive(Debug, Serialize)]
pub struct DrinkListResponse {
    pub success: bool,
    pub drinks: Vec<DrinkShort>,
}

/// Payload of `GET /drinks-detail`, `POST /drinks`, and `PATCH /drinks/{id}`.
#[derive(Debug, Serialize)]
pub struct DrinkDetailResponse {
    pub success: bool,
    pub drinks: Vec<DrinkLong>,
}

/// Payload of `DELETE /drinks/{id}`.
#[derive(Debug, Serialize)]
pub struct DrinkDeleteResponse {
    pub success: bool,
    pub delete: DbId,
}

/// GET /drinks
///
/// Public listing in the short representation.
pub async fn list_drinks(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let drinks = DrinkRepo::list_all(&state.pool).await?;

    Ok(Json(DrinkListResponse {
        success: true,
        drinks: drinks.iter().map(|d| d.short()).collect(),
    }))
}

/// GET /drinks-detail
///
/// Full recipes. Requires the `get:drinks-detail` scope.
pub async fn list_drinks_detail(
    RequireDrinksDetail(_user): RequireDrinksDetail,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let drinks = DrinkRepo::list_all(&state.pool).await?;

    Ok(Json(DrinkDetailResponse {
        success: true,
        drinks: drinks.iter().map(|d| d.long()).collect(),
    }))
}

/// POST /drinks
///
/// Create a drink. Requires the `post:drinks` scope; `title` and `recipe`
/// are both mandatory. A single ingredient object is accepted where an
/// array is expected and normalized.
pub async fn create_drink(
    RequireDrinksCreate(user): RequireDrinksCreate,
    State(state): State<AppState>,
    Json(body): Json<CreateDrink>,
) -> AppResult<impl IntoResponse> {
    let (Some(title), Some(recipe)) = (body.title, body.recipe) else {
        return Err(AppError::unprocessable("title and recipe are both required"));
    };

    let ingredients = recipe.into_ingredients();

    let drink = DrinkRepo::create(&state.pool, &title, &ingredients)
        .await
        .map_err(AppError::write_failure)?;

    tracing::info!(drink_id = drink.id, user_id = user.user_id, "Drink created");

    Ok(Json(DrinkDetailResponse {
        success: true,
        drinks: vec![drink.long()],
    }))
}

/// PATCH /drinks/{id}
///
/// Partial update of title and/or recipe. Requires the `patch:drinks`
/// scope. A missing id is 404 here, unlike delete.
pub async fn update_drink(
    RequireDrinksUpdate(user): RequireDrinksUpdate,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<UpdateDrink>,
) -> AppResult<impl IntoResponse> {
    let ingredients = body.recipe.map(RecipeInput::into_ingredients);

    let updated = DrinkRepo::update(&state.pool, id, body.title.as_deref(), ingredients.as_deref())
        .await
        .map_err(AppError::write_failure)?
        .ok_or_else(|| AppError::not_found(format!("drink {id} does not exist")))?;

    tracing::info!(drink_id = id, user_id = user.user_id, "Drink updated");

    Ok(Json(DrinkDetailResponse {
        success: true,
        drinks: vec![updated.long()],
    }))
}

/// DELETE /drinks/{id}
///
/// Requires the `delete:drinks` scope. A missing id answers 422, mirroring
/// the question delete contract.
pub async fn delete_drink(
    RequireDrinksDelete(user): RequireDrinksDelete,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = DrinkRepo::delete(&state.pool, id)
        .await
        .map_err(AppError::write_failure)?;

    if !deleted {
        return Err(AppError::unprocessable(format!("drink {id} does not exist")));
    }

    tracing::info!(drink_id = id, user_id = user.user_id, "Drink deleted");

    Ok(Json(DrinkDeleteResponse {
        success: true,
        delete: id,
    }))
}
