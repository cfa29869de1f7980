//! Handler for the quiz question picker.

use axum::extract::State;
use axum::response::IntoResponse;
use canteen_core::picker::pick_random;
use canteen_core::types::DbId;
use canteen_db::models::question::{Question, QuizCategory, QuizRequest};
use canteen_db::repositories::{CategoryRepo, QuestionRepo};
use canteen_db::DbPool;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::state::AppState;

/// Payload of `POST /quizzes`.
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Question,
}

/// POST /quizzes
///
/// Picks one question uniformly at random from the selected category,
/// excluding already-seen ids. Both `previous_questions` and
/// `quiz_category` must be present -- an incomplete body is rejected before
/// any store access. An exhausted candidate set is a not-found condition.
pub async fn next_question(
    State(state): State<AppState>,
    Json(body): Json<QuizRequest>,
) -> AppResult<impl IntoResponse> {
    let (Some(previous), Some(selector)) = (body.previous_questions, body.quiz_category) else {
        return Err(AppError::unprocessable(
            "previous_questions and quiz_category are both required",
        ));
    };

    let category_id = resolve_category(&state.pool, &selector).await?;

    let candidates = QuestionRepo::quiz_candidates(&state.pool, category_id, &previous).await?;

    let question = pick_random(&candidates)
        .cloned()
        .ok_or_else(|| AppError::not_found("no unseen quiz question remains"))?;

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

/// Resolve a quiz category selector to an optional category filter.
///
/// An absent or zero id means "all categories". An id that does not resolve
/// also falls back to "all" -- the quiz is lenient here, unlike the
/// category-scoped listing, and that asymmetry is part of the contract.
async fn resolve_category(
    pool: &DbPool,
    selector: &QuizCategory,
) -> Result<Option<DbId>, AppError> {
    let id = match selector.id {
        None | Some(0) => return Ok(None),
        Some(id) => id,
    };

    match CategoryRepo::find_by_id(pool, id).await? {
        Some(category) => Ok(Some(category.id)),
        None => {
            tracing::debug!(category_id = id, "Quiz category not found, selecting from all");
            Ok(None)
        }
    }
}
