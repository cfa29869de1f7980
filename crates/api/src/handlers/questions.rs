//! Handlers for question listing, search, creation, and deletion.
//!
//! Listing endpoints fetch the full ordered selection and apply the
//! fixed-size page window in process; `totalQuestions` reports the length
//! of the returned page, as the legacy API did.

use std::collections::BTreeMap;

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use canteen_core::pagination::paginate;
use canteen_core::types::DbId;
use canteen_db::models::question::{Question, QuestionPostBody};
use canteen_db::repositories::{CategoryRepo, QuestionRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::handlers::categories::category_map;
use crate::query::PageParams;
use crate::state::AppState;

/// Payload of `GET /questions` and `DELETE /questions/{id}`.
#[derive(Debug, Serialize)]
pub struct QuestionPageResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    #[serde(rename = "totalQuestions")]
    pub total_questions: usize,
    pub categories: BTreeMap<DbId, String>,
    #[serde(rename = "currentCategory")]
    pub current_category: Option<String>,
    /// Present only on delete responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<DbId>,
}

/// Payload of the search arm of `POST /questions`.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    #[serde(rename = "totalQuestions")]
    pub total_questions: usize,
}

/// Payload of the create arm of `POST /questions`.
#[derive(Debug, Serialize)]
pub struct CreateQuestionResponse {
    pub success: bool,
    pub created: DbId,
    pub questions: Vec<Question>,
    #[serde(rename = "totalQuestions")]
    pub total_questions: usize,
}

/// Payload of `GET /categories/{id}/questions`.
#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    #[serde(rename = "totalQuestions")]
    pub total_questions: usize,
    #[serde(rename = "currentCategory")]
    pub current_category: String,
}

/// GET /questions?page=N
///
/// Paginated listing of all questions ordered by id. An empty page is a
/// not-found condition here (unlike search, where it is a valid answer).
pub async fn list_questions(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let selection = QuestionRepo::list_all(&state.pool).await?;
    let page = paginate(&selection, params.page());

    if page.is_empty() {
        return Err(AppError::not_found(format!(
            "question page {} is empty",
            params.page()
        )));
    }

    let categories = category_map(&state.pool).await?;

    Ok(Json(QuestionPageResponse {
        success: true,
        total_questions: page.len(),
        questions: page.to_vec(),
        categories,
        current_category: None,
        deleted: None,
    }))
}

/// POST /questions
///
/// Dual-purpose legacy route: a body carrying `searchTerm` runs a
/// case-insensitive substring search (zero matches is a success); any other
/// body creates a question and requires all four fields.
pub async fn create_or_search(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
    Json(body): Json<QuestionPostBody>,
) -> AppResult<Response> {
    if let Some(term) = body.search_term {
        let selection = QuestionRepo::search(&state.pool, &term).await?;
        let page = paginate(&selection, params.page());

        return Ok(Json(SearchResponse {
            success: true,
            total_questions: page.len(),
            questions: page.to_vec(),
        })
        .into_response());
    }

    let (Some(question), Some(answer), Some(category_id), Some(difficulty)) =
        (body.question, body.answer, body.category_id, body.difficulty)
    else {
        return Err(AppError::unprocessable(
            "question, answer, category and difficulty are all required",
        ));
    };

    let created = QuestionRepo::create(&state.pool, &question, &answer, Some(category_id), difficulty)
        .await
        .map_err(AppError::write_failure)?;

    tracing::info!(question_id = created.id, "Question created");

    let selection = QuestionRepo::list_all(&state.pool).await?;
    let page = paginate(&selection, params.page());

    Ok(Json(CreateQuestionResponse {
        success: true,
        created: created.id,
        total_questions: page.len(),
        questions: page.to_vec(),
    })
    .into_response())
}

/// DELETE /questions/{id}
///
/// Deletes a question and returns the refreshed page listing. A missing id
/// answers 422, not 404 -- a legacy behavior that clients depend on.
pub async fn delete_question(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let deleted = QuestionRepo::delete(&state.pool, id)
        .await
        .map_err(AppError::write_failure)?;

    if !deleted {
        return Err(AppError::unprocessable(format!(
            "question {id} does not exist"
        )));
    }

    tracing::info!(question_id = id, "Question deleted");

    let selection = QuestionRepo::list_all(&state.pool).await?;
    let page = paginate(&selection, params.page());
    let categories = category_map(&state.pool).await?;

    Ok(Json(QuestionPageResponse {
        success: true,
        total_questions: page.len(),
        questions: page.to_vec(),
        categories,
        current_category: None,
        deleted: Some(id),
    }))
}

/// GET /categories/{id}/questions
///
/// Questions scoped to one category, with the category's display name. An
/// unknown category id is a malformed reference (422), because the payload
/// must report `currentCategory` -- deliberately stricter than the quiz
/// endpoint's fallback.
pub async fn list_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<DbId>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let category = CategoryRepo::find_by_id(&state.pool, category_id)
        .await?
        .ok_or_else(|| {
            AppError::unprocessable(format!("category {category_id} does not exist"))
        })?;

    let selection = QuestionRepo::list_by_category(&state.pool, category_id).await?;
    let page = paginate(&selection, params.page());

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        total_questions: page.len(),
        questions: page.to_vec(),
        current_category: category.name,
    }))
}
