//! Question model and request DTOs.
//!
//! Serde renames pin the legacy wire names (`category`, `searchTerm`,
//! `previous_questions`, `quiz_category`) that the existing frontends send
//! and expect.

use canteen_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `questions` table, serialized in the legacy shape.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Question {
    pub id: DbId,
    pub question: String,
    pub answer: String,
    #[serde(rename = "category")]
    pub category_id: Option<DbId>,
    pub difficulty: i32,
}

/// Body of `POST /questions`.
///
/// The legacy route is dual-purpose: a body carrying `searchTerm` is a
/// search, anything else is a create. All creation fields are optional here
/// so the handler can reject incomplete input with 422 instead of a generic
/// deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionPostBody {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
    pub question: Option<String>,
    pub answer: Option<String>,
    #[serde(rename = "category")]
    pub category_id: Option<DbId>,
    pub difficulty: Option<i32>,
}

/// Body of `POST /quizzes`.
///
/// Both fields are required; the handler rejects a body missing either one
/// before touching the store.
#[derive(Debug, Clone, Deserialize)]
pub struct QuizRequest {
    pub previous_questions: Option<Vec<DbId>>,
    pub quiz_category: Option<QuizCategory>,
}

/// Category selector inside a quiz request.
///
/// An absent or zero id means "all categories". The `name` field is sent by
/// the frontend but never consulted.
#[derive(Debug, Clone, Deserialize)]
pub struct QuizCategory {
    pub id: Option<DbId>,
    #[serde(default, rename = "type")]
    pub name: Option<String>,
}
