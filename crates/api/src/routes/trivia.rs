//! Route definitions for the trivia question bank.
//!
//! ```text
//! GET    /categories                  list_categories
//! GET    /categories/{id}/questions   list_by_category
//! GET    /questions                   list_questions (paginated)
//! POST   /questions                   create_or_search
//! DELETE /questions/{id}              delete_question
//! POST   /quizzes                     next_question
//! ```

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::{categories, questions, quizzes};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(categories::list_categories))
        .route(
            "/categories/{id}/questions",
            get(questions::list_by_category),
        )
        .route(
            "/questions",
            get(questions::list_questions).post(questions::create_or_search),
        )
        .route("/questions/{id}", delete(questions::delete_question))
        .route("/quizzes", post(quizzes::next_question))
}
