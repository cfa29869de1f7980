pub mod drinks;
pub mod health;
pub mod trivia;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /categories                       list categories
/// /categories/{id}/questions        questions in one category
/// /questions                        paginated listing, search/create
/// /questions/{id}                   delete
/// /quizzes                          random unseen question
///
/// /drinks                           public short listing, create (scoped)
/// /drinks-detail                    full recipes (scoped)
/// /drinks/{id}                      update, delete (scoped)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(trivia::router())
        .merge(drinks::router())
}
