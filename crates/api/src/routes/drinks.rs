//! Route definitions for the drink catalog.
//!
//! ```text
//! GET    /drinks           list_drinks (public)
//! POST   /drinks           create_drink (post:drinks)
//! GET    /drinks-detail    list_drinks_detail (get:drinks-detail)
//! PATCH  /drinks/{id}      update_drink (patch:drinks)
//! DELETE /drinks/{id}      delete_drink (delete:drinks)
//! ```

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::drinks;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/drinks", get(drinks::list_drinks).post(drinks::create_drink))
        .route("/drinks-detail", get(drinks::list_drinks_detail))
        .route(
            "/drinks/{id}",
            patch(drinks::update_drink).delete(drinks::delete_drink),
        )
}
