//! Request body extraction with the uniform failure envelope.
//!
//! axum's stock `Json` answers malformed or absent bodies with its own
//! plain-text 400/415 responses. The legacy contract requires every failure
//! to carry the `{"success": false, ...}` envelope, so handlers use this
//! wrapper instead, which routes extraction rejections through [`AppError`].

use axum::extract::FromRequest;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::AppError;

/// Drop-in replacement for `axum::Json` whose rejection is an [`AppError`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}
