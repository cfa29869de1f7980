/// Domain-level error kinds shared by every operation.
///
/// The HTTP layer maps these onto the uniform
/// `{"success": false, "error": <code>, "message": <text>}` envelope; the
/// inner strings are diagnostic detail for logs, not wire text.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A requested entity does not exist, a listing window is empty, or a
    /// random pick found no candidate.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed or incomplete input, a dangling category reference, or a
    /// write the store rejected.
    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    /// The credential is missing, malformed, or failed verification.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The credential is valid but lacks the required scope.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Unexpected store or adapter fault.
    #[error("Internal error: {0}")]
    Internal(String),
}
