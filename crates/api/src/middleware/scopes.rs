//! Permission-scope extractors.
//!
//! Each extractor wraps [`AuthUser`] and rejects requests whose token does
//! not carry the required scope. The check runs before the handler body, so
//! a rejected request never reaches the store.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use canteen_core::error::CoreError;
use canteen_core::scopes::{
    SCOPE_DRINKS_CREATE, SCOPE_DRINKS_DELETE, SCOPE_DRINKS_DETAIL, SCOPE_DRINKS_UPDATE,
};

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

fn require_scope(user: &AuthUser, scope: &'static str) -> Result<(), AppError> {
    if !user.has_scope(scope) {
        return Err(AppError::Core(CoreError::Forbidden(format!(
            "Permission '{scope}' required"
        ))));
    }
    Ok(())
}

/// Requires the `get:drinks-detail` scope. Rejects with 403 otherwise.
pub struct RequireDrinksDetail(pub AuthUser);

impl FromRequestParts<AppState> for RequireDrinksDetail {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        require_scope(&user, SCOPE_DRINKS_DETAIL)?;
        Ok(RequireDrinksDetail(user))
    }
}

/// Requires the `post:drinks` scope.
pub struct RequireDrinksCreate(pub AuthUser);

impl FromRequestParts<AppState> for RequireDrinksCreate {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        require_scope(&user, SCOPE_DRINKS_CREATE)?;
        Ok(RequireDrinksCreate(user))
    }
}

/// Requires the `patch:drinks` scope.
pub struct RequireDrinksUpdate(pub AuthUser);

impl FromRequestParts<AppState> for RequireDrinksUpdate {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        require_scope(&user, SCOPE_DRINKS_UPDATE)?;
        Ok(RequireDrinksUpdate(user))
    }
}

/// Requires the `delete:drinks` scope.
pub struct RequireDrinksDelete(pub AuthUser);

impl FromRequestParts<AppState> for RequireDrinksDelete {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        require_scope(&user, SCOPE_DRINKS_DELETE)?;
        Ok(RequireDrinksDelete(user))
    }
}
