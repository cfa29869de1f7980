//! Well-known permission scope names.
//!
//! These must match the `permissions` claim values minted by the token
//! issuer.

pub const SCOPE_DRINKS_DETAIL: &str = "get:drinks-detail";
pub const SCOPE_DRINKS_CREATE: &str = "post:drinks";
pub const SCOPE_DRINKS_UPDATE: &str = "patch:drinks";
pub const SCOPE_DRINKS_DELETE: &str = "delete:drinks";
