//! Pure domain logic for the canteen backend.
//!
//! No I/O lives here: this crate holds the shared id/timestamp types, the
//! domain error enum, the pagination window, the random picker used by the
//! quiz endpoint, and the well-known permission scope names.

pub mod error;
pub mod pagination;
pub mod picker;
pub mod scopes;
pub mod types;
