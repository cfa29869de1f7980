//! HTTP layer: configuration, auth extractors, handlers, routers, and the
//! uniform error envelope.

pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod query;
pub mod router;
pub mod routes;
pub mod state;
