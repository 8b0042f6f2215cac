//! HTTP layer for the character roster service.
//!
//! Exposed as a library so integration tests can build the exact router and
//! middleware stack the production binary uses (see [`router::build_app_router`]).

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
