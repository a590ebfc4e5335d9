//! # court-api
//!
//! JSON REST endpoints for scouting notes, team records and team stats.
//!
//! [`Router`] maps `(method, path, query, body)` to a status and JSON body
//! without touching sockets; [`server::serve`] drives it from a `tiny_http`
//! listener.

pub mod error;
pub mod query_string;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use router::{ApiResponse, Router};
