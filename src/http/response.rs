//! Canonical responses produced by the routing core.
//!
//! # Design Decisions
//! - "No route matched" and "action not implemented" share one response, so
//!   clients cannot tell an unwired action from a missing route
//! - The 404 body is empty

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// 404 Not Found with an empty body.
pub fn not_found() -> Response {
    StatusCode::NOT_FOUND.into_response()
}
