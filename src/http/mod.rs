//! HTTP host transport.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum serve, middleware: request id, tracing, timeout, body limit)
//!     → routing::ResourceRouter (fallback service)
//!     → handler action, or response.rs 404
//!     → Send to client
//! ```

pub mod response;
pub mod server;

pub use response::not_found;
pub use server::HttpServer;
