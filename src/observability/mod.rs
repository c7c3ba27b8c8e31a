//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing (registrations at debug, matches at trace)
//! http server (TraceLayer spans, x-request-id)
//!     → logging.rs (tracing-subscriber fmt output)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through every span via `x-request-id`
//! - Unmatched routes are answered silently; the TraceLayer still records them

pub mod logging;

pub use logging::init_logging;
