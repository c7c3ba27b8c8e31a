//! Process lifecycle.
//!
//! # Data Flow
//! ```text
//! SIGINT / SIGTERM
//!     → signals.rs (wait_for_signal)
//!     → shutdown.rs (broadcast to every subscriber)
//!     → HttpServer stops accepting, drains in-flight requests
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
pub use signals::wait_for_signal;
