//! Handler Set subsystem.
//!
//! # Data Flow
//! ```text
//! ResourceRouter (matched route)
//!     → Action (which of the five conventional actions)
//!     → ResourceHandlers::call (trait dispatch)
//!     → HandlerFuncs override, or canonical 404 when absent
//!     → Response returned to the transport
//! ```
//!
//! # Design Decisions
//! - The Handler Set is a trait; default-with-overrides is one concrete
//!   implementation (`HandlerFuncs`), not a property of the trait
//! - Actions consume the request and return the complete response
//! - No error channel: failures are expressed as responses

pub mod action;
pub mod funcs;
pub mod handler_set;
pub mod memory;

pub use action::Action;
pub use funcs::{ActionFn, HandlerFuncs};
pub use handler_set::{ActionFuture, ResourceHandlers};
pub use memory::MemoryResource;
