//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Compilation (building phase):
//!     add_resource(name, handlers)
//!     → matcher.rs (collection `/{name}` + instance `/{name}/{id}` matchers)
//!     → five RouteEntry values appended to the table
//!     → build() freezes the table as an immutable ResourceRouter
//!
//! Incoming Request (serving phase):
//!     → router.rs (method + path lookup)
//!     → params.rs (captured id attached to the request)
//!     → ResourceHandlers action, or 404 when nothing matches
//! ```
//!
//! # Design Decisions
//! - Table is append-only while building, immutable while serving
//! - Structural matching only: exact collection path, or collection path plus
//!   exactly one non-empty segment, compared after percent-decoding each segment
//! - A matching path with the wrong method is a plain 404, never a 405
//! - Captured ids live in request extensions, never in shared state

pub mod matcher;
pub mod params;
pub mod router;

pub use matcher::{CollectionMatcher, InstanceMatcher, PathMatch, PathMatcher};
pub use params::{resource_id, ResourceIdKey, ResourceIds};
pub use router::{
    validate_name, RegistrationError, ResourceRouter, ResourceRouterBuilder, RouteEntry, RouteMatch,
    RouterBuildError,
};
