//! Resourceful routing for axum/tower services.
//!
//! Declare a resource name and a Handler Set; the router generates the five
//! conventional routes and dispatches to the matching action.
//!
//! ```text
//! HTTP Method  URI             Action
//! GET          /resource       Index: list all instances.
//! POST         /resource       Create: make a new instance.
//! GET          /resource/{id}  Show: get a specific instance.
//! PUT          /resource/{id}  Update: change a specific instance.
//! DELETE       /resource/{id}  Destroy: delete a specific instance.
//! ```
//!
//! Handlers read the captured identifier with [`resource_id`]. Unmatched
//! requests and actions without a handler both answer 404.

// Core subsystems
pub mod handlers;
pub mod http;
pub mod routing;

// Cross-cutting concerns
pub mod config;
pub mod lifecycle;
pub mod observability;

pub use config::ServerConfig;
pub use handlers::{Action, HandlerFuncs, MemoryResource, ResourceHandlers};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{resource_id, ResourceIds, ResourceRouter, ResourceRouterBuilder};
