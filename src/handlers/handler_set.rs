//! The Handler Set capability.

use std::sync::Arc;

use axum::{body::Body, http::Request, response::Response};
use futures_util::future::BoxFuture;

use super::action::Action;

/// Future returned by every action.
pub type ActionFuture<'a> = BoxFuture<'a, Response>;

/// The methods to call for each action on a resource.
///
/// Each action consumes the request and resolves to the complete response.
/// Implement this directly for a fully custom resource, or use
/// [`HandlerFuncs`](super::HandlerFuncs) to supply only some actions.
pub trait ResourceHandlers: Send + Sync + 'static {
    /// List all instances.
    fn index(&self, req: Request<Body>) -> ActionFuture<'_>;

    /// Create a new instance.
    fn create(&self, req: Request<Body>) -> ActionFuture<'_>;

    /// Show a specific instance.
    fn show(&self, req: Request<Body>) -> ActionFuture<'_>;

    /// Update a specific instance.
    fn update(&self, req: Request<Body>) -> ActionFuture<'_>;

    /// Delete an instance.
    fn destroy(&self, req: Request<Body>) -> ActionFuture<'_>;

    /// Invoke the method corresponding to `action`.
    fn call(&self, action: Action, req: Request<Body>) -> ActionFuture<'_> {
        match action {
            Action::Index => self.index(req),
            Action::Create => self.create(req),
            Action::Show => self.show(req),
            Action::Update => self.update(req),
            Action::Destroy => self.destroy(req),
        }
    }
}

impl<T: ResourceHandlers + ?Sized> ResourceHandlers for Arc<T> {
    fn index(&self, req: Request<Body>) -> ActionFuture<'_> {
        (**self).index(req)
    }

    fn create(&self, req: Request<Body>) -> ActionFuture<'_> {
        (**self).create(req)
    }

    fn show(&self, req: Request<Body>) -> ActionFuture<'_> {
        (**self).show(req)
    }

    fn update(&self, req: Request<Body>) -> ActionFuture<'_> {
        (**self).update(req)
    }

    fn destroy(&self, req: Request<Body>) -> ActionFuture<'_> {
        (**self).destroy(req)
    }
}
