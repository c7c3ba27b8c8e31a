//! Route registration and dispatch.
//!
//! # Responsibilities
//! - Expand a resource name into its five routes
//! - Freeze the table into an immutable, cheaply cloned router
//! - Look up the route for a method + path
//! - Attach the captured id and invoke the bound action
//!
//! # Design Decisions
//! - Builder / router split: mutation is impossible once serving
//! - O(n) reverse scan; the latest registration wins on identical routes
//! - Unmatched requests get the same 404 as unimplemented actions
//! - Implements `tower::Service` so any axum/hyper host can mount it

use std::borrow::Cow;
use std::convert::Infallible;
use std::fmt;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::{
    body::Body,
    http::{Method, Request},
    response::Response,
};
use futures_util::future::BoxFuture;
use thiserror::Error;
use tower::Service;

use crate::handlers::{Action, ActionFuture, ResourceHandlers};
use crate::http::response::not_found;
use crate::routing::matcher::{CollectionMatcher, InstanceMatcher, PathMatcher};
use crate::routing::params::{self, ResourceIdKey};

/// Why a resource could not be registered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("resource name must not be empty")]
    EmptyName,

    #[error("resource name {name:?} must not start with '/'")]
    LeadingSlash { name: String },
}

/// Returned by [`ResourceRouterBuilder::build`] when any registration failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid resource registrations: {}", join_errors(.0))]
pub struct RouterBuildError(pub Vec<RegistrationError>);

fn join_errors(errors: &[RegistrationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Check that `name` can be registered.
///
/// Names compare against percent-decoded path segments, so any other name
/// is reachable by escaping it in the request path.
pub fn validate_name(name: &str) -> Result<(), RegistrationError> {
    if name.is_empty() {
        return Err(RegistrationError::EmptyName);
    }
    if name.starts_with('/') {
        return Err(RegistrationError::LeadingSlash { name: name.to_string() });
    }
    Ok(())
}

/// A registered resource, shared by its five routes.
struct Resource {
    name: String,
    key: ResourceIdKey,
    handlers: Arc<dyn ResourceHandlers>,
}

/// One (method, path pattern, action) triple.
pub struct RouteEntry {
    method: Method,
    matcher: Arc<dyn PathMatcher>,
    action: Action,
    resource: Arc<Resource>,
}

impl RouteEntry {
    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn action(&self) -> Action {
        self.action
    }

    pub fn resource(&self) -> &str {
        &self.resource.name
    }

    /// Path template, e.g. `/users/{id}`.
    pub fn template(&self) -> String {
        self.matcher.template()
    }

    fn matches<'r, 'p>(&'r self, method: &Method, path: &'p str) -> Option<RouteMatch<'r, 'p>> {
        if *method != self.method {
            return None;
        }
        let path_match = self.matcher.match_path(path)?;
        Some(RouteMatch {
            entry: self,
            id: path_match.id,
        })
    }
}

impl fmt::Debug for RouteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteEntry")
            .field("method", &self.method)
            .field("path", &self.template())
            .field("action", &self.action)
            .field("resource", &self.resource.name)
            .finish()
    }
}

/// A route selected for a request.
#[derive(Debug, Clone)]
pub struct RouteMatch<'r, 'p> {
    pub entry: &'r RouteEntry,
    /// Percent-decoded identifier captured by an instance route.
    pub id: Option<Cow<'p, str>>,
}

/// Collects resource registrations; frozen with [`build`](Self::build).
#[derive(Default)]
pub struct ResourceRouterBuilder {
    entries: Vec<RouteEntry>,
    errors: Vec<RegistrationError>,
}

impl ResourceRouterBuilder {
    /// An empty builder with no routes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource, directing its five actions to `handlers`.
    ///
    /// Registering a name twice is allowed; the later registration shadows
    /// the earlier one on every route.
    pub fn add_resource<H>(self, name: impl Into<String>, handlers: H) -> Self
    where
        H: ResourceHandlers,
    {
        self.add_shared_resource(name, Arc::new(handlers))
    }

    /// Add a resource whose handlers are shared with other owners.
    pub fn add_shared_resource(
        mut self,
        name: impl Into<String>,
        handlers: Arc<dyn ResourceHandlers>,
    ) -> Self {
        let name = name.into();
        if let Err(e) = validate_name(&name) {
            self.errors.push(e);
            return self;
        }

        if self.entries.iter().any(|e| e.resource.name == name) {
            tracing::warn!(resource = %name, "Resource registered twice; latest registration shadows earlier routes");
        }

        let resource = Arc::new(Resource {
            key: ResourceIdKey::for_resource(&name),
            name,
            handlers,
        });
        let collection: Arc<dyn PathMatcher> = Arc::new(CollectionMatcher::new(&resource.name));
        let instance: Arc<dyn PathMatcher> = Arc::new(InstanceMatcher::new(&resource.name));

        for action in Action::ALL {
            let matcher = if action.is_instance() {
                instance.clone()
            } else {
                collection.clone()
            };
            self.entries.push(RouteEntry {
                method: action.method(),
                matcher,
                action,
                resource: resource.clone(),
            });
        }

        tracing::debug!(
            resource = %resource.name,
            collection = %collection.template(),
            instance = %instance.template(),
            "Registered resource routes"
        );
        self
    }

    /// Freeze the table. Fails if any registration was invalid.
    pub fn build(self) -> Result<ResourceRouter, RouterBuildError> {
        if !self.errors.is_empty() {
            return Err(RouterBuildError(self.errors));
        }
        Ok(ResourceRouter {
            table: self.entries.into(),
        })
    }
}

impl fmt::Debug for ResourceRouterBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceRouterBuilder")
            .field("entries", &self.entries)
            .field("errors", &self.errors)
            .finish()
    }
}

/// Immutable router serving resourceful routes.
///
/// Cloning shares the route table.
#[derive(Clone)]
pub struct ResourceRouter {
    table: Arc<[RouteEntry]>,
}

impl ResourceRouter {
    pub fn builder() -> ResourceRouterBuilder {
        ResourceRouterBuilder::new()
    }

    /// Find the route for `method` and `path`, or `None` when nothing matches.
    pub fn route<'r, 'p>(&'r self, method: &Method, path: &'p str) -> Option<RouteMatch<'r, 'p>> {
        self.table
            .iter()
            .rev()
            .find_map(|entry| entry.matches(method, path))
    }

    /// All routes in registration order.
    pub fn routes(&self) -> impl Iterator<Item = &RouteEntry> {
        self.table.iter()
    }

    /// Route `req` and run the bound action.
    ///
    /// Matching happens before this returns; the future only runs the action.
    pub fn dispatch(&self, mut req: Request<Body>) -> ActionFuture<'static> {
        let Some((resource, action)) = self.select(&mut req) else {
            return Box::pin(async { not_found() });
        };
        Box::pin(async move { resource.handlers.call(action, req).await })
    }

    fn select(&self, req: &mut Request<Body>) -> Option<(Arc<Resource>, Action)> {
        let (resource, action, id) = {
            let matched = self.route(req.method(), req.uri().path())?;
            (
                matched.entry.resource.clone(),
                matched.entry.action,
                matched.id.map(Cow::into_owned),
            )
        };

        tracing::trace!(
            resource = %resource.name,
            action = %action,
            id = id.as_deref().unwrap_or(""),
            "Route matched"
        );

        if let Some(id) = id {
            params::attach(req, resource.key.clone(), id);
        }
        Some((resource, action))
    }

    /// Mount this router as the fallback of a fresh axum `Router`.
    pub fn into_axum_router(self) -> axum::Router {
        axum::Router::new().fallback_service(self)
    }
}

impl fmt::Debug for ResourceRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.table.iter()).finish()
    }
}

impl Service<Request<Body>> for ResourceRouter {
    type Response = Response;
    type Error = Infallible;
    type Future = BoxFuture<'static, Result<Response, Infallible>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let fut = self.dispatch(req);
        Box::pin(async move { Ok(fut.await) })
    }
}
