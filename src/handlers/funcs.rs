//! Default-with-overrides Handler Set.
//!
//! `HandlerFuncs` responds with 404 Not Found on every action. Each action can
//! be overridden independently, so a resource that only supports listing and
//! showing needs exactly two closures.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use axum::{
    body::Body,
    http::Request,
    response::{IntoResponse, Response},
};
use futures_util::future::BoxFuture;

use super::action::Action;
use super::handler_set::{ActionFuture, ResourceHandlers};
use crate::http::response::not_found;

/// A type-erased action override.
pub type ActionFn = Arc<dyn Fn(Request<Body>) -> BoxFuture<'static, Response> + Send + Sync>;

/// Handler Set holding one optional override per action.
#[derive(Clone, Default)]
pub struct HandlerFuncs {
    index: Option<ActionFn>,
    create: Option<ActionFn>,
    show: Option<ActionFn>,
    update: Option<ActionFn>,
    destroy: Option<ActionFn>,
}

impl HandlerFuncs {
    /// A Handler Set that answers 404 on every action.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_index<F, Fut, R>(self, f: F) -> Self
    where
        F: Fn(Request<Body>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = R> + Send + 'static,
        R: IntoResponse,
    {
        self.with_action(Action::Index, f)
    }

    pub fn with_create<F, Fut, R>(self, f: F) -> Self
    where
        F: Fn(Request<Body>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = R> + Send + 'static,
        R: IntoResponse,
    {
        self.with_action(Action::Create, f)
    }

    pub fn with_show<F, Fut, R>(self, f: F) -> Self
    where
        F: Fn(Request<Body>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = R> + Send + 'static,
        R: IntoResponse,
    {
        self.with_action(Action::Show, f)
    }

    pub fn with_update<F, Fut, R>(self, f: F) -> Self
    where
        F: Fn(Request<Body>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = R> + Send + 'static,
        R: IntoResponse,
    {
        self.with_action(Action::Update, f)
    }

    pub fn with_destroy<F, Fut, R>(self, f: F) -> Self
    where
        F: Fn(Request<Body>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = R> + Send + 'static,
        R: IntoResponse,
    {
        self.with_action(Action::Destroy, f)
    }

    /// Override `action` with `f`, replacing any previous override.
    pub fn with_action<F, Fut, R>(mut self, action: Action, f: F) -> Self
    where
        F: Fn(Request<Body>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = R> + Send + 'static,
        R: IntoResponse,
    {
        *self.slot_mut(action) = Some(action_fn(f));
        self
    }

    /// Returns true if `action` has an override.
    pub fn has(&self, action: Action) -> bool {
        self.slot(action).is_some()
    }

    fn slot(&self, action: Action) -> &Option<ActionFn> {
        match action {
            Action::Index => &self.index,
            Action::Create => &self.create,
            Action::Show => &self.show,
            Action::Update => &self.update,
            Action::Destroy => &self.destroy,
        }
    }

    fn slot_mut(&mut self, action: Action) -> &mut Option<ActionFn> {
        match action {
            Action::Index => &mut self.index,
            Action::Create => &mut self.create,
            Action::Show => &mut self.show,
            Action::Update => &mut self.update,
            Action::Destroy => &mut self.destroy,
        }
    }

    fn invoke(&self, action: Action, req: Request<Body>) -> ActionFuture<'static> {
        match self.slot(action) {
            Some(f) => f(req),
            None => Box::pin(async { not_found() }),
        }
    }
}

fn action_fn<F, Fut, R>(f: F) -> ActionFn
where
    F: Fn(Request<Body>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse,
{
    Arc::new(move |req: Request<Body>| -> BoxFuture<'static, Response> {
        let fut = f(req);
        Box::pin(async move { fut.await.into_response() })
    })
}

impl ResourceHandlers for HandlerFuncs {
    fn index(&self, req: Request<Body>) -> ActionFuture<'_> {
        self.invoke(Action::Index, req)
    }

    fn create(&self, req: Request<Body>) -> ActionFuture<'_> {
        self.invoke(Action::Create, req)
    }

    fn show(&self, req: Request<Body>) -> ActionFuture<'_> {
        self.invoke(Action::Show, req)
    }

    fn update(&self, req: Request<Body>) -> ActionFuture<'_> {
        self.invoke(Action::Update, req)
    }

    fn destroy(&self, req: Request<Body>) -> ActionFuture<'_> {
        self.invoke(Action::Destroy, req)
    }
}

impl fmt::Debug for HandlerFuncs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let overridden: Vec<&str> = Action::ALL
            .iter()
            .filter(|a| self.has(**a))
            .map(|a| a.as_str())
            .collect();
        f.debug_struct("HandlerFuncs")
            .field("overrides", &overridden)
            .finish()
    }
}
