//! The five conventional resource actions.

use std::fmt;

use axum::http::Method;

/// One of the conventional actions exposed for every resource.
///
/// | Action  | Method | Path               |
/// |---------|--------|--------------------|
/// | Index   | GET    | `/{resource}`      |
/// | Create  | POST   | `/{resource}`      |
/// | Show    | GET    | `/{resource}/{id}` |
/// | Update  | PUT    | `/{resource}/{id}` |
/// | Destroy | DELETE | `/{resource}/{id}` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// List all instances.
    Index,
    /// Create a new instance.
    Create,
    /// Show a specific instance.
    Show,
    /// Update a specific instance.
    Update,
    /// Delete an instance.
    Destroy,
}

impl Action {
    /// Every action, in registration order.
    pub const ALL: [Action; 5] = [
        Action::Index,
        Action::Create,
        Action::Show,
        Action::Update,
        Action::Destroy,
    ];

    /// The HTTP method this action is bound to.
    pub fn method(self) -> Method {
        match self {
            Action::Index | Action::Show => Method::GET,
            Action::Create => Method::POST,
            Action::Update => Method::PUT,
            Action::Destroy => Method::DELETE,
        }
    }

    /// True for actions addressed at a single instance (`/{resource}/{id}`).
    pub fn is_instance(self) -> bool {
        matches!(self, Action::Show | Action::Update | Action::Destroy)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Action::Index => "index",
            Action::Create => "create",
            Action::Show => "show",
            Action::Update => "update",
            Action::Destroy => "destroy",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
