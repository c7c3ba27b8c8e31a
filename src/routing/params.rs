//! Request-scoped resource identifiers.
//!
//! The router stores the identifier captured by an instance route in the
//! request's extensions under a key derived from the resource name. Handlers
//! read it back by resource name with [`resource_id`].

use std::collections::HashMap;
use std::fmt;

use axum::http::Request;

/// Namespaced key for one resource's captured identifier.
///
/// Distinct resource names always yield distinct keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceIdKey(String);

impl ResourceIdKey {
    pub fn for_resource(name: &str) -> Self {
        Self(format!("_resourceful_{name}_id"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceIdKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifiers captured for the request they are attached to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceIds {
    ids: HashMap<ResourceIdKey, String>,
}

impl ResourceIds {
    /// The identifier captured for `resource`, if any.
    pub fn get(&self, resource: &str) -> Option<&str> {
        self.ids
            .get(&ResourceIdKey::for_resource(resource))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub(crate) fn insert(&mut self, key: ResourceIdKey, id: String) {
        self.ids.insert(key, id);
    }
}

/// Get the id of the named resource for the given request.
///
/// Returns the empty string when the request was not matched against that
/// resource's instance route: the resource is unknown, another resource
/// matched, the collection route matched, or the request was never routed.
pub fn resource_id<'r, B>(resource: &str, req: &'r Request<B>) -> &'r str {
    req.extensions()
        .get::<ResourceIds>()
        .and_then(|ids| ids.get(resource))
        .unwrap_or("")
}

/// Record `id` under `key`, keeping ids captured by enclosing routers.
pub(crate) fn attach<B>(req: &mut Request<B>, key: ResourceIdKey, id: String) {
    let mut ids = req.extensions_mut().remove::<ResourceIds>().unwrap_or_default();
    ids.insert(key, id);
    req.extensions_mut().insert(ids);
}
