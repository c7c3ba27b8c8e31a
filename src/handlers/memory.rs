//! In-memory Handler Set.
//!
//! A fully custom [`ResourceHandlers`] implementation that keeps request
//! bodies as opaque bytes keyed by generated ids. The stored bytes are never
//! parsed; the original `Content-Type` is replayed on Show.

use axum::{
    body::{Body, Bytes},
    http::{header, HeaderValue, Request, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use dashmap::DashMap;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use uuid::Uuid;

use super::handler_set::{ActionFuture, ResourceHandlers};
use crate::http::response::not_found;
use crate::routing::resource_id;

/// Bytes that cannot appear raw in a path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone)]
struct StoredItem {
    content_type: Option<HeaderValue>,
    body: Bytes,
}

/// Volatile storage for one resource.
#[derive(Debug)]
pub struct MemoryResource {
    name: String,
    items: DashMap<String, StoredItem>,
}

impl MemoryResource {
    /// Create an empty store for the resource registered as `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: DashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    async fn read_item(req: Request<Body>) -> Result<StoredItem, Response> {
        let content_type = req.headers().get(header::CONTENT_TYPE).cloned();
        // Size limits are enforced by the transport's body limit layer.
        match axum::body::to_bytes(req.into_body(), usize::MAX).await {
            Ok(body) => Ok(StoredItem { content_type, body }),
            Err(e) => {
                tracing::debug!(error = %e, "Failed to read request body");
                Err((StatusCode::BAD_REQUEST, "Unreadable request body").into_response())
            }
        }
    }
}

impl ResourceHandlers for MemoryResource {
    fn index(&self, _req: Request<Body>) -> ActionFuture<'_> {
        Box::pin(async move {
            let mut ids: Vec<String> = self.items.iter().map(|e| e.key().clone()).collect();
            ids.sort();
            Json(ids).into_response()
        })
    }

    fn create(&self, req: Request<Body>) -> ActionFuture<'_> {
        Box::pin(async move {
            let item = match Self::read_item(req).await {
                Ok(item) => item,
                Err(res) => return res,
            };

            let id = Uuid::new_v4().to_string();
            let location = format!("/{}/{}", utf8_percent_encode(&self.name, SEGMENT), id);
            self.items.insert(id.clone(), item);

            tracing::debug!(resource = %self.name, id = %id, "Created instance");
            (
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(serde_json::json!({ "id": id })),
            )
                .into_response()
        })
    }

    fn show(&self, req: Request<Body>) -> ActionFuture<'_> {
        let id = resource_id(&self.name, &req).to_owned();
        Box::pin(async move {
            let Some(item) = self.items.get(&id).map(|e| e.value().clone()) else {
                return not_found();
            };

            let mut res = Response::new(Body::from(item.body));
            if let Some(content_type) = item.content_type {
                res.headers_mut().insert(header::CONTENT_TYPE, content_type);
            }
            res
        })
    }

    fn update(&self, req: Request<Body>) -> ActionFuture<'_> {
        let id = resource_id(&self.name, &req).to_owned();
        Box::pin(async move {
            if !self.items.contains_key(&id) {
                return not_found();
            }
            let item = match Self::read_item(req).await {
                Ok(item) => item,
                Err(res) => return res,
            };

            // Destroyed while the body was being read: do not resurrect it.
            match self.items.get_mut(&id) {
                Some(mut entry) => {
                    *entry = item;
                    StatusCode::NO_CONTENT.into_response()
                }
                None => not_found(),
            }
        })
    }

    fn destroy(&self, req: Request<Body>) -> ActionFuture<'_> {
        let id = resource_id(&self.name, &req).to_owned();
        Box::pin(async move {
            match self.items.remove(&id) {
                Some(_) => {
                    tracing::debug!(resource = %self.name, id = %id, "Destroyed instance");
                    StatusCode::NO_CONTENT.into_response()
                }
                None => not_found(),
            }
        })
    }
}
