//! Path matching for resource routes.
//!
//! # Responsibilities
//! - Match the collection path `/{name}` exactly
//! - Match the instance path `/{name}/{id}` and capture `id`
//!
//! # Design Decisions
//! - Paths are split on raw `/` first, then each segment is percent-decoded,
//!   so `%2F` inside an id never splits it
//! - Names compare against decoded segments; `"my items"` matches `/my%20items`
//! - The identifier is one segment that is non-empty once decoded
//! - Segments that do not decode to UTF-8 never match
//! - No regex: segment-wise comparison only
//! - Collection and instance shapes for one name can never both match

use std::borrow::Cow;
use std::fmt;

use percent_encoding::percent_decode_str;

/// Result of a successful path match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMatch<'p> {
    /// Decoded identifier captured by an instance pattern; `None` for collections.
    pub id: Option<Cow<'p, str>>,
}

/// Trait for matching request paths against a route template.
pub trait PathMatcher: Send + Sync + fmt::Debug {
    /// Returns the match if the raw request `path` has this matcher's shape.
    fn match_path<'p>(&self, path: &'p str) -> Option<PathMatch<'p>>;

    /// Human-readable template, e.g. `/users/{id}`.
    fn template(&self) -> String;
}

/// Split a raw path into decoded segments. `None` if it does not start with
/// `/` or a segment is not valid UTF-8 once decoded.
fn decoded_segments(path: &str) -> Option<Vec<Cow<'_, str>>> {
    path.strip_prefix('/')?
        .split('/')
        .map(|segment| percent_decode_str(segment).decode_utf8().ok())
        .collect()
}

fn name_matches(name: &[String], segments: &[Cow<'_, str>]) -> bool {
    name.len() == segments.len() && name.iter().zip(segments).all(|(n, s)| n == s)
}

/// Matches `/{name}`.
#[derive(Debug, Clone)]
pub struct CollectionMatcher {
    name: Vec<String>,
}

impl CollectionMatcher {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.split('/').map(str::to_owned).collect(),
        }
    }
}

impl PathMatcher for CollectionMatcher {
    fn match_path<'p>(&self, path: &'p str) -> Option<PathMatch<'p>> {
        let segments = decoded_segments(path)?;
        name_matches(&self.name, &segments).then_some(PathMatch { id: None })
    }

    fn template(&self) -> String {
        format!("/{}", self.name.join("/"))
    }
}

/// Matches `/{name}/{id}` where `id` is a single non-empty segment.
#[derive(Debug, Clone)]
pub struct InstanceMatcher {
    name: Vec<String>,
}

impl InstanceMatcher {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.split('/').map(str::to_owned).collect(),
        }
    }
}

impl PathMatcher for InstanceMatcher {
    fn match_path<'p>(&self, path: &'p str) -> Option<PathMatch<'p>> {
        let mut segments = decoded_segments(path)?;
        let id = segments.pop()?;
        if id.is_empty() || !name_matches(&self.name, &segments) {
            return None;
        }
        Some(PathMatch { id: Some(id) })
    }

    fn template(&self) -> String {
        format!("/{}/{{id}}", self.name.join("/"))
    }
}
