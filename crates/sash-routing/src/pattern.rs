//! Route pattern compilation and matching.

use std::collections::HashMap;

use sash_common::RoutingError;

/// One compiled pattern segment.
///
/// A segment starting with `:` binds the corresponding input segment under
/// that name. A segment ending in `*` matches any input segment with that
/// prefix and absorbs the remainder of the path (`*` alone absorbs from
/// its own position, zero or more segments).
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
    Wildcard { prefix: String },
}

/// Immutable compiled form of a route string.
#[derive(Debug, Clone)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Compile a route string. Fails only on structurally malformed input;
    /// in practice that means the empty string.
    pub fn compile(pattern: &str) -> Result<Self, RoutingError> {
        if pattern.is_empty() {
            return Err(RoutingError::InvalidPattern("empty pattern".into()));
        }

        let segments = pattern
            .split('/')
            .map(|seg| {
                if let Some(name) = seg.strip_prefix(':') {
                    Segment::Param(name.to_string())
                } else if let Some(prefix) = seg.strip_suffix('*') {
                    Segment::Wildcard {
                        prefix: prefix.to_string(),
                    }
                } else {
                    Segment::Literal(seg.to_string())
                }
            })
            .collect();

        Ok(Self {
            raw: pattern.to_string(),
            segments,
        })
    }

    /// The route string this pattern was compiled from.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Match a concrete path (query already stripped) against this pattern.
    ///
    /// Returns the bound parameters on a match, `None` otherwise. A failed
    /// match is the normal not-found case, not an error. Deterministic:
    /// identical inputs always yield identical results.
    pub fn capture(&self, path: &str) -> Option<HashMap<String, String>> {
        let input: Vec<&str> = path.split('/').collect();
        let mut params = HashMap::new();

        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Literal(lit) => {
                    if input.get(i).copied() != Some(lit.as_str()) {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    let value = input.get(i)?;
                    params.insert(name.clone(), (*value).to_string());
                }
                Segment::Wildcard { prefix } => {
                    // Terminates matching regardless of extra segments.
                    return match input.get(i) {
                        Some(value) if value.starts_with(prefix.as_str()) => Some(params),
                        None if prefix.is_empty() => Some(params),
                        _ => None,
                    };
                }
            }
        }

        if input.len() == self.segments.len() {
            Some(params)
        } else {
            None
        }
    }
}
