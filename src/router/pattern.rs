//! Path patterns with named parameters.
//!
//! # Syntax
//! - `/upload` static segments, matched case-sensitively
//! - `/watch/:id` a named parameter, matches exactly one non-empty segment
//! - `/*path` a catch-all, must be last, matches zero or more segments
//!
//! Empty segments are ignored on both sides, so `/watch//1/` and `/watch/1`
//! are the same path.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};
use std::fmt;

use super::RouteError;

/// Parameters extracted from a matched path, keyed by parameter name.
pub type RouteParams = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
    CatchAll(String),
}

impl Segment {
    fn rank(&self) -> u8 {
        match self {
            Segment::Static(_) => 4,
            Segment::Param(_) => 3,
            Segment::CatchAll(_) => 1,
        }
    }
}

/// Rank of the end of a pattern: below a parameter, above a catch-all, so
/// `/watch/:id` wins over `/watch/:id/*rest` on `/watch/1`.
const END_RANK: u8 = 2;

/// A compiled route path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Parse a pattern such as `/watch/:id`.
    pub fn parse(pattern: &str) -> Result<Self, RouteError> {
        let invalid = |reason: &str| RouteError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        };

        if !pattern.starts_with('/') {
            return Err(invalid("pattern must start with '/'"));
        }

        let raw_segments: Vec<&str> = split_path(pattern).collect();
        let mut segments = Vec::with_capacity(raw_segments.len());
        let mut seen = HashSet::new();

        for (index, raw) in raw_segments.iter().enumerate() {
            let segment = if let Some(name) = raw.strip_prefix(':') {
                Segment::Param(name.to_string())
            } else if let Some(name) = raw.strip_prefix('*') {
                if index + 1 != raw_segments.len() {
                    return Err(invalid("catch-all must be the last segment"));
                }
                Segment::CatchAll(name.to_string())
            } else {
                Segment::Static((*raw).to_string())
            };

            if let Segment::Param(name) | Segment::CatchAll(name) = &segment {
                if !is_valid_param_name(name) {
                    return Err(invalid(&format!("invalid parameter name '{}'", name)));
                }
                if !seen.insert(name.clone()) {
                    return Err(invalid(&format!("duplicate parameter '{}'", name)));
                }
            }
            segments.push(segment);
        }

        Ok(Self {
            raw: pattern.to_string(),
            segments,
        })
    }

    /// The pattern as written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Names of all parameters, in declaration order.
    pub fn param_names(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Param(name) | Segment::CatchAll(name) => Some(name.as_str()),
                Segment::Static(_) => None,
            })
            .collect()
    }

    /// Returns true when this pattern ends with a catch-all segment.
    pub fn is_catch_all(&self) -> bool {
        matches!(self.segments.last(), Some(Segment::CatchAll(_)))
    }

    /// Match a path (without query or fragment) and extract its parameters.
    pub fn matches(&self, path: &str) -> Option<RouteParams> {
        let parts: Vec<&str> = split_path(path).collect();
        let mut params = RouteParams::new();

        for (index, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Static(expected) => {
                    if parts.get(index) != Some(&expected.as_str()) {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    let value = parts.get(index)?;
                    params.insert(name.clone(), (*value).to_string());
                }
                Segment::CatchAll(name) => {
                    let rest = parts.get(index..).unwrap_or_default().join("/");
                    params.insert(name.clone(), rest);
                    return Some(params);
                }
            }
        }

        if parts.len() == self.segments.len() {
            Some(params)
        } else {
            None
        }
    }

    /// Build a concrete path by substituting parameters.
    pub fn build(&self, params: &RouteParams) -> Result<String, RouteError> {
        let mut path = String::new();
        for segment in &self.segments {
            let value = match segment {
                Segment::Static(text) => text.as_str(),
                Segment::Param(name) => {
                    let value = params.get(name).map(String::as_str).unwrap_or_default();
                    if value.is_empty() || value.contains('/') {
                        return Err(RouteError::MissingParam {
                            pattern: self.raw.clone(),
                            param: name.clone(),
                        });
                    }
                    value
                }
                Segment::CatchAll(name) => {
                    params.get(name).map(|v| v.trim_matches('/')).unwrap_or_default()
                }
            };
            if !value.is_empty() {
                path.push('/');
                path.push_str(value);
            }
        }

        if path.is_empty() {
            path.push('/');
        }
        Ok(path)
    }

    /// Two patterns collide when every concrete path matched by one is
    /// matched by the other with equal specificity, i.e. nothing
    /// disambiguates them.
    pub fn collides_with(&self, other: &RoutePattern) -> bool {
        self.segments.len() == other.segments.len()
            && self
                .segments
                .iter()
                .zip(&other.segments)
                .all(|pair| match pair {
                    (Segment::Static(a), Segment::Static(b)) => a == b,
                    (Segment::Param(_), Segment::Param(_)) => true,
                    (Segment::CatchAll(_), Segment::CatchAll(_)) => true,
                    _ => false,
                })
    }

    /// Order by specificity, most specific first.
    ///
    /// Segment ranks (static > parameter > end > catch-all) are compared
    /// lexicographically, so the order is total and only identical rank
    /// sequences tie.
    pub fn specificity_cmp(&self, other: &RoutePattern) -> Ordering {
        other.specificity_key().cmp(&self.specificity_key())
    }

    fn specificity_key(&self) -> Vec<u8> {
        self.segments
            .iter()
            .map(Segment::rank)
            .chain(std::iter::once(END_RANK))
            .collect()
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Split a path into its non-empty segments.
pub(crate) fn split_path(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

fn is_valid_param_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
