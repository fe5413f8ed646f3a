//! Route and query parameters.

use std::collections::HashMap;

use crate::error::CoreError;

/// Extracted route parameters (e.g., `brandSlug` from `/brands/:brandSlug`).
pub type RouteParams = HashMap<String, String>;

/// Query string parameters.
pub type QueryParams = HashMap<String, String>;

/// Parse a URL query string (without the leading `?`).
///
/// Empty pairs are skipped; a repeated key keeps its last value.
pub fn parse_query(qs: &str) -> QueryParams {
    qs.trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let mut parts = pair.splitn(2, '=');
            let key = parts.next().unwrap_or("");
            let value = parts.next().unwrap_or("");
            (percent_decode(key), percent_decode(value))
        })
        .filter(|(key, _)| !key.is_empty())
        .collect()
}

/// Decode `%XX` escapes and `+` as space. Malformed escapes pass through.
pub fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'%' if i + 2 < bytes.len() => {
                match std::str::from_utf8(&bytes[i + 1..i + 3])
                    .ok()
                    .and_then(|hex| u8::from_str_radix(hex, 16).ok())
                {
                    Some(byte) => {
                        out.push(byte);
                        i += 3;
                    }
                    None => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }

    String::from_utf8_lossy(&out).into_owned()
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
    Wildcard(String),
}

/// A route pattern such as `/brands/:brandSlug` or `/docs/*rest`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Parse a pattern. `:name` captures one segment, `*name` the remainder.
    pub fn new(pattern: impl Into<String>) -> Self {
        let raw = pattern.into();
        let segments = split_path(&raw)
            .map(|seg| {
                if let Some(name) = seg.strip_prefix(':') {
                    Segment::Param(name.to_string())
                } else if let Some(name) = seg.strip_prefix('*') {
                    Segment::Wildcard(name.to_string())
                } else {
                    Segment::Static(seg.to_string())
                }
            })
            .collect();
        Self { raw, segments }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Names of the parameters this pattern captures.
    pub fn param_names(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Param(name) | Segment::Wildcard(name) => Some(name.as_str()),
                Segment::Static(_) => None,
            })
            .collect()
    }

    /// Match a path (query string excluded) and extract its parameters.
    pub fn match_path(&self, path: &str) -> Option<RouteParams> {
        let parts: Vec<&str> = split_path(path).collect();
        let mut params = RouteParams::new();

        for (idx, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Wildcard(name) => {
                    let rest = parts.get(idx..).unwrap_or(&[]).join("/");
                    params.insert(name.clone(), percent_decode(&rest));
                    return Some(params);
                }
                Segment::Static(expected) => {
                    if parts.get(idx) != Some(&expected.as_str()) {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    let value = parts.get(idx)?;
                    params.insert(name.clone(), percent_decode(value));
                }
            }
        }

        (parts.len() == self.segments.len()).then_some(params)
    }

    /// Like `match_path`, but reports a mismatch as an error.
    pub fn extract(&self, path: &str) -> Result<RouteParams, CoreError> {
        self.match_path(path).ok_or_else(|| CoreError::RouteNotMatched {
            pattern: self.raw.clone(),
            path: path.to_string(),
        })
    }
}

fn split_path(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Split a URL into its path and parsed query.
pub fn split_url(url: &str) -> (&str, QueryParams) {
    let url = url.split('#').next().unwrap_or("");
    match url.split_once('?') {
        Some((path, qs)) => (path, parse_query(qs)),
        None => (url, QueryParams::new()),
    }
}
