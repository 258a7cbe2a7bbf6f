//! Route parsing
//!
//! Splits a browser location into a normalized path and decoded query
//! pairs. All matching downstream happens against the lowercased,
//! trailing-slash-trimmed path.

/// Parsed (path, query) pair for one navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    path: String,
    query: Vec<(String, String)>,
}

impl Route {
    /// Parse a location string such as `/role?role=family`
    #[must_use]
    pub fn parse(location: &str) -> Self {
        let (path_part, query_part) = match location.split_once('?') {
            Some((path, query)) => (path, query),
            None => (location, ""),
        };
        let query = url::form_urlencoded::parse(query_part.as_bytes())
            .into_owned()
            .collect();
        Self {
            path: normalize_path(path_part),
            query,
        }
    }

    /// Normalized path (lowercased, leading slash, no trailing slash)
    #[inline]
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// First value of a query parameter, if present
    #[must_use]
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Whether a query parameter is present at all
    #[inline]
    #[must_use]
    pub fn has_query_param(&self, name: &str) -> bool {
        self.query.iter().any(|(key, _)| key == name)
    }

    /// Path segment at `index`, if present
    #[must_use]
    pub fn segment(&self, index: usize) -> Option<&str> {
        self.path
            .split('/')
            .filter(|s| !s.is_empty())
            .nth(index)
    }

    /// First path segment; `None` for the root path
    #[inline]
    #[must_use]
    pub fn first_segment(&self) -> Option<&str> {
        self.segment(0)
    }
}

fn normalize_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/').to_lowercase();
    if trimmed.is_empty() {
        return "/".to_string();
    }
    if trimmed.starts_with('/') {
        trimmed
    } else {
        format!("/{trimmed}")
    }
}
