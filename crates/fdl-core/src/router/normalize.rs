//! Path and query helpers for the keyword routes.

use url::Url;

/// Strips leading/trailing slashes and collapses repeated ones.
pub(super) fn normalize_path(path: &str) -> String {
    path.split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// First value of `key` in the query string, form-decoded.
pub(super) fn query_param(url: &Url, key: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}
