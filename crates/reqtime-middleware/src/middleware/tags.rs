//! Request attributes captured for tagging.

use axum::extract::Request;
use axum::http::header::{CONTENT_TYPE, REFERER};
use axum::http::HeaderMap;
use url::form_urlencoded;

/// Header/URI data read at request start, before the request moves into the
/// inner service.
#[derive(Debug, Clone)]
pub struct RequestSnapshot {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub scheme: String,
    pub referer: String,
    pub content_type: String,
    pub is_ajax: bool,
}

impl RequestSnapshot {
    pub fn capture(request: &Request, secure_proxy_header: Option<&str>) -> Self {
        let uri = request.uri();
        let headers = request.headers();

        Self {
            method: request.method().as_str().to_owned(),
            path: uri.path().to_owned(),
            query: uri.query().map(str::to_owned),
            scheme: scheme_of(uri.scheme_str(), headers, secure_proxy_header),
            referer: header_str(headers, REFERER.as_str()),
            content_type: header_str(headers, CONTENT_TYPE.as_str()),
            is_ajax: headers
                .get("x-requested-with")
                .is_some_and(|v| v.as_bytes() == b"XMLHttpRequest"),
        }
    }

    /// Path with `?query` appended when the query is non-empty.
    pub fn full_path(&self) -> String {
        match self.query.as_deref() {
            Some(q) if !q.is_empty() => format!("{}?{}", self.path, q),
            _ => self.path.clone(),
        }
    }

    /// First value of query parameter `key`, form-decoded.
    pub fn query_value(&self, key: &str) -> Option<String> {
        let q = self.query.as_deref()?;
        form_urlencoded::parse(q.as_bytes())
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }
}

/// Header value as UTF-8, empty when absent or not valid text.
fn header_str(headers: &HeaderMap, name: &str) -> String {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned()
}

fn scheme_of(uri_scheme: Option<&str>, headers: &HeaderMap, proxy_header: Option<&str>) -> String {
    if let Some(s) = uri_scheme {
        return s.to_ascii_lowercase();
    }
    let forwarded = proxy_header
        .and_then(|h| headers.get(h))
        .and_then(|v| v.to_str().ok())
        // Proxies may append a chain: "https, http".
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_ascii_lowercase());
    match forwarded.as_deref() {
        Some("https") => "https".into(),
        _ => "http".into(),
    }
}
