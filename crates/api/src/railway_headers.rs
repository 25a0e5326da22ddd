//! HTTP request headers set by Railway's edge proxy.
//!
//! See <https://docs.railway.com/reference/public-networking> for details.

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap, Request},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::convert::Infallible;

/// Client's remote IP.
pub const HEADER_REAL_IP: &str = "X-Real-IP";
/// Always `https`.
pub const HEADER_FORWARDED_PROTO: &str = "X-Forwarded-Proto";
/// The original `Host` header.
pub const HEADER_FORWARDED_HOST: &str = "X-Forwarded-Host";
/// The edge region that handled the request.
pub const HEADER_RAILWAY_EDGE: &str = "X-Railway-Edge";
/// Time the request was received, in Unix milliseconds.
pub const HEADER_REQUEST_START: &str = "X-Request-Start";
/// Correlates requests against Railway's network logs.
pub const HEADER_RAILWAY_REQUEST_ID: &str = "X-Railway-Request-Id";

/// Railway headers of a single request
///
/// Missing headers are left empty. `request_start` is `None` when the header is
/// missing or not a valid millisecond timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RailwayHeaders {
    pub real_ip: String,
    pub forwarded_proto: String,
    pub forwarded_host: String,
    pub railway_edge: String,
    pub request_start: Option<DateTime<Utc>>,
    pub railway_request_id: String,
}

impl RailwayHeaders {
    pub fn from_request<B>(request: &Request<B>) -> Self {
        Self::from_header_map(request.headers())
    }

    pub fn from_header_map(headers: &HeaderMap) -> Self {
        Self {
            real_ip: header_text(headers, HEADER_REAL_IP),
            forwarded_proto: header_text(headers, HEADER_FORWARDED_PROTO),
            forwarded_host: header_text(headers, HEADER_FORWARDED_HOST),
            railway_edge: header_text(headers, HEADER_RAILWAY_EDGE),
            request_start: parse_request_start(headers),
            railway_request_id: header_text(headers, HEADER_RAILWAY_REQUEST_ID),
        }
    }
}

/// Prefers the record stored by
/// [`railway_headers_middleware`](crate::middleware::railway_headers_middleware),
/// otherwise parses the request headers directly.
impl<S> FromRequestParts<S> for RailwayHeaders
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(crate::middleware::headers_from_extensions(&parts.extensions)
            .unwrap_or_else(|| Self::from_header_map(&parts.headers)))
    }
}

// First value wins; bytes that are not UTF-8 are replaced, never dropped
fn header_text(headers: &HeaderMap, name: &str) -> String {
    headers
        .get(name)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
        .unwrap_or_default()
}

fn parse_request_start(headers: &HeaderMap) -> Option<DateTime<Utc>> {
    headers
        .get(HEADER_REQUEST_START)?
        .to_str()
        .ok()?
        .parse::<i64>()
        .ok()
        .and_then(DateTime::from_timestamp_millis)
}
