//! Same-origin forwarding of `/auth/*` and `/api/*` to the shipping gateway.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever talks to this server, so the gateway's session
//! cookie is first-party. Requests are replayed against `GATEWAY_URL` with
//! the same method, path, query and body; only an allowlist of headers
//! crosses in either direction.
//!
//! ERROR HANDLING
//! ==============
//! Gateway status codes (including 401/403) pass through untouched. Only
//! failures of the hop itself become [`ProxyError`]: an oversized body is 413,
//! a body the browser aborted mid-stream is 400, an unreachable or timed-out
//! gateway is 502.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::header::{
    ACCEPT, AUTHORIZATION, CACHE_CONTROL, CONTENT_DISPOSITION, CONTENT_TYPE, COOKIE, HeaderName, LOCATION, SET_COOKIE,
};
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use http_body_util::LengthLimitError;

use crate::state::AppState;

/// Headers copied from the browser request to the gateway.
pub const FORWARDED_REQUEST_HEADERS: [HeaderName; 4] = [ACCEPT, AUTHORIZATION, CONTENT_TYPE, COOKIE];

/// Headers copied from the gateway response back to the browser.
pub const FORWARDED_RESPONSE_HEADERS: [HeaderName; 5] =
    [CACHE_CONTROL, CONTENT_DISPOSITION, CONTENT_TYPE, LOCATION, SET_COOKIE];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("request body exceeds {limit} bytes")]
    PayloadTooLarge { limit: usize },
    #[error("failed to read request body: {0}")]
    BodyRead(axum::Error),
    #[error("gateway request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl ProxyError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::BodyRead(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "gateway proxy failed");
        } else {
            tracing::warn!(error = %self, "gateway proxy refused request");
        }
        (status, self.to_string()).into_response()
    }
}

/// Classify a failed body read: only the length limit is a 413.
#[must_use]
pub fn body_error(err: axum::Error, limit: usize) -> ProxyError {
    let over_limit = std::error::Error::source(&err).is_some_and(|source| source.is::<LengthLimitError>());
    if over_limit { ProxyError::PayloadTooLarge { limit } } else { ProxyError::BodyRead(err) }
}

/// Gateway URL for an incoming request URI: base plus path and query.
#[must_use]
pub fn upstream_url(gateway_url: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
    format!("{gateway_url}{path_and_query}")
}

/// Copy every value of each allowed header, preserving repeats such as
/// multiple `Set-Cookie` lines.
#[must_use]
pub fn filter_headers(source: &HeaderMap, allowed: &[HeaderName]) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in allowed {
        for value in source.get_all(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

/// Replay the request against the gateway and stream back its answer.
///
/// # Errors
///
/// Returns [`ProxyError`] when the body is too large or unreadable, or the
/// gateway cannot be reached.
pub async fn forward(State(state): State<AppState>, request: Request) -> Result<Response, ProxyError> {
    let (parts, body) = request.into_parts();
    let limit = state.config.max_body_bytes;
    let bytes = axum::body::to_bytes(body, limit)
        .await
        .map_err(|e| body_error(e, limit))?;

    let url = upstream_url(&state.config.gateway_url, &parts.uri);
    tracing::debug!(method = %parts.method, %url, "forwarding to gateway");

    let upstream = state
        .http
        .request(parts.method, &url)
        .headers(filter_headers(&parts.headers, &FORWARDED_REQUEST_HEADERS))
        .body(bytes)
        .send()
        .await?;

    let status = upstream.status();
    let headers = filter_headers(upstream.headers(), &FORWARDED_RESPONSE_HEADERS);
    let payload = upstream.bytes().await?;

    let mut response = Response::new(Body::from(payload));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}
