use std::collections::HashMap;

use axum::Router;
use axum::http::HeaderValue;
use axum::http::header::HOST;

use super::*;
use crate::config::ServerConfig;

// =============================================================================
// PURE HELPERS
// =============================================================================

#[test]
fn upstream_url_keeps_path_and_query() {
    let uri: Uri = "/api/shipping?page=2&q=dhl".parse().unwrap();
    assert_eq!(upstream_url("http://gw:8080", &uri), "http://gw:8080/api/shipping?page=2&q=dhl");
}

#[test]
fn upstream_url_without_query() {
    let uri: Uri = "/auth/me".parse().unwrap();
    assert_eq!(upstream_url("http://gw:8080", &uri), "http://gw:8080/auth/me");
}

#[test]
fn filter_headers_drops_unlisted_headers() {
    let mut source = HeaderMap::new();
    source.insert(COOKIE, HeaderValue::from_static("sid=abc"));
    source.insert(HOST, HeaderValue::from_static("shop.example"));
    source.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let out = filter_headers(&source, &FORWARDED_REQUEST_HEADERS);
    assert_eq!(out.get(COOKIE).unwrap(), "sid=abc");
    assert_eq!(out.get(CONTENT_TYPE).unwrap(), "application/json");
    assert!(out.get(HOST).is_none());
}

#[test]
fn filter_headers_preserves_repeated_set_cookie() {
    let mut source = HeaderMap::new();
    source.append(SET_COOKIE, HeaderValue::from_static("sid=1; HttpOnly"));
    source.append(SET_COOKIE, HeaderValue::from_static("csrf=2"));

    let out = filter_headers(&source, &FORWARDED_RESPONSE_HEADERS);
    let cookies: Vec<_> = out.get_all(SET_COOKIE).iter().map(|v| v.to_str().unwrap().to_owned()).collect();
    assert_eq!(cookies, vec!["sid=1; HttpOnly", "csrf=2"]);
}

#[test]
fn proxy_error_status_mapping() {
    assert_eq!(ProxyError::PayloadTooLarge { limit: 10 }.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let build_err = reqwest::Client::new().get("not a url").build().unwrap_err();
    let err = ProxyError::Upstream(build_err);
    assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn body_error_maps_length_limit_to_413() {
    let err = axum::body::to_bytes(Body::from("longer than four"), 4).await.unwrap_err();
    let mapped = body_error(err, 4);
    assert!(matches!(mapped, ProxyError::PayloadTooLarge { limit: 4 }));
    assert_eq!(mapped.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn body_error_maps_aborted_stream_to_400() {
    let chunks: Vec<Result<axum::body::Bytes, std::io::Error>> = vec![
        Ok(axum::body::Bytes::from_static(b"part")),
        Err(std::io::Error::other("connection reset")),
    ];
    let body = Body::from_stream(futures::stream::iter(chunks));
    let err = axum::body::to_bytes(body, 1024).await.unwrap_err();
    let mapped = body_error(err, 1024);
    assert!(matches!(mapped, ProxyError::BodyRead(_)));
    assert_eq!(mapped.into_response().status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// END TO END
// =============================================================================

/// Fake gateway: echoes what it received and sets two cookies.
async fn echo(request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    let echoed = serde_json::json!({
        "method": parts.method.as_str(),
        "uri": parts.uri.to_string(),
        "cookie": parts.headers.get(COOKIE).and_then(|v| v.to_str().ok()),
        "host_forwarded": parts.headers.get("x-internal").is_some(),
        "body": String::from_utf8_lossy(&bytes),
    });
    let mut response = axum::Json(echoed).into_response();
    if parts.uri.path() == "/auth/login" {
        response.headers_mut().append(SET_COOKIE, HeaderValue::from_static("sid=new; HttpOnly"));
        response.headers_mut().append(SET_COOKIE, HeaderValue::from_static("theme=dark"));
    }
    if parts.uri.path() == "/api/users" {
        *response.status_mut() = StatusCode::FORBIDDEN;
    }
    response
}

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

async fn spawn_proxy(gateway_url: &str, max_body: &str) -> String {
    let vars: HashMap<&str, String> =
        HashMap::from([("GATEWAY_URL", gateway_url.to_owned()), ("MAX_BODY_BYTES", max_body.to_owned())]);
    let config = ServerConfig::from_lookup(|key| vars.get(key).cloned()).unwrap();
    let state = AppState::new(config).unwrap();
    spawn(crate::routes::proxy_routes(state)).await
}

#[tokio::test]
async fn forward_replays_method_path_cookie_and_body() {
    let gateway = spawn(Router::new().fallback(echo)).await;
    let proxy = spawn_proxy(&gateway, "1024").await;

    let resp = reqwest::Client::new()
        .post(format!("{proxy}/auth/login?next=%2Fparcel"))
        .header(COOKIE, "sid=old")
        .header("x-internal", "1")
        .header(CONTENT_TYPE, "application/json")
        .body(r#"{"email":"a@b.c","password":"pw"}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let cookies: Vec<_> = resp.headers().get_all(SET_COOKIE).iter().map(|v| v.to_str().unwrap().to_owned()).collect();
    assert_eq!(cookies, vec!["sid=new; HttpOnly", "theme=dark"]);

    let echoed: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(echoed["method"], "POST");
    assert_eq!(echoed["uri"], "/auth/login?next=%2Fparcel");
    assert_eq!(echoed["cookie"], "sid=old");
    assert_eq!(echoed["host_forwarded"], false);
    assert_eq!(echoed["body"], r#"{"email":"a@b.c","password":"pw"}"#);
}

#[tokio::test]
async fn forward_passes_gateway_status_through() {
    let gateway = spawn(Router::new().fallback(echo)).await;
    let proxy = spawn_proxy(&gateway, "1024").await;

    let resp = reqwest::get(format!("{proxy}/api/users")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn forward_rejects_oversized_body() {
    let gateway = spawn(Router::new().fallback(echo)).await;
    let proxy = spawn_proxy(&gateway, "8").await;

    let resp = reqwest::Client::new()
        .post(format!("{proxy}/api/shipping"))
        .body("this body is longer than eight bytes")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn forward_reports_unreachable_gateway_as_bad_gateway() {
    // Bind then drop to get a port with nothing listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    let proxy = spawn_proxy(&dead, "1024").await;

    let resp = reqwest::get(format!("{proxy}/auth/me")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
}
