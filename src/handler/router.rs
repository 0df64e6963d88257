//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, body-size
//! gating, route matching and access logging.

use http_body_util::{BodyExt, Full};
use hyper::body::{Body as _, Bytes};
use hyper::{Method, Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Instant;

use crate::config::AppState;
use crate::handler::{endpoints, page};
use crate::http;
use crate::logger::{self, AccessLogEntry};

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();

    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let http_version = version_str(req.version());
    let user_agent = req
        .headers()
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string);

    let mut response = dispatch(req, &method, &path, &state).await;
    finalize(&mut response, &state);

    if state.cached_access_log.load(Ordering::Relaxed) {
        let mut entry = AccessLogEntry::new(
            peer_addr.ip().to_string(),
            method.to_string(),
            path,
        );
        entry.http_version = http_version.to_string();
        entry.status = response.status().as_u16();
        entry.body_bytes = response
            .body()
            .size_hint()
            .exact()
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(0);
        entry.user_agent = user_agent;
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Route the request to the matching endpoint
///
/// Generic over the body type so tests can drive it with `Full<Bytes>`
/// requests; the server itself passes `hyper::body::Incoming`.
async fn dispatch<B>(
    req: Request<B>,
    method: &Method,
    path: &str,
    state: &Arc<AppState>,
) -> Response<Full<Bytes>>
where
    B: hyper::body::Body,
    B::Error: std::fmt::Display,
{
    // Preflight applies to every route
    if *method == Method::OPTIONS {
        return http::build_options_response(state.config.http.enable_cors);
    }

    if let Some(resp) = check_body_size(&req, state.config.http.max_body_size) {
        return resp;
    }

    match path {
        "/" => match *method {
            Method::GET | Method::HEAD => page::render_index(*method == Method::HEAD),
            _ => http::method_not_allowed("GET, HEAD, OPTIONS"),
        },
        "/ask" => match *method {
            Method::POST => match collect_body(req).await {
                Ok(body) => endpoints::ask(&body),
                Err(resp) => resp,
            },
            _ => http::method_not_allowed("POST, OPTIONS"),
        },
        "/check-media" => match *method {
            Method::GET => endpoints::check_media(),
            _ => http::method_not_allowed("GET, OPTIONS"),
        },
        "/legal-check" => match *method {
            Method::POST => match collect_body(req).await {
                Ok(body) => endpoints::legal_check(&body),
                Err(resp) => resp,
            },
            _ => http::method_not_allowed("POST, OPTIONS"),
        },
        // Liveness and readiness probes; nothing to check beyond being up
        "/healthz" | "/readyz" => match *method {
            Method::GET => http::build_health_response("ok"),
            _ => http::method_not_allowed("GET, OPTIONS"),
        },
        _ => http::not_found(),
    }
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size<B>(req: &Request<B>, max_body_size: u64) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(http::payload_too_large())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}

/// Read the full request body, mapping failures to a 400 response
async fn collect_body<B>(req: Request<B>) -> Result<Bytes, Response<Full<Bytes>>>
where
    B: hyper::body::Body,
    B::Error: std::fmt::Display,
{
    match req.collect().await {
        Ok(collected) => Ok(collected.to_bytes()),
        Err(e) => {
            logger::log_warning(&format!("Failed to read request body: {e}"));
            Err(http::bad_request("Failed to read request body"))
        }
    }
}

/// Apply response headers common to every route
fn finalize(response: &mut Response<Full<Bytes>>, state: &Arc<AppState>) {
    if let Ok(value) = state.config.http.server_name.parse() {
        response.headers_mut().insert(hyper::header::SERVER, value);
    }
    if state.config.http.enable_cors {
        response.headers_mut().insert(
            hyper::header::ACCESS_CONTROL_ALLOW_ORIGIN,
            hyper::header::HeaderValue::from_static("*"),
        );
    }
}

fn version_str(version: Version) -> &'static str {
    if version == Version::HTTP_10 {
        "1.0"
    } else if version == Version::HTTP_2 {
        "2"
    } else {
        "1.1"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use hyper::StatusCode;

    fn test_state() -> Arc<AppState> {
        let cfg = Config::load_from("no-such-config-file").unwrap();
        Arc::new(AppState::new(&cfg))
    }

    async fn send(req: Request<Full<Bytes>>) -> Response<Full<Bytes>> {
        let method = req.method().clone();
        let path = req.uri().path().to_string();
        dispatch(req, &method, &path, &test_state()).await
    }

    fn request(method: Method, path: &str, body: &str) -> Request<Full<Bytes>> {
        Request::builder()
            .method(method)
            .uri(path)
            .body(Full::new(Bytes::from(body.to_string())))
            .unwrap()
    }

    #[tokio::test]
    async fn test_root_route_is_html_ok() {
        let resp = send(request(Method::GET, "/", "")).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get("Content-Type").unwrap(),
            "text/html; charset=utf-8"
        );
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let resp = send(request(Method::GET, "/nope", "")).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_wrong_method_is_rejected_with_allow_header() {
        let resp = send(request(Method::POST, "/check-media", "")).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(resp.headers().get("Allow").unwrap(), "GET, OPTIONS");

        let resp = send(request(Method::GET, "/ask", "")).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(resp.headers().get("Allow").unwrap(), "POST, OPTIONS");
    }

    #[tokio::test]
    async fn test_oversized_content_length_is_rejected() {
        // Default max_body_size is 1MB
        let req = Request::builder()
            .method(Method::POST)
            .uri("/ask")
            .header("content-length", "2000000")
            .body(Full::new(Bytes::from(r#"{"question":"q"}"#)))
            .unwrap();
        let resp = send(req).await;
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_post_routes_reach_endpoints() {
        let resp = send(request(Method::POST, "/ask", r#"{"question":"q"}"#)).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = send(request(Method::POST, "/legal-check", r#"{"question":"q"}"#)).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_options_is_preflight() {
        let resp = send(request(Method::OPTIONS, "/ask", "")).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }
}
