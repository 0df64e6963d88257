//! Static page module
//!
//! Serves the single HTML form page, embedded at compile time.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use crate::http;

/// The index page, embedded so the binary has no runtime template directory
static INDEX_HTML: &str = include_str!("../../templates/index.html");

/// Render the index page
pub fn render_index(is_head: bool) -> Response<Full<Bytes>> {
    http::build_html_response(INDEX_HTML, is_head)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_is_html() {
        let resp = render_index(false);
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers().get("Content-Type").unwrap(),
            "text/html; charset=utf-8"
        );
    }

    #[test]
    fn test_index_page_references_endpoints() {
        assert!(INDEX_HTML.contains("<!DOCTYPE html>"));
        assert!(INDEX_HTML.contains("/ask"));
        assert!(INDEX_HTML.contains("/check-media"));
        assert!(INDEX_HTML.contains("/legal-check"));
    }
}
