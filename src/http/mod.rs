//! HTTP protocol layer module
//!
//! Response building decoupled from endpoint logic.

pub mod response;

// Re-export commonly used builders
pub use response::{
    bad_request, build_health_response, build_html_response, build_options_response,
    json_response, method_not_allowed, not_found, payload_too_large,
};
