//! Request handler module
//!
//! Responsible for request routing dispatch and endpoint logic: the three
//! JSON fact-check endpoints plus the static index page.

pub mod endpoints;
pub mod page;
pub mod router;

// Re-export main entry point
pub use router::handle_request;
