//! JSON endpoint module
//!
//! Builds the response envelopes for the three fact-check endpoints. The
//! endpoints are pure: they parse the (optional) request body, call the
//! canned check functions and serialize the result. The only error surface
//! is a malformed or incomplete request body.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::{Deserialize, Serialize};

use crate::checks::{self, GovCheckResult, LegalCheckResult, MediaClaim};
use crate::http;

const ASK_NOTE: &str =
    "Strictly checked against public .gov and legal sources. No media or opinions used.";
const MEDIA_NOTE: &str = "Media claims cross-checked with public .gov and legal sources only.";
const LEGAL_NOTE: &str = "Legal references only from .gov and U.S. legal sources.";

/// Incoming question body for `/ask` and `/legal-check`
#[derive(Debug, Deserialize)]
pub struct QuestionRequest {
    pub question: String,
}

/// Envelope for `/ask`
#[derive(Debug, Serialize)]
struct AskResponse {
    question: String,
    result: GovCheckResult,
    note: &'static str,
}

/// Envelope for `/check-media`
#[derive(Debug, Serialize)]
struct MediaResponse {
    media_claims: Vec<MediaClaim>,
    note: &'static str,
}

/// Envelope for `/legal-check`
#[derive(Debug, Serialize)]
struct LegalResponse {
    question: String,
    result: LegalCheckResult,
    note: &'static str,
}

/// Parse a question body, mapping failures to a 400 response
fn parse_question(body: &Bytes) -> Result<QuestionRequest, Response<Full<Bytes>>> {
    serde_json::from_slice(body).map_err(|e| http::bad_request(&format!("Invalid request body: {e}")))
}

/// `POST /ask` - fabricate a government-source check for the question
pub fn ask(body: &Bytes) -> Response<Full<Bytes>> {
    let request = match parse_question(body) {
        Ok(r) => r,
        Err(resp) => return resp,
    };

    let result = checks::check_with_gov_sources(&request.question);
    let envelope = AskResponse {
        question: request.question,
        result,
        note: ASK_NOTE,
    };
    http::json_response(StatusCode::OK, &envelope)
}

/// `GET /check-media` - return the canned media claim list
pub fn check_media() -> Response<Full<Bytes>> {
    let envelope = MediaResponse {
        media_claims: checks::recent_media_claims(),
        note: MEDIA_NOTE,
    };
    http::json_response(StatusCode::OK, &envelope)
}

/// `POST /legal-check` - fabricate a legal-status check for the question
pub fn legal_check(body: &Bytes) -> Response<Full<Bytes>> {
    let request = match parse_question(body) {
        Ok(r) => r,
        Err(resp) => return resp,
    };

    let result = checks::legal_check_specific(&request.question);
    let envelope = LegalResponse {
        question: request.question,
        result,
        note: LEGAL_NOTE,
    };
    http::json_response(StatusCode::OK, &envelope)
}
