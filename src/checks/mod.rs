//! Canned check functions module
//!
//! Every check in this service is fabricated: responses are synthesized
//! from static source lists and random scores. The submitted question is
//! echoed back, never analyzed. Nothing here touches the network or disk.

pub mod gov;
pub mod legal;
pub mod media;

pub use gov::{check_with_gov_sources, GovCheckResult};
pub use legal::{legal_check_specific, LegalCheckResult, LegalStatus};
pub use media::{recent_media_claims, ClaimStatus, MediaClaim};

/// Round a score to two decimal places for display
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format a rounded score the way Python formats floats: shortest
/// representation, but whole numbers keep a trailing `.0` (`82.0`, not `82`)
pub(crate) fn score_string(value: f64) -> String {
    let s = value.to_string();
    if s.contains('.') {
        s
    } else {
        format!("{s}.0")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert!((round2(82.12345) - 82.12).abs() < f64::EPSILON);
        assert!((round2(99.999) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_score_string_keeps_decimal_point() {
        assert_eq!(score_string(82.0), "82.0");
        assert_eq!(score_string(100.0), "100.0");
    }

    #[test]
    fn test_score_string_shortest_form() {
        assert_eq!(score_string(82.5), "82.5");
        assert_eq!(score_string(82.55), "82.55");
    }
}
