//! Legal check module
//!
//! Fabricates a legal-status determination: a uniformly random verdict and
//! confidence score over fixed citation lists.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use super::{round2, score_string};

/// The fixed legal citations attached to every legal check
const LEGAL_CITATIONS: [&str; 2] = [
    "U.S. Constitution Article II, Section 3",
    "5 U.S.C. § 552 (FOIA)",
];

/// The fixed sources every legal check claims to have consulted
const SOURCES_CHECKED: [&str; 3] = ["foia.gov", "uscode.house.gov", "archives.gov"];

/// Verdict of a (simulated) legal check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LegalStatus {
    Legal,
    Illegal,
    Unclear,
}

impl LegalStatus {
    const ALL: [Self; 3] = [Self::Legal, Self::Illegal, Self::Unclear];

    /// Pick a verdict uniformly at random
    fn random() -> Self {
        *Self::ALL
            .choose(&mut rand::thread_rng())
            .unwrap_or(&Self::Unclear)
    }
}

/// Result of a (simulated) legal-status check
#[derive(Debug, Clone, Serialize)]
pub struct LegalCheckResult {
    pub question: String,
    pub legal_citations: Vec<String>,
    pub legal_status: LegalStatus,
    pub legal_confidence: String,
    pub sources_checked: Vec<String>,
}

/// Fabricate a legal check result for the given question
///
/// The question is echoed back unchanged; the verdict is uniform over
/// {Legal, Illegal, Unclear} and the confidence is uniform in [80, 99],
/// rounded to two decimals.
pub fn legal_check_specific(question: &str) -> LegalCheckResult {
    let confidence_score = round2(rand::thread_rng().gen_range(80.0..=99.0));

    LegalCheckResult {
        question: question.to_string(),
        legal_citations: LEGAL_CITATIONS.iter().map(ToString::to_string).collect(),
        legal_status: LegalStatus::random(),
        legal_confidence: format!(
            "{}% confidence based on legal sources",
            score_string(confidence_score)
        ),
        sources_checked: SOURCES_CHECKED.iter().map(ToString::to_string).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn confidence_of(result: &LegalCheckResult) -> f64 {
        result
            .legal_confidence
            .strip_suffix("% confidence based on legal sources")
            .expect("legal_confidence must carry the fixed suffix")
            .parse()
            .expect("confidence prefix must be numeric")
    }

    #[test]
    fn test_question_is_echoed() {
        let result = legal_check_specific("Is the filibuster legal?");
        assert_eq!(result.question, "Is the filibuster legal?");
    }

    #[test]
    fn test_confidence_in_range() {
        for _ in 0..100 {
            let result = legal_check_specific("q");
            let confidence = confidence_of(&result);
            assert!(
                (80.0..=99.0).contains(&confidence),
                "confidence out of range: {confidence}"
            );
        }
    }

    #[test]
    fn test_confidence_always_has_decimal_point() {
        // Whole-number draws still print as e.g. "85.0% confidence ..."
        for _ in 0..100 {
            let result = legal_check_specific("q");
            let digits = result
                .legal_confidence
                .strip_suffix("% confidence based on legal sources")
                .unwrap();
            assert!(digits.contains('.'), "missing decimal point: {digits}");
        }
    }

    #[test]
    fn test_status_is_one_of_three() {
        for _ in 0..50 {
            let result = legal_check_specific("q");
            assert!(LegalStatus::ALL.contains(&result.legal_status));
        }
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(serde_json::to_value(LegalStatus::Legal).unwrap(), "Legal");
        assert_eq!(serde_json::to_value(LegalStatus::Illegal).unwrap(), "Illegal");
        assert_eq!(serde_json::to_value(LegalStatus::Unclear).unwrap(), "Unclear");
    }

    #[test]
    fn test_fixed_lists() {
        let result = legal_check_specific("q");
        assert_eq!(result.legal_citations.len(), 2);
        assert_eq!(
            result.sources_checked,
            vec!["foia.gov", "uscode.house.gov", "archives.gov"]
        );
    }
}
