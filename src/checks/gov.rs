//! Government-source check module
//!
//! Fabricates a "checked against .gov records" result: a random truth
//! percentage plus fixed citation and source lists.

use rand::Rng;
use serde::Serialize;

use super::{round2, score_string};

/// The fixed set of .gov sources every response claims to have used
const GOV_SOURCES: [&str; 8] = [
    "whitehouse.gov",
    "treasury.gov",
    "gao.gov",
    "congress.gov",
    "foia.gov",
    "supremecourt.gov",
    "uscode.house.gov",
    "archives.gov (Constitution)",
];

/// The fixed legal citations attached to every response
const LEGAL_CITATIONS: [&str; 3] = [
    "U.S. Constitution Article I, Section 9",
    "31 U.S. Code § 1105",
    "FOIA.gov - Budget Disclosure Records",
];

/// Result of a (simulated) government-source check
#[derive(Debug, Clone, Serialize)]
pub struct GovCheckResult {
    pub truth_score: String,
    pub legal_citations: Vec<String>,
    pub sources_used: Vec<String>,
    pub status: String,
}

/// Fabricate a government-source check result
///
/// The question does not influence the outcome; the truth score is drawn
/// uniformly from [75, 100] and rounded to two decimals.
pub fn check_with_gov_sources(_question: &str) -> GovCheckResult {
    let truth_percentage = round2(rand::thread_rng().gen_range(75.0..=100.0));

    GovCheckResult {
        truth_score: format!("{}% truth", score_string(truth_percentage)),
        legal_citations: LEGAL_CITATIONS.iter().map(ToString::to_string).collect(),
        sources_used: GOV_SOURCES.iter().map(ToString::to_string).collect(),
        status: "Based on .gov and legal records only".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score_of(result: &GovCheckResult) -> f64 {
        result
            .truth_score
            .strip_suffix("% truth")
            .expect("truth_score must end in '% truth'")
            .parse()
            .expect("truth_score prefix must be numeric")
    }

    #[test]
    fn test_truth_score_in_range() {
        for _ in 0..100 {
            let result = check_with_gov_sources("Was the budget cut?");
            let score = score_of(&result);
            assert!((75.0..=100.0).contains(&score), "score out of range: {score}");
        }
    }

    #[test]
    fn test_truth_score_always_has_decimal_point() {
        // Whole-number draws still print as e.g. "82.0% truth"
        for _ in 0..100 {
            let result = check_with_gov_sources("q");
            let digits = result.truth_score.strip_suffix("% truth").unwrap();
            assert!(digits.contains('.'), "missing decimal point: {digits}");
        }
    }

    #[test]
    fn test_static_lists() {
        let result = check_with_gov_sources("anything");
        assert_eq!(result.sources_used.len(), 8);
        assert_eq!(result.legal_citations.len(), 3);
        assert_eq!(result.sources_used[0], "whitehouse.gov");
        assert_eq!(result.status, "Based on .gov and legal records only");
    }

    #[test]
    fn test_serialized_field_names() {
        let result = check_with_gov_sources("anything");
        let value = serde_json::to_value(&result).unwrap();
        assert!(value.get("truth_score").is_some());
        assert!(value.get("legal_citations").is_some());
        assert!(value.get("sources_used").is_some());
        assert!(value.get("status").is_some());
    }
}
