//! Media claims module
//!
//! A fixed list of three pre-scored media claims. The list never changes;
//! no feed is fetched and no claim is actually checked.

use serde::Serialize;

/// Maximum number of claims returned per request
const MAX_CLAIMS: usize = 5;

/// Verdict attached to a media claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ClaimStatus {
    False,
    #[serde(rename = "Mostly True")]
    MostlyTrue,
    True,
}

/// A single (static) media fact-check record
#[derive(Debug, Clone, Serialize)]
pub struct MediaClaim {
    pub media_source: &'static str,
    pub statement: &'static str,
    pub date: &'static str,
    pub truth_score: &'static str,
    pub checked_against: Vec<&'static str>,
    pub status: ClaimStatus,
}

/// Return the canned list of recent media claims, at most `MAX_CLAIMS`
pub fn recent_media_claims() -> Vec<MediaClaim> {
    let mut claims = vec![
        MediaClaim {
            media_source: "CNN",
            statement: "The budget was cut by 50% last year.",
            date: "2025-04-02",
            truth_score: "20% true",
            checked_against: vec!["gao.gov", "congress.gov"],
            status: ClaimStatus::False,
        },
        MediaClaim {
            media_source: "NBC",
            statement: "Congress passed the tax bill in March.",
            date: "2025-03-28",
            truth_score: "85% true",
            checked_against: vec!["congress.gov"],
            status: ClaimStatus::MostlyTrue,
        },
        MediaClaim {
            media_source: "Fox News",
            statement: "The Supreme Court ruled on XYZ case.",
            date: "2025-03-30",
            truth_score: "95% true",
            checked_against: vec!["supremecourt.gov"],
            status: ClaimStatus::True,
        },
    ];
    claims.truncate(MAX_CLAIMS);
    claims
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_three_claims() {
        let claims = recent_media_claims();
        assert_eq!(claims.len(), 3);
    }

    #[test]
    fn test_claims_are_deterministic() {
        let first = recent_media_claims();
        let second = recent_media_claims();
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.media_source, b.media_source);
            assert_eq!(a.status, b.status);
        }
    }

    #[test]
    fn test_fixed_statuses() {
        let claims = recent_media_claims();
        assert_eq!(claims[0].status, ClaimStatus::False);
        assert_eq!(claims[1].status, ClaimStatus::MostlyTrue);
        assert_eq!(claims[2].status, ClaimStatus::True);
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_value(ClaimStatus::MostlyTrue).unwrap(),
            "Mostly True"
        );
        assert_eq!(serde_json::to_value(ClaimStatus::False).unwrap(), "False");
        assert_eq!(serde_json::to_value(ClaimStatus::True).unwrap(), "True");
    }
}
