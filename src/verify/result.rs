// Verification result — the flat record handed back for every claim.
//
// Field names are part of the wire contract: the HTTP layer serialises this
// struct directly, so `verdict` goes out as `verification`.

use serde::{Deserialize, Serialize};

/// The verdict category for a claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "Likely True")]
    LikelyTrue,
    #[serde(rename = "Uncertain")]
    Uncertain,
    #[serde(rename = "Likely False")]
    LikelyFalse,
    #[serde(rename = "Inconclusive")]
    Inconclusive,
    /// Scoring failed; the reason carries the underlying cause.
    #[serde(rename = "Error")]
    Error,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::LikelyTrue => "Likely True",
            Verdict::Uncertain => "Uncertain",
            Verdict::LikelyFalse => "Likely False",
            Verdict::Inconclusive => "Inconclusive",
            Verdict::Error => "Error",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of verifying one claim. Built once per call and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationResult {
    /// The claim exactly as submitted
    pub statement: String,
    #[serde(rename = "verification")]
    pub verdict: Verdict,
    /// 0.0 to 100.0, rounded to two decimal places
    pub confidence: f64,
    pub reason: String,
    /// Up to three evidence excerpts, best match first
    pub sources: Vec<String>,
    /// How many documents were scored against the claim
    pub articles_analyzed: usize,
}

impl VerificationResult {
    /// A zero-confidence result with no evidence attached.
    ///
    /// Used by every short-circuit path (no keywords, no articles, scoring
    /// failure) so they all share the same shape.
    pub fn empty(statement: &str, verdict: Verdict, reason: impl Into<String>) -> Self {
        Self {
            statement: statement.to_string(),
            verdict,
            confidence: 0.0,
            reason: reason.into(),
            sources: Vec::new(),
            articles_analyzed: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_wire_field_names() {
        let result = VerificationResult {
            statement: "Water boils at 100C".to_string(),
            verdict: Verdict::LikelyTrue,
            confidence: 72.5,
            reason: "ok".to_string(),
            sources: vec!["a...".to_string()],
            articles_analyzed: 4,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["verification"], "Likely True");
        assert_eq!(json["confidence"], 72.5);
        assert_eq!(json["articles_analyzed"], 4);
        assert!(json.get("verdict").is_none());
    }

    #[test]
    fn test_verdict_display_matches_serde() {
        for verdict in [
            Verdict::LikelyTrue,
            Verdict::Uncertain,
            Verdict::LikelyFalse,
            Verdict::Inconclusive,
            Verdict::Error,
        ] {
            let json = serde_json::to_string(&verdict).unwrap();
            assert_eq!(json, format!("\"{verdict}\""));
        }
    }
}
