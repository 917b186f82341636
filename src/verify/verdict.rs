// Verdict classification — reduces a similarity distribution to a verdict.
//
// The thresholds are calibrated constants, evaluated top to bottom:
//
//   max > 0.4  or avg > 0.25   -> Likely True,  min(max(max*100, avg*150), 95)
//   max > 0.2  or avg > 0.12   -> Uncertain,    max*80
//   otherwise                  -> Likely False, (1 - avg)*40
//
// Evidence excerpts come from the best five matches that clear the
// relevance floor, capped at three.

use tracing::debug;

use super::result::Verdict;
use crate::evidence::EvidenceDocument;
use crate::output::excerpt;

pub const STRONG_MAX_SIMILARITY: f64 = 0.4;
pub const STRONG_AVG_SIMILARITY: f64 = 0.25;
pub const MODERATE_MAX_SIMILARITY: f64 = 0.2;
pub const MODERATE_AVG_SIMILARITY: f64 = 0.12;

/// Documents at or below this similarity never appear as sources.
pub const MIN_SOURCE_SIMILARITY: f64 = 0.05;
/// How many top-ranked documents are considered for sources.
pub const SOURCE_CANDIDATES: usize = 5;
pub const MAX_SOURCES: usize = 3;
/// Characters kept from each source before the ellipsis.
pub const SOURCE_EXCERPT_CHARS: usize = 150;

const LIKELY_TRUE_CAP: f64 = 95.0;

/// Summary statistics over a similarity vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarityStats {
    pub max: f64,
    pub avg: f64,
}

impl SimilarityStats {
    /// Max and mean of the vector. Both are 0 for an empty vector.
    pub fn from_similarities(similarities: &[f64]) -> Self {
        if similarities.is_empty() {
            return Self { max: 0.0, avg: 0.0 };
        }
        let max = similarities.iter().copied().fold(0.0, f64::max);
        let avg = similarities.iter().sum::<f64>() / similarities.len() as f64;
        Self { max, avg }
    }
}

/// Verdict, confidence, rationale, and supporting excerpts for one claim.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub verdict: Verdict,
    /// Rounded to two decimal places
    pub confidence: f64,
    pub reason: String,
    pub sources: Vec<String>,
}

/// Classify a claim from its similarity to each retrieved document.
///
/// `similarities` must be co-indexed with `documents`.
pub fn classify(similarities: &[f64], documents: &[EvidenceDocument]) -> Classification {
    let stats = SimilarityStats::from_similarities(similarities);
    let n = documents.len();

    let (verdict, confidence, reason) =
        if stats.max > STRONG_MAX_SIMILARITY || stats.avg > STRONG_AVG_SIMILARITY {
            let confidence = (stats.max * 100.0)
                .max(stats.avg * 150.0)
                .min(LIKELY_TRUE_CAP);
            (
                Verdict::LikelyTrue,
                confidence,
                format!(
                    "Strong correlation found with {n} news articles. \
                     The claim is well-supported by multiple sources."
                ),
            )
        } else if stats.max > MODERATE_MAX_SIMILARITY || stats.avg > MODERATE_AVG_SIMILARITY {
            (
                Verdict::Uncertain,
                stats.max * 80.0,
                format!(
                    "Moderate correlation found in {n} articles. \
                     The claim has some support but lacks strong evidence."
                ),
            )
        } else {
            (
                Verdict::LikelyFalse,
                (1.0 - stats.avg) * 40.0,
                format!(
                    "Little to no correlation found in {n} articles. \
                     The claim lacks credible news support."
                ),
            )
        };

    debug!(
        max_similarity = stats.max,
        avg_similarity = stats.avg,
        verdict = %verdict,
        "Classified claim"
    );

    Classification {
        verdict,
        confidence: round2(confidence.clamp(0.0, 100.0)),
        reason,
        sources: top_sources(similarities, documents),
    }
}

/// Excerpts of the best-matching documents, highest similarity first.
pub fn top_sources(similarities: &[f64], documents: &[EvidenceDocument]) -> Vec<String> {
    let mut ranked: Vec<usize> = (0..similarities.len().min(documents.len())).collect();
    // Stable sort: equal similarities keep retrieval order.
    ranked.sort_by(|&a, &b| {
        similarities[b]
            .partial_cmp(&similarities[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    ranked
        .into_iter()
        .take(SOURCE_CANDIDATES)
        .filter(|&i| similarities[i] > MIN_SOURCE_SIMILARITY)
        .take(MAX_SOURCES)
        .map(|i| excerpt(&documents[i].text, SOURCE_EXCERPT_CHARS))
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(n: usize) -> Vec<EvidenceDocument> {
        (0..n)
            .map(|i| EvidenceDocument::from(format!("document number {i}")))
            .collect()
    }

    #[test]
    fn test_strong_max_is_likely_true() {
        let c = classify(&[0.5, 0.1, 0.0], &docs(3));
        assert_eq!(c.verdict, Verdict::LikelyTrue);
        // max(50, 0.2 * 150 = 30) = 50
        assert!((c.confidence - 50.0).abs() < 1e-9, "got {}", c.confidence);
    }

    #[test]
    fn test_likely_true_capped_at_95() {
        let c = classify(&[0.99, 0.98], &docs(2));
        assert_eq!(c.verdict, Verdict::LikelyTrue);
        assert_eq!(c.confidence, 95.0);
    }

    #[test]
    fn test_high_average_alone_is_likely_true() {
        // max 0.3 (not > 0.4) but avg 0.3 > 0.25 -> avg*150 = 45
        let c = classify(&[0.3, 0.3], &docs(2));
        assert_eq!(c.verdict, Verdict::LikelyTrue);
        assert!((c.confidence - 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_moderate_is_uncertain() {
        let c = classify(&[0.3, 0.0, 0.0], &docs(3));
        assert_eq!(c.verdict, Verdict::Uncertain);
        assert!((c.confidence - 24.0).abs() < 1e-9);
        assert!(c.reason.starts_with("Moderate correlation found in 3 articles"));
    }

    #[test]
    fn test_no_correlation_is_likely_false_at_40() {
        let c = classify(&[0.0, 0.0], &docs(2));
        assert_eq!(c.verdict, Verdict::LikelyFalse);
        assert_eq!(c.confidence, 40.0);
        assert!(c.sources.is_empty());
    }

    #[test]
    fn test_boundaries_are_strict() {
        // Exactly at the thresholds does not trigger the branch
        let c = classify(&[0.4, 0.1], &docs(2));
        assert_eq!(c.verdict, Verdict::Uncertain);
        let c = classify(&[0.2, 0.0], &docs(2));
        assert_eq!(c.verdict, Verdict::LikelyFalse);
    }

    #[test]
    fn test_confidence_rounded_to_two_places() {
        let c = classify(&[0.123456], &docs(1));
        // avg 0.123456 > 0.12 -> Uncertain, 0.123456 * 80 = 9.87648
        assert_eq!(c.verdict, Verdict::Uncertain);
        assert_eq!(c.confidence, 9.88);
    }

    #[test]
    fn test_sources_ranked_filtered_and_capped() {
        let documents = docs(6);
        let sims = [0.06, 0.9, 0.04, 0.5, 0.7, 0.3];
        let sources = top_sources(&sims, &documents);
        assert_eq!(
            sources,
            vec![
                "document number 1...".to_string(),
                "document number 4...".to_string(),
                "document number 3...".to_string(),
            ]
        );
    }

    #[test]
    fn test_sources_below_floor_dropped() {
        let sources = top_sources(&[0.05, 0.051], &docs(2));
        assert_eq!(sources, vec!["document number 1...".to_string()]);
    }

    #[test]
    fn test_stats_empty() {
        let stats = SimilarityStats::from_similarities(&[]);
        assert_eq!(stats, SimilarityStats { max: 0.0, avg: 0.0 });
    }
}
