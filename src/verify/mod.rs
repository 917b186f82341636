// Claim verification — keyword extraction, evidence retrieval, TF-IDF
// similarity, and verdict classification, run in sequence for each claim.
//
// The engine holds no per-call state: every `verify` fits its own vector
// space and builds its own result, so one engine can be shared across
// concurrent callers without locking.

pub mod keywords;
pub mod result;
pub mod similarity;
pub mod verdict;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::{info, warn};

use crate::config::Config;
use crate::evidence::newsapi::NewsApiSource;
use crate::evidence::EvidenceSource;

pub use keywords::{KeywordExtractor, StopwordSource};
pub use result::{Verdict, VerificationResult};
pub use similarity::{ScoringError, SimilarityScorer};

pub const NO_KEYWORDS_REASON: &str = "Unable to extract keywords from the statement.";
pub const NO_EVIDENCE_REASON: &str = "No relevant news articles found to verify this statement. \
                                      Try rephrasing or checking the topic.";

/// Verifies claims against an evidence source.
pub struct ClaimVerificationEngine {
    extractor: KeywordExtractor,
    scorer: SimilarityScorer,
    source: Arc<dyn EvidenceSource>,
}

impl ClaimVerificationEngine {
    /// Engine with the bundled English stopwords for both extraction and scoring.
    pub fn new(source: Arc<dyn EvidenceSource>) -> Self {
        Self::with_extractor(source, KeywordExtractor::default())
    }

    pub fn with_extractor(source: Arc<dyn EvidenceSource>, extractor: KeywordExtractor) -> Self {
        Self {
            extractor,
            scorer: SimilarityScorer::default(),
            source,
        }
    }

    /// Engine backed by NewsAPI, configured from the environment.
    pub fn from_config(config: &Config) -> Result<Self> {
        let source = NewsApiSource::new(
            &config.news_api_url,
            config.news_api_key.clone(),
            Duration::from_secs(config.fetch_timeout_secs),
        )?;
        let extractor = KeywordExtractor::new(&config.stopword_source());
        Ok(Self::with_extractor(Arc::new(source), extractor))
    }

    /// Verify a claim. Never fails: every path ends in a well-formed result.
    pub async fn verify(&self, claim: &str) -> VerificationResult {
        let query = self.extractor.extract(claim);
        if query.is_empty() {
            info!(claim = claim, "No keywords extracted");
            return VerificationResult::empty(claim, Verdict::Inconclusive, NO_KEYWORDS_REASON);
        }

        let documents = self.source.fetch(&query).await;
        if documents.is_empty() {
            info!(query = %query, "No evidence retrieved");
            return VerificationResult::empty(claim, Verdict::Inconclusive, NO_EVIDENCE_REASON);
        }

        let similarities = match self.scorer.score(claim, &documents) {
            Ok(similarities) => similarities,
            Err(e) => {
                warn!(claim = claim, error = %e, "Similarity scoring failed");
                return VerificationResult::empty(
                    claim,
                    Verdict::Error,
                    format!("Error processing statement: {e}"),
                );
            }
        };

        let classification = verdict::classify(&similarities, &documents);

        info!(
            query = %query,
            articles = documents.len(),
            verdict = %classification.verdict,
            confidence = classification.confidence,
            "Verified claim"
        );

        VerificationResult {
            statement: claim.to_string(),
            verdict: classification.verdict,
            confidence: classification.confidence,
            reason: classification.reason,
            sources: classification.sources,
            articles_analyzed: documents.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evidence::fixed::StaticEvidence;

    #[tokio::test]
    async fn test_stopword_only_claim_is_inconclusive() {
        let engine = ClaimVerificationEngine::new(Arc::new(StaticEvidence::new(["irrelevant"])));
        let result = engine.verify("Is it?").await;
        assert_eq!(result.verdict, Verdict::Inconclusive);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.reason, NO_KEYWORDS_REASON);
        assert!(result.sources.is_empty());
        assert_eq!(result.articles_analyzed, 0);
    }

    #[tokio::test]
    async fn test_no_documents_is_inconclusive() {
        let engine = ClaimVerificationEngine::new(Arc::new(StaticEvidence::default()));
        let result = engine.verify("Mars colony founded").await;
        assert_eq!(result.verdict, Verdict::Inconclusive);
        assert_eq!(result.reason, NO_EVIDENCE_REASON);
        assert_eq!(result.articles_analyzed, 0);
    }

    #[tokio::test]
    async fn test_scoring_failure_becomes_error_verdict() {
        // Claim keywords survive extraction under the whitespace tier, but
        // every term is a single character or stopword to the vectorizer.
        let engine = ClaimVerificationEngine::with_extractor(
            Arc::new(StaticEvidence::new(["a b c", "the of"])),
            KeywordExtractor::fallback(),
        );
        let result = engine.verify("x y z").await;
        assert_eq!(result.verdict, Verdict::Error);
        assert_eq!(result.confidence, 0.0);
        assert!(result.reason.starts_with("Error processing statement: empty vocabulary"));
        assert_eq!(result.articles_analyzed, 0);
    }
}
