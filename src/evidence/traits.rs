// Evidence source trait — the swap-ready abstraction.
//
// `fetch` is infallible: provider errors, timeouts, and malformed responses
// all come back as an empty set, so the engine sees "retrieval failed" and
// "nothing found" the same way.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Maximum number of documents a source returns for one query.
pub const MAX_DOCUMENTS: usize = 100;

/// A retrieved article flattened to text (title, description, and content
/// excerpt). It has no identity beyond its position in the retrieved set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceDocument {
    pub text: String,
}

impl From<String> for EvidenceDocument {
    fn from(text: String) -> Self {
        Self { text }
    }
}

impl From<&str> for EvidenceDocument {
    fn from(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

/// Trait for retrieving evidence documents for a search query. Async because
/// real providers are HTTP APIs.
#[async_trait]
pub trait EvidenceSource: Send + Sync {
    /// Fetch up to `MAX_DOCUMENTS` documents in the provider's relevance
    /// order. Returns an empty vector on any failure.
    async fn fetch(&self, query: &str) -> Vec<EvidenceDocument>;
}
