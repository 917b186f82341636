// Fixed evidence source — returns the same documents for every query.

use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;

use super::traits::{EvidenceDocument, EvidenceSource, MAX_DOCUMENTS};

/// Serves a frozen document set regardless of the query.
#[derive(Debug, Clone, Default)]
pub struct StaticEvidence {
    documents: Vec<EvidenceDocument>,
}

impl StaticEvidence {
    pub fn new<I, T>(documents: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<EvidenceDocument>,
    {
        Self {
            documents: documents.into_iter().map(Into::into).collect(),
        }
    }

    /// Load documents from a text file, one document per non-blank line.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read evidence file {}", path.display()))?;
        Ok(Self::new(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string),
        ))
    }
}

#[async_trait]
impl EvidenceSource for StaticEvidence {
    async fn fetch(&self, _query: &str) -> Vec<EvidenceDocument> {
        self.documents.iter().take(MAX_DOCUMENTS).cloned().collect()
    }
}
