// NewsAPI evidence source.
//
// Queries the /v2/everything endpoint for English articles sorted by
// relevancy and flattens each article's title, description, and content
// excerpt into a single document. No retries: a failed request degrades to
// an empty result.
//
// API docs: https://newsapi.org/docs/endpoints/everything

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, warn};

use super::traits::{EvidenceDocument, EvidenceSource, MAX_DOCUMENTS};

pub const DEFAULT_NEWS_API_URL: &str = "https://newsapi.org/v2/everything";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// NewsAPI-backed evidence source.
pub struct NewsApiSource {
    client: Client,
    base_url: String,
    api_key: String,
}

impl NewsApiSource {
    /// Create a source for the given endpoint. Every request is bounded by
    /// `timeout` so a stalled provider can't hang a verification.
    pub fn new(base_url: &str, api_key: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent("truthfort/0.1 (claim-verification)")
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
            api_key,
        })
    }

    /// The fallible request behind `fetch`.
    pub async fn try_fetch(&self, query: &str) -> Result<Vec<EvidenceDocument>> {
        let page_size = MAX_DOCUMENTS.to_string();

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("q", query),
                ("apiKey", self.api_key.as_str()),
                ("pageSize", page_size.as_str()),
                ("language", "en"),
                ("sortBy", "relevancy"),
            ])
            .send()
            .await
            .context("NewsAPI request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("NewsAPI returned {}: {}", status, body);
        }

        let parsed: EverythingResponse = response
            .json()
            .await
            .context("Failed to parse NewsAPI response")?;

        let documents = documents_from_articles(parsed.articles);
        info!(
            query = query,
            articles = documents.len(),
            "Retrieved news articles"
        );
        Ok(documents)
    }
}

#[async_trait]
impl EvidenceSource for NewsApiSource {
    async fn fetch(&self, query: &str) -> Vec<EvidenceDocument> {
        match self.try_fetch(query).await {
            Ok(documents) => documents,
            Err(e) => {
                warn!(query = query, error = %e, "Evidence fetch failed, treating as no evidence");
                Vec::new()
            }
        }
    }
}

/// Flatten articles into documents, dropping any with no text at all.
pub fn documents_from_articles(articles: Vec<Article>) -> Vec<EvidenceDocument> {
    let documents: Vec<EvidenceDocument> = articles
        .into_iter()
        .filter_map(|article| {
            let text = [article.title, article.description, article.content]
                .into_iter()
                .flatten()
                .map(|part| part.trim().to_string())
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join(" ");
            (!text.is_empty()).then(|| EvidenceDocument::from(text))
        })
        .take(MAX_DOCUMENTS)
        .collect();

    debug!(documents = documents.len(), "Flattened articles");
    documents
}

// --- NewsAPI response types ---

#[derive(Debug, Deserialize)]
struct EverythingResponse {
    #[serde(default)]
    articles: Vec<Article>,
}

/// One article from the `articles` array. Any field may be null.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Article {
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flattens_title_description_content() {
        let articles = vec![Article {
            title: Some("Eiffel Tower repainted".to_string()),
            description: Some(" Paris landmark gets a new coat ".to_string()),
            content: Some("Workers began on Monday".to_string()),
        }];
        let docs = documents_from_articles(articles);
        assert_eq!(
            docs[0].text,
            "Eiffel Tower repainted Paris landmark gets a new coat Workers began on Monday"
        );
    }

    #[test]
    fn test_null_fields_skipped_and_empty_articles_dropped() {
        let articles = vec![
            Article {
                title: Some("Only a title".to_string()),
                ..Default::default()
            },
            Article::default(),
            Article {
                title: Some("   ".to_string()),
                description: None,
                content: Some(String::new()),
            },
        ];
        let docs = documents_from_articles(articles);
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].text, "Only a title");
    }

    #[test]
    fn test_parses_provider_payload() {
        let body = r#"{
            "status": "ok",
            "totalResults": 2,
            "articles": [
                {"source": {"id": null, "name": "Wire"}, "title": "A", "description": null, "content": "B"},
                {"title": null, "description": "C", "content": null}
            ]
        }"#;
        let parsed: EverythingResponse = serde_json::from_str(body).unwrap();
        let docs = documents_from_articles(parsed.articles);
        assert_eq!(docs, vec![EvidenceDocument::from("A B"), EvidenceDocument::from("C")]);
    }

    #[tokio::test]
    async fn test_unreachable_provider_yields_no_evidence() {
        // Port 9 on localhost is the discard service; nothing listens in CI.
        let source = NewsApiSource::new(
            "http://127.0.0.1:9/v2/everything",
            "key".to_string(),
            Duration::from_secs(2),
        )
        .unwrap();
        assert!(source.fetch("eiffel tower").await.is_empty());
    }
}
