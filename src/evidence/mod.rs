// Evidence retrieval — trait-based abstraction over the news search provider.
//
// The EvidenceSource trait defines the interface. NewsApiSource implements it
// against NewsAPI's /v2/everything endpoint; StaticEvidence serves a fixed
// document set for offline runs and tests.

pub mod fixed;
pub mod newsapi;
pub mod traits;

pub use traits::{EvidenceDocument, EvidenceSource};
