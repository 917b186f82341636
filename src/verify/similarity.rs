// TF-IDF vector space and cosine similarity between a claim and its evidence.
//
// A fresh space is fitted on every call from the claim plus all retrieved
// documents, so IDF reflects only the current evidence set. Nothing is
// cached between calls.
//
// Weighting:
//   tf(t, d)  = raw count of t in d
//   idf(t)    = ln((1 + n) / (1 + df(t))) + 1     (n = texts in the space)
//   w(t, d)   = tf * idf, then each vector is L2-normalised
//
// With unit vectors, cosine similarity is the dot product. A text that
// shares no vocabulary with the space has a zero vector and scores 0.
//
// Vectors are ordered by vocabulary index so every norm and dot product is
// summed in the same order; equal inputs give bit-identical scores.

use std::collections::{BTreeMap, HashMap, HashSet};

use thiserror::Error;

use super::keywords::StopwordSource;
use crate::evidence::EvidenceDocument;

/// Failures while fitting the vector space.
#[derive(Debug, Error, PartialEq)]
pub enum ScoringError {
    #[error("no documents to score against")]
    NoDocuments,
    #[error("empty vocabulary; perhaps the documents only contain stop words")]
    EmptyVocabulary,
}

/// Sparse term-weight vector keyed by vocabulary index.
type SparseVector = BTreeMap<usize, f64>;

/// Scores evidence documents against a claim.
#[derive(Debug, Clone)]
pub struct SimilarityScorer {
    stop_words: HashSet<String>,
}

impl Default for SimilarityScorer {
    fn default() -> Self {
        Self::new(&StopwordSource::Bundled)
    }
}

impl SimilarityScorer {
    pub fn new(stop_words: &StopwordSource) -> Self {
        Self {
            stop_words: stop_words.load(),
        }
    }

    /// Cosine similarity between the claim and each document, co-indexed
    /// with `documents`. Every value is in [0, 1].
    pub fn score(
        &self,
        claim: &str,
        documents: &[EvidenceDocument],
    ) -> Result<Vec<f64>, ScoringError> {
        if documents.is_empty() {
            return Err(ScoringError::NoDocuments);
        }

        let texts: Vec<&str> = std::iter::once(claim)
            .chain(documents.iter().map(|d| d.text.as_str()))
            .collect();

        let vectors = self.fit_transform(&texts)?;
        let (claim_vec, doc_vecs) = vectors.split_first().ok_or(ScoringError::NoDocuments)?;

        Ok(doc_vecs
            .iter()
            .map(|doc_vec| cosine(claim_vec, doc_vec))
            .collect())
    }

    /// Build the vocabulary over all texts and return one unit vector per text.
    fn fit_transform(&self, texts: &[&str]) -> Result<Vec<SparseVector>, ScoringError> {
        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut counts: Vec<SparseVector> = Vec::with_capacity(texts.len());

        for text in texts {
            let mut tf = SparseVector::new();
            for term in self.terms(text) {
                let next = vocabulary.len();
                let idx = *vocabulary.entry(term).or_insert(next);
                *tf.entry(idx).or_insert(0.0) += 1.0;
            }
            counts.push(tf);
        }

        if vocabulary.is_empty() {
            return Err(ScoringError::EmptyVocabulary);
        }

        let mut df = vec![0usize; vocabulary.len()];
        for tf in &counts {
            for &idx in tf.keys() {
                df[idx] += 1;
            }
        }

        let n = texts.len() as f64;
        let idf: Vec<f64> = df
            .iter()
            .map(|&d| ((1.0 + n) / (1.0 + d as f64)).ln() + 1.0)
            .collect();

        Ok(counts
            .into_iter()
            .map(|mut vec| {
                for (idx, weight) in vec.iter_mut() {
                    *weight *= idf[*idx];
                }
                normalize(&mut vec);
                vec
            })
            .collect())
    }

    /// Lowercased word tokens of two or more characters, stopwords removed.
    fn terms(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !(c.is_alphanumeric() || c == '_'))
            .filter(|t| t.chars().count() >= 2)
            .filter(|t| !self.stop_words.contains(*t))
            .map(str::to_string)
            .collect()
    }
}

fn normalize(vec: &mut SparseVector) {
    let norm = vec.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm > f64::EPSILON {
        for weight in vec.values_mut() {
            *weight /= norm;
        }
    }
}

/// Dot product of two unit vectors, clamped to [0, 1]. NaN becomes 0.
///
/// Summed over `claim` in index order, so every document is scored against
/// the claim the same way.
fn cosine(claim: &SparseVector, doc: &SparseVector) -> f64 {
    let dot: f64 = claim
        .iter()
        .filter_map(|(idx, w)| doc.get(idx).map(|v| w * v))
        .sum();

    if dot.is_finite() {
        dot.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
