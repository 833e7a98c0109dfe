//! Brute-force top-k retrieval by cosine similarity
//!
//! The corpus is an in-memory list; ranking is an exhaustive scan. The
//! `top_k` contract would survive a swap to a real vector index if scale
//! ever demanded one.

use crate::errors::{RagError, Result};
use crate::rag::chunker::Passage;
use crate::rag::pipeline::DocumentCorpus;
use serde::{Deserialize, Serialize};

/// A passage paired with its similarity score for one query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedResult {
    /// Position of the passage in the original corpus
    pub index: usize,
    pub passage: Passage,
    pub score: f32,
}

/// Cosine similarity between two vectors: dot(a,b) / (|a| * |b|)
///
/// Fails with `DimensionMismatch` on unequal lengths. A zero-magnitude
/// vector scores 0.0 so ranking stays total and deterministic.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.len() != b.len() {
        return Err(RagError::DimensionMismatch {
            expected: a.len(),
            found: b.len(),
        });
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    Ok(dot / (norm_a * norm_b))
}

/// Rank every corpus passage against the query vector and return the
/// `k` highest-scoring, sorted descending with ties kept in original
/// corpus order.
///
/// `k == 0` returns an empty list; `k` past the corpus size returns the
/// whole corpus sorted. Any vector whose length differs from the query's
/// fails the call with `DimensionMismatch`.
pub fn top_k(query_vector: &[f32], corpus: &DocumentCorpus, k: usize) -> Result<Vec<RankedResult>> {
    if k == 0 {
        return Ok(Vec::new());
    }

    let mut results = Vec::with_capacity(corpus.len());
    for (index, (passage, vector)) in corpus.passages.iter().zip(corpus.vectors.iter()).enumerate()
    {
        let score = cosine_similarity(query_vector, vector)?;
        results.push(RankedResult {
            index,
            passage: passage.clone(),
            score,
        });
    }

    // Stable sort keeps equal scores in original passage order.
    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    results.truncate(k);

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(passages: Vec<&str>, vectors: Vec<Vec<f32>>) -> DocumentCorpus {
        let passages = passages.into_iter().map(Passage::new).collect();
        DocumentCorpus::new(passages, vectors).unwrap()
    }

    #[test]
    fn test_cosine_self_similarity_is_one() {
        let v = vec![0.3, -1.2, 4.5, 0.01];
        let sim = cosine_similarity(&v, &v).unwrap();
        assert!((sim - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_is_symmetric() {
        let a = vec![1.0, 2.0, 3.0];
        let b = vec![-2.0, 0.5, 1.0];
        let ab = cosine_similarity(&a, &b).unwrap();
        let ba = cosine_similarity(&b, &a).unwrap();
        assert_eq!(ab, ba);
    }

    #[test]
    fn test_cosine_orthogonal_is_zero() {
        let a = vec![1.0, 0.0];
        let b = vec![0.0, 1.0];
        let sim = cosine_similarity(&a, &b).unwrap();
        assert!(sim.abs() < 1e-6);
    }

    #[test]
    fn test_cosine_zero_vector_scores_zero() {
        let a = vec![0.0, 0.0, 0.0];
        let b = vec![1.0, 2.0, 3.0];
        assert_eq!(cosine_similarity(&a, &b).unwrap(), 0.0);
    }

    #[test]
    fn test_cosine_dimension_mismatch() {
        let a = vec![1.0, 2.0];
        let b = vec![1.0, 2.0, 3.0];
        let err = cosine_similarity(&a, &b).unwrap_err();
        assert!(matches!(
            err,
            RagError::DimensionMismatch {
                expected: 2,
                found: 3
            }
        ));
    }

    #[test]
    fn test_top_k_ranks_descending() {
        let corpus = corpus(
            vec!["north", "east", "diagonal"],
            vec![
                vec![0.0, 1.0],
                vec![1.0, 0.0],
                vec![1.0, 1.0],
            ],
        );
        let query = vec![1.0, 0.0];

        let results = top_k(&query, &corpus, 3).unwrap();

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].passage.text, "east");
        assert_eq!(results[1].passage.text, "diagonal");
        assert_eq!(results[2].passage.text, "north");
        assert!(results[0].score >= results[1].score);
        assert!(results[1].score >= results[2].score);
    }

    #[test]
    fn test_top_k_truncates_to_k() {
        let corpus = corpus(
            vec!["a", "b", "c"],
            vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![1.0, 1.0]],
        );
        let results = top_k(&[1.0, 0.0], &corpus, 1).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].passage.text, "a");
    }

    #[test]
    fn test_top_k_zero_is_empty_not_error() {
        let corpus = corpus(vec!["a"], vec![vec![1.0, 0.0]]);
        let results = top_k(&[1.0, 0.0], &corpus, 0).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_top_k_beyond_corpus_returns_all() {
        let corpus = corpus(vec!["a", "b"], vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
        let results = top_k(&[1.0, 0.0], &corpus, 50).unwrap();
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_top_k_tie_break_keeps_corpus_order() {
        // Identical vectors tie exactly; stable sort must keep 0 before 1.
        let corpus = corpus(
            vec!["first", "second"],
            vec![vec![1.0, 1.0], vec![1.0, 1.0]],
        );
        let results = top_k(&[1.0, 1.0], &corpus, 2).unwrap();
        assert_eq!(results[0].index, 0);
        assert_eq!(results[1].index, 1);
    }

    #[test]
    fn test_top_k_dimension_mismatch_fails() {
        let corpus = corpus(vec!["a", "b"], vec![vec![1.0, 0.0], vec![1.0, 0.0, 0.0]]);
        let err = top_k(&[1.0, 0.0], &corpus, 2).unwrap_err();
        assert!(matches!(err, RagError::DimensionMismatch { .. }));
    }
}
