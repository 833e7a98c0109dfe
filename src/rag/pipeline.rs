//! End-to-end RAG pipeline: chunk -> embed -> retrieve -> generate
//!
//! One query against one document. All state is scoped to a single run;
//! nothing persists between calls. Any component failure aborts the run
//! and propagates unmodified.

use crate::config::Config;
use crate::bedrock::BedrockClient;
use crate::errors::{RagError, Result};
use crate::rag::chunker::{self, Passage};
use crate::rag::embedder::{Embedder, TitanEmbedder};
use crate::rag::generator::{Generator, TitanGenerator};
use crate::rag::retriever;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Passages from one document plus their embedding vectors
///
/// Invariant: `passages` and `vectors` have equal length and matching
/// index correspondence (`passages[i]` embeds to `vectors[i]`). Built
/// once per document load, held for one pipeline run only.
#[derive(Debug, Clone)]
pub struct DocumentCorpus {
    pub passages: Vec<Passage>,
    pub vectors: Vec<Vec<f32>>,
}

impl DocumentCorpus {
    /// Pair passages with their vectors, enforcing the length invariant.
    ///
    /// A count mismatch means the embedding stage dropped or invented a
    /// vector, so it surfaces as an embedding-service failure.
    pub fn new(passages: Vec<Passage>, vectors: Vec<Vec<f32>>) -> Result<Self> {
        if passages.len() != vectors.len() {
            return Err(RagError::EmbeddingService(format!(
                "got {} vectors for {} passages",
                vectors.len(),
                passages.len()
            )));
        }
        Ok(Self { passages, vectors })
    }

    pub fn len(&self) -> usize {
        self.passages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passages.is_empty()
    }
}

/// Pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Soft character budget per passage
    pub chunk_size: usize,
    /// Number of passages fed to the generator
    pub top_k: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            chunk_size: 200,
            top_k: 2,
        }
    }
}

/// End-to-end RAG pipeline over pluggable embedder and generator
pub struct RagPipeline<E, G> {
    embedder: E,
    generator: G,
    config: PipelineConfig,
}

impl RagPipeline<TitanEmbedder, TitanGenerator> {
    /// Wire up the pipeline against a live service from loaded config
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = BedrockClient::from_config(config)?;

        let embedder = TitanEmbedder::new(client.clone(), config.models.embedding.clone())
            .with_concurrency(config.rag.embed_concurrency);
        let generator = TitanGenerator::new(client, config.models.text.clone());

        Ok(Self::with_config(
            embedder,
            generator,
            PipelineConfig {
                chunk_size: config.rag.chunk_size,
                top_k: config.rag.top_k,
            },
        ))
    }
}

impl<E: Embedder, G: Generator> RagPipeline<E, G> {
    /// Create a pipeline with default configuration
    pub fn new(embedder: E, generator: G) -> Self {
        Self::with_config(embedder, generator, PipelineConfig::default())
    }

    /// Create with custom configuration
    pub fn with_config(embedder: E, generator: G, config: PipelineConfig) -> Self {
        Self {
            embedder,
            generator,
            config,
        }
    }

    /// Run one query against one document and return the answer text.
    ///
    /// Stages run strictly in order: chunk the document, embed all chunks,
    /// embed the query, rank passages by cosine similarity, generate the
    /// answer from the top matches.
    pub async fn run(&self, document_text: &str, query: &str) -> Result<String> {
        let passages = chunker::split(document_text, self.config.chunk_size);
        debug!(passages = passages.len(), "chunked document");

        let texts: Vec<String> = passages.iter().map(|p| p.text.clone()).collect();
        let vectors = self.embedder.embed_batch(&texts).await?;
        let corpus = DocumentCorpus::new(passages, vectors)?;

        let query_vector = self.embedder.embed(query).await?;

        let ranked = retriever::top_k(&query_vector, &corpus, self.config.top_k)?;
        debug!(retrieved = ranked.len(), "ranked passages");

        let context: Vec<String> = ranked.into_iter().map(|r| r.passage.text).collect();
        self.generator.answer(query, &context).await
    }

    /// Get current configuration
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_config_default() {
        let config = PipelineConfig::default();
        assert_eq!(config.chunk_size, 200);
        assert_eq!(config.top_k, 2);
    }

    #[test]
    fn test_corpus_length_invariant_holds() {
        let corpus = DocumentCorpus::new(
            vec![Passage::new("a"), Passage::new("b")],
            vec![vec![1.0], vec![2.0]],
        )
        .unwrap();
        assert_eq!(corpus.len(), 2);
        assert!(!corpus.is_empty());
    }

    #[test]
    fn test_corpus_rejects_count_mismatch() {
        let err = DocumentCorpus::new(
            vec![Passage::new("a"), Passage::new("b")],
            vec![vec![1.0]],
        )
        .unwrap_err();
        assert!(matches!(err, RagError::EmbeddingService(_)));
    }

    #[test]
    fn test_empty_corpus() {
        let corpus = DocumentCorpus::new(Vec::new(), Vec::new()).unwrap();
        assert!(corpus.is_empty());
    }
}
