//! Maps text to fixed-length embedding vectors via the remote service
//!
//! Each call is an independent remote request. Batch embedding may run
//! several requests in flight at once, but the returned vectors always
//! keep the index correspondence of their input texts.

use crate::bedrock::types::{EmbeddingRequest, EmbeddingResponse};
use crate::bedrock::BedrockClient;
use crate::errors::{RagError, Result};
use async_trait::async_trait;
use futures_util::stream::{self, StreamExt, TryStreamExt};

/// Text-to-vector embedding over a remote endpoint
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Embed a single text
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Embed many texts, one vector per input in the same order
    ///
    /// The default implementation issues one sequential request per text.
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        let mut vectors = Vec::with_capacity(texts.len());
        for text in texts {
            vectors.push(self.embed(text).await?);
        }
        Ok(vectors)
    }
}

/// Embed texts with up to `concurrency` requests in flight.
///
/// `buffered()` polls several futures at once but yields results in input
/// order, so vectors stay index-matched to texts no matter which requests
/// finish first.
pub async fn embed_batch_buffered<E>(
    embedder: &E,
    texts: &[String],
    concurrency: usize,
) -> Result<Vec<Vec<f32>>>
where
    E: Embedder + ?Sized,
{
    if texts.is_empty() {
        return Ok(Vec::new());
    }

    let futures: Vec<_> = texts.iter().map(|text| embedder.embed(text)).collect();
    stream::iter(futures)
        .buffered(concurrency.max(1))
        .try_collect()
        .await
}

/// Embedder backed by a Titan embedding model
pub struct TitanEmbedder {
    client: BedrockClient,
    model_id: String,
    concurrency: usize,
}

impl TitanEmbedder {
    pub fn new(client: BedrockClient, model_id: impl Into<String>) -> Self {
        Self {
            client,
            model_id: model_id.into(),
            concurrency: 4,
        }
    }

    /// Set the number of concurrent in-flight batch requests
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Keep timeouts as timeouts; everything else is an embedding-service
    /// failure from the caller's point of view.
    fn service_error(err: RagError) -> RagError {
        match err {
            RagError::Timeout { .. } => err,
            other => RagError::EmbeddingService(other.to_string()),
        }
    }
}

#[async_trait]
impl Embedder for TitanEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let request = EmbeddingRequest {
            input_text: text.to_string(),
        };

        let response: EmbeddingResponse = self
            .client
            .invoke_model(&self.model_id, &request)
            .await
            .map_err(Self::service_error)?;

        response.embedding.ok_or_else(|| {
            RagError::EmbeddingService("response missing 'embedding' field".to_string())
        })
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        embed_batch_buffered(self, texts, self.concurrency).await
    }
}
