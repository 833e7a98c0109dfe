//! HTTP client and wire types for the foundation-model service
//!
//! The service speaks a Bedrock-runtime-shaped JSON API: model invocation
//! at `POST /model/{modelId}/invoke` and the model catalog at
//! `GET /foundation-models`. The wire schema is owned by the provider;
//! everything here treats it as JSON-in/JSON-out.

pub mod client;
pub mod types;

pub use client::BedrockClient;
pub use types::{
    EmbeddingRequest, EmbeddingResponse, GenerationRequest, GenerationResponse, ModelSummary,
    TextGenerationConfig,
};
