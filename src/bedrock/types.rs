//! Wire types for the foundation-model service
//!
//! Field names follow the provider's JSON schema (camelCase), hence the
//! serde renames.

use serde::{Deserialize, Serialize};

/// Entry in the service's model catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelSummary {
    /// Model identifier (e.g., "amazon.titan-text-express-v1")
    pub model_id: String,

    /// Human-readable model name
    #[serde(default)]
    pub model_name: Option<String>,

    /// Provider name (e.g., "Amazon", "Meta")
    #[serde(default)]
    pub provider_name: Option<String>,

    /// Modalities the model accepts (e.g., ["TEXT"])
    #[serde(default)]
    pub input_modalities: Vec<String>,

    /// Modalities the model produces
    #[serde(default)]
    pub output_modalities: Vec<String>,
}

/// Response from the model catalog endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelCatalogResponse {
    pub model_summaries: Vec<ModelSummary>,
}

/// Request body for the embedding models
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddingRequest {
    pub input_text: String,
}

/// Response body from the embedding models
///
/// `embedding` is optional on the wire; a missing field is an
/// `EmbeddingService` error, never an empty vector.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddingResponse {
    #[serde(default)]
    pub embedding: Option<Vec<f32>>,
}

/// Decoding parameters for text generation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextGenerationConfig {
    pub max_token_count: u32,
    pub stop_sequences: Vec<String>,
    pub temperature: f32,
    pub top_p: f32,
}

impl Default for TextGenerationConfig {
    /// Deterministic decoding with a generous output budget
    fn default() -> Self {
        Self {
            max_token_count: 4096,
            stop_sequences: Vec::new(),
            temperature: 0.0,
            top_p: 1.0,
        }
    }
}

/// Request body for the text-generation models
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub input_text: String,
    pub text_generation_config: TextGenerationConfig,
}

/// One generation result
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    #[serde(default)]
    pub output_text: Option<String>,
}

/// Response body from the text-generation models
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResponse {
    #[serde(default)]
    pub results: Vec<GenerationResult>,
}
