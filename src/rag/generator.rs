//! Context-grounded answer generation via the remote text endpoint
//!
//! Builds one prompt from the retrieved passages and the query, then
//! invokes the generation model with deterministic decoding (temperature
//! 0, no stop sequences).

use crate::bedrock::types::{GenerationRequest, GenerationResponse, TextGenerationConfig};
use crate::bedrock::BedrockClient;
use crate::errors::{RagError, Result};
use async_trait::async_trait;

/// Build the fixed answer prompt: instruction, context passages joined
/// by blank lines, then the query.
pub fn build_prompt(query: &str, context_passages: &[String]) -> String {
    let context_text = context_passages.join("\n\n");

    format!(
        "Answer the user's question based on the following context:\n\n\
         Context:\n{context_text}\n\n\
         Question: {query}\n\n\
         Answer:"
    )
}

/// Remote text generation
#[async_trait]
pub trait Generator: Send + Sync {
    /// Send one prompt to the generation endpoint and return its output
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Answer a query using only the given context passages
    async fn answer(&self, query: &str, context_passages: &[String]) -> Result<String> {
        let prompt = build_prompt(query, context_passages);
        let output = self.generate(&prompt).await?;
        Ok(output.trim().to_string())
    }
}

/// Generator backed by a Titan text model
pub struct TitanGenerator {
    client: BedrockClient,
    model_id: String,
    decoding: TextGenerationConfig,
}

impl TitanGenerator {
    pub fn new(client: BedrockClient, model_id: impl Into<String>) -> Self {
        Self {
            client,
            model_id: model_id.into(),
            decoding: TextGenerationConfig::default(),
        }
    }

    /// Override the decoding parameters
    pub fn with_decoding(mut self, decoding: TextGenerationConfig) -> Self {
        self.decoding = decoding;
        self
    }

    fn service_error(err: RagError) -> RagError {
        match err {
            RagError::Timeout { .. } => err,
            other => RagError::GenerationService(other.to_string()),
        }
    }
}

#[async_trait]
impl Generator for TitanGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let request = GenerationRequest {
            input_text: prompt.to_string(),
            text_generation_config: self.decoding.clone(),
        };

        let response: GenerationResponse = self
            .client
            .invoke_model(&self.model_id, &request)
            .await
            .map_err(Self::service_error)?;

        response
            .results
            .into_iter()
            .next()
            .and_then(|result| result.output_text)
            .ok_or_else(|| {
                RagError::GenerationService("response missing 'outputText' field".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_query_and_context() {
        let context = vec![
            "Don likes pizza.".to_string(),
            "The weather is nice.".to_string(),
        ];
        let prompt = build_prompt("What does Don like?", &context);

        assert!(prompt.contains("Context:"));
        assert!(prompt.contains("Don likes pizza."));
        assert!(prompt.contains("The weather is nice."));
        assert!(prompt.contains("Question: What does Don like?"));
        assert!(prompt.ends_with("Answer:"));
    }

    #[test]
    fn test_prompt_joins_passages_with_blank_line() {
        let context = vec!["one".to_string(), "two".to_string()];
        let prompt = build_prompt("q", &context);
        assert!(prompt.contains("one\n\ntwo"));
    }

    #[test]
    fn test_prompt_with_empty_context() {
        let prompt = build_prompt("q", &[]);
        assert!(prompt.contains("Context:\n\n"));
        assert!(prompt.contains("Question: q"));
    }

    struct EchoGenerator;

    #[async_trait]
    impl Generator for EchoGenerator {
        async fn generate(&self, prompt: &str) -> Result<String> {
            Ok(format!("  echo: {prompt}  "))
        }
    }

    #[tokio::test]
    async fn test_answer_trims_output() {
        let generator = EchoGenerator;
        let answer = generator
            .answer("q", &["ctx".to_string()])
            .await
            .unwrap();
        assert_eq!(answer, answer.trim());
        assert!(answer.contains("ctx"));
    }

    #[tokio::test]
    #[ignore] // Requires a running model service
    async fn test_generate_integration() {
        let client = BedrockClient::new("http://127.0.0.1:8000", 30).unwrap();
        let generator = TitanGenerator::new(client, "amazon.titan-text-express-v1");
        let output = generator.generate("Tell me a story about a dragon").await.unwrap();
        assert!(!output.is_empty());
    }
}
