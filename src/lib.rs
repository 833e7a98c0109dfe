//! BedrockBuddy - Minimal RAG over a managed foundation-model service
//!
//! A small toolkit for talking to a Bedrock-style foundation-model HTTP
//! service: listing the model catalog, generating embeddings, generating
//! text, and running a retrieval-augmented generation (RAG) pipeline over
//! a single document.
//!
//! # Architecture
//!
//! - `bedrock`: low-level HTTP client + wire types for the service
//! - `rag`: chunk -> embed -> retrieve -> generate pipeline
//! - `chat`: caller-owned conversation history for multi-turn generation

pub mod errors;
pub mod config;
pub mod bedrock;
pub mod rag;
pub mod chat;
pub mod cli;

// Re-export commonly used types
pub use errors::{RagError, Result};
