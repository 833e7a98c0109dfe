//! Command-line argument parsing for BedrockBuddy
//!
//! Thin surface over the library: every subcommand maps to one library
//! call and prints its result.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// BedrockBuddy - Minimal RAG over a managed foundation-model service
#[derive(Parser, Debug)]
#[command(name = "bedrockbuddy")]
#[command(version)]
#[command(about = "List models, embed text, generate text, and answer questions over a document", long_about = None)]
pub struct Args {
    /// Service endpoint base URL (overrides config file)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Per-request timeout in seconds (overrides config file)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Subcommand
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the service's model catalog
    Models {
        /// Show details for one model instead of the full list
        #[arg(long)]
        id: Option<String>,
    },

    /// Print the embedding vector for a text
    Embed {
        /// Text to embed
        #[arg(value_name = "TEXT")]
        text: String,
    },

    /// One-shot text generation
    Generate {
        /// Prompt to send
        #[arg(value_name = "PROMPT")]
        prompt: String,
    },

    /// Answer a question over a plain-text document via the RAG pipeline
    Ask {
        /// Path to the document text file
        #[arg(value_name = "DOCUMENT")]
        document: PathBuf,

        /// Question to answer
        #[arg(value_name = "QUERY")]
        query: String,

        /// Soft character budget per passage
        #[arg(long)]
        chunk_size: Option<usize>,

        /// Number of passages fed to the generator
        #[arg(short = 'k', long)]
        top_k: Option<usize>,
    },

    /// Interactive multi-turn chat
    Chat,

    /// Display current configuration
    Config,
}
