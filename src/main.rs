//! BedrockBuddy - Main CLI Entry Point

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::io::Write;

use bedrockbuddy::bedrock::BedrockClient;
use bedrockbuddy::chat::ChatSession;
use bedrockbuddy::cli::{Args, Commands};
use bedrockbuddy::config::Config;
use bedrockbuddy::rag::{Embedder, Generator, RagPipeline, TitanEmbedder, TitanGenerator};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut config = Config::load()?;
    if let Some(endpoint) = &args.endpoint {
        config.service.endpoint = endpoint.clone();
    }
    if let Some(timeout) = args.timeout {
        config.service.timeout_secs = timeout;
    }

    match args.command {
        Commands::Models { id } => {
            let client = BedrockClient::from_config(&config)?;
            match id {
                Some(model_id) => {
                    let model = client.get_foundation_model(&model_id).await?;
                    println!("{}", serde_json::to_string_pretty(&model)?);
                }
                None => {
                    let models = client.list_foundation_models().await?;
                    println!("{}", "Available models:".cyan());
                    for model in models {
                        println!("- {}", model.model_id);
                    }
                }
            }
        }

        Commands::Embed { text } => {
            let client = BedrockClient::from_config(&config)?;
            let embedder = TitanEmbedder::new(client, config.models.embedding.clone());
            let vector = embedder.embed(&text).await?;
            println!("{}", serde_json::to_string(&vector)?);
        }

        Commands::Generate { prompt } => {
            let client = BedrockClient::from_config(&config)?;
            let generator = TitanGenerator::new(client, config.models.text.clone());
            let output = generator.generate(&prompt).await?;
            println!("{}", output.trim());
        }

        Commands::Ask {
            document,
            query,
            chunk_size,
            top_k,
        } => {
            if let Some(chunk_size) = chunk_size {
                config.rag.chunk_size = chunk_size;
            }
            if let Some(top_k) = top_k {
                config.rag.top_k = top_k;
            }

            let document_text = std::fs::read_to_string(&document)?;
            let pipeline = RagPipeline::from_config(&config)?;
            let answer = pipeline.run(&document_text, &query).await?;

            println!("{} {}", "Question:".cyan(), query);
            println!("{} {}", "Answer:".green(), answer);
        }

        Commands::Chat => {
            let client = BedrockClient::from_config(&config)?;
            let generator = TitanGenerator::new(client, config.models.text.clone());
            let mut session = ChatSession::new(generator);

            println!("{}", "Chat started. Type 'exit' to quit.".cyan());
            let stdin = std::io::stdin();
            loop {
                print!("{} ", "User:".cyan());
                std::io::stdout().flush()?;

                let mut line = String::new();
                if stdin.read_line(&mut line)? == 0 {
                    break;
                }
                let input = line.trim();
                if input.eq_ignore_ascii_case("exit") {
                    break;
                }
                if input.is_empty() {
                    continue;
                }

                let reply = session.say(input).await?;
                println!("{} {}", "Assistant:".green(), reply);
            }
        }

        Commands::Config => {
            println!("{} {}", "Config file:".cyan(), Config::config_path()?.display());
            println!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
