//! Forgeyard REST Server - HTTP backend for manufacturer matching.
//!
//! This binary provides a REST API over the forgeyard-core library: catalog
//! management, manufacturer matching and ranking, and LLM-backed production
//! planning.

mod handlers;
mod response;
mod server;

use anyhow::Result;
use clap::Parser;
use forgeyard_core::{load_seed, ForgeyardApi, LlmConfig, MemoryStore};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "forgeyard-server")]
#[command(about = "REST server for manufacturer matching and production planning")]
struct Args {
    /// Port to listen on (0 = auto-assign)
    #[arg(short, long, default_value = "8000")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Base URL of the OpenAI-compatible chat service
    #[arg(long)]
    llm_base_url: Option<String>,

    /// Chat model to request
    #[arg(long)]
    llm_model: Option<String>,

    /// JSON file of manufacturers to load into the catalog at startup
    #[arg(long)]
    seed: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();

    info!("Starting Forgeyard server");

    // Assemble the chat service configuration
    let mut llm_config = LlmConfig {
        api_key: std::env::var("OPENAI_API_KEY").ok(),
        ..LlmConfig::default()
    };
    if let Some(base_url) = args.llm_base_url {
        llm_config.base_url = base_url;
    }
    if let Some(model) = args.llm_model {
        llm_config.model = model;
    }
    if llm_config.api_key.is_none() {
        warn!("OPENAI_API_KEY is not set; chat requests will be unauthenticated");
    }

    // Create the store and optionally seed it
    let store = Arc::new(MemoryStore::new());
    if let Some(path) = &args.seed {
        let records = load_seed(store.as_ref(), path).await?;
        info!(
            "Seeded the catalog with {} manufacturers from {}",
            records.len(),
            path.display()
        );
    }

    // Create the API instance
    let api = ForgeyardApi::builder()
        .with_store(store)
        .with_llm_config(llm_config)
        .build();

    // Start the server
    let addr = server::start_server(api, &args.host, args.port).await?;

    info!("Forgeyard server running on {}", addr);

    // Wait for shutdown signal
    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received, exiting");

    Ok(())
}
