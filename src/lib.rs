pub mod cli;
pub mod llm;
pub mod models;
pub mod server;

use cli::Args;
use llm::chat::new_client as new_chat_client;
use log::{info, warn};
use server::Server;
use std::error::Error;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    let llm_config = args.llm_config();

    info!("--- Core Configuration ---");
    info!("Server Address: {}", args.server_addr());
    info!("OpenRouter Base URL: {}", args.openrouter_base_url.as_deref().unwrap_or("client default"));
    info!("Default Model: {}", args.default_model);
    info!("TLS Enabled: {}", args.tls_paths().is_some());

    let client = new_chat_client(&llm_config)?;
    if client.is_simulated() {
        warn!("OpenRouter API Key: not configured (simulation mode)");
    } else {
        info!("OpenRouter API Key: configured");
    }
    info!("-------------------------");

    let server = Server::new(client, args);
    server.run().await?;

    Ok(())
}
