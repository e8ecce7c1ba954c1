use clap::Parser;
use dotenv::dotenv;
use openrouter_chat::cli::Args;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    dotenv().ok();
    dotenv::from_filename("../.env").ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    openrouter_chat::run(args).await
}
