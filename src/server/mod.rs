pub mod api;

use crate::cli::Args;
use crate::llm::chat::ChatClient;
use self::api::AppState;
use std::error::Error;
use std::sync::Arc;

pub struct Server {
    client: Arc<dyn ChatClient>,
    args: Args,
}

impl Server {
    pub fn new(client: Arc<dyn ChatClient>, args: Args) -> Self {
        Self { client, args }
    }

    pub async fn run(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let state = AppState {
            client: self.client.clone(),
            default_model: self.args.default_model.clone(),
        };

        api::start_http_server(
            &self.args.server_addr(),
            state,
            self.args.tls_paths(),
        ).await
    }
}
