use clap::Parser;

use crate::llm::LlmConfig;

pub const DEFAULT_CHAT_MODEL: &str = "openai/gpt-4-turbo";

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    // --- OpenRouter Args ---
    /// OpenRouter API key. Leave empty (or "your_key") to run in simulation mode.
    #[arg(long, env = "OPENROUTER_API_KEY", default_value = "", hide_env_values = true)]
    pub openrouter_api_key: String,

    /// Base URL for the OpenRouter API (default https://openrouter.ai/api/v1)
    #[arg(long, env = "OPENROUTER_BASE_URL")] // No default, let the client handle it if None
    pub openrouter_base_url: Option<String>,

    /// Model used when a chat request does not name one.
    #[arg(long, env = "DEFAULT_MODEL", default_value = DEFAULT_CHAT_MODEL)]
    pub default_model: String,

    // --- Server Args ---
    /// Host address for the HTTP API to listen on.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port for the HTTP API to listen on.
    #[arg(long, env = "PORT", default_value = "8000")]
    pub port: u16,

    /// Optional path to the TLS certificate file (PEM format) for enabling HTTPS. Requires --tls-key-path.
    #[arg(long, env = "TLS_CERT_PATH")]
    pub tls_cert_path: Option<String>,

    /// Optional path to the TLS private key file (PEM format) for enabling HTTPS. Requires --tls-cert-path.
    #[arg(long, env = "TLS_KEY_PATH")]
    pub tls_key_path: Option<String>,

    #[arg(long, env = "ENABLE_TLS", default_value = "false")]
    pub enable_tls: bool,
}

impl Args {
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn llm_config(&self) -> LlmConfig {
        let api_key = if !self.openrouter_api_key.is_empty() {
            Some(self.openrouter_api_key.clone())
        } else {
            None
        };
        LlmConfig {
            api_key,
            base_url: self.openrouter_base_url.clone(),
        }
    }

    pub fn tls_paths(&self) -> Option<(&str, &str)> {
        if !self.enable_tls {
            return None;
        }
        match (self.tls_cert_path.as_deref(), self.tls_key_path.as_deref()) {
            (Some(cert), Some(key)) => Some((cert, key)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_flags() {
        let args = Args::try_parse_from(["openrouter-chat", "--openrouter-api-key", ""]).unwrap();
        assert_eq!(args.port, 8000);
        assert_eq!(args.default_model, DEFAULT_CHAT_MODEL);
        assert!(args.tls_paths().is_none());
        assert!(args.llm_config().is_simulated());
    }

    #[test]
    fn key_and_base_url_flow_into_llm_config() {
        let args = Args::try_parse_from([
            "openrouter-chat",
            "--openrouter-api-key", "sk-or-v1-test",
            "--openrouter-base-url", "http://localhost:8080/api/v1",
            "--host", "127.0.0.1",
            "--port", "9000",
        ]).unwrap();
        let config = args.llm_config();
        assert_eq!(config.api_key.as_deref(), Some("sk-or-v1-test"));
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:8080/api/v1"));
        assert!(!config.is_simulated());
        assert_eq!(args.server_addr(), "127.0.0.1:9000");
    }

    #[test]
    fn tls_needs_both_paths() {
        let args = Args::try_parse_from([
            "openrouter-chat", "--enable-tls", "--tls-cert-path", "cert.pem",
        ]).unwrap();
        assert!(args.tls_paths().is_none());
    }
}
