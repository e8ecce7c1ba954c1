use crate::llm::chat::ChatClient;
use crate::models::catalog::{find_model, AVAILABLE_MODELS};
use crate::models::chat::Message;
use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use axum::{
    routing::{get, post},
    Router,
    Json,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use log::{debug, info, error};

pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Deserialize)]
pub struct ModelChatRequest {
    #[serde(default)]
    pub messages: Vec<Message>,
    #[serde(default)]
    pub model: String,
}

#[derive(Serialize)]
struct ModelChatResponse {
    response: String,
    model: String,
    latency: String,
}

#[derive(Deserialize)]
pub struct TestModelRequest {
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub model: String,
}

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn ChatClient>,
    pub default_model: String,
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root_handler))
        .route("/api/models", get(list_models_handler))
        .route("/api/models/chat", post(model_chat_handler))
        .route("/api/models/test", post(test_model_handler))
        .layer(cors)
        .with_state(state)
}

pub async fn start_http_server(
    addr: &str,
    state: AppState,
    tls_paths: Option<(&str, &str)>,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let addr = addr.parse::<SocketAddr>()?;
    let app = create_router(state);

    if let Some((cert_path, key_path)) = tls_paths {
        let tls_config = axum_server::tls_rustls::RustlsConfig::from_pem_file(
            cert_path,
            key_path
        ).await?;

        info!("Starting HTTPS API server on: https://{}", addr);
        axum_server::bind_rustls(addr, tls_config)
            .serve(app.into_make_service())
            .await?;
    } else {
        let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
            error!("Failed to bind HTTP server to {}: {}. Try a different port.", addr, e);
            e
        })?;
        info!("Starting HTTP API server on: http://{}", addr);
        axum::serve(listener, app.into_make_service()).await?;
    }

    Ok(())
}

/// Renders like `1.5ms`, `2s` or `1m30.25s`, picking the largest unit below one second.
fn format_latency(elapsed: Duration) -> String {
    let nanos = elapsed.as_nanos();
    match nanos {
        0 => "0s".to_string(),
        1..=999 => format!("{}ns", nanos),
        1_000..=999_999 => format!("{}µs", decimal(nanos, 1_000)),
        1_000_000..=999_999_999 => format!("{}ms", decimal(nanos, 1_000_000)),
        _ => {
            let secs = elapsed.as_secs();
            let (hours, minutes) = (secs / 3600, secs % 3600 / 60);
            let seconds = decimal(nanos % 60_000_000_000, 1_000_000_000);
            if hours > 0 {
                format!("{}h{}m{}s", hours, minutes, seconds)
            } else if minutes > 0 {
                format!("{}m{}s", minutes, seconds)
            } else {
                format!("{}s", seconds)
            }
        }
    }
}

/// `value / unit` with the fraction's trailing zeros dropped.
fn decimal(value: u128, unit: u128) -> String {
    let (whole, frac) = (value / unit, value % unit);
    if frac == 0 {
        return whole.to_string();
    }
    let width = unit.to_string().len() - 1;
    let digits = format!("{:0width$}", frac, width = width);
    format!("{}.{}", whole, digits.trim_end_matches('0'))
}

fn invalid_body() -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": "Invalid request body" }))).into_response()
}

async fn root_handler() -> impl IntoResponse {
    Json(json!({
        "message": "OpenRouter Chat API",
        "version": API_VERSION,
        "status": "running",
    }))
}

async fn list_models_handler() -> impl IntoResponse {
    Json(json!({ "models": AVAILABLE_MODELS }))
}

async fn model_chat_handler(
    State(state): State<AppState>,
    payload: Result<Json<ModelChatRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(p) => p,
        Err(e) => {
            info!("Rejected chat request: {}", e);
            return invalid_body();
        }
    };

    let model = if req.model.is_empty() { state.default_model.clone() } else { req.model };
    if find_model(&model).is_none() {
        debug!("Model {} is not in the catalog, forwarding as-is", model);
    }

    let start = Instant::now();
    let result = state.client.chat(&req.messages, &model).await;
    let latency = format_latency(start.elapsed());

    match result {
        Ok(response) => {
            info!("Chat completed: model={}, latency={}", model, latency);
            (StatusCode::OK, Json(ModelChatResponse { response, model, latency })).into_response()
        }
        Err(e) => {
            error!("Chat failed: model={}, error={}", model, e);
            (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({
                "error": e.to_string(),
                "latency": latency,
            }))).into_response()
        }
    }
}

async fn test_model_handler(
    payload: Result<Json<TestModelRequest>, JsonRejection>,
) -> Response {
    let start = Instant::now();
    let Json(req) = match payload {
        Ok(p) => p,
        Err(_) => return invalid_body(),
    };
    let latency = format_latency(start.elapsed());

    Json(json!({
        "status": "success",
        "message": "Model is available",
        "provider": req.provider,
        "model": req.model,
        "latency": latency,
    })).into_response()
}
