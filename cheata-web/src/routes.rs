//! Rotas HTTP do servidor de análise.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use cheata_core::demo::demo_texts;
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::client::Dispatcher;
use crate::error::DispatchError;

/// Tamanho mínimo (em caracteres, após trim) aceito por `/analyze`.
pub const MIN_TEXT_CHARS: usize = 10;
pub const TEXT_TOO_SHORT: &str = "Text must be at least 10 characters long";

/// Estado compartilhado da aplicação
pub struct AppState {
    pub dispatcher: Dispatcher,
}

#[derive(Deserialize)]
struct AnalyzeRequest {
    text: String,
}

/// Monta o roteador com CORS aberto (a extensão chama de qualquer origem).
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/analyze", post(analyze_handler))
        .route("/demo-texts", get(demo_texts_handler))
        .layer(cors)
        .with_state(state)
}

fn message(status: StatusCode, text: impl Into<String>) -> Response {
    (status, Json(serde_json::json!({ "message": text.into() }))).into_response()
}

impl IntoResponse for DispatchError {
    fn into_response(self) -> Response {
        let status = match self {
            DispatchError::Rejected { .. } | DispatchError::InvalidResponse(_) => StatusCode::BAD_GATEWAY,
            DispatchError::LocalTask(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        message(status, self.to_string())
    }
}

/// Informações do serviço
async fn index_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": "cheata",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Heuristic fake news detection API for the cheata browser extension",
    }))
}

async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Análise via HTTP POST
async fn analyze_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Response {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return message(rejection.status(), rejection.body_text()),
    };

    let chars = req.text.trim().chars().count();
    if chars < MIN_TEXT_CHARS {
        return message(StatusCode::BAD_REQUEST, TEXT_TOO_SHORT);
    }

    info!(chars, "analyzing text");

    match state.dispatcher.analyze(&req.text).await {
        Ok(dispatched) => {
            info!(
                source = ?dispatched.source,
                is_fake = dispatched.result.is_fake,
                confidence = dispatched.result.confidence,
                "analysis done"
            );
            Json(dispatched.result).into_response()
        }
        Err(err) => err.into_response(),
    }
}

/// Retorna textos de demonstração
async fn demo_texts_handler() -> impl IntoResponse {
    let texts: Vec<serde_json::Value> = demo_texts()
        .iter()
        .map(|(domain, text)| {
            serde_json::json!({
                "domain": domain,
                "text": text
            })
        })
        .collect();
    Json(texts)
}
