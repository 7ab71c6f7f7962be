//! Tipos de erro do cliente remoto, do despachante e da configuração.

use thiserror::Error;

/// O cliente HTTP não pôde ser montado (TLS, timeout inválido).
#[derive(Debug, Error)]
#[error("failed to build HTTP client: {0}")]
pub struct ClientBuildError(#[from] reqwest::Error);

/// Falhas de uma única chamada ao servidor de análise.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// Servidor inacessível, conexão recusada, timeout, corpo interrompido.
    #[error("analysis server unreachable: {0}")]
    Transport(#[source] reqwest::Error),

    /// Resposta fora da faixa 2xx.
    #[error("analysis server rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// Resposta 2xx com corpo que não é um resultado de análise.
    #[error("invalid analysis response: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Falhas que chegam a quem pediu a análise. Falhas de transporte nunca
/// aparecem aqui: elas são resolvidas pelo fallback local.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("invalid response from analysis server: {0}")]
    InvalidResponse(String),

    #[error("local analysis task failed: {0}")]
    LocalTask(#[from] tokio::task::JoinError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid bind address {value:?}: {source}")]
    InvalidBind {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("invalid timeout {value:?}: {source}")]
    InvalidTimeout {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("invalid analysis endpoint {0:?}: must start with http:// or https://")]
    InvalidEndpoint(String),
}
