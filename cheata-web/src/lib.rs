//! # cheata-web — Servidor HTTP e Cliente Remoto
//!
//! - [`client`]: chamada ao servidor de análise remoto com fallback local.
//! - [`routes`]: API HTTP (`/analyze`, `/demo-texts`, ...) usada pela extensão.
//! - [`config`]: configuração por variáveis de ambiente.

pub mod client;
pub mod config;
pub mod error;
pub mod routes;

pub use client::{AnalysisSource, Dispatched, Dispatcher, RemoteClient};
pub use config::WebConfig;
pub use error::{ClientBuildError, ConfigError, DispatchError, RemoteError};
pub use routes::{router, AppState};
