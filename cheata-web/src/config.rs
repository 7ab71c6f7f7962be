//! Configuração do servidor via variáveis de ambiente.
//!
//! | Variável              | Padrão          | Uso                                      |
//! |-----------------------|-----------------|------------------------------------------|
//! | `CHEATA_BIND`         | `0.0.0.0:3000`  | Endereço de escuta                       |
//! | `CHEATA_API_URL`      | (nenhum)        | Endpoint remoto; sem ele, só análise local |
//! | `CHEATA_TIMEOUT_SECS` | (nenhum)        | Timeout da chamada remota                |

use std::net::SocketAddr;
use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_BIND: &str = "0.0.0.0:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebConfig {
    pub bind_addr: SocketAddr,
    /// Endpoint completo de análise (ex: `http://localhost:8000/analyze`).
    pub api_url: Option<String>,
    /// `None` mantém o timeout padrão do transporte.
    pub timeout: Option<Duration>,
}

impl WebConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Monta a configuração a partir de uma função de busca, para testes
    /// não dependerem do ambiente do processo.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bind = non_empty("CHEATA_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind_addr = bind
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidBind { value: bind.clone(), source })?;

        let api_url = match non_empty("CHEATA_API_URL") {
            Some(url) if url.starts_with("http://") || url.starts_with("https://") => Some(url),
            Some(url) => return Err(ConfigError::InvalidEndpoint(url)),
            None => None,
        };

        let timeout = match non_empty("CHEATA_TIMEOUT_SECS") {
            Some(value) => {
                let secs = value
                    .parse::<u64>()
                    .map_err(|source| ConfigError::InvalidTimeout { value: value.clone(), source })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self { bind_addr, api_url, timeout })
    }
}
