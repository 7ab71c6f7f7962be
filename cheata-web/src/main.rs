//! Servidor Axum que expõe o analisador para a extensão do navegador

use std::sync::Arc;

use cheata_web::{router, AppState, Dispatcher, RemoteClient, WebConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = WebConfig::from_env()?;

    let remote = match &config.api_url {
        Some(url) => {
            info!(endpoint = %url, "remote analysis enabled, local patterns as fallback");
            Some(RemoteClient::new(url.clone(), config.timeout)?)
        }
        None => {
            info!("no CHEATA_API_URL set, using local pattern analysis only");
            None
        }
    };

    let state = Arc::new(AppState {
        dispatcher: Dispatcher::new(remote),
    });
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("🚀 Servidor cheata iniciado em http://{}", config.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
