//! # Cliente Remoto e Despachante com Fallback Local
//!
//! Fluxo de uma análise:
//!
//! ```text
//! Idle → Requesting ─┬─ 2xx ──────────────────────────────→ Succeeded (Remote)
//!                    ├─ falha de transporte → LocalFallback → Succeeded (LocalFallback)
//!                    └─ não-2xx ────────────────────────────→ Failed (Rejected)
//! ```
//!
//! Uma única tentativa, sem retry. O fallback local usa o mesmo
//! [`AnalysisPipeline`] do `cheata-core`, então o resultado é determinístico.

use std::sync::Arc;
use std::time::Duration;

use cheata_core::{AnalysisPipeline, AnalysisResult, Segment};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ClientBuildError, DispatchError, RemoteError};

/// Mensagem usada quando o servidor recusa sem dizer o motivo.
pub const GENERIC_FAILURE: &str = "Failed to analyze text";

#[derive(Serialize)]
struct AnalyzeRequest<'a> {
    text: &'a str,
}

/// Corpo de sucesso do servidor remoto.
///
/// O backend original devolve apenas `isFake`, `confidence` (às vezes
/// fracionária) e `explanation`; o resto é opcional.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoteAnalysis {
    is_fake: bool,
    confidence: f64,
    explanation: String,
    #[serde(default)]
    evidences: Vec<String>,
    #[serde(default)]
    analyzed_text: Option<String>,
    #[serde(default)]
    suspicious_segments: Vec<Segment>,
}

impl RemoteAnalysis {
    fn into_result(self, text: &str) -> AnalysisResult {
        let confidence = if self.confidence.is_finite() {
            self.confidence.round().clamp(0.0, 100.0) as u8
        } else {
            0
        };
        let analyzed_text = self.analyzed_text.unwrap_or_else(|| text.to_string());

        // Trechos vazios ou fora do texto não têm como ser destacados.
        let mut segments: Vec<Segment> = self
            .suspicious_segments
            .into_iter()
            .filter(|s| s.text_in(&analyzed_text).is_some())
            .collect();
        segments.sort_by_key(|s| s.start);

        AnalysisResult {
            is_fake: self.is_fake,
            confidence,
            explanation: self.explanation,
            evidences: self.evidences,
            analyzed_text,
            suspicious_segments: segments,
        }
    }
}

/// Corpo de erro. `message` é o campo esperado; FastAPI usa `detail`.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    detail: Option<serde_json::Value>,
}

impl ErrorBody {
    fn into_message(self) -> Option<String> {
        self.message
            .or_else(|| self.detail.and_then(|d| d.as_str().map(str::to_string)))
            .filter(|m| !m.trim().is_empty())
    }
}

/// Cliente HTTP para o endpoint de análise remoto.
#[derive(Debug, Clone)]
pub struct RemoteClient {
    http: reqwest::Client,
    endpoint: String,
}

impl RemoteClient {
    /// `timeout = None` mantém o padrão do transporte.
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self, ClientBuildError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST `{ "text": ... }` e decodifica o resultado.
    pub async fn analyze(&self, text: &str) -> Result<AnalysisResult, RemoteError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&AnalyzeRequest { text })
            .send()
            .await
            .map_err(RemoteError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(ErrorBody::into_message)
                .unwrap_or_else(|| GENERIC_FAILURE.to_string());
            return Err(RemoteError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        // Uma queda no meio do corpo ainda é falha de transporte.
        let bytes = response.bytes().await.map_err(RemoteError::Transport)?;
        let body: RemoteAnalysis = serde_json::from_slice(&bytes).map_err(RemoteError::Decode)?;
        Ok(body.into_result(text))
    }
}

/// Quem produziu o resultado.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisSource {
    /// Servidor remoto respondeu.
    Remote,
    /// Servidor inacessível; pipeline local assumiu.
    LocalFallback,
    /// Nenhum servidor configurado.
    Local,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatched {
    pub source: AnalysisSource,
    pub result: AnalysisResult,
}

/// Tenta o servidor remoto e cai para o pipeline local em falhas de transporte.
pub struct Dispatcher {
    remote: Option<RemoteClient>,
    pipeline: Arc<AnalysisPipeline>,
}

impl Dispatcher {
    pub fn new(remote: Option<RemoteClient>) -> Self {
        Self {
            remote,
            pipeline: Arc::new(AnalysisPipeline::new()),
        }
    }

    /// Sem servidor remoto: toda análise é local.
    pub fn local_only() -> Self {
        Self::new(None)
    }

    pub fn remote(&self) -> Option<&RemoteClient> {
        self.remote.as_ref()
    }

    pub async fn analyze(&self, text: &str) -> Result<Dispatched, DispatchError> {
        let Some(remote) = &self.remote else {
            let result = self.analyze_locally(text).await?;
            return Ok(Dispatched { source: AnalysisSource::Local, result });
        };

        debug!(endpoint = remote.endpoint(), chars = text.chars().count(), "requesting remote analysis");

        match remote.analyze(text).await {
            Ok(result) => Ok(Dispatched { source: AnalysisSource::Remote, result }),
            Err(RemoteError::Transport(err)) => {
                warn!(error = %err, "analysis server unreachable, using local pattern analysis");
                let result = self.analyze_locally(text).await?;
                Ok(Dispatched { source: AnalysisSource::LocalFallback, result })
            }
            Err(RemoteError::Rejected { status, message }) => {
                warn!(status, %message, "analysis server rejected the request");
                Err(DispatchError::Rejected { status, message })
            }
            Err(err @ RemoteError::Decode(_)) => {
                warn!(error = %err, "analysis server returned an unusable response");
                Err(DispatchError::InvalidResponse(err.to_string()))
            }
        }
    }

    /// O pipeline é síncrono; roda fora das threads do runtime.
    async fn analyze_locally(&self, text: &str) -> Result<AnalysisResult, DispatchError> {
        let pipeline = Arc::clone(&self.pipeline);
        let text = text.to_string();
        let result = tokio::task::spawn_blocking(move || pipeline.analyze(&text)).await?;
        Ok(result)
    }
}
