//! # Pipeline de Análise Local
//!
//! Conecta os estágios do analisador:
//!
//! 1. **Segmentos** ([`crate::segment`]): todas as ocorrências de todos os padrões.
//! 2. **Pontuação** ([`crate::scorer`]): veredito e confiança.
//! 3. **Agrupamento**: trechos distintos por categoria.
//! 4. **Evidências** ([`crate::evidence`]): frases legíveis.
//!
//! O pipeline é determinístico e sem estado mutável: a mesma entrada produz
//! sempre o mesmo [`AnalysisResult`], e uma única instância pode ser
//! compartilhada entre threads.

use serde::{Deserialize, Serialize};

use crate::evidence::compose_evidences;
use crate::patterns::{all_patterns, Pattern};
use crate::scorer::{group_segments, CategoryGroup, Score};
use crate::segment::{find_segments, Segment};

/// Explicação fixa para o veredito "provavelmente falso".
pub const FAKE_EXPLANATION: &str = "This text contains several linguistic patterns commonly associated with misleading or unverified information, such as exaggeration, unsupported claims or sensational wording. This judgment comes from local pattern analysis and should be treated as a rough estimate.";
/// Explicação fixa para o veredito "provavelmente confiável".
pub const RELIABLE_EXPLANATION: &str = "This text shows at least as many credibility signals, such as dates, institutions or cited sources, as warning signs. This judgment comes from local pattern analysis and should be treated as a rough estimate.";

/// Resultado completo de uma análise, no formato JSON trocado com a UI
/// e com o servidor remoto.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub is_fake: bool,
    /// 0–100. Resultados locais nunca passam de 95.
    pub confidence: u8,
    pub explanation: String,
    pub evidences: Vec<String>,
    /// Eco do texto de entrada
    pub analyzed_text: String,
    /// Ordenados por `start`
    pub suspicious_segments: Vec<Segment>,
}

impl AnalysisResult {
    /// Recalcula a pontuação a partir dos segmentos devolvidos.
    pub fn recount(&self) -> Score {
        Score::from_segments(&self.suspicious_segments)
    }
}

/// Detalhes intermediários, úteis para depuração e para a UI.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub segments: Vec<Segment>,
    pub score: Score,
    pub groups: Vec<CategoryGroup>,
}

/// O pipeline local de análise.
pub struct AnalysisPipeline {
    patterns: &'static [Pattern],
}

impl AnalysisPipeline {
    /// Cria o pipeline sobre a tabela global de padrões.
    pub fn new() -> Self {
        Self {
            patterns: all_patterns(),
        }
    }

    pub fn patterns(&self) -> &[Pattern] {
        self.patterns
    }

    /// Executa segmentos → pontuação → agrupamento, sem montar as frases.
    pub fn inspect(&self, text: &str) -> Analysis {
        let segments = find_segments(text, self.patterns);
        let score = Score::from_segments(&segments);
        let groups = group_segments(text, &segments);
        Analysis { segments, score, groups }
    }

    /// Análise completa de um texto.
    ///
    /// Texto vazio ou sem ocorrências não é erro: produz um resultado
    /// "confiável" com confiança 50 e a frase genérica.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let Analysis { segments, score, groups } = self.inspect(text);
        let evidences = compose_evidences(&groups, score.is_fake);
        let explanation = if score.is_fake { FAKE_EXPLANATION } else { RELIABLE_EXPLANATION };

        AnalysisResult {
            is_fake: score.is_fake,
            confidence: score.confidence,
            explanation: explanation.to_string(),
            evidences,
            analyzed_text: text.to_string(),
            suspicious_segments: segments,
        }
    }
}

impl Default for AnalysisPipeline {
    fn default() -> Self {
        Self::new()
    }
}
