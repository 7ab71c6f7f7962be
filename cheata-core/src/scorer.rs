//! # Pontuação — Veredito, Confiança e Agrupamento
//!
//! A pontuação é puramente aditiva:
//!
//! 1. Conta segmentos suspeitos e confiáveis.
//! 2. `is_fake` ⇔ suspeitos > confiáveis (empate conta como confiável).
//! 3. Confiança = `min(90, 50 + 8 × lado vencedor)`.
//! 4. Com mais de 5 ocorrências do lado vencedor, soma 10 (teto 95).

use indexmap::IndexMap;

use crate::category::Category;
use crate::segment::Segment;

/// Confiança de partida, antes de qualquer ocorrência.
pub const BASE_CONFIDENCE: u32 = 50;
/// Peso de cada ocorrência do lado vencedor.
pub const PER_MATCH_WEIGHT: u32 = 8;
/// Teto sem o bônus.
pub const CONFIDENCE_CAP: u32 = 90;
/// Ocorrências necessárias (estritamente acima) para o bônus.
pub const BOOST_THRESHOLD: usize = 5;
pub const BOOST: u32 = 10;
/// Teto absoluto da confiança calculada localmente.
pub const MAX_CONFIDENCE: u32 = 95;

/// Exemplos exibidos por categoria antes do marcador "+N more".
pub const MAX_EXAMPLES: usize = 3;

/// Resultado numérico da pontuação.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub is_fake: bool,
    pub confidence: u8,
    pub suspicious_count: usize,
    pub credible_count: usize,
}

impl Score {
    /// Pontua uma sequência de segmentos.
    pub fn from_segments(segments: &[Segment]) -> Self {
        let suspicious_count = segments.iter().filter(|s| s.category.is_suspicious()).count();
        let credible_count = segments.len() - suspicious_count;
        Self::from_counts(suspicious_count, credible_count)
    }

    pub fn from_counts(suspicious_count: usize, credible_count: usize) -> Self {
        let is_fake = suspicious_count > credible_count;
        let winning = if is_fake { suspicious_count } else { credible_count };

        let weighted = u32::try_from(winning)
            .unwrap_or(u32::MAX)
            .saturating_mul(PER_MATCH_WEIGHT);
        let mut confidence = BASE_CONFIDENCE.saturating_add(weighted).min(CONFIDENCE_CAP);
        if winning > BOOST_THRESHOLD {
            confidence = (confidence + BOOST).min(MAX_CONFIDENCE);
        }

        Self {
            is_fake,
            // Sempre <= 95 após o clamp.
            confidence: confidence.min(MAX_CONFIDENCE) as u8,
            suspicious_count,
            credible_count,
        }
    }
}

/// Trechos distintos encontrados para uma categoria, na ordem de aparição.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    pub category: Category,
    pub examples: Vec<String>,
}

impl CategoryGroup {
    /// Até [`MAX_EXAMPLES`] exemplos para exibição.
    pub fn shown(&self) -> &[String] {
        &self.examples[..self.examples.len().min(MAX_EXAMPLES)]
    }

    /// Quantos exemplos ficaram de fora da exibição.
    pub fn hidden(&self) -> usize {
        self.examples.len().saturating_sub(MAX_EXAMPLES)
    }
}

/// Agrupa os segmentos por categoria, deduplicando pelo texto exato.
///
/// A ordem das categorias é a da primeira ocorrência em `segments`.
/// Segmentos cujos offsets não cabem no texto são ignorados.
pub fn group_segments(text: &str, segments: &[Segment]) -> Vec<CategoryGroup> {
    let mut groups: IndexMap<Category, Vec<String>> = IndexMap::new();

    for segment in segments {
        let Some(matched) = segment.text_in(text) else { continue };
        let examples = groups.entry(segment.category.clone()).or_default();
        if !examples.iter().any(|e| e == matched) {
            examples.push(matched.to_string());
        }
    }

    groups
        .into_iter()
        .map(|(category, examples)| CategoryGroup { category, examples })
        .collect()
}
