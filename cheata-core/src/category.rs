//! # Categorias de Padrões e Polaridade
//!
//! Cada padrão da tabela marca o trecho encontrado com uma categoria. As
//! categorias se dividem em dois grupos de **polaridade**:
//!
//! | Polaridade  | Categorias                                                              |
//! |-------------|-------------------------------------------------------------------------|
//! | Suspeita    | exaggeration, claim, speculation, misleading, unverified, suspicious, biased |
//! | Confiável   | date, institution, evidence, source, statistic, expert, official        |
//!
//! Resultados vindos do servidor remoto podem trazer tags desconhecidas; elas
//! são preservadas em [`Category::Other`] e contam como confiáveis.

use serde::{Deserialize, Serialize};

/// Polaridade de uma categoria: sinal de alerta ou sinal de credibilidade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Suspicious,
    Credible,
}

/// Categoria atribuída a um trecho do texto.
///
/// Serializa como a tag textual (ex: `"exaggeration"`), que é o campo
/// `reason` dos segmentos no formato JSON.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    /// **Exagero**: superlativos e certezas absolutas. Ex: "확실히", "전례 없는".
    Exaggeration,
    /// **Afirmação sem suporte**: "todo mundo sabe", "a verdade é".
    Claim,
    /// **Especulação**: "talvez", "supostamente".
    Speculation,
    /// **Enquadramento enganoso**: "você não vai acreditar".
    Misleading,
    /// **Fonte não verificada**: "fontes anônimas", "dizem que".
    Unverified,
    /// **Sensacionalismo**: "urgente", "compartilhe", "!!".
    Suspicious,
    /// **Linguagem tendenciosa**: rótulos pejorativos.
    Biased,
    Date,
    Institution,
    Evidence,
    Source,
    Statistic,
    Expert,
    Official,
    /// Tag desconhecida recebida de um servidor remoto.
    Other(String),
}

impl Category {
    /// As 14 categorias conhecidas, na ordem da tabela de rótulos.
    pub const KNOWN: [Category; 14] = [
        Category::Exaggeration,
        Category::Claim,
        Category::Speculation,
        Category::Misleading,
        Category::Unverified,
        Category::Suspicious,
        Category::Biased,
        Category::Date,
        Category::Institution,
        Category::Evidence,
        Category::Source,
        Category::Statistic,
        Category::Expert,
        Category::Official,
    ];

    /// Tag textual da categoria (para serialização)
    pub fn tag(&self) -> &str {
        match self {
            Category::Exaggeration => "exaggeration",
            Category::Claim => "claim",
            Category::Speculation => "speculation",
            Category::Misleading => "misleading",
            Category::Unverified => "unverified",
            Category::Suspicious => "suspicious",
            Category::Biased => "biased",
            Category::Date => "date",
            Category::Institution => "institution",
            Category::Evidence => "evidence",
            Category::Source => "source",
            Category::Statistic => "statistic",
            Category::Expert => "expert",
            Category::Official => "official",
            Category::Other(tag) => tag,
        }
    }

    /// Rótulo legível usado nas evidências. Tags desconhecidas caem na própria tag.
    pub fn label(&self) -> &str {
        match self {
            Category::Exaggeration => "Exaggerated expression",
            Category::Claim => "Unsupported claim",
            Category::Speculation => "Speculative language",
            Category::Misleading => "Misleading framing",
            Category::Unverified => "Unverified source",
            Category::Suspicious => "Sensational wording",
            Category::Biased => "Biased language",
            Category::Date => "Specific date",
            Category::Institution => "Named institution",
            Category::Evidence => "Research evidence",
            Category::Source => "Cited source",
            Category::Statistic => "Statistical figure",
            Category::Expert => "Expert reference",
            Category::Official => "Official announcement",
            Category::Other(tag) => tag,
        }
    }

    pub fn polarity(&self) -> Polarity {
        match self {
            Category::Exaggeration
            | Category::Claim
            | Category::Speculation
            | Category::Misleading
            | Category::Unverified
            | Category::Suspicious
            | Category::Biased => Polarity::Suspicious,
            _ => Polarity::Credible,
        }
    }

    pub fn is_suspicious(&self) -> bool {
        self.polarity() == Polarity::Suspicious
    }

    /// Ícone exibido ao lado da evidência na UI
    pub fn icon(&self) -> &'static str {
        match self.polarity() {
            Polarity::Suspicious => "⚠️",
            Polarity::Credible => "✅",
        }
    }

    /// Converte uma tag textual (ex: "date" → Date). Tags desconhecidas viram `Other`.
    pub fn from_tag(tag: &str) -> Self {
        Self::KNOWN
            .iter()
            .find(|c| c.tag() == tag)
            .cloned()
            .unwrap_or_else(|| Category::Other(tag.to_string()))
    }
}

impl From<String> for Category {
    fn from(tag: String) -> Self {
        match Category::from_tag(&tag) {
            Category::Other(_) => Category::Other(tag),
            known => known,
        }
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Other(tag) => tag,
            known => known.tag().to_string(),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}
