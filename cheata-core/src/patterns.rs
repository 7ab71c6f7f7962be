//! # Tabela de Padrões — Expressões Regulares por Categoria
//!
//! Lista fixa e ordenada de padrões. Cada entrada associa uma expressão regular
//! a uma [`Category`]; a polaridade vem da categoria. A ordem importa apenas
//! para desempate na ordenação dos segmentos (ver [`crate::segment`]).
//!
//! Os padrões cobrem coreano (o idioma principal dos textos analisados) e inglês.
//! A tabela é compilada uma única vez no primeiro uso e depois compartilhada
//! entre threads sem sincronização.

use std::sync::LazyLock;

use regex::Regex;

use crate::category::{Category, Polarity};

/// Definição textual de um padrão (dado constante).
#[derive(Debug, Clone)]
pub struct PatternSpec {
    pub name: &'static str,
    pub source: &'static str,
    pub category: Category,
}

/// Um padrão compilado, pronto para varredura.
#[derive(Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub matcher: Regex,
    pub category: Category,
}

impl Pattern {
    pub fn polarity(&self) -> Polarity {
        self.category.polarity()
    }
}

macro_rules! pattern {
    ($name:literal, $category:ident, $source:expr) => {
        PatternSpec {
            name: $name,
            source: $source,
            category: Category::$category,
        }
    };
}

/// Fontes dos padrões, na ordem de varredura.
pub static PATTERN_SPECS: &[PatternSpec] = &[
    // ── Sinais suspeitos ─────────────────────────────────────────────────
    pattern!(
        "exaggeration_ko",
        Exaggeration,
        r"확실히|틀림없이|절대로?|무조건|전례\s*없는|역대\s*(?:최고|최대|최악)|사상\s*(?:최초|최대)|완벽(?:한|하게)|충격적인?|엄청난"
    ),
    pattern!(
        "exaggeration_en",
        Exaggeration,
        r"(?i)\b(?:unprecedented|shocking|absolutely|guaranteed|never before seen|best ever)\b"
    ),
    pattern!(
        "claim_ko",
        Claim,
        r"(?:모두가|다들|누구나)\s*(?:알고\s*있|아는)|숨겨진\s*진실|진실은|밝혀졌다"
    ),
    pattern!(
        "claim_en",
        Claim,
        r"(?i)\b(?:everyone knows|it is a fact that|the truth is|they don't want you to know)\b"
    ),
    pattern!(
        "speculation_ko",
        Speculation,
        r"아마도?|추측|추정된다|것\s*같다|가능성이\s*있다|라는\s*설이"
    ),
    pattern!(
        "speculation_en",
        Speculation,
        r"(?i)\b(?:might|could be|possibly|allegedly|rumou?red)\b"
    ),
    pattern!(
        "misleading_ko",
        Misleading,
        r"알고\s*보니|사실은|충격\s*반전|진짜\s*이유|감춰진"
    ),
    pattern!(
        "misleading_en",
        Misleading,
        r"(?i)\b(?:you won't believe|what they are not telling you|miracle cure)\b"
    ),
    pattern!(
        "unverified_ko",
        Unverified,
        r"(?:익명의|한)\s*(?:관계자|소식통)|카더라|소문에\s*(?:따르면|의하면)|출처\s*(?:불명|미상)"
    ),
    pattern!(
        "unverified_en",
        Unverified,
        r"(?i)\b(?:sources say|anonymous sources?|reportedly|unconfirmed)\b"
    ),
    pattern!(
        "suspicious_ko",
        Suspicious,
        r"긴급|속보|공유\s*(?:해\s*주세요|부탁)|퍼뜨려|[!?]{2,}"
    ),
    pattern!(
        "suspicious_en",
        Suspicious,
        r"(?i)\b(?:breaking|urgent|share before|must read)\b"
    ),
    pattern!(
        "biased_ko",
        Biased,
        r"좌파|우파|빨갱이|매국노|적폐|어리석은|멍청한"
    ),
    pattern!(
        "biased_en",
        Biased,
        r"(?i)\b(?:idiots?|traitors?|corrupt elites?|radical)\b"
    ),
    // ── Sinais de credibilidade ──────────────────────────────────────────
    pattern!(
        "date_numeric",
        Date,
        r"\d{4}\s*년\s*\d{1,2}\s*월\s*\d{1,2}\s*일|\b\d{4}[-./]\d{1,2}[-./]\d{1,2}\b"
    ),
    pattern!(
        "date_en",
        Date,
        r"(?i)\b(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+\d{1,2},?\s+\d{4}\b"
    ),
    pattern!(
        "institution_ko",
        Institution,
        r"[가-힣]{1,10}(?:대학교|대학|연구소|연구원|병원|위원회|협회|재단)|정부|국회|법원|통계청|질병관리청"
    ),
    pattern!(
        "institution_en",
        Institution,
        r"\b(?:[A-Z][a-z]+\s+){0,3}(?:University|Institute|Ministry|Agency|Hospital)\b|\b(?:WHO|CDC|NASA|UN)\b"
    ),
    pattern!(
        "evidence_ko",
        Evidence,
        r"(?:연구|조사|실험|분석)\s*결과|논문|보고서|임상\s*시험"
    ),
    pattern!(
        "evidence_en",
        Evidence,
        r"(?i)\b(?:study|studies|research|peer[- ]reviewed|clinical trials?|survey)\b"
    ),
    pattern!(
        "source_ko",
        Source,
        r"(?:보도|자료|발표|기사)에\s*(?:따르면|의하면)|출처\s*:\s*\S+"
    ),
    pattern!(
        "source_en",
        Source,
        r"(?i)\baccording to\b|\bsource:\s*\S+"
    ),
    pattern!(
        "statistic",
        Statistic,
        r"\d+(?:[.,]\d+)?\s*(?:%|퍼센트)|\d{1,3}(?:,\d{3})+\s*(?:명|건)"
    ),
    pattern!(
        "statistic_en",
        Statistic,
        r"(?i)\b\d+(?:\.\d+)?\s*percent\b"
    ),
    pattern!(
        "expert_ko",
        Expert,
        r"[가-힣]{1,4}\s*(?:교수|박사)|전문가"
    ),
    pattern!(
        "expert_en",
        Expert,
        r"(?i)\b(?:professor|experts?|scientists?|researchers?)\b|\bDr\."
    ),
    pattern!(
        "official_ko",
        Official,
        r"공식\s*(?:발표|입장|자료|성명)|보도\s*자료|브리핑|관보"
    ),
    pattern!(
        "official_en",
        Official,
        r"(?i)\b(?:official statement|press release|officially announced)\b"
    ),
];

/// Tabela compilada, inicializada uma vez por processo.
///
/// Fontes inválidas são descartadas em vez de derrubar o processo; o teste
/// `test_every_pattern_compiles` garante que isso nunca ocorre na tabela fixa.
pub static PATTERNS: LazyLock<Vec<Pattern>> = LazyLock::new(|| compile(PATTERN_SPECS));

/// Compila uma lista de definições, preservando a ordem.
pub fn compile(specs: &[PatternSpec]) -> Vec<Pattern> {
    specs
        .iter()
        .filter_map(|spec| {
            Regex::new(spec.source).ok().map(|matcher| Pattern {
                name: spec.name,
                matcher,
                category: spec.category.clone(),
            })
        })
        .collect()
}

/// Acesso à tabela global.
pub fn all_patterns() -> &'static [Pattern] {
    &PATTERNS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_pattern_compiles() {
        assert_eq!(all_patterns().len(), PATTERN_SPECS.len());
    }

    #[test]
    fn test_every_known_category_has_a_pattern() {
        for c in Category::KNOWN.iter() {
            assert!(
                PATTERN_SPECS.iter().any(|p| &p.category == c),
                "sem padrão para {}",
                c
            );
        }
    }

    #[test]
    fn test_pattern_names_are_unique() {
        let mut names: Vec<&str> = PATTERN_SPECS.iter().map(|p| p.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), PATTERN_SPECS.len());
    }

    #[test]
    fn test_no_pattern_matches_empty_string() {
        for p in all_patterns() {
            assert!(p.matcher.find("").is_none(), "{} casa vazio", p.name);
        }
    }

    #[test]
    fn test_polarity_follows_category() {
        let p = all_patterns().iter().find(|p| p.name == "biased_ko").unwrap();
        assert_eq!(p.polarity(), Polarity::Suspicious);
        let p = all_patterns().iter().find(|p| p.name == "official_en").unwrap();
        assert_eq!(p.polarity(), Polarity::Credible);
    }
}
