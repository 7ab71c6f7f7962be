//! # Localizador de Segmentos
//!
//! Varre o texto com cada padrão da tabela e registra um [`Segment`] por
//! ocorrência. Padrões são independentes: cada um faz sua própria varredura
//! global e os trechos de padrões diferentes podem se sobrepor sem deduplicação.
//!
//! ## Offsets
//! `start`/`end` são índices de **caractere** (Unicode scalar), não de byte.
//! Textos em coreano usam 3 bytes por sílaba em UTF-8, então o offset em bytes
//! do `regex` é convertido antes de sair daqui.
//!
//! ## Ordem
//! As listas de cada padrão são concatenadas na ordem da tabela e ordenadas de
//! forma estável pelo `start`: empates preservam a ordem dos padrões.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::patterns::Pattern;

/// Um trecho do texto analisado que casou com um padrão.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Índice do caractere inicial (inclusivo)
    pub start: usize,
    /// Índice do caractere final (exclusivo)
    pub end: usize,
    /// Categoria do padrão que gerou o trecho
    #[serde(rename = "reason")]
    pub category: Category,
}

impl Segment {
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Recupera o texto do trecho. `None` se os offsets não couberem no texto
    /// (acontece com segmentos vindos de um servidor remoto).
    pub fn text_in<'a>(&self, text: &'a str) -> Option<&'a str> {
        slice_chars(text, self.start, self.end)
    }
}

/// Fatia `text` por índices de caractere `[start, end)`.
pub fn slice_chars(text: &str, start: usize, end: usize) -> Option<&str> {
    if start >= end {
        return None;
    }
    let mut indices = text.char_indices().map(|(b, _)| b).chain(std::iter::once(text.len()));
    let from = indices.nth(start)?;
    let to = indices.nth(end - start - 1)?;
    Some(&text[from..to])
}

/// Encontra todas as ocorrências de todos os padrões, ordenadas por `start`.
pub fn find_segments(text: &str, patterns: &[Pattern]) -> Vec<Segment> {
    if text.is_empty() {
        return Vec::new();
    }

    // `collect` em rayon preserva a ordem de entrada, mantendo o desempate estável.
    let per_pattern: Vec<Vec<Segment>> = patterns
        .par_iter()
        .map(|pattern| scan_pattern(text, pattern))
        .collect();

    let mut segments: Vec<Segment> = per_pattern.into_iter().flatten().collect();
    segments.sort_by_key(|s| s.start);
    segments
}

/// Varredura global de um único padrão.
fn scan_pattern(text: &str, pattern: &Pattern) -> Vec<Segment> {
    let mut cursor = CharCursor::new(text);
    pattern
        .matcher
        .find_iter(text)
        .filter(|m| !m.is_empty())
        .map(|m| {
            let start = cursor.advance_to(m.start());
            let end = cursor.advance_to(m.end());
            Segment {
                start,
                end,
                category: pattern.category.clone(),
            }
        })
        .collect()
}

/// Converte offsets de byte crescentes em offsets de caractere sem recontar
/// o texto desde o início a cada ocorrência.
struct CharCursor<'a> {
    text: &'a str,
    byte: usize,
    chars: usize,
}

impl<'a> CharCursor<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, byte: 0, chars: 0 }
    }

    fn advance_to(&mut self, byte: usize) -> usize {
        if byte < self.byte {
            // Não ocorre com find_iter, mas mantém o cursor correto.
            self.byte = 0;
            self.chars = 0;
        }
        self.chars += self.text[self.byte..byte].chars().count();
        self.byte = byte;
        self.chars
    }
}
