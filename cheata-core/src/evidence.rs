//! # Composição de Evidências
//!
//! Transforma os grupos de categorias em frases legíveis. Cada categoria
//! presente gera uma frase, na ordem da primeira ocorrência:
//!
//! ```text
//! ⚠️ Exaggerated expression found: "확실히", "전례 없는"
//! ✅ Specific date found: "2023년 5월 1일", "2024-01-02", "May 3, 2021" (+1 more)
//! ```

use crate::scorer::CategoryGroup;

/// Frase única quando nada foi encontrado e o veredito é "falso".
pub const NO_PATTERNS_FAKE: &str =
    "No specific patterns were found, but the overall text shows characteristics of unreliable information.";
/// Frase única quando nada foi encontrado e o veredito é "confiável".
pub const NO_PATTERNS_RELIABLE: &str =
    "No notable patterns were found, but the text appears to be reliable.";

/// Gera as frases de evidência para os grupos encontrados.
pub fn compose_evidences(groups: &[CategoryGroup], is_fake: bool) -> Vec<String> {
    if groups.is_empty() {
        let generic = if is_fake { NO_PATTERNS_FAKE } else { NO_PATTERNS_RELIABLE };
        return vec![generic.to_string()];
    }

    groups.iter().map(describe_group).collect()
}

fn describe_group(group: &CategoryGroup) -> String {
    let quoted = group
        .shown()
        .iter()
        .map(|e| format!("\"{}\"", e))
        .collect::<Vec<_>>()
        .join(", ");

    let mut line = format!(
        "{} {} found: {}",
        group.category.icon(),
        group.category.label(),
        quoted
    );
    if group.hidden() > 0 {
        line.push_str(&format!(" (+{} more)", group.hidden()));
    }
    line
}
