//! # cheata-core — Analisador Heurístico de Notícias Falsas
//!
//! Este crate implementa o analisador local que julga, por padrões
//! linguísticos, se um trecho de texto parece desinformação. Ele não aprende
//! nada e não guarda estado: é uma tabela fixa de expressões regulares, uma
//! varredura linear e uma pontuação aditiva.
//!
//! ## Arquitetura
//!
//! 1.  **Entrada**: Texto bruto (String), tipicamente o trecho selecionado pelo usuário.
//! 2.  **Tabela de Padrões** ([`patterns`]): regex → categoria (suspeita ou confiável).
//! 3.  **Segmentos** ([`segment`]): cada ocorrência vira um trecho com offsets de caractere.
//! 4.  **Pontuação** ([`scorer`]): veredito, confiança e agrupamento por categoria.
//! 5.  **Evidências** ([`evidence`]): frases explicando o que foi encontrado.
//! 6.  **Saída**: [`AnalysisResult`], o mesmo formato JSON do servidor remoto.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use cheata_core::AnalysisPipeline;
//!
//! let pipeline = AnalysisPipeline::new();
//! let result = pipeline.analyze("확실히 모든 사람이 전례 없는 성과");
//!
//! assert!(result.is_fake);
//! assert_eq!(result.confidence, 66);
//! for evidence in &result.evidences {
//!     println!("{}", evidence);
//! }
//! ```

pub mod category;
pub mod demo;
pub mod evidence;
pub mod patterns;
pub mod pipeline;
pub mod scorer;
pub mod segment;

pub use category::{Category, Polarity};
pub use pipeline::{Analysis, AnalysisPipeline, AnalysisResult};
pub use scorer::{CategoryGroup, Score};
pub use segment::Segment;
