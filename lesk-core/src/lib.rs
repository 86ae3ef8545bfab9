//! # lesk-core — Desambiguação de Sentido de Palavras (WSD) por Sobreposição de Glosas
//!
//! Este crate escolhe o significado pretendido de uma palavra em uma sentença
//! comparando definições de dicionário (glosas). Cada sentido candidato é
//! pontuado pela sobreposição textual entre sua glosa e as glosas das demais
//! palavras do contexto.
//!
//! ## Arquitetura do Sistema
//!
//! 1.  **Entrada**: Sentença (texto bruto ou tokens) + palavra-alvo.
//! 2.  **Tokenização** ([`tokenizer`]): Tokens minúsculos e puramente alfabéticos.
//! 3.  **Léxico** ([`lexicon`], [`morphy`]): Sentidos candidatos e relações semânticas.
//! 4.  **Pontuação**:
//!     *   **Lesk Original** ([`original`]): Interseção de conjuntos de palavras.
//!     *   **Expansão** ([`expansion`]): Glosas dos sentidos relacionados (hiperônimos, partes...).
//!     *   **Lesk Estendido** ([`extended`]): Frases comuns valem o quadrado do comprimento.
//! 5.  **Escolha** ([`disambiguator`]): O candidato de maior pontuação (estritamente,
//!     exceto no `Simple`, que segue o `lesk` do NLTK).
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use lesk_core::{Disambiguator, MemoryLexicon, PartOfSpeech, Sense, Strategy};
//!
//! let mut lexicon = MemoryLexicon::new();
//! lexicon.insert(Sense::new("cone.n.01", PartOfSpeech::Noun, "the fruit of a pine tree").with_lemma("cone")).unwrap();
//! lexicon.insert(Sense::new("cone.n.02", PartOfSpeech::Noun, "a crisp wafer holding ice cream").with_lemma("cone")).unwrap();
//! lexicon.insert(Sense::new("pine.n.01", PartOfSpeech::Noun, "a coniferous tree").with_lemma("pine")).unwrap();
//!
//! let wsd = Disambiguator::new(&lexicon);
//! let sense = wsd.disambiguate(&["pine", "cone"], "cone", None, Strategy::Original);
//! assert_eq!(sense.map(|s| s.id.as_str()), Some("cone.n.01"));
//! ```
//!
//! ## Módulos Principais
//!
//! - [`disambiguator`]: Orquestra a enumeração, a pontuação e a escolha.
//! - [`extended`]: O algoritmo de maior sequência comum do Lesk estendido.
//! - [`lexicon`]: Modelo de sentidos e a base lexical em memória.
//! - [`demo`]: Léxico e sentença de demonstração.

pub mod demo;
pub mod disambiguator;
pub mod error;
pub mod expansion;
pub mod extended;
pub mod lexicon;
pub mod morphy;
pub mod original;
pub mod tokenizer;

pub use disambiguator::{select_best, select_highest, Candidate, Disambiguator, Strategy};
pub use error::{LeskError, Result};
pub use lexicon::{LexicalDatabase, MemoryLexicon, PartOfSpeech, RelationKind, Sense, SenseId};
pub use tokenizer::{tokenize, Gloss, Token};
