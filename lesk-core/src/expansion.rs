//! # Expansão de Glosas
//!
//! Definições de dicionário são curtas demais para gerar sobreposições úteis.
//! O Lesk estendido compensa isso trazendo as definições dos sentidos
//! relacionados: o hiperônimo de "school" (instituição educacional), suas
//! partes, seus membros etc.
//!
//! A glosa expandida de um sentido é uma lista ordenada:
//!
//! - posição 0: a própria definição tokenizada (sempre presente, mesmo vazia);
//! - uma entrada por relação, na ordem de [`RelationKind::ALL`], com as
//!   definições de todos os alvos concatenadas. Relações que resultam em glosa
//!   vazia são omitidas.

use crate::lexicon::{LexicalDatabase, RelationKind, Sense};
use crate::tokenizer::{tokenize, Gloss};

/// Glosa própria + uma glosa agregada por relação não-vazia (1 a 12 elementos).
pub type ExpandedGloss = Vec<Gloss>;

/// Monta a glosa expandida de `sense`.
pub fn expand<D: LexicalDatabase + ?Sized>(lexicon: &D, sense: &Sense) -> ExpandedGloss {
    let mut expanded = vec![tokenize(sense.definition())];

    for kind in RelationKind::ALL {
        let joined = lexicon
            .relation(sense, kind)
            .iter()
            .map(|related| related.definition())
            .collect::<Vec<_>>()
            .join(" ");

        let gloss = tokenize(&joined);
        if !gloss.is_empty() {
            expanded.push(gloss);
        }
    }

    expanded
}
