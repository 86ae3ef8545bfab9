//! # Morfologia ao estilo WordNet ("morphy")
//!
//! Palavras do contexto chegam flexionadas ("students", "going", "books"), mas o
//! léxico é indexado por lemas. As regras de destacamento do WordNet trocam um
//! sufixo por outro para gerar candidatos a forma base; quem decide quais
//! candidatos existem é o léxico.
//!
//! | Classe    | Regras (sufixo → substituto) |
//! |-----------|------------------------------|
//! | Substantivo | s→, ses→s, ves→f, xes→x, zes→z, ches→ch, shes→sh, men→man, ies→y |
//! | Verbo     | s→, ies→y, es→e, es→, ed→e, ed→, ing→e, ing→ |
//! | Adjetivo  | er→, est→, er→e, est→e |
//!
//! Advérbios não têm regras. Listas de exceção (ex: "children" → "child") ficam
//! de fora.

use crate::lexicon::PartOfSpeech;

const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const ADJ_RULES: &[(&str, &str)] = &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")];

fn rules_for(pos: PartOfSpeech) -> &'static [(&'static str, &'static str)] {
    match pos {
        PartOfSpeech::Noun => NOUN_RULES,
        PartOfSpeech::Verb => VERB_RULES,
        PartOfSpeech::Adjective | PartOfSpeech::AdjectiveSatellite => ADJ_RULES,
        PartOfSpeech::Adverb => &[],
    }
}

/// Candidatos a forma base de `word` para a classe `pos`, na ordem das regras.
///
/// A própria palavra não entra na lista, e candidatos repetidos ou vazios são
/// descartados.
pub fn base_forms(word: &str, pos: PartOfSpeech) -> Vec<String> {
    let mut forms: Vec<String> = Vec::new();

    for (suffix, replacement) in rules_for(pos) {
        if let Some(stem) = word.strip_suffix(suffix) {
            if stem.is_empty() {
                continue;
            }
            let form = format!("{}{}", stem, replacement);
            if form != word && !forms.contains(&form) {
                forms.push(form);
            }
        }
    }

    forms
}
