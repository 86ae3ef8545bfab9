//! # Lesk Original (1986)
//!
//! A medida de sobreposição de Lesk conta quantas palavras distintas duas
//! glosas têm em comum. A ordem e as repetições não importam.
//!
//! O módulo também traz a variante simplificada, que compara o contexto
//! diretamente com as palavras da definição do candidato.
//!
//! Referência: M. Lesk, *Automatic Sense Disambiguation Using Machine Readable
//! Dictionaries: How to Tell a Pine Cone from an Ice Cream Cone*, SIGDOC 1986.

use std::collections::HashSet;

use crate::lexicon::{LexicalDatabase, Sense};
use crate::tokenizer::{tokenize, Gloss};

/// Tamanho da interseção entre os conjuntos de tokens das duas glosas.
pub fn lesk_overlap(gloss_a: &[String], gloss_b: &[String]) -> usize {
    let set_a: HashSet<&str> = gloss_a.iter().map(String::as_str).collect();
    let set_b: HashSet<&str> = gloss_b.iter().map(String::as_str).collect();
    set_a.intersection(&set_b).count()
}

/// Glosas de todos os sentidos de todas as palavras do contexto, sem filtro de classe.
///
/// Cada sentido de uma palavra do contexto contribui de forma independente;
/// nenhuma palavra do contexto é desambiguada antes.
pub fn context_glosses<D: LexicalDatabase + ?Sized>(lexicon: &D, context: &[String]) -> Vec<Gloss> {
    context
        .iter()
        .flat_map(|tok| lexicon.senses_for(tok, None))
        .map(|sense| tokenize(sense.definition()))
        .collect()
}

/// Pontuação de um candidato: soma das sobreposições com cada glosa do contexto.
pub fn original_score(candidate: &Sense, context_glosses: &[Gloss]) -> usize {
    let sense_gloss = tokenize(candidate.definition());
    context_glosses
        .iter()
        .map(|ctx| lesk_overlap(&sense_gloss, ctx))
        .sum()
}

/// Lesk simplificado: quantos tokens distintos do contexto aparecem entre as
/// palavras da definição do candidato, separada por espaços. Nenhum dos lados
/// é normalizado, então caixa e pontuação contam.
pub fn simple_score(candidate: &Sense, context: &HashSet<String>) -> usize {
    let definition: HashSet<&str> = candidate.definition().split_whitespace().collect();
    context
        .iter()
        .filter(|tok| definition.contains(tok.as_str()))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gloss(words: &[&str]) -> Gloss {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_overlap_counts_distinct_tokens() {
        let a = gloss(&["a", "school", "for", "a", "school"]);
        let b = gloss(&["school", "a", "building"]);
        assert_eq!(lesk_overlap(&a, &b), 2);
    }

    #[test]
    fn test_overlap_symmetric() {
        let a = gloss(&["pine", "cone", "tree", "of", "the", "genus"]);
        let b = gloss(&["ice", "cream", "cone", "of", "the", "shop"]);
        assert_eq!(lesk_overlap(&a, &b), lesk_overlap(&b, &a));
        assert_eq!(lesk_overlap(&a, &b), 3);
    }

    #[test]
    fn test_overlap_with_itself() {
        let a = gloss(&["x", "y", "x", "z"]);
        assert_eq!(lesk_overlap(&a, &a), 3);
    }

    #[test]
    fn test_overlap_disjoint_and_empty() {
        let a = gloss(&["x"]);
        assert_eq!(lesk_overlap(&a, &gloss(&["y"])), 0);
        assert_eq!(lesk_overlap(&a, &[]), 0);
    }

    #[test]
    fn test_original_score_sums_context() {
        use crate::lexicon::PartOfSpeech;
        let candidate = Sense::new("s.n.01", PartOfSpeech::Noun, "a place of learning");
        let ctx = vec![gloss(&["place", "to", "live"]), gloss(&["learning", "a", "skill"])];
        // {place} + {learning, a}
        assert_eq!(original_score(&candidate, &ctx), 3);
    }

    #[test]
    fn test_simple_score_uses_raw_definition_words() {
        use crate::lexicon::PartOfSpeech;
        let candidate = Sense::new("s.n.01", PartOfSpeech::Noun, "A place for reading books;");
        let context: HashSet<String> = ["reading", "books", "place", "a"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        // "books;" mantém a pontuação e "A" a caixa: nenhum dos dois casa
        assert_eq!(simple_score(&candidate, &context), 2);
    }
}
