//! # Desambiguador — Escolha do Sentido
//!
//! Enumera os sentidos candidatos da palavra-alvo, pontua cada um contra o
//! contexto com a estratégia escolhida e devolve o de maior pontuação.
//!
//! ## Estratégias
//!
//! | Estratégia  | Compara                                             | Medida |
//! |-------------|-----------------------------------------------------|--------|
//! | `Simple`    | tokens crus do contexto × palavras da definição     | interseção de conjuntos |
//! | `Original`  | glosa do candidato × glosas de todos os sentidos do contexto | interseção de conjuntos |
//! | `Extended`  | glosas expandidas × glosas expandidas                | soma de `L²` por frase comum |
//!
//! ## Regra de escolha
//!
//! Em `Original` e `Extended`, um candidato só substitui o melhor atual se tiver
//! pontuação **estritamente maior**. Empates ficam com o primeiro da enumeração
//! do léxico e, se todos pontuarem zero, nenhum sentido é escolhido.
//!
//! `Simple` segue o Lesk simplificado do NLTK: vence o par (pontuação,
//! identificador) máximo, então empates ficam com o maior identificador e
//! sempre há uma escolha quando existe algum candidato, mesmo com tudo zerado.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use lesk_core::demo::{demo_lexicon, DEMO_SENTENCE, DEMO_WORD};
//! use lesk_core::{Disambiguator, PartOfSpeech, Strategy};
//!
//! let lexicon = demo_lexicon().unwrap();
//! let wsd = Disambiguator::new(&lexicon);
//!
//! let sense = wsd.disambiguate_sentence(DEMO_SENTENCE, DEMO_WORD, Some(PartOfSpeech::Noun), Strategy::Extended);
//! assert_eq!(sense.map(|s| s.id.as_str()), Some("school.n.01"));
//! ```

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{LeskError, Result};
use crate::expansion::{expand, ExpandedGloss};
use crate::extended::extended_score;
use crate::lexicon::{LexicalDatabase, PartOfSpeech, Sense};
use crate::original::{context_glosses, original_score, simple_score};
use crate::tokenizer::{normalize, Gloss, UnicodeWordTokenizer, WordTokenizer};

/// Medida de sobreposição usada para pontuar candidatos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// **Simplificado**: contexto contra a definição do candidato.
    Simple,
    /// **Original (Lesk 1986)**: glosa do candidato contra as glosas de cada
    /// sentido de cada palavra do contexto.
    Original,
    /// **Estendido (Banerjee & Pedersen 2003)**: glosas expandidas pelas
    /// relações semânticas, pontuadas por frases comuns.
    Extended,
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Extended
    }
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Simple, Strategy::Original, Strategy::Extended];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Simple => "simple",
            Strategy::Original => "original",
            Strategy::Extended => "extended",
        }
    }

    /// Aplica a regra de escolha da estratégia.
    pub fn select<'a>(&self, candidates: &[Candidate<'a>]) -> Option<Candidate<'a>> {
        match self {
            Strategy::Simple => select_highest(candidates),
            Strategy::Original | Strategy::Extended => select_best(candidates),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = LeskError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "simple" => Ok(Strategy::Simple),
            "original" => Ok(Strategy::Original),
            "extended" => Ok(Strategy::Extended),
            other => Err(LeskError::invalid_argument(format!(
                "unknown strategy '{}'",
                other
            ))),
        }
    }
}

/// Um sentido candidato e sua pontuação total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate<'a> {
    pub sense: &'a Sense,
    pub score: usize,
}

/// O contexto pré-processado uma única vez por chamada, conforme a estratégia.
enum ContextProfile {
    Words(HashSet<String>),
    Glosses(Vec<Gloss>),
    Expanded(Vec<ExpandedGloss>),
}

impl ContextProfile {
    fn build<D, S>(lexicon: &D, context: &[S], strategy: Strategy) -> Self
    where
        D: LexicalDatabase + ?Sized,
        S: AsRef<str>,
    {
        match strategy {
            // sem normalização: caixa e pontuação contam, como no NLTK
            Strategy::Simple => {
                ContextProfile::Words(context.iter().map(|tok| tok.as_ref().to_string()).collect())
            }
            Strategy::Original => ContextProfile::Glosses(context_glosses(lexicon, &normalize(context))),
            Strategy::Extended => ContextProfile::Expanded(
                normalize(context)
                    .iter()
                    .flat_map(|tok| lexicon.senses_for(tok, None))
                    .map(|sense| expand(lexicon, sense))
                    .collect(),
            ),
        }
    }

    fn score<D: LexicalDatabase + ?Sized>(&self, lexicon: &D, candidate: &Sense) -> usize {
        match self {
            ContextProfile::Words(words) => simple_score(candidate, words),
            ContextProfile::Glosses(glosses) => original_score(candidate, glosses),
            ContextProfile::Expanded(expanded) => extended_score(&expand(lexicon, candidate), expanded),
        }
    }
}

/// Primeiro candidato com a maior pontuação estritamente positiva.
pub fn select_best<'a>(candidates: &[Candidate<'a>]) -> Option<Candidate<'a>> {
    let mut best = None;
    let mut max_overlap = 0;

    for candidate in candidates {
        if candidate.score > max_overlap {
            max_overlap = candidate.score;
            best = Some(*candidate);
        }
    }

    best
}

/// Candidato com o maior par (pontuação, identificador).
///
/// Só devolve `None` para uma lista vazia.
pub fn select_highest<'a>(candidates: &[Candidate<'a>]) -> Option<Candidate<'a>> {
    candidates
        .iter()
        .copied()
        .max_by(|a, b| a.score.cmp(&b.score).then_with(|| a.sense.id.cmp(&b.sense.id)))
}

/// Desambiguador de sentidos sobre uma base lexical somente-leitura.
///
/// Não guarda estado entre chamadas; pode ser compartilhado entre threads.
pub struct Disambiguator<'a, D: LexicalDatabase + ?Sized> {
    lexicon: &'a D,
}

impl<'a, D: LexicalDatabase + ?Sized> Disambiguator<'a, D> {
    pub fn new(lexicon: &'a D) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &'a D {
        self.lexicon
    }

    /// Pontua cada sentido candidato de `word`, na ordem da base lexical.
    ///
    /// `context` são tokens já segmentados. `Original` e `Extended` aplicam o
    /// filtro alfabético e a conversão para minúsculas; `Simple` usa os tokens
    /// como chegaram.
    pub fn score_candidates<S: AsRef<str>>(
        &self,
        context: &[S],
        word: &str,
        pos: Option<PartOfSpeech>,
        strategy: Strategy,
    ) -> Vec<Candidate<'a>> {
        let lexicon: &'a D = self.lexicon;
        let senses = lexicon.senses_for(word, pos);

        if senses.is_empty() {
            debug!(word, ?pos, "no candidate senses");
            return Vec::new();
        }

        let profile = ContextProfile::build(lexicon, context, strategy);

        // A ordem é preservada pelo collect indexado; a escolha é sequencial
        let candidates: Vec<Candidate<'a>> = senses
            .par_iter()
            .map(|&sense| Candidate {
                sense,
                score: profile.score(lexicon, sense),
            })
            .collect();

        for candidate in &candidates {
            debug!(
                sense = %candidate.sense.id,
                %strategy,
                score = candidate.score,
                "candidate scored"
            );
        }

        candidates
    }

    /// Escolhe o sentido de `word` no contexto com a regra de escolha da
    /// estratégia ([`Strategy::select`]). `None` se não houver candidatos ou,
    /// fora do `Simple`, se nenhum tiver sobreposição.
    pub fn disambiguate<S: AsRef<str>>(
        &self,
        context: &[S],
        word: &str,
        pos: Option<PartOfSpeech>,
        strategy: Strategy,
    ) -> Option<&'a Sense> {
        let candidates = self.score_candidates(context, word, pos, strategy);
        strategy.select(&candidates).map(|best| best.sense)
    }

    /// Como [`Disambiguator::disambiguate`], mas segmenta o texto bruto antes.
    pub fn disambiguate_sentence(
        &self,
        sentence: &str,
        word: &str,
        pos: Option<PartOfSpeech>,
        strategy: Strategy,
    ) -> Option<&'a Sense> {
        let tokens = UnicodeWordTokenizer.word_tokenize(sentence);
        self.disambiguate(tokens.as_slice(), word, pos, strategy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{MemoryLexicon, RelationKind};

    fn lexicon(senses: Vec<Sense>) -> MemoryLexicon {
        let mut lex = MemoryLexicon::new();
        for s in senses {
            lex.insert(s).unwrap();
        }
        lex
    }

    fn bass_lexicon() -> MemoryLexicon {
        lexicon(vec![
            Sense::new("bass.n.01", PartOfSpeech::Noun, "the lowest part of the musical range")
                .with_lemma("bass"),
            Sense::new("bass.n.02", PartOfSpeech::Noun, "a lean flesh of a saltwater fish")
                .with_lemma("bass"),
            Sense::new("fish.n.01", PartOfSpeech::Noun, "any cold-blooded aquatic vertebrate; a saltwater or freshwater fish")
                .with_lemma("fish"),
            Sense::new("sing.v.01", PartOfSpeech::Verb, "produce musical tones with the voice")
                .with_lemma("sing"),
        ])
    }

    #[test]
    fn test_strategy_parse() {
        assert_eq!("Extended".parse::<Strategy>().unwrap(), Strategy::Extended);
        assert_eq!(Strategy::default(), Strategy::Extended);
        assert!("fancy".parse::<Strategy>().is_err());
    }

    #[test]
    fn test_unknown_word_returns_none() {
        let lex = bass_lexicon();
        let wsd = Disambiguator::new(&lex);
        for strategy in Strategy::ALL {
            assert!(wsd.disambiguate(&["fish"], "guitar", None, strategy).is_none());
            assert!(wsd.score_candidates(&["fish"], "guitar", None, strategy).is_empty());
        }
    }

    #[test]
    fn test_pos_filter_empties_candidates() {
        let lex = bass_lexicon();
        let wsd = Disambiguator::new(&lex);
        assert!(wsd
            .disambiguate(&["fish"], "bass", Some(PartOfSpeech::Verb), Strategy::Original)
            .is_none());
    }

    #[test]
    fn test_zero_overlap_returns_none() {
        let lex = bass_lexicon();
        let wsd = Disambiguator::new(&lex);
        let candidates = wsd.score_candidates(&["zebra"], "bass", None, Strategy::Extended);
        assert_eq!(candidates.len(), 2);
        assert!(candidates.iter().all(|c| c.score == 0));
        assert!(wsd.disambiguate(&["zebra"], "bass", None, Strategy::Extended).is_none());
    }

    #[test]
    fn test_original_picks_fish_sense() {
        let lex = bass_lexicon();
        let wsd = Disambiguator::new(&lex);
        let sense = wsd.disambiguate(&["I", "caught", "a", "fish", "."], "bass", None, Strategy::Original);
        assert_eq!(sense.unwrap().id.as_str(), "bass.n.02");
    }

    #[test]
    fn test_extended_picks_music_sense() {
        let lex = bass_lexicon();
        let wsd = Disambiguator::new(&lex);
        let sense = wsd.disambiguate(&["they", "sing", "songs"], "bass", None, Strategy::Extended);
        assert_eq!(sense.unwrap().id.as_str(), "bass.n.01");
    }

    #[test]
    fn test_tie_goes_to_first_enumerated() {
        let lex = lexicon(vec![
            Sense::new("key.n.01", PartOfSpeech::Noun, "metal device for a lock").with_lemma("key"),
            Sense::new("key.n.02", PartOfSpeech::Noun, "a lock pitch in music").with_lemma("key"),
            Sense::new("lock.n.01", PartOfSpeech::Noun, "a lock").with_lemma("lock"),
        ]);
        let wsd = Disambiguator::new(&lex);
        let candidates = wsd.score_candidates(&["lock"], "key", None, Strategy::Original);
        assert_eq!(candidates[0].score, candidates[1].score);
        assert!(candidates[0].score > 0);
        let sense = wsd.disambiguate(&["lock"], "key", None, Strategy::Original);
        assert_eq!(sense.unwrap().id.as_str(), "key.n.01");
    }

    #[test]
    fn test_context_is_normalized() {
        let lex = bass_lexicon();
        let wsd = Disambiguator::new(&lex);
        let raw = wsd.score_candidates(&["FISH", "42", ","], "bass", None, Strategy::Original);
        let clean = wsd.score_candidates(&["fish"], "bass", None, Strategy::Original);
        let raw_scores: Vec<usize> = raw.iter().map(|c| c.score).collect();
        let clean_scores: Vec<usize> = clean.iter().map(|c| c.score).collect();
        assert_eq!(raw_scores, clean_scores);
        assert!(clean_scores.iter().any(|&score| score > 0));
    }

    #[test]
    fn test_simple_uses_raw_tokens() {
        let lex = bass_lexicon();
        let wsd = Disambiguator::new(&lex);
        let upper = wsd.score_candidates(&["FISH"], "bass", None, Strategy::Simple);
        let lower = wsd.score_candidates(&["fish"], "bass", None, Strategy::Simple);
        assert_eq!(upper.iter().map(|c| c.score).collect::<Vec<_>>(), vec![0, 0]);
        assert_eq!(lower.iter().map(|c| c.score).collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn test_simple_always_picks_a_sense() {
        let lex = bass_lexicon();
        let wsd = Disambiguator::new(&lex);
        let candidates = wsd.score_candidates(&["zebra"], "bass", None, Strategy::Simple);
        assert!(candidates.iter().all(|c| c.score == 0));
        // empate em zero: vence o maior identificador
        let sense = wsd.disambiguate(&["zebra"], "bass", None, Strategy::Simple);
        assert_eq!(sense.unwrap().id.as_str(), "bass.n.02");
        assert!(wsd.disambiguate(&["zebra"], "bass", None, Strategy::Original).is_none());
    }

    #[test]
    fn test_select_highest_breaks_ties_by_id() {
        let lex = bass_lexicon();
        let senses = lex.senses_for("bass", None);
        let c = |i: usize, score| Candidate { sense: senses[i], score };
        assert!(select_highest(&[]).is_none());
        assert_eq!(select_highest(&[c(0, 2), c(1, 2)]).unwrap().sense.id, senses[1].id);
        assert_eq!(select_highest(&[c(1, 2), c(0, 2)]).unwrap().sense.id, senses[1].id);
        assert_eq!(select_highest(&[c(0, 3), c(1, 2)]).unwrap().sense.id, senses[0].id);
    }

    #[test]
    fn test_select_best_strict() {
        let lex = bass_lexicon();
        let senses = lex.senses_for("bass", None);
        let c = |i: usize, score| Candidate { sense: senses[i], score };
        assert!(select_best(&[]).is_none());
        assert!(select_best(&[c(0, 0), c(1, 0)]).is_none());
        assert_eq!(select_best(&[c(0, 2), c(1, 2)]).unwrap().sense.id, senses[0].id);
        assert_eq!(select_best(&[c(0, 1), c(1, 2)]).unwrap().sense.id, senses[1].id);
    }

    #[test]
    fn test_extended_uses_relations() {
        // só a relação liga o candidato ao contexto
        let lex = lexicon(vec![
            Sense::new("crane.n.01", PartOfSpeech::Noun, "a machine for lifting")
                .with_lemma("crane"),
            Sense::new("crane.n.02", PartOfSpeech::Noun, "a large long-necked bird")
                .with_lemma("crane")
                .with_relation(RelationKind::Hypernym, "wader.n.01"),
            Sense::new("wader.n.01", PartOfSpeech::Noun, "wading bird living near water"),
            Sense::new("marsh.n.01", PartOfSpeech::Noun, "low land near water").with_lemma("marsh"),
        ]);
        let wsd = Disambiguator::new(&lex);
        let original = wsd.disambiguate(&["marsh"], "crane", None, Strategy::Original);
        assert!(original.is_none());
        let extended = wsd.disambiguate(&["marsh"], "crane", None, Strategy::Extended);
        assert_eq!(extended.unwrap().id.as_str(), "crane.n.02");
    }
}
