//! # Dados de Demonstração
//!
//! Um léxico em miniatura, no formato do WordNet, com três sentidos de "school"
//! e sentidos para as demais palavras da sentença de demonstração. As
//! definições são curtas para que as pontuações possam ser conferidas à mão.
//!
//! Na sentença de demonstração as três estratégias divergem:
//!
//! | Estratégia | Escolha       |
//! |------------|---------------|
//! | `Simple`   | `school.n.03` |
//! | `Original` | `school.n.03` |
//! | `Extended` | `school.n.01` |

use crate::error::Result;
use crate::lexicon::{MemoryLexicon, PartOfSpeech, RelationKind, Sense};

pub const DEMO_SENTENCE: &str = "Students enjoy going to school, studying and reading books";

pub const DEMO_WORD: &str = "school";

/// Monta o léxico de demonstração.
pub fn demo_lexicon() -> Result<MemoryLexicon> {
    use PartOfSpeech::{Noun, Verb};
    use RelationKind::*;

    let senses = vec![
        // ===== school =====
        Sense::new("school.n.01", Noun, "an educational institution")
            .with_lemma("school")
            .with_example("the school was founded in 1900")
            .with_relation(Hypernym, "educational_institution.n.01")
            .with_relation(Hyponym, "academy.n.01")
            .with_relation(MemberMeronym, "student_body.n.01"),
        Sense::new("school.n.02", Noun, "a building where young people are taught")
            .with_lemma("school")
            .with_example("the school was built in 1932")
            .with_relation(Hypernym, "building.n.01"),
        Sense::new("school.n.03", Noun, "the process of being formally educated at a school")
            .with_lemma("school")
            .with_example("what will you do when you finish school?")
            .with_relation(Hypernym, "education.n.01"),
        // ===== alvos de relações =====
        Sense::new("educational_institution.n.01", Noun, "an institution dedicated to education")
            .with_lemma("educational_institution"),
        Sense::new("academy.n.01", Noun, "a secondary school that prepares students for college")
            .with_lemma("academy"),
        Sense::new("student_body.n.01", Noun, "the students enrolled at an educational institution")
            .with_lemma("student_body"),
        Sense::new("building.n.01", Noun, "a structure with a roof and walls")
            .with_lemma("building"),
        Sense::new("education.n.01", Noun, "the gradual process of acquiring knowledge")
            .with_lemma("education"),
        Sense::new("enrollee.n.01", Noun, "a person who enrolls in something")
            .with_lemma("enrollee"),
        Sense::new("publication.n.01", Noun, "a copy of a printed work offered for distribution")
            .with_lemma("publication"),
        // ===== palavras do contexto =====
        Sense::new("student.n.01", Noun, "a learner who is enrolled in an educational institution")
            .with_lemma("student")
            .with_relation(Hypernym, "enrollee.n.01"),
        Sense::new("enjoy.v.01", Verb, "derive or receive pleasure from; get enjoyment from")
            .with_lemma("enjoy")
            .with_example("I enjoy jogging"),
        Sense::new("go.v.01", Verb, "change location; move, travel, or proceed")
            .with_lemma("go"),
        Sense::new("study.v.01", Verb, "be a student; follow a course of study; be enrolled at an educational institution")
            .with_lemma("study"),
        Sense::new("read.v.01", Verb, "interpret something that is written or printed")
            .with_lemma("read"),
        Sense::new("book.n.01", Noun, "a written work or composition that has been published")
            .with_lemma("book")
            .with_relation(Hypernym, "publication.n.01"),
    ];

    let mut lexicon = MemoryLexicon::new();
    for sense in senses {
        lexicon.insert(sense)?;
    }
    lexicon.validate()?;
    Ok(lexicon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disambiguator::{Disambiguator, Strategy};
    use crate::expansion::expand;
    use crate::lexicon::{LexicalDatabase, SenseId};

    const CONTEXT: [&str; 9] = [
        "students", "enjoy", "going", "to", "school", "studying", "and", "reading", "books",
    ];

    fn scores(strategy: Strategy) -> Vec<(String, usize)> {
        let lexicon = demo_lexicon().unwrap();
        let wsd = Disambiguator::new(&lexicon);
        wsd.score_candidates(&CONTEXT, DEMO_WORD, Some(PartOfSpeech::Noun), strategy)
            .iter()
            .map(|c| (c.sense.id.to_string(), c.score))
            .collect()
    }

    #[test]
    fn test_demo_lexicon_is_valid() {
        let lexicon = demo_lexicon().unwrap();
        assert_eq!(lexicon.len(), 16);
        assert_eq!(lexicon.senses_for(DEMO_WORD, Some(PartOfSpeech::Noun)).len(), 3);
    }

    #[test]
    fn test_context_senses_resolve_through_morphology() {
        let lexicon = demo_lexicon().unwrap();
        let ids: Vec<&str> = CONTEXT
            .iter()
            .flat_map(|tok| lexicon.senses_for(tok, None))
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(
            ids,
            vec![
                "student.n.01",
                "enjoy.v.01",
                "go.v.01",
                "school.n.01",
                "school.n.02",
                "school.n.03",
                "study.v.01",
                "read.v.01",
                "book.n.01",
            ]
        );
    }

    #[test]
    fn test_expanded_gloss_lengths() {
        let lexicon = demo_lexicon().unwrap();
        let len = |id: &str| expand(&lexicon, lexicon.get(&SenseId::new(id)).unwrap()).len();
        assert_eq!(len("school.n.01"), 4);
        assert_eq!(len("school.n.02"), 2);
        assert_eq!(len("school.n.03"), 2);
        assert_eq!(len("go.v.01"), 1);
    }

    #[test]
    fn test_extended_scores_hand_computed() {
        // school.n.01: student 23 + school.n.01 175 + school.n.02 2 + school.n.03 5
        //              + study 37 + read 1 + book 4 + enjoy/go 0
        // school.n.02: student 4 + school.n.01 2 + school.n.02 100 + school.n.03 2
        //              + study 3 + book 5
        // school.n.03: student 2 + school.n.01 5 + school.n.02 2 + school.n.03 127
        //              + study 4 + book 4
        assert_eq!(
            scores(Strategy::Extended),
            vec![
                ("school.n.01".to_string(), 247),
                ("school.n.02".to_string(), 116),
                ("school.n.03".to_string(), 144),
            ]
        );
    }

    #[test]
    fn test_original_scores_hand_computed() {
        assert_eq!(
            scores(Strategy::Original),
            vec![
                ("school.n.01".to_string(), 9),
                ("school.n.02".to_string(), 11),
                ("school.n.03".to_string(), 15),
            ]
        );
    }

    #[test]
    fn test_demo_choices_per_strategy() {
        let lexicon = demo_lexicon().unwrap();
        let wsd = Disambiguator::new(&lexicon);
        let pick = |strategy| {
            wsd.disambiguate_sentence(DEMO_SENTENCE, DEMO_WORD, Some(PartOfSpeech::Noun), strategy)
                .map(|s| s.id.to_string())
        };
        assert_eq!(pick(Strategy::Simple).as_deref(), Some("school.n.03"));
        assert_eq!(pick(Strategy::Original).as_deref(), Some("school.n.03"));
        assert_eq!(pick(Strategy::Extended).as_deref(), Some("school.n.01"));
    }

    #[test]
    fn test_chosen_sense_has_example() {
        let lexicon = demo_lexicon().unwrap();
        let wsd = Disambiguator::new(&lexicon);
        let sense = wsd
            .disambiguate(&CONTEXT, DEMO_WORD, Some(PartOfSpeech::Noun), Strategy::Extended)
            .unwrap();
        assert_eq!(sense.definition(), "an educational institution");
        assert_eq!(sense.example(), Some("the school was founded in 1900"));
    }
}
