//! # Léxico — Sentidos, Relações e Base Lexical
//!
//! Modela a parte de uma base lexical (no estilo WordNet) de que os algoritmos
//! de Lesk precisam:
//!
//! - **[`Sense`]**: um significado de uma palavra, com definição, exemplos e
//!   ligações para outros sentidos.
//! - **[`RelationKind`]**: o conjunto fechado de relações semânticas usadas na
//!   expansão de glosas, sempre percorrido na ordem canônica de [`RelationKind::ALL`].
//! - **[`LexicalDatabase`]**: a interface consumida pelo núcleo.
//! - **[`MemoryLexicon`]**: uma implementação em memória, carregável de JSON.
//!
//! As relações guardam apenas identificadores ([`SenseId`]) e são resolvidas
//! pela base a cada consulta. Ciclos (ex: `similar_to` em ambos os sentidos)
//! são inofensivos porque nenhum sentido é dono de outro.
//!
//! ## Formato JSON
//!
//! ```json
//! {
//!   "senses": [
//!     {
//!       "id": "school.n.01",
//!       "pos": "noun",
//!       "lemmas": ["school"],
//!       "definition": "an educational institution",
//!       "examples": ["the school was founded in 1900"],
//!       "relations": { "hypernym": ["educational_institution.n.01"] }
//!     }
//!   ]
//! }
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LeskError, Result};
use crate::morphy::base_forms;

/// Classe gramatical de um sentido.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    /// Adjetivo satélite (tag `s` do WordNet), agrupado com `Adjective` nos filtros.
    AdjectiveSatellite,
    Adverb,
}

impl PartOfSpeech {
    /// Ordem em que as classes são consultadas quando nenhuma é informada.
    pub const LOOKUP_ORDER: [PartOfSpeech; 4] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
        PartOfSpeech::Adverb,
    ];

    /// Tag de uma letra usada pelo WordNet.
    pub fn tag(&self) -> char {
        match self {
            PartOfSpeech::Noun => 'n',
            PartOfSpeech::Verb => 'v',
            PartOfSpeech::Adjective => 'a',
            PartOfSpeech::AdjectiveSatellite => 's',
            PartOfSpeech::Adverb => 'r',
        }
    }

    /// Verdadeiro se um sentido desta classe passa pelo filtro `filter`.
    ///
    /// Filtrar por adjetivo também aceita adjetivos satélites.
    pub fn matches(&self, filter: PartOfSpeech) -> bool {
        match filter {
            PartOfSpeech::Adjective => {
                matches!(self, PartOfSpeech::Adjective | PartOfSpeech::AdjectiveSatellite)
            }
            other => *self == other,
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for PartOfSpeech {
    type Err = LeskError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "n" | "noun" => Ok(PartOfSpeech::Noun),
            "v" | "verb" => Ok(PartOfSpeech::Verb),
            "a" | "adj" | "adjective" => Ok(PartOfSpeech::Adjective),
            "s" | "adjective_satellite" => Ok(PartOfSpeech::AdjectiveSatellite),
            "r" | "adv" | "adverb" => Ok(PartOfSpeech::Adverb),
            other => Err(LeskError::invalid_argument(format!(
                "unknown part of speech '{}'",
                other
            ))),
        }
    }
}

/// Relações semânticas percorridas pela expansão de glosas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    Hypernym,
    Hyponym,
    PartMeronym,
    SubstanceMeronym,
    MemberMeronym,
    PartHolonym,
    SubstanceHolonym,
    MemberHolonym,
    Attribute,
    SimilarTo,
    AlsoSee,
}

impl RelationKind {
    /// Todas as relações, na ordem canônica.
    pub const ALL: [RelationKind; 11] = [
        RelationKind::Hypernym,
        RelationKind::Hyponym,
        RelationKind::PartMeronym,
        RelationKind::SubstanceMeronym,
        RelationKind::MemberMeronym,
        RelationKind::PartHolonym,
        RelationKind::SubstanceHolonym,
        RelationKind::MemberHolonym,
        RelationKind::Attribute,
        RelationKind::SimilarTo,
        RelationKind::AlsoSee,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RelationKind::Hypernym => "hypernym",
            RelationKind::Hyponym => "hyponym",
            RelationKind::PartMeronym => "part_meronym",
            RelationKind::SubstanceMeronym => "substance_meronym",
            RelationKind::MemberMeronym => "member_meronym",
            RelationKind::PartHolonym => "part_holonym",
            RelationKind::SubstanceHolonym => "substance_holonym",
            RelationKind::MemberHolonym => "member_holonym",
            RelationKind::Attribute => "attribute",
            RelationKind::SimilarTo => "similar_to",
            RelationKind::AlsoSee => "also_see",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identificador opaco de um sentido (ex: `school.n.01`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SenseId(pub String);

impl SenseId {
    pub fn new<S: Into<String>>(id: S) -> Self {
        SenseId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Um sentido (synset) com sua definição e ligações semânticas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sense {
    pub id: SenseId,
    pub pos: PartOfSpeech,
    /// Formas de dicionário que evocam este sentido.
    pub lemmas: Vec<String>,
    pub definition: String,
    #[serde(default)]
    pub examples: Vec<String>,
    /// Alvos de cada relação, na ordem fornecida pela fonte.
    #[serde(default)]
    pub relations: BTreeMap<RelationKind, Vec<SenseId>>,
}

impl Sense {
    pub fn new<S: Into<String>>(id: S, pos: PartOfSpeech, definition: S) -> Self {
        Self {
            id: SenseId::new(id),
            pos,
            lemmas: Vec::new(),
            definition: definition.into(),
            examples: Vec::new(),
            relations: BTreeMap::new(),
        }
    }

    pub fn with_lemma(mut self, lemma: &str) -> Self {
        self.lemmas.push(lemma.to_string());
        self
    }

    pub fn with_example(mut self, example: &str) -> Self {
        self.examples.push(example.to_string());
        self
    }

    pub fn with_relation(mut self, kind: RelationKind, target: &str) -> Self {
        self.relations.entry(kind).or_default().push(SenseId::new(target));
        self
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }

    /// Primeiro exemplo de uso, se houver.
    pub fn example(&self) -> Option<&str> {
        self.examples.first().map(String::as_str)
    }

    /// Identificadores ligados por `kind` (vazio se a relação não existe).
    pub fn related_ids(&self, kind: RelationKind) -> &[SenseId] {
        self.relations.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// A base lexical consultada pelo núcleo.
///
/// Palavras desconhecidas e relações sem alvo produzem listas vazias, nunca
/// erros. Implementações devem ser somente-leitura durante a desambiguação
/// (`Sync` permite pontuar candidatos em paralelo).
pub trait LexicalDatabase: Sync {
    /// Sentidos de `word`, na ordem natural da base, opcionalmente filtrados por classe.
    fn senses_for(&self, word: &str, pos: Option<PartOfSpeech>) -> Vec<&Sense>;

    /// Sentidos ligados a `sense` pela relação `kind`, na ordem da fonte.
    fn relation(&self, sense: &Sense, kind: RelationKind) -> Vec<&Sense>;
}

#[derive(Debug, Deserialize)]
struct LexiconFile {
    senses: Vec<Sense>,
}

/// Base lexical em memória.
///
/// Os sentidos são indexados pelo lema em minúsculas e enumerados na ordem de
/// inserção.
#[derive(Debug, Default)]
pub struct MemoryLexicon {
    senses: Vec<Sense>,
    by_id: HashMap<SenseId, usize>,
    by_lemma: HashMap<String, Vec<usize>>,
}

impl MemoryLexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Carrega e valida um léxico a partir de JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: LexiconFile = serde_json::from_str(json)?;
        let mut lexicon = Self::new();
        for sense in file.senses {
            lexicon.insert(sense)?;
        }
        lexicon.validate()?;
        Ok(lexicon)
    }

    /// Carrega e valida um léxico a partir de um arquivo JSON.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Adiciona um sentido. Falha se o identificador já existe.
    pub fn insert(&mut self, sense: Sense) -> Result<()> {
        if self.by_id.contains_key(&sense.id) {
            return Err(LeskError::DuplicateSense(sense.id.to_string()));
        }

        let idx = self.senses.len();
        self.by_id.insert(sense.id.clone(), idx);
        for lemma in &sense.lemmas {
            let entry = self.by_lemma.entry(lemma.to_lowercase()).or_default();
            if !entry.contains(&idx) {
                entry.push(idx);
            }
        }
        self.senses.push(sense);
        Ok(())
    }

    /// Verifica se todo alvo de relação existe no léxico.
    pub fn validate(&self) -> Result<()> {
        for sense in &self.senses {
            for (kind, targets) in &sense.relations {
                if let Some(missing) = targets.iter().find(|t| !self.by_id.contains_key(*t)) {
                    return Err(LeskError::UnknownSense {
                        from: sense.id.to_string(),
                        kind: kind.to_string(),
                        target: missing.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn get(&self, id: &SenseId) -> Option<&Sense> {
        self.by_id.get(id).map(|&idx| &self.senses[idx])
    }

    pub fn len(&self) -> usize {
        self.senses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.senses.is_empty()
    }

    /// Índices dos sentidos de uma forma exata e classe, na ordem de inserção.
    fn lookup(&self, form: &str, pos: PartOfSpeech) -> impl Iterator<Item = usize> + '_ {
        self.by_lemma
            .get(form)
            .map(Vec::as_slice)
            .unwrap_or(&[])
            .iter()
            .copied()
            .filter(move |&idx| self.senses[idx].pos.matches(pos))
    }
}

impl LexicalDatabase for MemoryLexicon {
    fn senses_for(&self, word: &str, pos: Option<PartOfSpeech>) -> Vec<&Sense> {
        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return Vec::new();
        }

        let poses: Vec<PartOfSpeech> = match pos {
            Some(p) => vec![p],
            None => PartOfSpeech::LOOKUP_ORDER.to_vec(),
        };

        let mut found: Vec<usize> = Vec::new();
        for p in poses {
            // Forma de superfície primeiro, depois as formas base que existirem
            let mut forms = vec![word.clone()];
            forms.extend(base_forms(&word, p));

            for form in &forms {
                for idx in self.lookup(form, p) {
                    if !found.contains(&idx) {
                        found.push(idx);
                    }
                }
            }
        }

        found.into_iter().map(|idx| &self.senses[idx]).collect()
    }

    fn relation(&self, sense: &Sense, kind: RelationKind) -> Vec<&Sense> {
        sense
            .related_ids(kind)
            .iter()
            .filter_map(|id| self.get(id))
            .collect()
    }
}
