//! # Tokenizador de Glosas
//!
//! Converte texto bruto (definições de dicionário, sentenças de contexto) em uma
//! sequência ordenada de tokens minúsculos e puramente alfabéticos.
//!
//! A tokenização acontece em duas etapas:
//!
//! 1. **Segmentação** ([`WordTokenizer`]): divide o texto em palavras e pontuações
//!    usando as fronteiras de palavra do Unicode (UAX #29). Nenhum filtro é
//!    aplicado aqui; `"school,"` vira `"school"` e `","`. Clíticos do inglês são
//!    separados da palavra: `"person's"` vira `"person"` e `"'s"`, `"don't"` vira
//!    `"do"` e `"n't"`.
//! 2. **Normalização** ([`normalize`]): descarta tudo que não é alfabético
//!    (números, pontuação, fragmentos com hífen ou apóstrofo) e converte para
//!    minúsculas. Tokens descartados são removidos, nunca substituídos.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use lesk_core::tokenizer::tokenize;
//!
//! let gloss = tokenize("An institution for the instruction of children (in 2 forms).");
//! assert_eq!(gloss, vec!["an", "institution", "for", "the", "instruction", "of", "children", "in", "forms"]);
//! ```

use unicode_segmentation::UnicodeSegmentation;

/// Um token normalizado: minúsculo, alfabético e nunca vazio.
pub type Token = String;

/// Uma glosa tokenizada. A ordem importa para o Lesk estendido.
pub type Gloss = Vec<Token>;

/// Segmentador de texto bruto em tokens (palavras e pontuações).
///
/// O núcleo só depende desta interface; o filtro alfabético é aplicado depois,
/// por [`normalize`].
pub trait WordTokenizer {
    fn word_tokenize(&self, text: &str) -> Vec<String>;
}

/// Segmentador padrão baseado nas fronteiras de palavra do Unicode.
///
/// Palavras ligadas por hífen ("well-known", "3-year") permanecem um único
/// token, de modo que o filtro alfabético as descarta por inteiro. Já os
/// clíticos (`'s`, `n't`, `'re`...) viram tokens próprios e a palavra base
/// sobrevive ao filtro.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeWordTokenizer;

impl WordTokenizer for UnicodeWordTokenizer {
    fn word_tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens: Vec<String> = Vec::new();

        for chunk in text.split_whitespace() {
            let chunk_start = tokens.len();
            let mut segments = chunk.split_word_bounds().peekable();

            while let Some(segment) = segments.next() {
                let glued_to_word = segment == "-"
                    && tokens.len() > chunk_start
                    && tokens.last().map(|t| is_wordlike(t)).unwrap_or(false);

                if glued_to_word {
                    if let Some(next) = segments.next_if(|next| is_wordlike(next)) {
                        if let Some(last) = tokens.last_mut() {
                            last.push('-');
                            last.push_str(next);
                        }
                        continue;
                    }
                }
                let (word, clitic) = split_clitic(segment);
                tokens.push(word.to_string());
                if let Some(clitic) = clitic {
                    tokens.push(clitic.to_string());
                }
            }
        }

        tokens
    }
}

/// Clíticos após o apóstrofo, em minúsculas (`n't` é tratado à parte).
const CLITICS: &[&str] = &["s", "re", "ve", "ll", "d", "m"];

fn is_apostrophe(c: char) -> bool {
    c == '\'' || c == '\u{2019}'
}

/// Separa um clítico final do segmento: "person's" → ("person", "'s").
fn split_clitic(segment: &str) -> (&str, Option<&str>) {
    let apostrophe = match segment.rfind(is_apostrophe) {
        Some(pos) => pos,
        None => return (segment, None),
    };
    let stem = &segment[..apostrophe];
    let clitic = &segment[apostrophe..];
    let after = clitic.chars().skip(1).collect::<String>().to_lowercase();

    if after == "t" && stem.len() > 1 && (stem.ends_with('n') || stem.ends_with('N')) {
        let split = apostrophe - 1;
        return (&segment[..split], Some(&segment[split..]));
    }
    if is_wordlike(stem) && CLITICS.contains(&after.as_str()) {
        return (stem, Some(clitic));
    }
    (segment, None)
}

fn is_wordlike(segment: &str) -> bool {
    segment.chars().any(char::is_alphanumeric)
}

/// Verdadeiro se o token é não-vazio e todos os caracteres são letras.
pub fn is_alphabetic(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}

/// Filtra e normaliza tokens já segmentados.
pub fn normalize<S: AsRef<str>>(tokens: &[S]) -> Gloss {
    tokens
        .iter()
        .map(AsRef::as_ref)
        .filter(|tok| is_alphabetic(tok))
        .map(str::to_lowercase)
        .collect()
}

/// Tokeniza texto bruto com o segmentador informado.
pub fn tokenize_with<T: WordTokenizer + ?Sized>(tokenizer: &T, text: &str) -> Gloss {
    normalize(&tokenizer.word_tokenize(text))
}

/// Tokeniza texto bruto com o segmentador padrão.
pub fn tokenize(text: &str) -> Gloss {
    tokenize_with(&UnicodeWordTokenizer, text)
}
