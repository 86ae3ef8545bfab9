//! # Lesk Estendido — Sobreposição Quadrática de Frases
//!
//! A medida de Banerjee & Pedersen (2003) recompensa frases compartilhadas: uma
//! sequência contígua de `L` tokens presente nas duas glosas vale `L²`, então
//! "school of thought" em comum vale 9, enquanto três palavras soltas valem 3.
//!
//! ## Algoritmo
//!
//! 1. Procura a maior sequência contígua comum ainda livre (de `L = |glosa1|`
//!    até 1). Em caso de empate no comprimento, vence o menor deslocamento na
//!    primeira glosa e, depois, o menor deslocamento na segunda.
//! 2. Soma `L²` e marca as duas regiões como consumidas.
//! 3. Recomeça do maior comprimento até nenhuma sequência ser encontrada.
//!
//! As regiões consumidas ficam registradas em uma máscara alinhada aos índices
//! originais; nenhuma janela que toque uma posição consumida é comparada. Como
//! cada correspondência consome ao menos um token de cada lado, o processo
//! termina.
//!
//! A medida não é simétrica em geral: com tokens repetidos, trocar a ordem das
//! glosas pode mudar quais regiões são consumidas primeiro.

use crate::tokenizer::Gloss;

/// Uma sequência comum: começa em `left` na primeira glosa, em `right` na
/// segunda, e tem `len` tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub left: usize,
    pub right: usize,
    pub len: usize,
}

impl Match {
    /// Contribuição desta sequência para a pontuação.
    pub fn score(&self) -> usize {
        self.len * self.len
    }
}

/// `runs[i]` = quantas posições livres consecutivas começam em `i`.
fn free_runs(consumed: &[bool]) -> Vec<usize> {
    let mut runs = vec![0; consumed.len()];
    let mut run = 0;
    for i in (0..consumed.len()).rev() {
        run = if consumed[i] { 0 } else { run + 1 };
        runs[i] = run;
    }
    runs
}

/// Encontra a maior sequência contígua comum entre as regiões livres das glosas.
///
/// `left_used` e `right_used` são as máscaras de posições consumidas, com o
/// mesmo comprimento das respectivas glosas.
pub fn find_longest_match(
    left: &[String],
    left_used: &[bool],
    right: &[String],
    right_used: &[bool],
) -> Option<Match> {
    let left_runs = free_runs(left_used);
    let right_runs = free_runs(right_used);

    // Nenhuma janela livre é maior que a maior sequência livre de cada lado
    let max_len = left_runs
        .iter()
        .max()
        .copied()
        .unwrap_or(0)
        .min(right_runs.iter().max().copied().unwrap_or(0));

    for len in (1..=max_len).rev() {
        for i in 0..=(left.len() - len) {
            if left_runs[i] < len {
                continue;
            }
            let window = &left[i..i + len];
            for j in 0..=(right.len() - len) {
                if right_runs[j] >= len && &right[j..j + len] == window {
                    return Some(Match {
                        left: i,
                        right: j,
                        len,
                    });
                }
            }
        }
    }

    None
}

/// Pontuação estendida de Lesk entre duas glosas ordenadas.
pub fn extended_overlap(gloss1: &[String], gloss2: &[String]) -> usize {
    let mut left_used = vec![false; gloss1.len()];
    let mut right_used = vec![false; gloss2.len()];
    let mut score = 0;

    while let Some(m) = find_longest_match(gloss1, &left_used, gloss2, &right_used) {
        tracing::trace!(
            len = m.len,
            left = m.left,
            right = m.right,
            phrase = %gloss1[m.left..m.left + m.len].join(" "),
            "overlap claimed"
        );
        score += m.score();
        left_used[m.left..m.left + m.len].fill(true);
        right_used[m.right..m.right + m.len].fill(true);
    }

    score
}

/// Soma da pontuação estendida sobre todos os pares (glosa do candidato, glosa do contexto).
pub fn extended_score(candidate: &[Gloss], context: &[Vec<Gloss>]) -> usize {
    candidate
        .iter()
        .map(|e1| {
            context
                .iter()
                .flatten()
                .map(|e2| extended_overlap(e1, e2))
                .sum::<usize>()
        })
        .sum()
}
