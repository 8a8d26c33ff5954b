use rand::SeedableRng;
use rand::rngs::StdRng;
use sha2::{Digest, Sha256};

use crate::app_config::ClozeConfig;
use crate::hangul::is_hangul_syllable;

// @module: Fill-in-the-blank drill generation

/// U+FF3F FULLWIDTH LOW LINE, wide enough to write a syllable into
pub const BLANK_CHAR: char = '＿';

/// A run of blanks sized for `n_syllables` syllables.
fn blank_run(n_syllables: usize, blanks_per_syllable: usize) -> String {
    let count = n_syllables.max(1) * blanks_per_syllable.max(1);
    BLANK_CHAR.to_string().repeat(count)
}

/// Generates the deduplicated pool of cloze variants for one sentence.
///
/// Word-level variants blank out whole space-separated tokens; span-level
/// variants blank out every contiguous Hangul span up to `max_span_len`
/// syllables. The full sentence itself is never a variant.
pub fn generate_cloze_pool(text: &str, config: &ClozeConfig) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    let mut seen = std::collections::HashSet::new();

    let mut emit = |candidate: String, out: &mut Vec<String>| {
        if candidate != text && seen.insert(candidate.clone()) {
            out.push(candidate);
        }
    };

    if config.include_word_level {
        let tokens: Vec<&str> = text.split(' ').collect();
        for (idx, token) in tokens.iter().enumerate() {
            if !token.chars().any(is_hangul_syllable) {
                continue;
            }
            let blanked: String = token
                .chars()
                .map(|c| if is_hangul_syllable(c) { BLANK_CHAR } else { c })
                .collect();
            let mut new_tokens: Vec<&str> = tokens.clone();
            new_tokens[idx] = &blanked;
            emit(new_tokens.join(" "), &mut out);
            if out.len() >= config.max_pool {
                return out;
            }
        }
    }

    if config.include_span_level {
        let chars: Vec<char> = text.chars().collect();
        for run in hangul_runs(&chars) {
            let run_len = run.len();
            for span_len in 1..=config.max_span_len.min(run_len) {
                for start in 0..=(run_len - span_len) {
                    let start_pos = run[start];
                    let end_pos = run[start + span_len - 1] + 1;
                    let mut candidate = String::new();
                    candidate.extend(&chars[..start_pos]);
                    candidate.push_str(&blank_run(span_len, config.blanks_per_syllable));
                    candidate.extend(&chars[end_pos..]);
                    emit(candidate, &mut out);
                    if out.len() >= config.max_pool {
                        return out;
                    }
                }
            }
        }
    }

    out
}

/// Contiguous runs of Hangul character positions, as char indices.
fn hangul_runs(chars: &[char]) -> Vec<Vec<usize>> {
    let mut runs: Vec<Vec<usize>> = Vec::new();
    let mut current: Vec<usize> = Vec::new();

    for (i, c) in chars.iter().enumerate() {
        if is_hangul_syllable(*c) {
            match current.last() {
                Some(last) if i == last + 1 => current.push(i),
                Some(_) => {
                    runs.push(std::mem::take(&mut current));
                    current.push(i);
                }
                None => current.push(i),
            }
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

/// RNG seeded from the SHA-256 of the sentence text.
///
/// The seed depends only on the text, so the same sentence always gets the
/// same drill selection across runs.
pub fn stable_rng_for_sentence(hangul: &str) -> StdRng {
    let digest = Sha256::digest(hangul.as_bytes());
    let mut seed_bytes = [0u8; 8];
    seed_bytes.copy_from_slice(&digest[..8]);
    StdRng::seed_from_u64(u64::from_be_bytes(seed_bytes))
}

/// Generates the pool and samples `config.sample_count` items from it.
pub fn select_cloze_items(text: &str, config: &ClozeConfig) -> Vec<String> {
    let pool = generate_cloze_pool(text, config);
    if pool.len() <= config.sample_count {
        return pool;
    }

    let mut rng = stable_rng_for_sentence(text);
    rand::seq::index::sample(&mut rng, pool.len(), config.sample_count)
        .iter()
        .map(|i| pool[i].clone())
        .collect()
}
