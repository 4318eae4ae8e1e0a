//! Trigram-based fuzzy title similarity.
//!
//! Reimplements pg_trgm-style scoring in pure code: titles are lowercased
//! and split into words, each word is padded with two leading spaces and
//! one trailing space, and all character trigrams are collected into a
//! set. Whole-string similarity is the Jaccard overlap of two titles'
//! trigram sets; word similarity is the best overlap between the query and
//! any contiguous word window of the candidate, which makes the measure
//! tolerant of word order and extra words.

use std::collections::HashSet;

/// Minimum whole-string similarity for a candidate to be retained.
pub const SIMILARITY_THRESHOLD: f64 = 0.2;

/// Minimum word similarity for a candidate to be retained.
pub const WORD_SIMILARITY_THRESHOLD: f64 = 0.3;

type Trigram = (char, char, char);

fn words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_owned)
        .collect()
}

fn word_trigrams(word: &str, out: &mut HashSet<Trigram>) {
    let padded: Vec<char> = std::iter::repeat_n(' ', 2)
        .chain(word.chars())
        .chain(std::iter::once(' '))
        .collect();
    for window in padded.windows(3) {
        if let [a, b, c] = *window {
            out.insert((a, b, c));
        }
    }
}

fn trigram_set(word_list: &[String]) -> HashSet<Trigram> {
    let mut set = HashSet::new();
    for word in word_list {
        word_trigrams(word, &mut set);
    }
    set
}

fn jaccard(a: &HashSet<Trigram>, b: &HashSet<Trigram>) -> f64 {
    let shared = a.intersection(b).count();
    let union = a.len() + b.len() - shared;
    if union == 0 {
        return 0.0;
    }
    shared_ratio(shared, union)
}

fn shared_ratio(shared: usize, union: usize) -> f64 {
    // Counts are tiny (bounded by title length); the conversions are exact.
    let shared_f = shared as f64;
    let union_f = union as f64;
    shared_f / union_f
}

/// Whole-string trigram similarity between two texts, in `[0, 1]`.
#[must_use]
pub fn similarity(a: &str, b: &str) -> f64 {
    jaccard(&trigram_set(&words(a)), &trigram_set(&words(b)))
}

/// Greatest similarity between `query` and any contiguous word window of
/// `target`, in `[0, 1]`.
#[must_use]
pub fn word_similarity(query: &str, target: &str) -> f64 {
    let query_set = trigram_set(&words(query));
    let target_words = words(target);
    if target_words.is_empty() {
        return jaccard(&query_set, &HashSet::new());
    }

    let mut best = 0.0_f64;
    for start in 0..target_words.len() {
        for end in start..target_words.len() {
            let Some(window) = target_words.get(start..=end) else {
                continue;
            };
            let score = jaccard(&query_set, &trigram_set(window));
            if score > best {
                best = score;
            }
        }
    }
    best
}

/// Combined relevance score of a candidate title against a query.
///
/// Returns `None` when the candidate clears neither threshold (whole-string
/// similarity above [`SIMILARITY_THRESHOLD`] or word similarity above
/// [`WORD_SIMILARITY_THRESHOLD`]); otherwise the greater of the two scores,
/// used as the descending ranking key.
#[must_use]
pub fn title_score(query: &str, candidate: &str) -> Option<f64> {
    let whole = similarity(query, candidate);
    let word = word_similarity(query, candidate);
    if whole > SIMILARITY_THRESHOLD || word > WORD_SIMILARITY_THRESHOLD {
        Some(whole.max(word))
    } else {
        None
    }
}
