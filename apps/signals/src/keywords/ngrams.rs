//! Candidate n-gram extraction over normalized tokens.

use std::collections::HashMap;

use crate::keywords::vocabulary::is_stopword;

/// A unique n-gram and how often it occurs.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Space-joined normalized tokens.
    pub term: String,
    pub word_count: usize,
    pub frequency: usize,
}

/// No letters at all: "2024", "10-15", "3/4".
fn is_numeric(token: &str) -> bool {
    !token.chars().any(char::is_alphabetic)
}

/// Counts as a stopword for n-gram assembly. Numbers count too.
fn is_stop_like(token: &str) -> bool {
    is_stopword(token) || is_numeric(token)
}

fn long_enough(token: &str) -> bool {
    token.chars().count() >= 2
}

/// Unigrams: ≥2 chars, not a stopword, not numeric.
fn keep_unigram(token: &str) -> bool {
    long_enough(token) && !is_stop_like(token)
}

/// Bigrams: both ≥2 chars and at least one non-stopword.
fn keep_bigram(a: &str, b: &str) -> bool {
    long_enough(a) && long_enough(b) && !(is_stop_like(a) && is_stop_like(b))
}

/// Trigrams: all ≥2 chars and at most one stopword.
fn keep_trigram(tokens: &[&str]) -> bool {
    tokens.iter().all(|t| long_enough(t)) && tokens.iter().filter(|t| is_stop_like(t)).count() <= 1
}

/// Extracts unigram, bigram and trigram candidates with their frequencies.
///
/// Candidates come back in order of first appearance.
pub fn extract_ngrams(tokens: &[&str]) -> Vec<Candidate> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut candidates: Vec<Candidate> = Vec::new();

    let mut record = |term: String, word_count: usize| match index.get(&term) {
        Some(&i) => candidates[i].frequency += 1,
        None => {
            index.insert(term.clone(), candidates.len());
            candidates.push(Candidate {
                term,
                word_count,
                frequency: 1,
            });
        }
    };

    for i in 0..tokens.len() {
        let t = tokens[i];
        if keep_unigram(t) {
            record(t.to_string(), 1);
        }
        if let Some(&next) = tokens.get(i + 1) {
            if keep_bigram(t, next) {
                record(format!("{t} {next}"), 2);
            }
        }
        if i + 3 <= tokens.len() && keep_trigram(&tokens[i..i + 3]) {
            record(tokens[i..i + 3].join(" "), 3);
        }
    }

    candidates
}
