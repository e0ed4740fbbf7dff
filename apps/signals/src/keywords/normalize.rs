//! Text normalization for keyword extraction, and the inverse display mapping.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::keywords::vocabulary::{compound_display, COMPOUND_TERMS};

static URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:https?://|www\.)\S+").expect("valid url pattern"));

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid email pattern"));

/// Lowercases, strips URLs and emails, collapses punctuated technical names
/// into single tokens, keeps only alphanumerics / whitespace / `-` / `/`, and
/// collapses whitespace.
pub fn normalize(text: &str) -> String {
    let lower = text.to_lowercase();
    let without_urls = URL_PATTERN.replace_all(&lower, " ");
    let mut cleaned = EMAIL_PATTERN.replace_all(&without_urls, " ").into_owned();

    for &(spelling, token) in COMPOUND_TERMS {
        if cleaned.contains(spelling) {
            cleaned = cleaned.replace(spelling, &format!(" {token} "));
        }
    }

    let restricted: String = cleaned
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() || c == '-' || c == '/' {
                c
            } else {
                ' '
            }
        })
        .collect();

    restricted.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Splits normalized text into tokens, trimming stray leading/trailing `-` and `/`.
pub fn tokenize(normalized: &str) -> Vec<&str> {
    normalized
        .split_whitespace()
        .map(|t| t.trim_matches(|c| c == '-' || c == '/'))
        .filter(|t| !t.is_empty())
        .collect()
}

/// Converts collapsed compound tokens in a term back to their punctuated spelling.
pub fn restore_display(term: &str) -> String {
    term.split(' ')
        .map(|token| compound_display(token).unwrap_or(token))
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric()
}

/// Byte offset of the first occurrence of `needle` in `haystack` that is not
/// glued to a neighbouring letter or digit.
pub fn find_word(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }
    haystack.match_indices(needle).map(|(i, _)| i).find(|&i| {
        let before_ok = haystack[..i].chars().next_back().map_or(true, |c| !is_word_char(c));
        let after_ok = haystack[i + needle.len()..]
            .chars()
            .next()
            .map_or(true, |c| !is_word_char(c));
        before_ok && after_ok
    })
}

pub fn contains_word(haystack: &str, needle: &str) -> bool {
    find_word(haystack, needle).is_some()
}
