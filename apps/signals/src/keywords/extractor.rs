//! Keyword extraction — turns a raw job posting into a ranked, partitioned
//! keyword set. Pure, deterministic, never fails.
//!
//! Pipeline:
//! 1. normalize + tokenize (`normalize`)
//! 2. mark requirement zones on the original text (`zones`)
//! 3. collect unigram / bigram / trigram candidates (`ngrams`)
//! 4. score: frequency × zone × uppercase × specificity × technical × filler
//! 5. rank, then drop containment duplicates in rank order
//! 6. partition into critical / optional / all

use std::cmp::Ordering;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::keywords::ngrams::{extract_ngrams, Candidate};
use crate::keywords::normalize::{contains_word, normalize, restore_display, tokenize};
use crate::keywords::synonyms::is_canonical;
use crate::keywords::vocabulary::{is_filler, is_tech_term};
use crate::keywords::zones::{LoweredText, RequirementZones};

pub const CRITICAL_LIMIT: usize = 15;
pub const OPTIONAL_LIMIT: usize = 15;

const ZONE_BOOST: f64 = 2.0;
const UPPERCASE_BOOST: f64 = 1.5;
const BIGRAM_BOOST: f64 = 1.3;
const TRIGRAM_BOOST: f64 = 1.5;
const TECH_BOOST: f64 = 1.5;
const FILLER_PENALTY: f64 = 0.5;

/// Terms longer than this (in bytes) skip the substring index and are checked linearly.
const MAX_INDEXED_TERM_LEN: usize = 64;

// ────────────────────────────────────────────────────────────────────────────
// Output types
// ────────────────────────────────────────────────────────────────────────────

/// A scored term behind `KeywordSet::all`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedKeyword {
    /// Display form (compound technical names restored).
    pub term: String,
    pub score: f64,
    pub frequency: usize,
    pub word_count: usize,
    pub in_requirement_zone: bool,
}

/// Ranked keywords split into the top tier, the next tier, and everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordSet {
    pub critical: Vec<String>,
    pub optional: Vec<String>,
    pub all: Vec<String>,
}

impl KeywordSet {
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// Builds the partition from an already ranked, deduplicated list.
    pub fn from_ranked(ranked: &[RankedKeyword]) -> Self {
        let all: Vec<String> = ranked.iter().map(|k| k.term.clone()).collect();
        let critical = all.iter().take(CRITICAL_LIMIT).cloned().collect();
        let optional = all
            .iter()
            .skip(CRITICAL_LIMIT)
            .take(OPTIONAL_LIMIT)
            .cloned()
            .collect();
        Self {
            critical,
            optional,
            all,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Entry points
// ────────────────────────────────────────────────────────────────────────────

/// Extracts the partitioned keyword set from job-posting text.
pub fn extract_keywords(text: &str) -> KeywordSet {
    KeywordSet::from_ranked(&rank_keywords(text))
}

/// Scores, ranks and deduplicates every candidate term in the posting.
pub fn rank_keywords(text: &str) -> Vec<RankedKeyword> {
    let normalized = normalize(text);
    let tokens = tokenize(&normalized);
    if tokens.is_empty() {
        return vec![];
    }

    let lowered = LoweredText::new(text);
    let zones = RequirementZones::mark(&lowered);
    let candidates = extract_ngrams(&tokens);

    let mut scored: Vec<RankedKeyword> = candidates
        .iter()
        .map(|c| score_candidate(c, text, &lowered, &zones))
        .collect();
    scored.sort_by(compare_rank);

    let ranked = drop_contained(&scored);

    debug!(
        candidates = candidates.len(),
        kept = ranked.len(),
        zones = zones.spans().len(),
        "Keyword ranking complete"
    );

    ranked
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring
// ────────────────────────────────────────────────────────────────────────────

fn score_candidate(
    candidate: &Candidate,
    original: &str,
    lowered: &LoweredText<'_>,
    zones: &RequirementZones,
) -> RankedKeyword {
    let display = restore_display(&candidate.term);
    let mut score = candidate.frequency as f64;

    let in_zone = first_occurrence(&display, lowered).is_some_and(|offset| zones.contains(offset));
    if in_zone {
        score *= ZONE_BOOST;
    }

    if appears_uppercase(&display, original) {
        score *= UPPERCASE_BOOST;
    }

    score *= match candidate.word_count {
        2 => BIGRAM_BOOST,
        3 => TRIGRAM_BOOST,
        _ => 1.0,
    };

    if is_tech_term(&display) || is_canonical(&display) {
        score *= TECH_BOOST;
    }

    if display.split(' ').any(is_filler) {
        score *= FILLER_PENALTY;
    }

    RankedKeyword {
        term: display,
        score,
        frequency: candidate.frequency,
        word_count: candidate.word_count,
        in_requirement_zone: in_zone,
    }
}

/// Original-text offset of the term's first occurrence.
///
/// Punctuation between words can hide a multi-word phrase from a literal
/// search; the first word's position stands in for it then.
fn first_occurrence(display: &str, lowered: &LoweredText<'_>) -> Option<usize> {
    lowered.find_word_original(display).or_else(|| {
        display
            .split(' ')
            .next()
            .and_then(|first| lowered.find_word_original(first))
    })
}

/// The term occurs as a standalone all-caps word (or phrase) in the original.
fn appears_uppercase(display: &str, original: &str) -> bool {
    if !display.chars().any(char::is_alphabetic) {
        return false;
    }
    contains_word(original, &display.to_uppercase())
}

// ────────────────────────────────────────────────────────────────────────────
// Ranking + containment dedup
// ────────────────────────────────────────────────────────────────────────────

/// Score descending, then more words, then longer, then lexical.
fn compare_rank(a: &RankedKeyword, b: &RankedKeyword) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| b.word_count.cmp(&a.word_count))
        .then_with(|| b.term.len().cmp(&a.term.len()))
        .then_with(|| a.term.cmp(&b.term))
}

/// Every char-boundary substring of `s`, without allocating.
fn substrings(s: &str) -> impl Iterator<Item = &str> {
    s.char_indices().flat_map(move |(start, _)| {
        let rest = &s[start..];
        rest.char_indices()
            .skip(1)
            .map(|(end, _)| end)
            .chain(std::iter::once(rest.len()))
            .map(move |end| &rest[..end])
    })
}

/// Kept terms plus every substring of every kept term, for O(L²) containment checks.
#[derive(Default)]
struct ContainmentIndex<'a> {
    kept: HashSet<&'a str>,
    fragments: HashSet<&'a str>,
    long_terms: Vec<&'a str>,
}

impl<'a> ContainmentIndex<'a> {
    /// True when `term` contains, or is contained in, a kept term.
    fn conflicts(&self, term: &str) -> bool {
        if self.fragments.contains(term) || self.long_terms.iter().any(|k| k.contains(term)) {
            return true;
        }
        if term.len() <= MAX_INDEXED_TERM_LEN {
            substrings(term).any(|sub| self.kept.contains(sub))
        } else {
            self.kept.iter().any(|k| term.contains(k))
        }
    }

    fn insert(&mut self, term: &'a str) {
        self.kept.insert(term);
        if term.len() <= MAX_INDEXED_TERM_LEN {
            self.fragments.extend(substrings(term));
        } else {
            self.long_terms.push(term);
        }
    }
}

/// Walks terms in rank order and drops any term that contains, or is
/// contained in, a term already kept.
///
/// On equal score the more specific term ranks first, so it is the one kept.
fn drop_contained(ranked: &[RankedKeyword]) -> Vec<RankedKeyword> {
    let mut index = ContainmentIndex::default();
    let mut kept = Vec::new();

    for keyword in ranked {
        if index.conflicts(&keyword.term) {
            continue;
        }
        index.insert(&keyword.term);
        kept.push(keyword.clone());
    }

    kept
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
