//! Requirement zones: spans of the original posting that follow a
//! requirement-indicator phrase ("required", "must have", "experience with", …).
//!
//! Offsets are byte offsets into the ORIGINAL text. Each indicator match opens
//! a zone covering the next `ZONE_CHARS` characters counted from the start of
//! the phrase.

use std::ops::Range;

use crate::keywords::normalize::find_word;
use crate::keywords::vocabulary::REQUIREMENT_INDICATORS;

/// Zone length in characters.
pub const ZONE_CHARS: usize = 200;

/// Lowercased copy of a text that remembers where each byte came from.
pub struct LoweredText<'a> {
    original: &'a str,
    lower: String,
    /// `origin[i]` = byte offset in `original` of the char that produced `lower` byte `i`.
    origin: Vec<usize>,
}

impl<'a> LoweredText<'a> {
    pub fn new(original: &'a str) -> Self {
        let mut lower = String::with_capacity(original.len());
        let mut origin = Vec::with_capacity(original.len());
        for (offset, c) in original.char_indices() {
            for lc in c.to_lowercase() {
                let before = lower.len();
                lower.push(lc);
                origin.extend(std::iter::repeat(offset).take(lower.len() - before));
            }
        }
        Self {
            original,
            lower,
            origin,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.lower
    }

    pub fn original(&self) -> &'a str {
        self.original
    }

    /// Original byte offset of the first word-bounded occurrence of a lowercase needle.
    pub fn find_word_original(&self, needle: &str) -> Option<usize> {
        find_word(&self.lower, needle).map(|i| self.origin[i])
    }
}

/// Merged, sorted set of original-text byte ranges inside a requirement zone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequirementZones {
    spans: Vec<Range<usize>>,
}

impl RequirementZones {
    /// Marks a zone after every occurrence of every indicator phrase.
    pub fn mark(text: &LoweredText<'_>) -> Self {
        let original = text.original();
        let mut spans: Vec<Range<usize>> = Vec::new();

        for indicator in REQUIREMENT_INDICATORS {
            for (i, _) in text.as_str().match_indices(indicator) {
                let start = text.origin[i];
                let end = original[start..]
                    .char_indices()
                    .nth(ZONE_CHARS)
                    .map_or(original.len(), |(j, _)| start + j);
                spans.push(start..end);
            }
        }

        spans.sort_by_key(|r| (r.start, r.end));
        let mut merged: Vec<Range<usize>> = Vec::with_capacity(spans.len());
        for span in spans {
            match merged.last_mut() {
                Some(last) if span.start <= last.end => last.end = last.end.max(span.end),
                _ => merged.push(span),
            }
        }

        Self { spans: merged }
    }

    pub fn contains(&self, offset: usize) -> bool {
        let idx = self.spans.partition_point(|r| r.end <= offset);
        self.spans.get(idx).is_some_and(|r| r.start <= offset)
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn spans(&self) -> &[Range<usize>] {
        &self.spans
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_follows_indicator() {
        let text = "About us: we ship. Required: Kubernetes and AWS.";
        let lowered = LoweredText::new(text);
        let zones = RequirementZones::mark(&lowered);
        let start = text.find("Required").unwrap();
        assert_eq!(zones.spans(), &[start..text.len()]);
        assert!(zones.contains(text.find("Kubernetes").unwrap()));
        assert!(!zones.contains(text.find("ship").unwrap()));
    }

    #[test]
    fn test_zone_is_capped_at_200_chars() {
        let text = format!("must have {}", "x".repeat(400));
        let zones = RequirementZones::mark(&LoweredText::new(&text));
        assert_eq!(zones.spans(), &[0..200]);
        assert!(zones.contains(199));
        assert!(!zones.contains(200));
    }

    #[test]
    fn test_overlapping_zones_merge() {
        let text = "required experience with Go";
        let zones = RequirementZones::mark(&LoweredText::new(text));
        assert_eq!(zones.spans().len(), 1);
    }

    #[test]
    fn test_no_indicator_no_zone() {
        let zones = RequirementZones::mark(&LoweredText::new("We like tea."));
        assert!(zones.is_empty());
        assert!(!zones.contains(0));
    }

    #[test]
    fn test_offsets_map_back_through_unicode_lowercase() {
        // 'İ' lowercases to two chars, shifting lowercase offsets.
        let text = "İstanbul office. Required: Rust";
        let lowered = LoweredText::new(text);
        assert_eq!(lowered.find_word_original("rust"), Some(text.find("Rust").unwrap()));
        let zones = RequirementZones::mark(&lowered);
        assert!(zones.contains(text.find("Rust").unwrap()));
    }
}
