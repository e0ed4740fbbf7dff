//! Resume-vs-posting keyword coverage.
//!
//! A keyword counts as covered when the resume mentions it, or any spelling
//! from its synonym group, as a whole word. The percent feeds the guidance
//! snapshot's `keywordCoverage`.

use serde::{Deserialize, Serialize};

use crate::keywords::extractor::KeywordSet;
use crate::keywords::normalize::contains_word;
use crate::keywords::synonyms::lookup_synonyms;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordCoverage {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    /// 0–100, one decimal. `None` when the posting yielded no keywords.
    pub coverage_percent: Option<f64>,
}

/// Checks the critical then optional keywords of `keywords` against `resume_text`.
pub fn keyword_coverage(resume_text: &str, keywords: &KeywordSet) -> KeywordCoverage {
    let resume = resume_text
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    let mut coverage = KeywordCoverage::default();
    for keyword in keywords.critical.iter().chain(&keywords.optional) {
        let covered = lookup_synonyms(keyword)
            .all_forms()
            .iter()
            .any(|form| contains_word(&resume, form));
        if covered {
            coverage.matched.push(keyword.clone());
        } else {
            coverage.missing.push(keyword.clone());
        }
    }

    let total = coverage.matched.len() + coverage.missing.len();
    if total > 0 {
        let ratio = coverage.matched.len() as f64 / total as f64;
        coverage.coverage_percent = Some((ratio * 1000.0).round() / 10.0);
    }

    coverage
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn set(critical: &[&str], optional: &[&str]) -> KeywordSet {
        let critical: Vec<String> = critical.iter().map(|s| s.to_string()).collect();
        let optional: Vec<String> = optional.iter().map(|s| s.to_string()).collect();
        let all = critical.iter().chain(&optional).cloned().collect();
        KeywordSet {
            critical,
            optional,
            all,
        }
    }

    #[test]
    fn test_matches_through_synonyms() {
        let keywords = set(&["kubernetes", "amazon web services"], &["terraform"]);
        let resume = "Ran K8s clusters on AWS for three years.";
        let coverage = keyword_coverage(resume, &keywords);
        assert_eq!(coverage.matched, vec!["kubernetes", "amazon web services"]);
        assert_eq!(coverage.missing, vec!["terraform"]);
        assert_eq!(coverage.coverage_percent, Some(66.7));
    }

    #[test]
    fn test_requires_whole_words() {
        let keywords = set(&["go"], &[]);
        let coverage = keyword_coverage("Managed MongoDB and Django apps", &keywords);
        assert_eq!(coverage.missing, vec!["go"]);
        assert_eq!(coverage.coverage_percent, Some(0.0));
    }

    #[test]
    fn test_phrases_match_across_line_breaks() {
        let keywords = set(&["machine learning"], &[]);
        let coverage = keyword_coverage("Applied Machine\n   Learning to fraud", &keywords);
        assert_eq!(coverage.coverage_percent, Some(100.0));
    }

    #[test]
    fn test_everyday_abbreviations_do_not_cover_skills() {
        let keywords = set(&["computer vision", "node.js", "typescript"], &[]);
        let resume = "CV available on request. Each node and TS report was reviewed.";
        let coverage = keyword_coverage(resume, &keywords);
        assert!(coverage.matched.is_empty(), "{:?}", coverage.matched);
        assert_eq!(coverage.coverage_percent, Some(0.0));
    }

    #[test]
    fn test_empty_keyword_set_has_no_percent() {
        let coverage = keyword_coverage("anything", &KeywordSet::default());
        assert!(coverage.matched.is_empty());
        assert!(coverage.missing.is_empty());
        assert_eq!(coverage.coverage_percent, None);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(keyword_coverage("rust", &set(&["rust"], &[]))).unwrap();
        assert_eq!(json["coveragePercent"], 100.0);
        assert_eq!(json["matched"][0], "rust");
    }
}
