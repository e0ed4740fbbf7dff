//! Guidance rules. Turns a snapshot of pre-computed scores into an ordered
//! list of actions for the UI.
//!
//! Each rule looks at the snapshot alone, never at what other rules decided,
//! with one exception: the all-clear item fires only when nothing else did.
//! List order is rule order.

use serde::{Deserialize, Serialize};
use tracing::debug;

// ────────────────────────────────────────────────────────────────────────────
// Thresholds
// ────────────────────────────────────────────────────────────────────────────

pub const PARSE_CRITICAL_BELOW: f64 = 40.0;
pub const PARSE_MODERATE_BELOW: f64 = 60.0;
pub const PARSE_ALL_CLEAR_AT: f64 = 80.0;
pub const KEYWORD_COVERAGE_LOW_BELOW: f64 = 50.0;
pub const SEMANTIC_MATCH_LOW_BELOW: f64 = 60.0;
pub const RECRUITER_SEARCH_LOW_BELOW: f64 = 50.0;

// ────────────────────────────────────────────────────────────────────────────
// Input / output
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KnockoutRisk {
    Low,
    Medium,
    High,
}

/// Scores gathered from the analyzers and external scorers. All percentages are 0–100.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidanceSnapshot {
    pub parse_health: f64,
    #[serde(default)]
    pub knockout_risk: Option<KnockoutRisk>,
    #[serde(default)]
    pub knockout_count: Option<u32>,
    #[serde(default)]
    pub semantic_match: Option<f64>,
    #[serde(default)]
    pub recruiter_search: Option<f64>,
    #[serde(default)]
    pub keyword_coverage: Option<f64>,
    #[serde(default)]
    pub has_job_description: bool,
    #[serde(default)]
    pub has_api_key: bool,
    #[serde(default)]
    pub has_access: bool,
    #[serde(default)]
    pub free_tier_remaining: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    Important,
    Suggested,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidanceItem {
    pub id: String,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    pub action_label: String,
    pub action_target: String,
}

impl GuidanceItem {
    fn new(
        id: &str,
        priority: Priority,
        title: &str,
        description: impl Into<String>,
        action_label: &str,
        action_target: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            priority,
            title: title.to_string(),
            description: description.into(),
            action_label: action_label.to_string(),
            action_target: action_target.to_string(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Evaluation
// ────────────────────────────────────────────────────────────────────────────

/// Evaluates every rule against the snapshot, in order.
pub fn evaluate_guidance(snapshot: &GuidanceSnapshot) -> Vec<GuidanceItem> {
    let s = snapshot;
    let mut items = Vec::new();

    if s.parse_health < PARSE_CRITICAL_BELOW {
        items.push(GuidanceItem::new(
            "parse-critical",
            Priority::Critical,
            "Your resume is hard for ATS software to read",
            format!(
                "Parse health is {:.0}%. Large parts of your resume may be lost or scrambled \
                 when an applicant tracking system extracts it.",
                s.parse_health
            ),
            "Review parsing issues",
            "parse-report",
        ));
    }

    if s.knockout_risk == Some(KnockoutRisk::High) {
        if let Some(count) = s.knockout_count.filter(|&c| c > 0) {
            items.push(GuidanceItem::new(
                "knockout-critical",
                Priority::Critical,
                "Possible automatic disqualifiers",
                format!(
                    "{count} knockout {} may screen you out before a recruiter sees your resume.",
                    if count == 1 { "requirement" } else { "requirements" }
                ),
                "Review knockout checks",
                "knockout-checks",
            ));
        }
    }

    if (PARSE_CRITICAL_BELOW..PARSE_MODERATE_BELOW).contains(&s.parse_health) {
        items.push(GuidanceItem::new(
            "parse-moderate",
            Priority::Important,
            "Some sections may not parse cleanly",
            format!(
                "Parse health is {:.0}%. Simplifying layout and formatting will help ATS \
                 software read every section.",
                s.parse_health
            ),
            "Review parsing issues",
            "parse-report",
        ));
    }

    if !s.has_job_description && s.parse_health >= PARSE_MODERATE_BELOW {
        items.push(GuidanceItem::new(
            "add-job-description",
            Priority::Important,
            "Add a job description",
            "Paste the posting you are applying to and we can check keywords and fit for that role.",
            "Add job description",
            "job-description",
        ));
    }

    if let Some(coverage) = s.keyword_coverage.filter(|&c| c < KEYWORD_COVERAGE_LOW_BELOW) {
        items.push(GuidanceItem::new(
            "low-keyword-coverage",
            Priority::Important,
            "Missing important keywords",
            format!(
                "Your resume covers {coverage:.0}% of the posting's key terms. Work the missing \
                 ones into your experience where they are accurate."
            ),
            "See missing keywords",
            "keyword-match",
        ));
    }

    if s.parse_health >= PARSE_MODERATE_BELOW
        && s.has_job_description
        && !s.has_api_key
        && !s.has_access
    {
        let description = match s.free_tier_remaining {
            Some(n) => format!(
                "Get a semantic fit analysis for this role. You have {n} free {} left.",
                if n == 1 { "analysis" } else { "analyses" }
            ),
            None => "Get a semantic fit analysis for this role.".to_string(),
        };
        items.push(GuidanceItem::new(
            "unlock-ai",
            Priority::Suggested,
            "Unlock AI analysis",
            description,
            "Run AI analysis",
            "ai-analysis",
        ));
    }

    if let Some(score) = s.semantic_match.filter(|&m| m < SEMANTIC_MATCH_LOW_BELOW) {
        items.push(GuidanceItem::new(
            "low-semantic-match",
            Priority::Suggested,
            "Align your experience with the role",
            format!(
                "Semantic match is {score:.0}%. Describe your work in terms closer to the \
                 posting's responsibilities."
            ),
            "See alignment details",
            "semantic-match",
        ));
    }

    if let Some(score) = s.recruiter_search.filter(|&r| r < RECRUITER_SEARCH_LOW_BELOW) {
        items.push(GuidanceItem::new(
            "low-recruiter-search",
            Priority::Suggested,
            "Improve recruiter searchability",
            format!(
                "Recruiter search visibility is {score:.0}%. Use the exact job title and core \
                 skills recruiters search for."
            ),
            "See search terms",
            "recruiter-search",
        ));
    }

    if items.is_empty() && s.parse_health >= PARSE_ALL_CLEAR_AT {
        items.push(GuidanceItem::new(
            "all-clear",
            Priority::Suggested,
            "Your resume looks ATS-ready",
            "No blocking issues found. Keep tailoring it to each role you apply for.",
            "View full report",
            "report",
        ));
    }

    let fired: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
    debug!(parse_health = s.parse_health, fired = ?fired, "Guidance evaluated");

    items
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn snapshot(parse_health: f64) -> GuidanceSnapshot {
        GuidanceSnapshot {
            parse_health,
            has_job_description: true,
            has_api_key: true,
            ..Default::default()
        }
    }

    fn ids(items: &[GuidanceItem]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_critical_parse_comes_first() {
        let s = GuidanceSnapshot {
            parse_health: 30.0,
            keyword_coverage: Some(20.0),
            semantic_match: Some(10.0),
            recruiter_search: Some(10.0),
            ..Default::default()
        };
        let items = evaluate_guidance(&s);
        assert_eq!(items[0].id, "parse-critical");
        assert_eq!(items[0].priority, Priority::Critical);
        assert!(items[1..].iter().all(|i| i.priority != Priority::Critical));
    }

    #[test]
    fn test_parse_thresholds() {
        assert_eq!(ids(&evaluate_guidance(&snapshot(39.9))), vec!["parse-critical"]);
        assert_eq!(ids(&evaluate_guidance(&snapshot(40.0))), vec!["parse-moderate"]);
        assert_eq!(ids(&evaluate_guidance(&snapshot(59.9))), vec!["parse-moderate"]);
        assert!(evaluate_guidance(&snapshot(60.0)).is_empty());
    }

    #[test]
    fn test_all_clear_only_when_nothing_fired() {
        assert_eq!(ids(&evaluate_guidance(&snapshot(80.0))), vec!["all-clear"]);
        assert!(evaluate_guidance(&snapshot(79.9)).is_empty());

        let s = GuidanceSnapshot {
            recruiter_search: Some(49.0),
            ..snapshot(95.0)
        };
        assert_eq!(ids(&evaluate_guidance(&s)), vec!["low-recruiter-search"]);
    }

    #[test]
    fn test_knockout_needs_high_risk_and_positive_count() {
        let high = |count| GuidanceSnapshot {
            knockout_risk: Some(KnockoutRisk::High),
            knockout_count: count,
            ..snapshot(90.0)
        };
        assert_eq!(ids(&evaluate_guidance(&high(Some(2)))), vec!["knockout-critical"]);
        assert_eq!(ids(&evaluate_guidance(&high(Some(0)))), vec!["all-clear"]);
        assert_eq!(ids(&evaluate_guidance(&high(None))), vec!["all-clear"]);

        let medium = GuidanceSnapshot {
            knockout_risk: Some(KnockoutRisk::Medium),
            knockout_count: Some(3),
            ..snapshot(90.0)
        };
        assert_eq!(ids(&evaluate_guidance(&medium)), vec!["all-clear"]);
    }

    #[test]
    fn test_missing_job_description() {
        let s = GuidanceSnapshot {
            has_job_description: false,
            ..snapshot(70.0)
        };
        assert_eq!(ids(&evaluate_guidance(&s)), vec!["add-job-description"]);

        let low = GuidanceSnapshot {
            has_job_description: false,
            ..snapshot(50.0)
        };
        assert_eq!(ids(&evaluate_guidance(&low)), vec!["parse-moderate"]);
    }

    #[test]
    fn test_score_thresholds_are_strict() {
        let s = GuidanceSnapshot {
            keyword_coverage: Some(50.0),
            semantic_match: Some(60.0),
            recruiter_search: Some(50.0),
            ..snapshot(70.0)
        };
        assert!(evaluate_guidance(&s).is_empty());

        let s = GuidanceSnapshot {
            keyword_coverage: Some(49.0),
            semantic_match: Some(59.0),
            recruiter_search: Some(49.0),
            ..snapshot(70.0)
        };
        assert_eq!(
            ids(&evaluate_guidance(&s)),
            vec!["low-keyword-coverage", "low-semantic-match", "low-recruiter-search"]
        );
    }

    #[test]
    fn test_unlock_ai_mentions_free_tier() {
        let locked = |remaining| GuidanceSnapshot {
            has_api_key: false,
            has_access: false,
            free_tier_remaining: remaining,
            ..snapshot(70.0)
        };
        let one = evaluate_guidance(&locked(Some(1)));
        assert_eq!(ids(&one), vec!["unlock-ai"]);
        assert!(one[0].description.contains("1 free analysis left"));

        let three = evaluate_guidance(&locked(Some(3)));
        assert!(three[0].description.contains("3 free analyses left"));

        let none = evaluate_guidance(&locked(None));
        assert!(!none[0].description.contains("free"));

        let with_access = GuidanceSnapshot {
            has_access: true,
            ..locked(Some(3))
        };
        assert!(evaluate_guidance(&with_access).is_empty());
    }

    #[test]
    fn test_rules_do_not_suppress_each_other() {
        let s = GuidanceSnapshot {
            parse_health: 45.0,
            knockout_risk: Some(KnockoutRisk::High),
            knockout_count: Some(1),
            keyword_coverage: Some(10.0),
            semantic_match: Some(10.0),
            recruiter_search: Some(10.0),
            has_job_description: true,
            ..Default::default()
        };
        assert_eq!(
            ids(&evaluate_guidance(&s)),
            vec![
                "knockout-critical",
                "parse-moderate",
                "low-keyword-coverage",
                "low-semantic-match",
                "low-recruiter-search",
            ]
        );
    }

    #[test]
    fn test_snapshot_deserializes_with_missing_optionals() {
        let s: GuidanceSnapshot = serde_json::from_str(
            r#"{"parseHealth": 85, "hasJobDescription": true, "hasApiKey": true, "hasAccess": false, "knockoutRisk": "low"}"#,
        )
        .unwrap();
        assert_eq!(s.knockout_risk, Some(KnockoutRisk::Low));
        assert_eq!(s.keyword_coverage, None);
        assert_eq!(ids(&evaluate_guidance(&s)), vec!["all-clear"]);
    }

    #[test]
    fn test_item_serializes_camel_case() {
        let items = evaluate_guidance(&snapshot(20.0));
        let json = serde_json::to_value(&items[0]).unwrap();
        assert_eq!(json["priority"], "critical");
        assert_eq!(json["actionTarget"], "parse-report");
        assert!(json.get("actionLabel").is_some());
    }
}
