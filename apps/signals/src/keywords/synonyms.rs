//! Bidirectional skill synonym table.
//!
//! Every group has one canonical phrase and any number of abbreviations or
//! alternate spellings. Looking up any member returns the whole group, so
//! resume text can be matched against a keyword however either side spells it.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// `(canonical, alternates)`.
pub const SYNONYM_GROUPS: &[(&str, &[&str])] = &[
    ("javascript", &["js", "ecmascript", "es6"]),
    ("typescript", &[]),
    ("python", &["python3"]),
    ("go", &["golang"]),
    ("c++", &["cpp", "cplusplus"]),
    ("c#", &["csharp", "c-sharp"]),
    (".net", &["dotnet", "dot net"]),
    ("node.js", &["nodejs"]),
    ("react", &["react.js", "reactjs"]),
    ("vue", &["vue.js", "vuejs"]),
    ("next.js", &["nextjs"]),
    ("postgresql", &["postgres", "psql"]),
    ("mongodb", &["mongo"]),
    ("kubernetes", &["k8s", "kube"]),
    ("amazon web services", &["aws"]),
    ("google cloud platform", &["gcp", "google cloud"]),
    ("microsoft azure", &["azure"]),
    ("continuous integration", &["ci", "ci/cd", "continuous delivery"]),
    ("machine learning", &["ml"]),
    ("artificial intelligence", &["ai"]),
    ("deep learning", &[]),
    ("natural language processing", &["nlp"]),
    ("large language models", &["llm", "llms"]),
    ("computer vision", &[]),
    ("user experience", &["ux"]),
    ("user interface", &["ui"]),
    ("quality assurance", &["qa"]),
    ("search engine optimization", &["seo"]),
    ("customer relationship management", &["crm"]),
    ("enterprise resource planning", &["erp"]),
    ("key performance indicators", &["kpi", "kpis"]),
    ("business intelligence", &["bi"]),
    ("extract transform load", &["etl"]),
    ("software as a service", &["saas"]),
    ("application programming interface", &["api", "apis"]),
    ("object-oriented programming", &["oop", "object oriented programming"]),
    ("test-driven development", &["tdd", "test driven development"]),
    ("infrastructure as code", &["iac"]),
    ("site reliability engineering", &["sre"]),
    ("project management professional", &["pmp"]),
    ("structured query language", &["sql"]),
    ("amazon ec2", &["ec2"]),
    ("amazon s3", &["s3"]),
];

/// Any member (canonical or alternate) → group index.
static SYNONYM_INDEX: Lazy<HashMap<&'static str, usize>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for (i, (canonical, alternates)) in SYNONYM_GROUPS.iter().enumerate() {
        index.insert(*canonical, i);
        for alt in alternates.iter() {
            index.insert(*alt, i);
        }
    }
    index
});

/// A keyword's canonical form and its known alternates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymGroup {
    pub canonical: String,
    pub alternates: Vec<String>,
}

impl SynonymGroup {
    /// Canonical form first, then alternates.
    pub fn all_forms(&self) -> Vec<&str> {
        std::iter::once(self.canonical.as_str())
            .chain(self.alternates.iter().map(String::as_str))
            .collect()
    }
}

fn clean_key(keyword: &str) -> String {
    keyword
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Returns the synonym group for `keyword`.
///
/// Unknown keywords come back as their own canonical form with no alternates.
pub fn lookup_synonyms(keyword: &str) -> SynonymGroup {
    let key = clean_key(keyword);
    match SYNONYM_INDEX.get(key.as_str()) {
        Some(&i) => {
            let (canonical, alternates) = SYNONYM_GROUPS[i];
            SynonymGroup {
                canonical: canonical.to_string(),
                alternates: alternates.iter().map(|a| a.to_string()).collect(),
            }
        }
        None => SynonymGroup {
            canonical: key,
            alternates: vec![],
        },
    }
}

/// True when `term` is the canonical phrase of some synonym group.
pub fn is_canonical(term: &str) -> bool {
    SYNONYM_INDEX
        .get(term)
        .is_some_and(|&i| SYNONYM_GROUPS[i].0 == term)
}
