//! Fixed vocabularies for keyword extraction.
//!
//! Word lists live here as `const` slices; lookup sets are built once on first
//! use and never mutated afterwards.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

/// English function words plus job-posting boilerplate.
pub const STOPWORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "again", "all", "also", "am", "an", "and", "any",
    "are", "as", "at", "be", "been", "before", "being", "below", "between", "both", "but", "by",
    "can", "could", "did", "do", "does", "doing", "down", "during", "each", "eg", "either", "etc",
    "even", "every", "few", "for", "from", "further", "get", "go", "had", "has", "have", "having",
    "he", "her", "here", "him", "his", "how", "ie", "if", "in", "into", "is", "it", "its", "just",
    "like", "may", "me", "might", "more", "most", "much", "must", "my", "no", "nor", "not", "now",
    "of", "off", "on", "once", "one", "only", "or", "other", "our", "ours", "out", "over", "own",
    "per", "same", "shall", "she", "should", "so", "some", "such", "than", "that", "the", "their",
    "them", "then", "there", "these", "they", "this", "those", "through", "to", "too", "under",
    "until", "up", "upon", "us", "very", "via", "was", "we", "well", "were", "what", "when",
    "where", "which", "while", "who", "whom", "whose", "why", "will", "with", "within", "without",
    "would", "yet", "you", "your", "yours",
    // job-posting boilerplate
    "ability", "able", "apply", "based", "candidate", "candidates", "company", "equal", "excellent",
    "good", "great", "help", "ideal", "ideally", "include", "includes", "including", "join",
    "looking", "minimum", "new", "opportunity", "plus", "position", "preferred", "qualifications",
    "related", "relevant", "required", "requirement", "requirements", "responsibilities",
    "responsible", "role", "strong", "using", "work", "working", "year", "years",
];

/// Short terms that are real skills even though they look like stopwords or fragments.
pub const STOPWORD_EXCEPTIONS: &[&str] = &["go", "ai", "ml", "ui", "ux", "qa", "os", "bi"];

/// Known technical terms, in display form.
pub const TECH_TERMS: &[&str] = &[
    ".net", "agile", "airflow", "angular", "ansible", "api", "apis", "asp.net", "aws", "azure",
    "bash", "bigquery", "c#", "c++", "ci/cd", "css", "d3.js", "databricks", "devops", "django",
    "docker", "dynamodb", "elasticsearch", "etl", "excel", "express.js", "f#", "fastapi", "figma",
    "flask", "gcp", "git", "github", "gitlab", "go", "golang", "graphql", "grpc", "hadoop", "html",
    "java", "javascript", "jenkins", "jira", "kafka", "kotlin", "kubernetes", "k8s", "linux",
    "llm", "matlab", "microservices", "mlops", "mongodb", "mysql", "next.js", "nlp", "node.js",
    "nosql", "numpy", "oauth", "pandas", "php", "postgres", "postgresql", "power bi", "python",
    "pytorch", "rabbitmq", "rails", "react", "react.js", "redis", "rest", "ruby", "rust",
    "saas", "salesforce", "sass", "scala", "scikit-learn", "scrum", "snowflake", "spark", "spring",
    "sql", "swift", "tableau", "tailwind", "tensorflow", "terraform", "three.js", "typescript",
    "unix", "vb.net", "vue", "vue.js",
];

/// Phrases that open a requirement zone in the original posting text.
pub const REQUIREMENT_INDICATORS: &[&str] = &[
    "required",
    "requirements",
    "must have",
    "must-have",
    "must be",
    "minimum",
    "at least",
    "experience with",
    "experience in",
    "proficient in",
    "proficiency in",
    "proficiency with",
    "expertise in",
    "knowledge of",
    "background in",
    "qualifications",
];

/// Generic words whose presence in a term halves its score.
pub const GENERIC_FILLER: &[&str] = &[
    "experience",
    "communication",
    "management",
    "development",
    "environment",
    "business",
    "solutions",
    "understanding",
    "professional",
    "organization",
];

/// Punctuated technical names collapsed into a single token before tokenization.
///
/// `(spelling, token)`; the spelling doubles as the display form. Order matters:
/// longer spellings that contain a shorter one come first.
pub const COMPOUND_TERMS: &[(&str, &str)] = &[
    ("asp.net", "aspnetcompound"),
    ("vb.net", "vbnetcompound"),
    (".net", "dotnetcompound"),
    ("c++", "cppcompound"),
    ("c#", "csharpcompound"),
    ("f#", "fsharpcompound"),
    ("node.js", "nodejscompound"),
    ("react.js", "reactjscompound"),
    ("vue.js", "vuejscompound"),
    ("next.js", "nextjscompound"),
    ("express.js", "expressjscompound"),
    ("three.js", "threejscompound"),
    ("d3.js", "d3jscompound"),
];

static STOPWORD_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| STOPWORDS.iter().copied().collect());

static EXCEPTION_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STOPWORD_EXCEPTIONS.iter().copied().collect());

static TECH_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| TECH_TERMS.iter().copied().collect());

static FILLER_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| GENERIC_FILLER.iter().copied().collect());

static COMPOUND_DISPLAY: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    COMPOUND_TERMS
        .iter()
        .map(|&(spelling, token)| (token, spelling))
        .collect()
});

/// A stopword that is not on the exception list.
pub fn is_stopword(token: &str) -> bool {
    STOPWORD_SET.contains(token) && !EXCEPTION_SET.contains(token)
}

pub fn is_tech_term(term: &str) -> bool {
    TECH_SET.contains(term)
}

pub fn is_filler(token: &str) -> bool {
    FILLER_SET.contains(token)
}

/// Display spelling for a collapsed compound token, if `token` is one.
pub fn compound_display(token: &str) -> Option<&'static str> {
    COMPOUND_DISPLAY.get(token).copied()
}
