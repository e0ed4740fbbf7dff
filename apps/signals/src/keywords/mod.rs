//! Job-posting keyword extraction, synonym lookup and resume coverage.

pub mod coverage;
pub mod extractor;
pub mod ngrams;
pub mod normalize;
pub mod synonyms;
pub mod vocabulary;
pub mod zones;

pub use coverage::{keyword_coverage, KeywordCoverage};
pub use extractor::{extract_keywords, rank_keywords, KeywordSet, RankedKeyword};
pub use synonyms::{lookup_synonyms, SynonymGroup};
