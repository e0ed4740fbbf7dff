//! Prioritized next steps derived from analysis scores.

pub mod rules;

pub use rules::{evaluate_guidance, GuidanceItem, GuidanceSnapshot, KnockoutRisk, Priority};
