//! Classification parameters for the layout analyzer.
//!
//! These values decide how a page is classified. Changing any of them changes
//! which documents read as multi-column, so every set carries a `version`
//! label that travels with the signals it produced.

use serde::{Deserialize, Serialize};

/// Versioned parameter set for column / density classification.
///
/// Ratios are fractions of the page width unless noted otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutTolerances {
    pub version: String,
    /// Left-edge clustering tolerance (fraction of page width).
    pub cluster_tolerance_ratio: f32,
    /// Minimum members for an x-cluster to count as a margin.
    pub min_cluster_members: usize,
    /// Row bucketing tolerance in page units (not a ratio).
    pub row_tolerance: f32,
    /// Horizontal gap that makes a row a true column row (fraction of page width).
    pub column_gap_ratio: f32,
    /// multiColumnRowRatio above this, with a strong right-half share, reads as multi-column.
    pub strong_row_ratio: f32,
    pub strong_right_half_ratio: f32,
    /// multiColumnRowRatio above this (and at most `strong_row_ratio`) reads as two columns.
    pub weak_row_ratio: f32,
    pub weak_right_half_ratio: f32,
    /// Pages with fewer items than this read as single-column.
    pub min_items_per_page: usize,
    /// Only the first N pages are inspected.
    pub max_pages: usize,
    /// Characters per file byte below which density is `low`.
    pub low_density_ratio: f64,
    /// Characters per file byte below which density is `medium`.
    pub medium_density_ratio: f64,
}

impl LayoutTolerances {
    /// The reference parameter set.
    pub fn v1() -> Self {
        Self {
            version: "v1".to_string(),
            cluster_tolerance_ratio: 0.02,
            min_cluster_members: 3,
            row_tolerance: 12.0,
            column_gap_ratio: 0.15,
            strong_row_ratio: 0.3,
            strong_right_half_ratio: 0.2,
            weak_row_ratio: 0.15,
            weak_right_half_ratio: 0.15,
            min_items_per_page: 10,
            max_pages: 3,
            low_density_ratio: 0.01,
            medium_density_ratio: 0.05,
        }
    }
}

impl Default for LayoutTolerances {
    fn default() -> Self {
        Self::v1()
    }
}
