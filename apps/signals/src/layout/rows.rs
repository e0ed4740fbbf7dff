//! Pseudo-row grouping and column-stream detection.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::layout::tolerances::LayoutTolerances;
use crate::models::document::TextItem;

/// Ratios describing how much of a page reads as side-by-side columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnStreamStats {
    pub row_count: usize,
    /// Rows holding at least one wide horizontal gap.
    pub column_rows: usize,
    /// `column_rows / row_count`.
    pub multi_column_row_ratio: f32,
    /// Share of items starting right of the page midpoint.
    pub right_half_ratio: f32,
}

/// Buckets items into pseudo-rows by `y`.
///
/// The bucket key is `round(y / row_tolerance)`, so items within the same
/// tolerance band share a row. Rows come back top-to-bottom in key order with
/// their items sorted left-to-right.
pub fn group_rows<'a>(items: &'a [TextItem], row_tolerance: f32) -> Vec<Vec<&'a TextItem>> {
    let tolerance = if row_tolerance > 0.0 { row_tolerance } else { 1.0 };
    let mut buckets: BTreeMap<i64, Vec<&TextItem>> = BTreeMap::new();

    for item in items.iter().filter(|i| i.y.is_finite() && i.x.is_finite()) {
        let key = (item.y / tolerance).round() as i64;
        buckets.entry(key).or_default().push(item);
    }

    buckets
        .into_values()
        .map(|mut row| {
            row.sort_by(|a, b| a.x.total_cmp(&b.x));
            row
        })
        .collect()
}

/// True when some adjacent pair in a sorted row is separated by more than `min_gap`.
fn has_column_gap(row: &[&TextItem], min_gap: f32) -> bool {
    row.windows(2).any(|pair| pair[1].x - pair[0].right() > min_gap)
}

/// Measures column structure on one page.
pub fn detect_column_streams(
    items: &[TextItem],
    page_width: f32,
    tolerances: &LayoutTolerances,
) -> ColumnStreamStats {
    let rows = group_rows(items, tolerances.row_tolerance);
    if rows.is_empty() {
        return ColumnStreamStats::default();
    }

    let min_gap = tolerances.column_gap_ratio * page_width;
    let column_rows = rows
        .iter()
        .filter(|row| row.len() >= 2 && has_column_gap(row, min_gap))
        .count();

    let midpoint = page_width / 2.0;
    let positioned: Vec<&TextItem> = rows.iter().flatten().copied().collect();
    let right_half = positioned.iter().filter(|i| i.x > midpoint).count();

    ColumnStreamStats {
        row_count: rows.len(),
        column_rows,
        multi_column_row_ratio: column_rows as f32 / rows.len() as f32,
        right_half_ratio: right_half as f32 / positioned.len() as f32,
    }
}
