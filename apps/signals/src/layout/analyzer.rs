//! Layout analyzer — infers column structure, header placement risk and text
//! density from the positioned text of the first few pages.
//!
//! # Per page
//! 1. Cluster left edges into candidate margins (`margins`).
//! 2. Group items into pseudo-rows and count rows with a wide horizontal gap (`rows`).
//! 3. Classify: strong multi-column evidence → 2 or 3 columns depending on
//!    whether margins populate all three page thirds; weak evidence → 2
//!    columns; anything else → 1 column.
//!
//! # Per document
//! The highest column count and highest risk tier over the checked pages win.
//! Header/contact risk and density are computed over all checked pages.
//!
//! Every path has a fallback. Insufficient data converges on
//! 1 column / `low` / `low`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::layout::contact::{classify_header_risk, detect_contact_info, ContactSignals};
use crate::layout::margins::{cluster_left_margins, spans_all_thirds, MarginCluster};
use crate::layout::rows::{detect_column_streams, ColumnStreamStats};
use crate::layout::tolerances::LayoutTolerances;
use crate::models::document::Page;

// ────────────────────────────────────────────────────────────────────────────
// Output types
// ────────────────────────────────────────────────────────────────────────────

/// Three-tier risk scale. Ordering is `Low < Medium < High`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
}

/// Extracted characters per byte of the source file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDensity {
    #[default]
    Low,
    Medium,
    High,
}

/// Document-level layout signals consumed by downstream scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfLayoutSignals {
    /// 1, 2 or 3.
    pub estimated_columns: u8,
    pub column_merge_risk: RiskLevel,
    pub header_contact_risk: RiskLevel,
    pub text_density: TextDensity,
}

impl Default for PdfLayoutSignals {
    fn default() -> Self {
        Self {
            estimated_columns: 1,
            column_merge_risk: RiskLevel::Low,
            header_contact_risk: RiskLevel::Low,
            text_density: TextDensity::Low,
        }
    }
}

/// Diagnostics for a single checked page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageLayoutReading {
    pub page_number: u32,
    pub columns: u8,
    pub risk: RiskLevel,
    pub multi_column_row_ratio: f32,
    pub right_half_ratio: f32,
    pub row_count: usize,
    pub margin_clusters: Vec<MarginCluster>,
    /// False when the page had too few items (or no usable width) to classify.
    pub sufficient_data: bool,
}

impl PageLayoutReading {
    fn insufficient(page_number: u32) -> Self {
        Self {
            page_number,
            columns: 1,
            risk: RiskLevel::Low,
            multi_column_row_ratio: 0.0,
            right_half_ratio: 0.0,
            row_count: 0,
            margin_clusters: vec![],
            sufficient_data: false,
        }
    }
}

/// Full analysis: the signals plus everything they were derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutAnalysis {
    pub signals: PdfLayoutSignals,
    pub pages: Vec<PageLayoutReading>,
    pub contact: ContactSignals,
    pub total_chars: usize,
    pub density_ratio: f64,
    pub tolerances_version: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Entry points
// ────────────────────────────────────────────────────────────────────────────

/// Analyzes the first pages of a document with the reference tolerances.
pub fn analyze_layout(pages: &[Page], file_size: u64) -> PdfLayoutSignals {
    analyze_layout_with(pages, file_size, &LayoutTolerances::default())
}

/// Analyzes the first pages of a document with an explicit parameter set.
pub fn analyze_layout_with(
    pages: &[Page],
    file_size: u64,
    tolerances: &LayoutTolerances,
) -> PdfLayoutSignals {
    analyze_layout_detailed(pages, file_size, tolerances).signals
}

/// Runs the full analysis and keeps the per-page readings.
pub fn analyze_layout_detailed(
    pages: &[Page],
    file_size: u64,
    tolerances: &LayoutTolerances,
) -> LayoutAnalysis {
    let checked: Vec<&Page> = pages.iter().take(tolerances.max_pages).collect();
    let total_items: usize = checked.iter().map(|p| p.items.len()).sum();

    let readings: Vec<PageLayoutReading> = checked
        .iter()
        .map(|p| analyze_page(p, tolerances))
        .collect();

    let full_text = checked
        .iter()
        .map(|p| p.full_text())
        .collect::<Vec<_>>()
        .join("\n");
    let contact = detect_contact_info(&full_text);
    let total_chars: usize = checked.iter().map(|p| p.char_count()).sum();

    if !readings.iter().any(|r| r.sufficient_data) {
        debug!(
            pages = checked.len(),
            items = total_items,
            "Layout analysis: no checked page has enough text items, using conservative signals"
        );
        return LayoutAnalysis {
            signals: PdfLayoutSignals::default(),
            pages: readings,
            contact,
            total_chars,
            density_ratio: 0.0,
            tolerances_version: tolerances.version.clone(),
        };
    }

    let estimated_columns = readings.iter().map(|r| r.columns).max().unwrap_or(1);
    let column_merge_risk = readings
        .iter()
        .map(|r| r.risk)
        .max()
        .unwrap_or(RiskLevel::Low);
    let (density_ratio, text_density) = classify_density(total_chars, file_size, tolerances);

    let signals = PdfLayoutSignals {
        estimated_columns,
        column_merge_risk,
        header_contact_risk: classify_header_risk(&contact),
        text_density,
    };

    debug!(
        pages = readings.len(),
        columns = signals.estimated_columns,
        risk = ?signals.column_merge_risk,
        density_ratio,
        contact_found = contact.any(),
        "Layout analysis complete"
    );

    LayoutAnalysis {
        signals,
        pages: readings,
        contact,
        total_chars,
        density_ratio,
        tolerances_version: tolerances.version.clone(),
    }
}

/// Classifies a single page.
pub fn analyze_page(page: &Page, tolerances: &LayoutTolerances) -> PageLayoutReading {
    let width = page.width;
    if page.items.len() < tolerances.min_items_per_page || !width.is_finite() || width <= 0.0 {
        return PageLayoutReading::insufficient(page.page_number);
    }

    let clusters = cluster_left_margins(&page.items, width, tolerances);
    let stats = detect_column_streams(&page.items, width, tolerances);
    let (columns, risk) = classify_columns(&stats, &clusters, width, tolerances);

    debug!(
        page = page.page_number,
        multi_column_row_ratio = stats.multi_column_row_ratio,
        right_half_ratio = stats.right_half_ratio,
        clusters = clusters.len(),
        columns,
        "Page layout classified"
    );

    PageLayoutReading {
        page_number: page.page_number,
        columns,
        risk,
        multi_column_row_ratio: stats.multi_column_row_ratio,
        right_half_ratio: stats.right_half_ratio,
        row_count: stats.row_count,
        margin_clusters: clusters,
        sufficient_data: true,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Classification
// ────────────────────────────────────────────────────────────────────────────

fn classify_columns(
    stats: &ColumnStreamStats,
    clusters: &[MarginCluster],
    page_width: f32,
    tolerances: &LayoutTolerances,
) -> (u8, RiskLevel) {
    let rows = stats.multi_column_row_ratio;
    let right = stats.right_half_ratio;

    if rows > tolerances.strong_row_ratio && right > tolerances.strong_right_half_ratio {
        if spans_all_thirds(clusters, page_width) {
            (3, RiskLevel::High)
        } else {
            (2, RiskLevel::Medium)
        }
    } else if rows > tolerances.weak_row_ratio
        && rows <= tolerances.strong_row_ratio
        && right > tolerances.weak_right_half_ratio
    {
        (2, RiskLevel::Medium)
    } else {
        (1, RiskLevel::Low)
    }
}

/// Returns `(chars / file_size, tier)`. A zero file size reads as `Low`.
pub fn classify_density(
    total_chars: usize,
    file_size: u64,
    tolerances: &LayoutTolerances,
) -> (f64, TextDensity) {
    if file_size == 0 {
        return (0.0, TextDensity::Low);
    }
    let ratio = total_chars as f64 / file_size as f64;
    let tier = if ratio < tolerances.low_density_ratio {
        TextDensity::Low
    } else if ratio < tolerances.medium_density_ratio {
        TextDensity::Medium
    } else {
        TextDensity::High
    };
    (ratio, tier)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::models::document::TextItem;
    use proptest::prelude::*;

    fn arb_item() -> impl Strategy<Value = TextItem> {
        (
            "[a-zA-Z ]{0,12}",
            -50.0f32..700.0,
            -50.0f32..900.0,
            0.0f32..400.0,
            0.0f32..30.0,
        )
            .prop_map(|(text, x, y, w, h)| TextItem::new(text, x, y, w, h))
    }

    proptest! {
        /// Property: arbitrary pages always produce signals inside the contract enumerations.
        #[test]
        fn signals_stay_in_contract(
            items in prop::collection::vec(arb_item(), 0..80),
            width in prop_oneof![Just(0.0f32), 1.0f32..1000.0],
            file_size in 0u64..2_000_000,
        ) {
            let page = Page { page_number: 1, items, width, height: 792.0, text: String::new() };
            let signals = analyze_layout(&[page], file_size);
            prop_assert!((1..=3).contains(&signals.estimated_columns));
            prop_assert_eq!(signals.header_contact_risk, RiskLevel::Low);
        }
    }
}
