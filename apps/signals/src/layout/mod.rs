// Layout analysis: column structure, header/contact placement risk and text
// density from positioned text. Pure, synchronous, never fails.

pub mod analyzer;
pub mod contact;
pub mod margins;
pub mod rows;
pub mod tolerances;

// Re-export the public API consumed by the CLI and downstream scoring.
pub use analyzer::{
    analyze_layout, analyze_layout_detailed, analyze_layout_with, analyze_page, LayoutAnalysis,
    PageLayoutReading, PdfLayoutSignals, RiskLevel, TextDensity,
};
pub use contact::{detect_contact_info, ContactSignals};
pub use tolerances::LayoutTolerances;
