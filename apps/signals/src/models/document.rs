use serde::{Deserialize, Serialize};

/// One fragment of extracted text with its position on the page.
///
/// Produced upstream by the document extractor; coordinates share a single
/// origin convention across all items of a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextItem {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_name: Option<String>,
}

impl TextItem {
    pub fn new(text: impl Into<String>, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            width,
            height,
            font_name: None,
        }
    }

    /// Right edge of the fragment.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// Ordered collection of text items belonging to one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub page_number: u32,
    #[serde(default)]
    pub items: Vec<TextItem>,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub text: String,
}

impl Page {
    /// Number of extracted characters on the page.
    ///
    /// Counts `text` when the extractor filled it, otherwise the item texts.
    pub fn char_count(&self) -> usize {
        if self.text.is_empty() {
            self.items.iter().map(|i| i.text.chars().count()).sum()
        } else {
            self.text.chars().count()
        }
    }

    /// The page text, reassembled from items when `text` is empty.
    pub fn full_text(&self) -> String {
        if self.text.is_empty() {
            self.items
                .iter()
                .map(|i| i.text.as_str())
                .collect::<Vec<_>>()
                .join(" ")
        } else {
            self.text.clone()
        }
    }
}
