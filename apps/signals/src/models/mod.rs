pub mod document;

pub use document::{Page, TextItem};
