pub mod pipeline;
pub mod reader;
pub mod segmenter;
pub mod writer;

// Re-export main types for convenient access
pub use pipeline::{run, RunStats};
pub use segmenter::{AbbreviationSet, ScannerRules, Segment, Segmenter};
pub use writer::PARAGRAPH_BREAK_LABEL;
