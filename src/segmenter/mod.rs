// WHY: Facade over the preprocessing and scanning passes so callers hand in
// raw text and get ordered segments back without touching scanner internals

pub mod abbreviations;
pub mod preprocess;
pub mod scanner;

pub use abbreviations::AbbreviationSet;
pub use preprocess::{normalize, NormalizedText, PARAGRAPH_MARKER};

/// One element of the ordered output sequence: a completed sentence or the
/// sentinel for a blank-line gap between paragraphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Sentence(String),
    ParagraphBreak,
}

impl Segment {
    pub fn is_sentence(&self) -> bool {
        matches!(self, Segment::Sentence(_))
    }
}

/// Explicit enumeration of the character classes the scanner reacts to.
///
/// Kept as data rather than hardcoded matches so the quote and paren
/// equivalence classes stay auditable in one place.
#[derive(Debug, Clone)]
pub struct ScannerRules {
    /// Primary terminators that can end a sentence
    pub terminators: Vec<char>,
    /// Paired opening quotes (curly variants)
    pub opening_quotes: Vec<char>,
    /// Paired closing quotes (curly variants)
    pub closing_quotes: Vec<char>,
    /// Quotes that are their own closers; tracked by parity
    pub ambiguous_quotes: Vec<char>,
    pub opening_parens: Vec<char>,
    pub closing_parens: Vec<char>,
}

impl Default for ScannerRules {
    fn default() -> Self {
        Self {
            terminators: vec!['.', '!', '?'],
            opening_quotes: vec!['\u{201C}'],
            closing_quotes: vec!['\u{201D}'],
            // Single quotes are excluded from depth tracking: apostrophes in
            // contractions would corrupt the counter
            ambiguous_quotes: vec!['"'],
            opening_parens: vec!['('],
            closing_parens: vec![')'],
        }
    }
}

/// Sentence segmenter: whitespace normalization followed by the single-pass
/// boundary scan. Read-only after construction, safe to share across texts.
#[derive(Debug, Clone, Default)]
pub struct Segmenter {
    rules: ScannerRules,
    abbreviations: AbbreviationSet,
}

impl Segmenter {
    /// Segmenter with the default character classes.
    pub fn new(abbreviations: AbbreviationSet) -> Self {
        Self {
            rules: ScannerRules::default(),
            abbreviations,
        }
    }

    /// Segmenter with custom character classes.
    pub fn with_rules(rules: ScannerRules, abbreviations: AbbreviationSet) -> Self {
        Self {
            rules,
            abbreviations,
        }
    }

    /// Split raw text into sentences and paragraph breaks.
    /// Total over any input string; order of output is order of input.
    pub fn segment(&self, raw: &str) -> Vec<Segment> {
        let normalized = preprocess::normalize(raw);
        scanner::scan(&normalized, &self.abbreviations, &self.rules)
    }
}
