// WHY: standalone whitespace normalization so the scanner only ever sees
// single spaces and explicit paragraph markers, never raw line breaks

/// In-band sentinel for a blank-line gap between paragraphs.
///
/// U+2029 PARAGRAPH SEPARATOR is itself whitespace, so normalization collapses
/// any literal occurrence in the input; the only way the char appears in a
/// `NormalizedText` is by being inserted here, which keeps it unambiguous
/// during scanning.
pub const PARAGRAPH_MARKER: char = '\u{2029}';

/// Text with whitespace runs collapsed and paragraph gaps marked in-band.
///
/// Only `normalize` constructs this, so the scanner can rely on its shape:
/// no tabs, no line breaks, no leading/trailing whitespace, interior
/// separators are exactly one space or one `PARAGRAPH_MARKER`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Collapse whitespace and mark paragraph boundaries.
///
/// Runs of whitespace become a single space, except runs containing two or
/// more line breaks, which become exactly one `PARAGRAPH_MARKER`. A single
/// line break inside a paragraph is ordinary whitespace. Leading and trailing
/// whitespace of the whole text is dropped. Total function: never fails.
pub fn normalize(raw: &str) -> NormalizedText {
    let mut out = String::with_capacity(raw.len());
    let mut in_whitespace = false;
    let mut newlines = 0usize;

    for ch in raw.chars() {
        if ch == '\n' {
            // \r\n counts once: the \r is folded into the same whitespace run
            in_whitespace = true;
            newlines += 1;
        } else if ch.is_whitespace() {
            in_whitespace = true;
        } else {
            if in_whitespace && !out.is_empty() {
                out.push(if newlines >= 2 { PARAGRAPH_MARKER } else { ' ' });
            }
            out.push(ch);
            in_whitespace = false;
            newlines = 0;
        }
    }
    // A trailing whitespace run is dropped entirely, marker or not

    NormalizedText(out)
}
