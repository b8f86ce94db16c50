// WHY: boundary detection is an explicit single-pass char fold with depth
// counters, so every suppression rule is visible at the point it applies and
// the scanner stays total over arbitrary input

use tracing::debug;

use super::abbreviations::AbbreviationSet;
use super::preprocess::{NormalizedText, PARAGRAPH_MARKER};
use super::{ScannerRules, Segment};

/// Per-scan mutable context. Created at scan start, discarded at scan end;
/// the buffer resets at each emitted sentence, the depths at each paragraph.
#[derive(Debug)]
struct ScanState {
    quote_depth: usize,
    paren_depth: usize,
    // Straight double quotes are their own closers, so parity decides whether
    // the next one opens or closes
    straight_quote_open: bool,
    ellipsis_run: usize,
    buffer: String,
}

impl ScanState {
    fn new() -> Self {
        Self {
            quote_depth: 0,
            paren_depth: 0,
            straight_quote_open: false,
            ellipsis_run: 0,
            buffer: String::new(),
        }
    }

    fn toggle_straight_quote(&mut self) {
        if self.straight_quote_open {
            self.quote_depth = self.quote_depth.saturating_sub(1);
        } else {
            self.quote_depth += 1;
        }
        self.straight_quote_open = !self.straight_quote_open;
    }

    /// An unbalanced quote or paren must not leak across a paragraph boundary.
    fn reset_for_paragraph(&mut self) {
        self.quote_depth = 0;
        self.paren_depth = 0;
        self.straight_quote_open = false;
        self.ellipsis_run = 0;
    }

    fn flush_sentence(&mut self, out: &mut Vec<Segment>) {
        let content = self.buffer.trim();
        if !content.is_empty() {
            out.push(Segment::Sentence(content.to_string()));
        }
        self.buffer.clear();
    }
}

/// Split normalized text into sentences and paragraph breaks.
///
/// Single left-to-right pass with bounded lookbehind (the token preceding a
/// candidate period, read off the buffer) and bounded lookahead (trailing
/// closers and the first character of the next sentence). Total: malformed or
/// unbalanced input degrades gracefully, it never errors.
pub(crate) fn scan(
    text: &NormalizedText,
    abbreviations: &AbbreviationSet,
    rules: &ScannerRules,
) -> Vec<Segment> {
    let chars: Vec<char> = text.as_str().chars().collect();
    debug!("scanning {} chars", chars.len());

    let mut out = Vec::new();
    let mut state = ScanState::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == PARAGRAPH_MARKER {
            state.flush_sentence(&mut out);
            // Never a break at the start of output or doubled up
            if matches!(out.last(), Some(Segment::Sentence(_))) {
                out.push(Segment::ParagraphBreak);
            }
            state.reset_for_paragraph();
            i += 1;
            continue;
        }

        if rules.terminators.contains(&c) {
            state.buffer.push(c);

            if c == '.' {
                // Hold evaluation while a dot run is still growing
                if chars.get(i + 1) == Some(&'.') {
                    state.ellipsis_run += 1;
                    i += 1;
                    continue;
                }
                let run_len = state.ellipsis_run + 1;
                state.ellipsis_run = 0;

                if run_len >= 2 {
                    // Ellipsis does not terminate unless a capitalised fresh
                    // start follows past any closing quotes
                    i = consume_trailing(&mut state, &chars, i + 1, rules);
                    if state.quote_depth == 0
                        && state.paren_depth == 0
                        && next_is_uppercase(&chars, i)
                    {
                        state.flush_sentence(&mut out);
                    }
                    continue;
                }

                if suppressed_by_abbreviation(&state.buffer, &chars, i, abbreviations) {
                    i += 1;
                    continue;
                }
            }

            // Boundary candidate: trailing closers and terminators (?!, !", .")
            // belong to this sentence whether or not it commits
            i = consume_trailing(&mut state, &chars, i + 1, rules);
            if state.quote_depth == 0
                && state.paren_depth == 0
                && starts_new_sentence(&chars, i, rules)
            {
                state.flush_sentence(&mut out);
            }
            continue;
        }

        state.ellipsis_run = 0;
        if rules.opening_quotes.contains(&c) {
            state.quote_depth += 1;
        } else if rules.closing_quotes.contains(&c) {
            state.quote_depth = state.quote_depth.saturating_sub(1);
        } else if rules.ambiguous_quotes.contains(&c) {
            state.toggle_straight_quote();
        } else if rules.opening_parens.contains(&c) {
            state.paren_depth += 1;
        } else if rules.closing_parens.contains(&c) {
            state.paren_depth = state.paren_depth.saturating_sub(1);
        }
        state.buffer.push(c);
        i += 1;
    }

    // Input exhaustion ends the text: flush even without a terminator, and
    // even when the last token was an abbreviation
    state.flush_sentence(&mut out);

    debug!("scan produced {} segments", out.len());
    out
}

/// Consume the run of closing quotes, closing parens, and extra terminators
/// that immediately follows a candidate, appending them to the buffer and
/// keeping the depth counters honest. Returns the index after the run.
fn consume_trailing(
    state: &mut ScanState,
    chars: &[char],
    mut i: usize,
    rules: &ScannerRules,
) -> usize {
    while let Some(&c) = chars.get(i) {
        if rules.terminators.contains(&c) {
            state.buffer.push(c);
        } else if rules.closing_quotes.contains(&c) {
            state.quote_depth = state.quote_depth.saturating_sub(1);
            state.buffer.push(c);
        } else if rules.ambiguous_quotes.contains(&c) && state.straight_quote_open {
            // A straight quote here closes the open span; an unopened one
            // would open the next sentence and is left alone
            state.toggle_straight_quote();
            state.buffer.push(c);
        } else if rules.closing_parens.contains(&c) {
            state.paren_depth = state.paren_depth.saturating_sub(1);
            state.buffer.push(c);
        } else {
            break;
        }
        i += 1;
    }
    i
}

/// Does the text at `i` (after the consumed trailing punctuation) begin a new
/// sentence? End of input, a paragraph marker, an uppercase letter, a digit,
/// or opening quote/paren punctuation all qualify; a lowercase continuation
/// (dialogue attribution like `"Hello," she said.`) does not.
fn starts_new_sentence(chars: &[char], mut i: usize, rules: &ScannerRules) -> bool {
    while let Some(&c) = chars.get(i) {
        if c == PARAGRAPH_MARKER {
            return true;
        }
        if c.is_whitespace() {
            i += 1;
            continue;
        }
        return c.is_uppercase()
            || c.is_ascii_digit()
            || rules.opening_quotes.contains(&c)
            || rules.ambiguous_quotes.contains(&c)
            || rules.opening_parens.contains(&c);
    }
    true
}

/// Stricter lookahead for the end of a dot run: only an uppercase fresh start
/// lets an ellipsis terminate the sentence.
fn next_is_uppercase(chars: &[char], mut i: usize) -> bool {
    while let Some(&c) = chars.get(i) {
        if c == PARAGRAPH_MARKER {
            return false;
        }
        if c.is_whitespace() {
            i += 1;
            continue;
        }
        return c.is_uppercase();
    }
    false
}

/// Lookbehind suppression for a single period at `dot_idx`.
///
/// Beyond the loaded list, three structural rules apply: a lone letter is an
/// initial ("J. Smith", the "p." of "p.m."), a dotted multi-letter token
/// ("Ph.D", "U.S.A") is an abbreviation whether or not it was listed, and a
/// period with `letter.` directly ahead sits mid-run inside a dotted
/// abbreviation.
fn suppressed_by_abbreviation(
    buffer: &str,
    chars: &[char],
    dot_idx: usize,
    abbreviations: &AbbreviationSet,
) -> bool {
    let token = preceding_token(buffer);
    if token.is_empty() {
        return false;
    }
    if abbreviations.contains(&token) {
        return true;
    }

    let mut token_chars = token.chars();
    if let (Some(only), None) = (token_chars.next(), token_chars.next()) {
        if only.is_alphabetic() {
            return true;
        }
    }

    if token.contains('.') && token.chars().all(|c| c.is_alphabetic() || c == '.') {
        return true;
    }

    matches!(
        (chars.get(dot_idx + 1), chars.get(dot_idx + 2)),
        (Some(a), Some('.')) if a.is_alphabetic()
    )
}

/// The maximal run of letter/digit/period chars ending just before the
/// candidate period, read backward off the accumulated buffer.
fn preceding_token(buffer: &str) -> String {
    let mut collected: Vec<char> = buffer
        .chars()
        .rev()
        .skip(1) // the candidate period itself
        .take_while(|c| c.is_alphanumeric() || *c == '.')
        .collect();
    collected.reverse();
    collected.into_iter().collect()
}
