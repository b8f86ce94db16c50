// WHY: Centralized abbreviation lookup so the scanner can veto boundary
// candidates without knowing how the list was loaded or normalized

use std::collections::HashSet;

/// Case-sensitive abbreviation lookup with O(1) membership tests.
///
/// Each registered entry is stored in both dotted and undotted form, so the
/// scanner can test the token it reads off the buffer either way and get a
/// consistent answer. Multi-part dotted entries additionally register their
/// final segment (e.g. loading "Ph.D." makes `contains("D.")` true), which
/// lets the scanner re-check a token when one terminator immediately follows
/// another inside a dotted abbreviation.
#[derive(Debug, Clone, Default)]
pub struct AbbreviationSet {
    entries: HashSet<String>,
}

impl AbbreviationSet {
    /// Empty set: every period is treated as an ordinary terminator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from raw lines of an abbreviation file.
    /// Leading/trailing whitespace is stripped; blank lines and `#` comments
    /// are ignored. Dotted and undotted forms are both accepted on input.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for line in lines {
            let entry = line.as_ref().trim();
            if entry.is_empty() || entry.starts_with('#') {
                continue;
            }
            set.register(entry);
        }
        set
    }

    fn register(&mut self, entry: &str) {
        let stripped = entry.trim_end_matches('.');
        if stripped.is_empty() {
            return;
        }
        self.entries.insert(entry.to_string());
        self.entries.insert(stripped.to_string());

        // Final segment of a multi-part entry, so "D." in "Ph.D." matches
        if let Some(last) = stripped.rsplit('.').next() {
            if !last.is_empty() && last != stripped {
                self.entries.insert(last.to_string());
                self.entries.insert(format!("{last}."));
            }
        }
    }

    /// Membership test for the token immediately preceding a candidate period.
    /// Accepts the token with or without its trailing period.
    pub fn contains(&self, token: &str) -> bool {
        if token.is_empty() {
            return false;
        }
        if self.entries.contains(token) {
            return true;
        }
        let stripped = token.trim_end_matches('.');
        !stripped.is_empty() && self.entries.contains(stripped)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
