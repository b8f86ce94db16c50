// WHY: row serialization is the writer's concern alone; the scanner hands
// over segments and never sees CSV quoting or the break label

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use crate::segmenter::Segment;

/// Literal row text standing in for a paragraph break in the output file.
pub const PARAGRAPH_BREAK_LABEL: &str = "[PARAGRAPH BREAK]";

/// Encode segments as CSV, one single-column row per segment.
/// Fields are quoted only when they need it; embedded quotes are doubled.
pub fn encode_rows(segments: &[Segment]) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Sentence(text) => out.push_str(&encode_field(text)),
            Segment::ParagraphBreak => out.push_str(PARAGRAPH_BREAK_LABEL),
        }
        out.push('\n');
    }
    out
}

fn encode_field(field: &str) -> String {
    let needs_quoting = field
        .chars()
        .any(|c| matches!(c, ',' | '"' | '\n' | '\r'));
    if !needs_quoting {
        return field.to_string();
    }
    let mut quoted = String::with_capacity(field.len() + 2);
    quoted.push('"');
    for c in field.chars() {
        if c == '"' {
            quoted.push('"');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

/// Write one row per segment to the output path. Encoding happens before the
/// file is touched, so an unwritable path fails without partial output.
pub async fn write_rows<P: AsRef<Path>>(output_path: P, segments: &[Segment]) -> Result<usize> {
    let path = output_path.as_ref();
    let content = encode_rows(segments);

    tokio::fs::write(path, content)
        .await
        .with_context(|| format!("failed to write output file {}", path.display()))?;

    info!("wrote {} rows to {}", segments.len(), path.display());
    Ok(segments.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_plain_sentences_one_per_row() {
        let segments = vec![
            Segment::Sentence("First sentence.".into()),
            Segment::Sentence("Second sentence.".into()),
        ];
        assert_eq!(encode_rows(&segments), "First sentence.\nSecond sentence.\n");
    }

    #[test]
    fn test_paragraph_break_row_is_literal() {
        let segments = vec![
            Segment::Sentence("One.".into()),
            Segment::ParagraphBreak,
            Segment::Sentence("Two.".into()),
        ];
        assert_eq!(encode_rows(&segments), "One.\n[PARAGRAPH BREAK]\nTwo.\n");
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let segments = vec![Segment::Sentence("Well, well, well.".into())];
        assert_eq!(encode_rows(&segments), "\"Well, well, well.\"\n");
    }

    #[test]
    fn test_embedded_quotes_are_doubled() {
        let segments = vec![Segment::Sentence("He said, \"Go.\"".into())];
        assert_eq!(encode_rows(&segments), "\"He said, \"\"Go.\"\"\"\n");
    }

    #[test]
    fn test_empty_sequence_empty_file() {
        assert_eq!(encode_rows(&[]), "");
    }

    #[tokio::test]
    async fn test_write_rows_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");
        let segments = vec![
            Segment::Sentence("A sentence.".into()),
            Segment::ParagraphBreak,
            Segment::Sentence("Another one.".into()),
        ];

        let rows = write_rows(&path, &segments).await.unwrap();
        assert_eq!(rows, 3);

        let written = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(written, "A sentence.\n[PARAGRAPH BREAK]\nAnother one.\n");
    }

    #[tokio::test]
    async fn test_write_rows_unwritable_path_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("no_such_dir").join("out.csv");
        let result = write_rows(&path, &[Segment::Sentence("X.".into())]).await;
        assert!(result.is_err());
    }
}
