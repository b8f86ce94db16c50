use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use tracing::info;

use crate::reader;
use crate::segmenter::Segmenter;
use crate::writer;

/// Run statistics, serialized to JSON when the CLI is given `--stats-out`
#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    pub sentences: usize,
    pub paragraph_breaks: usize,
    pub input_bytes: u64,
    pub duration_ms: u64,
}

impl RunStats {
    pub fn total_rows(&self) -> usize {
        self.sentences + self.paragraph_breaks
    }
}

/// Full pipeline: read input, load abbreviations, segment, write rows.
///
/// Fatal on unreadable input or unwritable output; a missing abbreviation
/// file only logs a warning and continues with the empty set.
pub async fn run<P, Q, R>(input_path: P, output_path: Q, abbr_path: R) -> Result<RunStats>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    R: AsRef<Path>,
{
    let start_time = std::time::Instant::now();

    let (text, read_stats) = reader::read_text_file(&input_path).await?;
    let abbreviations = reader::load_abbreviations(&abbr_path).await;

    let segmenter = Segmenter::new(abbreviations);
    let segments = segmenter.segment(&text);

    writer::write_rows(&output_path, &segments).await?;

    let sentences = segments.iter().filter(|s| s.is_sentence()).count();
    let stats = RunStats {
        sentences,
        paragraph_breaks: segments.len() - sentences,
        input_bytes: read_stats.bytes_read,
        duration_ms: start_time.elapsed().as_millis() as u64,
    };
    info!(
        "pipeline complete: {} sentences, {} paragraph breaks in {}ms",
        stats.sentences, stats.paragraph_breaks, stats.duration_ms
    );
    Ok(stats)
}
