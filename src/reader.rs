use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::segmenter::AbbreviationSet;

/// Statistics for one input read
#[derive(Debug, Clone)]
pub struct ReadStats {
    pub file_path: String,
    pub bytes_read: u64,
    pub duration_ms: u64,
}

/// Read the whole input text with async I/O.
///
/// A missing or unreadable input file is fatal: the error propagates with
/// path context and nothing downstream runs, so no partial output is written.
pub async fn read_text_file<P: AsRef<Path>>(file_path: P) -> Result<(String, ReadStats)> {
    let path = file_path.as_ref();
    let start_time = std::time::Instant::now();

    debug!("reading input file: {}", path.display());
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read input file {}", path.display()))?;

    let stats = ReadStats {
        file_path: path.display().to_string(),
        bytes_read: text.len() as u64,
        duration_ms: start_time.elapsed().as_millis() as u64,
    };
    info!(
        "read {}: {} bytes in {}ms",
        stats.file_path, stats.bytes_read, stats.duration_ms
    );

    Ok((text, stats))
}

/// Load the abbreviation list, one entry per line.
///
/// A missing or unreadable list is recoverable: log a warning and fall back
/// to the empty set, which simply makes every period an ordinary terminator.
pub async fn load_abbreviations<P: AsRef<Path>>(file_path: P) -> AbbreviationSet {
    let path = file_path.as_ref();
    match tokio::fs::read_to_string(path).await {
        Ok(content) => {
            let set = AbbreviationSet::from_lines(content.lines());
            info!(
                "loaded {} abbreviation entries from {}",
                set.len(),
                path.display()
            );
            set
        }
        Err(e) => {
            warn!(
                "abbreviations file {} not readable ({}), continuing with empty set",
                path.display(),
                e
            );
            AbbreviationSet::new()
        }
    }
}
