use std::path::PathBuf;
use tempfile::TempDir;

use sentsplit::pipeline;
use sentsplit::writer::PARAGRAPH_BREAK_LABEL;

struct TestFixture {
    temp_dir: TempDir,
}

impl TestFixture {
    fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Temp dir creation should succeed"),
        }
    }

    async fn create_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        tokio::fs::write(&path, content)
            .await
            .expect("Fixture file write should succeed");
        path
    }

    fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }
}

/// Test complete pipeline: read, segment with abbreviations, write CSV rows
#[tokio::test]
async fn test_pipeline_happy_path() {
    let fixture = TestFixture::new();
    let input = fixture
        .create_file(
            "input.txt",
            "Dr. Smith went home. She left at noon.\n\nMr. Jones stayed behind.",
        )
        .await;
    let abbr = fixture.create_file("abbreviations.txt", "Dr\nMr\n").await;
    let output = fixture.path("output.csv");

    let stats = pipeline::run(&input, &output, &abbr)
        .await
        .expect("Pipeline should succeed");

    assert_eq!(stats.sentences, 3);
    assert_eq!(stats.paragraph_breaks, 1);
    assert_eq!(stats.total_rows(), 4);

    let written = tokio::fs::read_to_string(&output).await.unwrap();
    let rows: Vec<&str> = written.lines().collect();
    assert_eq!(
        rows,
        vec![
            "Dr. Smith went home.",
            "She left at noon.",
            PARAGRAPH_BREAK_LABEL,
            "Mr. Jones stayed behind.",
        ]
    );
}

/// Missing input file is fatal and produces no output file
#[tokio::test]
async fn test_pipeline_missing_input_is_fatal() {
    let fixture = TestFixture::new();
    let abbr = fixture.create_file("abbreviations.txt", "Dr\n").await;
    let output = fixture.path("output.csv");

    let result = pipeline::run(fixture.path("missing.txt"), &output, &abbr).await;

    assert!(result.is_err());
    assert!(!output.exists(), "No partial output on fatal input error");
}

/// Missing abbreviation file is recoverable: every period splits
#[tokio::test]
async fn test_pipeline_missing_abbreviations_falls_back() {
    let fixture = TestFixture::new();
    let input = fixture.create_file("input.txt", "Mr. Jones arrived late.").await;
    let output = fixture.path("output.csv");

    let stats = pipeline::run(&input, &output, fixture.path("no-abbr.txt"))
        .await
        .expect("Pipeline should continue without abbreviations");

    // Unmatched abbreviation means an ordinary terminator after "Mr"
    assert_eq!(stats.sentences, 2);
    let written = tokio::fs::read_to_string(&output).await.unwrap();
    assert_eq!(
        written.lines().collect::<Vec<_>>(),
        vec!["Mr.", "Jones arrived late."]
    );
}

/// Unwritable output path is fatal
#[tokio::test]
async fn test_pipeline_unwritable_output_is_fatal() {
    let fixture = TestFixture::new();
    let input = fixture.create_file("input.txt", "One sentence here.").await;
    let abbr = fixture.create_file("abbreviations.txt", "").await;
    let output = fixture.path("no_such_dir").join("output.csv");

    let result = pipeline::run(&input, &output, &abbr).await;
    assert!(result.is_err());
}

/// Sentences containing commas and quotes come out CSV-quoted
#[tokio::test]
async fn test_pipeline_csv_quoting() {
    let fixture = TestFixture::new();
    let input = fixture
        .create_file("input.txt", "He said, \"Go home.\" Then he left.")
        .await;
    let abbr = fixture.create_file("abbreviations.txt", "").await;
    let output = fixture.path("output.csv");

    pipeline::run(&input, &output, &abbr)
        .await
        .expect("Pipeline should succeed");

    let written = tokio::fs::read_to_string(&output).await.unwrap();
    assert_eq!(
        written.lines().collect::<Vec<_>>(),
        vec!["\"He said, \"\"Go home.\"\"\"", "Then he left."]
    );
}

/// Run stats serialize to JSON the way the CLI writes them
#[tokio::test]
async fn test_run_stats_serialize() {
    let fixture = TestFixture::new();
    let input = fixture
        .create_file("input.txt", "First one here.\n\nSecond one here.")
        .await;
    let abbr = fixture.create_file("abbreviations.txt", "Dr\n").await;
    let output = fixture.path("output.csv");

    let stats = pipeline::run(&input, &output, &abbr).await.unwrap();
    let json = serde_json::to_string(&stats).unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["sentences"], 2);
    assert_eq!(value["paragraph_breaks"], 1);
    assert!(value["input_bytes"].as_u64().unwrap() > 0);
}

/// Input without any terminator still yields its text as one row
#[tokio::test]
async fn test_pipeline_unterminated_input() {
    let fixture = TestFixture::new();
    let input = fixture.create_file("input.txt", "no punctuation at all").await;
    let abbr = fixture.create_file("abbreviations.txt", "").await;
    let output = fixture.path("output.csv");

    let stats = pipeline::run(&input, &output, &abbr).await.unwrap();
    assert_eq!(stats.sentences, 1);

    let written = tokio::fs::read_to_string(&output).await.unwrap();
    assert_eq!(written, "no punctuation at all\n");
}
