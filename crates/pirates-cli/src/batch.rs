use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use pirates_core::model::round::{Round, RoundError};
use pirates_core::rules::{self, Outcome};
use serde::Serialize;
use thiserror::Error;
use tracing::{Level, event};

/// One round read from a batch file, with the announcement it should produce
/// when the line carries one (`<round>, <announcement>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchLine {
    pub line: usize,
    pub round: String,
    pub expected: Option<String>,
}

/// Result row written per evaluated line.
#[derive(Debug, Clone, Serialize)]
pub struct BatchRow {
    pub line: usize,
    pub round: String,
    pub announcement: String,
    pub expected: Option<String>,
    pub matched: Option<bool>,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub rounds: usize,
    pub verified: usize,
    /// Line numbers whose announcement differed from the expectation.
    pub mismatches: Vec<usize>,
    pub jsonl_path: Option<PathBuf>,
}

#[derive(Debug)]
pub struct BatchReport {
    pub rows: Vec<BatchRow>,
    pub summary: BatchSummary,
}

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("I/O error on {path:?}: {source}")]
    Io {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to serialize result row: {source}")]
    Serialize {
        #[from]
        source: serde_json::Error,
    },
    #[error("line {line}: {source}")]
    Round {
        line: usize,
        #[source]
        source: RoundError,
    },
}

/// Split batch contents into rounds. Blank lines and `#` or `//` comments are
/// skipped; line numbers are 1-based.
pub fn parse_batch(contents: &str) -> Vec<BatchLine> {
    contents
        .lines()
        .enumerate()
        .filter_map(|(index, raw)| {
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
                return None;
            }
            let (round, expected) = match trimmed.split_once(',') {
                Some((round, expected)) => (round.trim(), Some(expected.trim().to_string())),
                None => (trimmed, None),
            };
            Some(BatchLine {
                line: index + 1,
                round: round.to_string(),
                expected: expected.filter(|text| !text.is_empty()),
            })
        })
        .collect()
}

pub fn evaluate_line(line: &BatchLine) -> Result<BatchRow, BatchError> {
    let round: Round = line.round.parse().map_err(|source| BatchError::Round {
        line: line.line,
        source,
    })?;
    let outcome = rules::evaluate(&round).map_err(|source| BatchError::Round {
        line: line.line,
        source,
    })?;
    let announcement = outcome.announcement();
    let matched = line
        .expected
        .as_ref()
        .map(|expected| *expected == announcement);

    event!(
        target: "pirates_cli::batch",
        Level::INFO,
        line = line.line as u32,
        round = %round,
        player = outcome.player as u32,
        whale_override = outcome.whale_override,
        matched,
    );

    Ok(BatchRow {
        line: line.line,
        round: round.to_string(),
        announcement,
        expected: line.expected.clone(),
        matched,
        outcome,
    })
}

/// Evaluates every round of a batch file, optionally streaming JSONL rows.
pub struct BatchRunner {
    input: PathBuf,
    jsonl: Option<PathBuf>,
}

impl BatchRunner {
    pub fn new(input: impl Into<PathBuf>, jsonl: Option<PathBuf>) -> Self {
        Self {
            input: input.into(),
            jsonl,
        }
    }

    pub fn run(&self) -> Result<BatchReport, BatchError> {
        let contents = fs::read_to_string(&self.input).map_err(|source| BatchError::Io {
            source,
            path: self.input.clone(),
        })?;

        let rows = parse_batch(&contents)
            .iter()
            .map(evaluate_line)
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(path) = self.jsonl.as_deref() {
            write_rows(path, &rows)?;
        }

        let summary = BatchSummary {
            rounds: rows.len(),
            verified: rows.iter().filter(|row| row.matched.is_some()).count(),
            mismatches: rows
                .iter()
                .filter(|row| row.matched == Some(false))
                .map(|row| row.line)
                .collect(),
            jsonl_path: self.jsonl.clone(),
        };

        Ok(BatchReport { rows, summary })
    }
}

fn write_rows(path: &Path, rows: &[BatchRow]) -> Result<(), BatchError> {
    let io = |source| BatchError::Io {
        source,
        path: path.to_path_buf(),
    };
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(io)?;
    }
    let mut writer = BufWriter::new(File::create(path).map_err(io)?);
    for row in rows {
        serde_json::to_writer(&mut writer, row)?;
        writer.write_all(b"\n").map_err(io)?;
    }
    writer.flush().map_err(io)
}
