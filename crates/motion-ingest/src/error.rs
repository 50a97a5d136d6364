//! Error types for input ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading the input table.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// Failed to parse a CSV record.
    #[error("failed to parse CSV {path}{}: {message}", at_line(.line))]
    CsvParse {
        path: PathBuf,
        line: Option<u64>,
        message: String,
    },

    /// CSV file has no header row.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    // === Schema Errors ===
    /// Required column not found in the header row.
    #[error("required column '{column}' not found in {path} (available: {available})")]
    MissingColumn {
        column: String,
        path: PathBuf,
        available: String,
    },
}

impl IngestError {
    pub(crate) fn csv(path: &std::path::Path, err: &csv::Error) -> Self {
        Self::CsvParse {
            path: path.to_path_buf(),
            line: err.position().map(csv::Position::line),
            message: err.to_string(),
        }
    }
}

fn at_line(line: &Option<u64>) -> String {
    line.map(|l| format!(" at line {l}")).unwrap_or_default()
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
