//! Delimited file reading with named identifier and label columns.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::error::{IngestError, Result};
use crate::partition::InputRow;

/// Default field delimiter.
pub const DEFAULT_DELIMITER: u8 = b',';

/// Rows read from an input file, reduced to the two columns of interest.
#[derive(Debug, Clone, Default)]
pub struct InputTable {
    /// One entry per data row, in file order.
    pub rows: Vec<InputRow>,
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// Normalizes header names: strips a UTF-8 BOM and surrounding whitespace.
fn normalize_headers(record: &StringRecord) -> Vec<String> {
    record
        .iter()
        .map(|h| h.trim_matches('\u{feff}').trim().to_string())
        .collect()
}

fn column_index(headers: &[String], column: &str, path: &Path) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| IngestError::MissingColumn {
            column: column.to_string(),
            path: path.to_path_buf(),
            available: headers.join(", "),
        })
}

/// Reads the identifier and label columns of every row.
///
/// Column names are matched after header normalization; cell values are
/// kept verbatim so that labels match exactly.
pub fn read_input_rows(
    path: &Path,
    id_column: &str,
    label_column: &str,
    delimiter: u8,
) -> Result<InputTable> {
    let file = open(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .from_reader(BufReader::new(file));

    let headers = normalize_headers(reader.headers().map_err(|e| IngestError::csv(path, &e))?);
    if headers.is_empty() || headers.iter().all(String::is_empty) {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let id_idx = column_index(&headers, id_column, path)?;
    let label_idx = column_index(&headers, label_column, path)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::csv(path, &e))?;
        rows.push(InputRow {
            identifier: record.get(id_idx).unwrap_or_default().to_string(),
            label: record.get(label_idx).unwrap_or_default().to_string(),
        });
    }

    tracing::debug!(
        path = %path.display(),
        rows = rows.len(),
        columns = headers.len(),
        "read input table"
    );

    Ok(InputTable { rows })
}
