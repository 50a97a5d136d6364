//! Label-based partitioning of input rows into comparison groups.

use std::path::Path;

use crate::error::Result;
use crate::table::read_input_rows;

/// One row of the input table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRow {
    /// External context id of the movement.
    pub identifier: String,
    /// Label the row is grouped by, matched verbatim.
    pub label: String,
}

impl InputRow {
    pub fn new(identifier: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            label: label.into(),
        }
    }
}

/// Label values selecting the primary and comparison groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSelector {
    pub primary: String,
    pub comparison: String,
}

impl GroupSelector {
    pub fn new(primary: impl Into<String>, comparison: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            comparison: comparison.into(),
        }
    }
}

/// Where and how to read the input table.
#[derive(Debug, Clone)]
pub struct InputSource<'a> {
    pub path: &'a Path,
    pub id_column: &'a str,
    pub label_column: &'a str,
    pub delimiter: u8,
}

/// Identifiers split into the two groups of a comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    /// Identifiers labelled with the primary value, in row order.
    pub primary: Vec<String>,
    /// Identifiers labelled with the comparison value, in row order.
    pub comparison: Vec<String>,
    /// Rows whose label matched neither group.
    pub unmatched: usize,
}

impl Partition {
    /// Splits rows by exact label match.
    ///
    /// If both selector values are equal, matching rows go to the primary
    /// group only.
    pub fn from_rows<'a, I>(rows: I, groups: &GroupSelector) -> Self
    where
        I: IntoIterator<Item = &'a InputRow>,
    {
        let mut partition = Partition::default();
        for row in rows {
            if row.label == groups.primary {
                partition.primary.push(row.identifier.clone());
            } else if row.label == groups.comparison {
                partition.comparison.push(row.identifier.clone());
            } else {
                partition.unmatched += 1;
            }
        }
        partition
    }

    /// Total number of rows assigned to a group.
    pub fn matched(&self) -> usize {
        self.primary.len() + self.comparison.len()
    }
}

/// Reads the input table and partitions its identifiers by label.
///
/// Empty groups are returned as empty sequences.
pub fn load_and_partition(source: &InputSource<'_>, groups: &GroupSelector) -> Result<Partition> {
    let table = read_input_rows(
        source.path,
        source.id_column,
        source.label_column,
        source.delimiter,
    )?;
    let partition = Partition::from_rows(&table.rows, groups);

    if partition.primary.is_empty() {
        tracing::warn!(label = %groups.primary, "no rows matched the primary group");
    }
    if partition.comparison.is_empty() {
        tracing::warn!(label = %groups.comparison, "no rows matched the comparison group");
    }
    tracing::info!(
        path = %source.path.display(),
        primary = partition.primary.len(),
        comparison = partition.comparison.len(),
        unmatched = partition.unmatched,
        "partitioned input rows"
    );

    Ok(partition)
}
