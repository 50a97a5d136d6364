//! Input ingestion for the requested-analysis submitter.
//!
//! Reads a delimited file with an identifier column and a label column and
//! splits the identifiers into a primary and a comparison group by exact
//! label match.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use motion_ingest::{GroupSelector, InputSource, load_and_partition};
//!
//! let source = InputSource {
//!     path: Path::new("resources/movements_with_pitch_types.csv"),
//!     id_column: "MLBPlayId",
//!     label_column: "PitchType",
//!     delimiter: b',',
//! };
//! let partition = load_and_partition(&source, &GroupSelector::new("Fastball", "Curveball"))?;
//! ```

mod error;
mod partition;
mod table;

// === Error Types ===
pub use error::{IngestError, Result};

// === Table Reading ===
pub use table::{DEFAULT_DELIMITER, InputTable, read_input_rows};

// === Partitioning ===
pub use partition::{GroupSelector, InputRow, InputSource, Partition, load_and_partition};
