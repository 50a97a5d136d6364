//! Input table reading.

mod reader;

pub use reader::{DEFAULT_DELIMITER, InputTable, read_input_rows};
