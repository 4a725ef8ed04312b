//! Pipeline error taxonomy. Cache misses are not errors; see [`crate::dataset`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// A configured field name does not exist in the CSV header. Fatal:
    /// without the schema the run cannot proceed.
    #[error("column `{0}` is missing from the CSV header")]
    MissingColumn(String),

    /// A non-empty cell could not be parsed as a number. Empty cells are
    /// read as 0.0; anything else non-numeric aborts the run.
    #[error("row {row}: field `{field}` has non-numeric value `{value}`")]
    BadNumeric {
        row: usize,
        field: String,
        value: String,
    },

    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("dump encoding: {0}")]
    Encode(#[from] bincode::Error),

    #[error("shape: {0}")]
    Shape(#[from] ndarray::ShapeError),
}
