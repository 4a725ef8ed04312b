//! Column name → index map, built once per CSV from its header record.

use crate::error::PipelineError;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct HeaderMap {
    indices: HashMap<String, usize>,
}

impl HeaderMap {
    /// Build from the header record (first row of the CSV).
    pub fn from_record(record: &csv::StringRecord) -> Self {
        let indices = record
            .iter()
            .enumerate()
            .map(|(i, name)| (name.trim().to_string(), i))
            .collect();
        Self { indices }
    }

    /// Index of a named column; unknown names are a schema error.
    pub fn index_of(&self, field: &str) -> Result<usize, PipelineError> {
        self.indices
            .get(field)
            .copied()
            .ok_or_else(|| PipelineError::MissingColumn(field.to_string()))
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
