//! Per-row extraction: numeric feature vectors and participating identities.

use super::HeaderMap;
use crate::error::PipelineError;

/// Identities named by one row, duplicate-free, in insertion order.
/// Iteration order is part of the contract: history creation order
/// follows it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParticipantSet {
    entries: Vec<String>,
}

impl ParticipantSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an identity; re-inserting an existing one is a no-op.
    pub fn insert(&mut self, identity: impl Into<String>) {
        let identity = identity.into();
        if !self.entries.iter().any(|e| *e == identity) {
            self.entries.push(identity);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse the configured numerical fields of one row into an f32 vector.
/// Output length always equals `numerical_fields.len()`. Empty cells read
/// as 0.0; non-empty cells that fail to parse abort with `BadNumeric`.
pub fn featurize_row(
    record: &csv::StringRecord,
    headers: &HeaderMap,
    numerical_fields: &[String],
    row: usize,
) -> Result<Vec<f32>, PipelineError> {
    let mut features = Vec::with_capacity(numerical_fields.len());
    for field in numerical_fields {
        let idx = headers.index_of(field)?;
        let cell = record.get(idx).unwrap_or("").trim();
        if cell.is_empty() {
            features.push(0.0);
            continue;
        }
        let value = cell
            .parse::<f32>()
            .map_err(|_| PipelineError::BadNumeric {
                row,
                field: field.clone(),
                value: cell.to_string(),
            })?;
        features.push(value);
    }
    Ok(features)
}

/// Collect the identities named by one row's identity columns.
/// Blank cells are skipped; an empty set is legal.
pub fn identify_participants(
    record: &csv::StringRecord,
    headers: &HeaderMap,
    identity_fields: &[String],
) -> Result<ParticipantSet, PipelineError> {
    let mut participants = ParticipantSet::new();
    for field in identity_fields {
        let idx = headers.index_of(field)?;
        let cell = record.get(idx).unwrap_or("").trim();
        if !cell.is_empty() {
            participants.insert(cell);
        }
    }
    Ok(participants)
}
