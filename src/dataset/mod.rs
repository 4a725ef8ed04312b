//! Durable dataset artifacts: the labeled `(X, Y)` pair, its on-disk
//! cache, and the preprocessing orchestration that produces it.

mod cache;
mod preprocess;

pub use cache::DatasetCache;
pub use preprocess::{load, preprocess_and_store, preprocess_file};

use crate::history::ClassCounts;
use ndarray::{Array2, Array3, Axis};

/// Parallel segment/label arrays. `x` is `[n, seq_len, n_features]`,
/// `y` is `[n, 2]` one-hot (benign-first); row i of each refers to the
/// same segment.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledDataset {
    pub x: Array3<f32>,
    pub y: Array2<u8>,
}

impl LabeledDataset {
    pub fn len(&self) -> usize {
        self.x.len_of(Axis(0))
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Class balance read back from the one-hot labels.
    pub fn class_counts(&self) -> ClassCounts {
        let malignant = self
            .y
            .axis_iter(Axis(0))
            .filter(|row| row[1] == 1)
            .count();
        ClassCounts {
            benign: self.len() - malignant,
            malignant,
        }
    }
}
