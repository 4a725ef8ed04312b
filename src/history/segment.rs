//! Splits identity histories into fixed-length, non-overlapping segments.

use super::IpHistories;
use ndarray::{Array1, Array2};
use tracing::debug;

/// Segments in identity-then-segment-index order, with each segment's
/// owning identity at the same position in `owners`.
#[derive(Debug, Clone)]
pub struct SegmentedHistories {
    pub segments: Vec<Array2<f32>>,
    pub owners: Vec<String>,
}

impl SegmentedHistories {
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Chunk one history into consecutive `[k*seq_len, (k+1)*seq_len)` windows.
/// The trailing remainder is dropped, never padded; a history shorter than
/// `seq_len` yields nothing.
pub fn segment_history(history: &[Array1<f32>], seq_len: usize) -> Vec<Array2<f32>> {
    assert!(seq_len > 0, "seq_len must be positive");

    let n_segments = history.len() / seq_len;
    let mut segments = Vec::with_capacity(n_segments);
    for chunk in history.chunks_exact(seq_len) {
        let n_features = chunk[0].len();
        let mut segment = Array2::<f32>::zeros((seq_len, n_features));
        for (mut row, vector) in segment.rows_mut().into_iter().zip(chunk) {
            row.assign(vector);
        }
        segments.push(segment);
    }
    segments
}

/// Segment every history in builder order and concatenate the results,
/// tagging each segment with its owning identity.
pub fn segment_histories(histories: &IpHistories, seq_len: usize) -> SegmentedHistories {
    let mut segments = Vec::new();
    let mut owners = Vec::new();

    for (ip, history) in histories.ips.iter().zip(&histories.histories) {
        let chunks = segment_history(history, seq_len);
        if chunks.is_empty() {
            debug!(ip = %ip, history_len = history.len(), "history shorter than seq_len, skipped");
            continue;
        }
        owners.extend(std::iter::repeat(ip.clone()).take(chunks.len()));
        segments.extend(chunks);
    }

    let mean_segments = if histories.is_empty() {
        0.0
    } else {
        segments.len() as f64 / histories.len() as f64
    };
    debug!(
        segments = segments.len(),
        mean_per_identity = mean_segments,
        "history segmentation complete"
    );

    SegmentedHistories { segments, owners }
}
