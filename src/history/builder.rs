//! Groups scaled row vectors into one time-ordered history per identity.

use crate::features::ParticipantSet;
use ndarray::{Array1, Array2, Axis};
use std::collections::HashMap;
use tracing::debug;

/// Unique identities in first-encounter order, with their parallel
/// histories. `ips[i]` owns `histories[i]`.
#[derive(Debug, Clone)]
pub struct IpHistories {
    pub ips: Vec<String>,
    pub histories: Vec<Vec<Array1<f32>>>,
}

impl IpHistories {
    pub fn len(&self) -> usize {
        self.ips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ips.is_empty()
    }

    /// Total feature vectors across all histories. A row with two
    /// participants is counted twice.
    pub fn total_vectors(&self) -> usize {
        self.histories.iter().map(Vec::len).sum()
    }
}

/// Build per-identity histories from the index-aligned feature matrix and
/// participant sets. Rows are walked in order; each row's vector is
/// appended to the history of every identity it names, creating new
/// histories on first encounter.
pub fn separate_ips(flat_x: &Array2<f32>, participants: &[ParticipantSet]) -> IpHistories {
    debug_assert_eq!(flat_x.len_of(Axis(0)), participants.len());

    let mut ips: Vec<String> = Vec::new();
    let mut histories: Vec<Vec<Array1<f32>>> = Vec::new();
    // Maps an identity to its history's index in `histories`.
    let mut history_index: HashMap<String, usize> = HashMap::new();

    debug!("mapping history for each identity");
    for (row, row_participants) in participants.iter().enumerate() {
        let vector = flat_x.row(row);
        for ip in row_participants.iter() {
            let idx = match history_index.get(ip) {
                Some(&idx) => idx,
                None => {
                    let idx = histories.len();
                    history_index.insert(ip.to_string(), idx);
                    ips.push(ip.to_string());
                    histories.push(Vec::new());
                    idx
                }
            };
            histories[idx].push(vector.to_owned());
        }
    }

    let out = IpHistories { ips, histories };
    let mean_len = if out.is_empty() {
        0.0
    } else {
        out.total_vectors() as f64 / out.len() as f64
    };
    debug!(
        identities = out.len(),
        mean_history_len = mean_len,
        "separation by identity complete"
    );
    out
}
