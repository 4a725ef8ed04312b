//! One-hot labeling of segments against the known-malicious identity set.

use crate::shaping::one_hot;
use ndarray::Array2;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Class balance after labeling. Class index 0 = benign, 1 = malignant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassCounts {
    pub benign: usize,
    pub malignant: usize,
}

/// Label each segment by whether its owner is known-malicious: `[1, 0]`
/// benign, `[0, 1]` malignant. Returns the `[n, 2]` label array and the
/// class counts; a class with zero members is surfaced as a warning, not
/// an error. Training on one class is the caller's decision.
pub fn label_segments(
    owners: &[String],
    malicious_ips: &HashSet<String>,
) -> (Array2<u8>, ClassCounts) {
    let mut y = Array2::<u8>::zeros((owners.len(), 2));
    let mut counts = ClassCounts {
        benign: 0,
        malignant: 0,
    };

    for (i, ip) in owners.iter().enumerate() {
        let class = if malicious_ips.contains(ip) {
            counts.malignant += 1;
            1
        } else {
            counts.benign += 1;
            0
        };
        y.row_mut(i).assign(&one_hot(class, 2));
    }

    debug!(
        benign = counts.benign,
        malignant = counts.malignant,
        "segments labelled"
    );
    if !owners.is_empty() && (counts.benign == 0 || counts.malignant == 0) {
        warn!(
            benign = counts.benign,
            malignant = counts.malignant,
            "single-class dataset"
        );
    }

    (y, counts)
}
