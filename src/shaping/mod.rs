//! Array shaping: one-hot encoding, segment stacking, and the joint
//! shuffle that keeps X and Y index-aligned.

use crate::error::PipelineError;
use ndarray::{Array1, Array2, Array3, Axis};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// One-hot encode `class` over `n_classes` positions.
pub fn one_hot(class: usize, n_classes: usize) -> Array1<u8> {
    let mut v = Array1::<u8>::zeros(n_classes);
    v[class] = 1;
    v
}

/// RNG for shuffling: seeded when the config pins a seed, fresh entropy
/// otherwise.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Apply one shared random permutation to both arrays along axis 0,
/// keeping `x[i]` paired with `y[i]`. Independent per-array shuffles
/// would break that pairing.
pub fn shuffle_aligned(
    x: &Array3<f32>,
    y: &Array2<u8>,
    rng: &mut StdRng,
) -> (Array3<f32>, Array2<u8>) {
    assert_eq!(x.len_of(Axis(0)), y.len_of(Axis(0)));

    let mut perm: Vec<usize> = (0..x.len_of(Axis(0))).collect();
    perm.shuffle(rng);

    (x.select(Axis(0), &perm), y.select(Axis(0), &perm))
}

/// Stack `[seq_len, n_features]` segments into one `[n, seq_len,
/// n_features]` tensor. An empty segment list yields an empty tensor with
/// the configured trailing dimensions.
pub fn stack_segments(
    segments: &[Array2<f32>],
    seq_len: usize,
    n_features: usize,
) -> Result<Array3<f32>, PipelineError> {
    if segments.is_empty() {
        return Ok(Array3::zeros((0, seq_len, n_features)));
    }
    let views: Vec<_> = segments.iter().map(|s| s.view()).collect();
    Ok(ndarray::stack(Axis(0), &views)?)
}
