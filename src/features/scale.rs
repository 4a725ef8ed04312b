//! Max-abs normalization of the raw feature matrix.

use ndarray::{Array2, Axis};

/// Rescale each column by its maximum absolute value, in place. Columns
/// whose max-abs is zero are left untouched. Every output value lies in
/// [-1, 1]. Statistics are computed over the whole matrix, before any
/// segmentation.
pub fn max_abs_scale(x: &mut Array2<f32>) {
    for mut column in x.axis_iter_mut(Axis(1)) {
        let max_abs = column.iter().fold(0.0f32, |m, v| m.max(v.abs()));
        if max_abs > 0.0 {
            column.mapv_inplace(|v| v / max_abs);
        }
    }
}
