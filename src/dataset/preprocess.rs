//! Preprocessing orchestration: raw capture CSV in, labeled dataset out.

use super::{DatasetCache, LabeledDataset};
use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::features::{featurize_row, identify_participants, max_abs_scale, HeaderMap};
use crate::history::{label_segments, segment_histories, separate_ips};
use crate::shaping::{seeded_rng, shuffle_aligned, stack_segments};
use ndarray::{s, Array2};
use std::path::Path;
use tracing::{debug, info};

/// Run the full pipeline over one capture file: featurize rows, scale the
/// matrix, group per-identity histories, segment, label.
pub fn preprocess_file(
    path: &Path,
    config: &PipelineConfig,
) -> Result<LabeledDataset, PipelineError> {
    info!(path = %path.display(), "starting preprocessing");

    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    let headers = HeaderMap::from_record(reader.headers()?);
    debug!(columns = headers.len(), "headers key generated");

    let n_features = config.fields.numerical.len();
    let mut flat = Vec::new();
    let mut participants = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        // Header is row 0; data rows report 1-based positions.
        let row = i + 1;
        flat.extend(featurize_row(
            &record,
            &headers,
            &config.fields.numerical,
            row,
        )?);
        participants.push(identify_participants(
            &record,
            &headers,
            &config.fields.identity,
        )?);
    }
    let n_rows = participants.len();
    debug!(rows = n_rows, "basic data loading complete");

    let mut flat_x = Array2::from_shape_vec((n_rows, n_features), flat)?;
    max_abs_scale(&mut flat_x);

    let histories = separate_ips(&flat_x, &participants);
    let segmented = segment_histories(&histories, config.seq_len);
    let (y, _counts) = label_segments(&segmented.owners, &config.malicious_ips);
    let x = stack_segments(&segmented.segments, config.seq_len, n_features)?;
    debug_assert_eq!(x.dim().0, y.dim().0);

    info!(
        rows = n_rows,
        identities = histories.len(),
        segments = segmented.len(),
        "preprocessing complete"
    );
    Ok(LabeledDataset { x, y })
}

/// Preprocess both configured capture files and write their dumps.
/// Returns (train, test).
pub fn preprocess_and_store(
    config: &PipelineConfig,
) -> Result<(LabeledDataset, LabeledDataset), PipelineError> {
    let cache = DatasetCache::new(&config.cache);

    let train = preprocess_file(&config.raw.train_csv, config)?;
    cache.store(&config.cache.train_name, &train)?;

    let test = preprocess_file(&config.raw.test_csv, config)?;
    cache.store(&config.cache.test_name, &test)?;

    Ok((train, test))
}

/// Load both splits from the dump cache, shuffling each with a shared
/// permutation and trimming the test split to `test_size` after the
/// shuffle. Returns `None` when either split is not cached; callers
/// treat that as "recompute", not as a failure.
pub fn load(
    config: &PipelineConfig,
    test_size: usize,
) -> Option<(LabeledDataset, LabeledDataset)> {
    let cache = DatasetCache::new(&config.cache);
    let mut rng = seeded_rng(config.shuffle_seed);

    let full_test = cache.load(&config.cache.test_name)?;
    let (test_x, test_y) = shuffle_aligned(&full_test.x, &full_test.y, &mut rng);
    let take = test_size.min(test_x.dim().0);
    let test = LabeledDataset {
        x: test_x.slice(s![..take, .., ..]).to_owned(),
        y: test_y.slice(s![..take, ..]).to_owned(),
    };

    let full_train = cache.load(&config.cache.train_name)?;
    let (train_x, train_y) = shuffle_aligned(&full_train.x, &full_train.y, &mut rng);
    let train = LabeledDataset {
        x: train_x,
        y: train_y,
    };

    info!(
        train_segments = train.len(),
        test_segments = test.len(),
        "dataset exists, processing"
    );
    Some((train, test))
}
