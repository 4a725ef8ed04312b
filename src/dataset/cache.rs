//! On-disk dump cache for preprocessed splits. Each split is two bincode
//! files (features, labels) carrying shape, values, and a content digest;
//! truncated or tampered dumps read as a miss, not a crash.

use super::LabeledDataset;
use crate::config::CacheConfig;
use crate::error::PipelineError;
use chrono::Utc;
use ndarray::{Array2, Array3, Axis};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Serialize, Deserialize)]
struct FeaturesDump {
    shape: (usize, usize, usize),
    values: Vec<f32>,
    digest: [u8; 32],
    written_at: i64,
}

#[derive(Serialize, Deserialize)]
struct LabelsDump {
    shape: (usize, usize),
    values: Vec<u8>,
    digest: [u8; 32],
    written_at: i64,
}

fn digest_f32(values: &[f32]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for v in values {
        hasher.update(v.to_le_bytes());
    }
    hasher.finalize().into()
}

fn digest_u8(values: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(values);
    hasher.finalize().into()
}

pub struct DatasetCache {
    dir: PathBuf,
    features_suffix: String,
    labels_suffix: String,
}

impl DatasetCache {
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            dir: config.dumps_dir.clone(),
            features_suffix: config.features_suffix.clone(),
            labels_suffix: config.labels_suffix.clone(),
        }
    }

    fn features_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}{}", name, self.features_suffix))
    }

    fn labels_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}{}", name, self.labels_suffix))
    }

    /// Persist a split under its name. Overwrites any previous dump.
    pub fn store(&self, name: &str, dataset: &LabeledDataset) -> Result<(), PipelineError> {
        std::fs::create_dir_all(&self.dir)?;
        let written_at = Utc::now().timestamp_millis();

        let x_values: Vec<f32> = dataset.x.iter().copied().collect();
        let features = FeaturesDump {
            shape: dataset.x.dim(),
            digest: digest_f32(&x_values),
            values: x_values,
            written_at,
        };
        std::fs::write(self.features_path(name), bincode::serialize(&features)?)?;

        let y_values: Vec<u8> = dataset.y.iter().copied().collect();
        let labels = LabelsDump {
            shape: dataset.y.dim(),
            digest: digest_u8(&y_values),
            values: y_values,
            written_at,
        };
        std::fs::write(self.labels_path(name), bincode::serialize(&labels)?)?;

        info!(split = name, segments = dataset.len(), "dataset dump written");
        Ok(())
    }

    /// Read a split back. Any failure (missing file, undecodable dump,
    /// digest or shape mismatch) is a miss, never an error: the caller
    /// recomputes.
    pub fn load(&self, name: &str) -> Option<LabeledDataset> {
        let x = self.read_features(name)?;
        let y = self.read_labels(name)?;
        if x.len_of(Axis(0)) != y.len_of(Axis(0)) {
            warn!(split = name, "features/labels dumps disagree on length, ignoring");
            return None;
        }
        debug!(split = name, segments = x.len_of(Axis(0)), "dataset dump loaded");
        Some(LabeledDataset { x, y })
    }

    fn read_features(&self, name: &str) -> Option<Array3<f32>> {
        let path = self.features_path(name);
        let dump: FeaturesDump = read_dump(&path, name)?;
        if digest_f32(&dump.values) != dump.digest {
            warn!(split = name, path = %path.display(), "features dump digest mismatch, ignoring");
            return None;
        }
        match Array3::from_shape_vec(dump.shape, dump.values) {
            Ok(x) => Some(x),
            Err(_) => {
                warn!(split = name, "features dump shape inconsistent, ignoring");
                None
            }
        }
    }

    fn read_labels(&self, name: &str) -> Option<Array2<u8>> {
        let path = self.labels_path(name);
        let dump: LabelsDump = read_dump(&path, name)?;
        if digest_u8(&dump.values) != dump.digest {
            warn!(split = name, path = %path.display(), "labels dump digest mismatch, ignoring");
            return None;
        }
        match Array2::from_shape_vec(dump.shape, dump.values) {
            Ok(y) => Some(y),
            Err(_) => {
                warn!(split = name, "labels dump shape inconsistent, ignoring");
                None
            }
        }
    }
}

fn read_dump<T: serde::de::DeserializeOwned>(path: &Path, name: &str) -> Option<T> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(_) => {
            debug!(split = name, path = %path.display(), "dump not present");
            return None;
        }
    };
    match bincode::deserialize(&bytes) {
        Ok(dump) => Some(dump),
        Err(e) => {
            warn!(split = name, path = %path.display(), error = %e, "dump unreadable, ignoring");
            None
        }
    }
}
