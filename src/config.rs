//! Pipeline configuration. Field lists, segment length, and cache layout are
//! data, not behavior: the same binary preprocesses any capture whose CSV
//! carries the configured columns.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// CSV columns consumed by featurization
    pub fields: FieldsConfig,
    /// Segment length (feature vectors per segment)
    pub seq_len: usize,
    /// Known-malicious identities; owning one makes a segment malignant
    pub malicious_ips: HashSet<String>,
    /// Explicit shuffle seed; None draws from entropy
    pub shuffle_seed: Option<u64>,
    /// Raw capture CSVs
    pub raw: RawDataConfig,
    /// Dump directory and split naming
    pub cache: CacheConfig,
    /// Logging
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldsConfig {
    /// Ordered numerical columns; this order is the feature vector layout
    pub numerical: Vec<String>,
    /// Identity-bearing columns (each row may name several participants)
    pub identity: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDataConfig {
    pub train_csv: PathBuf,
    pub test_csv: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Directory holding the dataset dumps
    pub dumps_dir: PathBuf,
    /// Split names; each split is stored as two files
    pub train_name: String,
    pub test_name: String,
    /// Per-split file suffixes
    pub features_suffix: String,
    pub labels_suffix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            fields: FieldsConfig::default(),
            seq_len: 16,
            malicious_ips: HashSet::new(),
            shuffle_seed: None,
            raw: RawDataConfig::default(),
            cache: CacheConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Default for FieldsConfig {
    fn default() -> Self {
        Self {
            numerical: [
                "Source Port",
                "Destination Port",
                "Protocol",
                "Length",
                "tcp_Flags",
                "TCP Segment Len",
                "udp_Length",
                "Duration",
                "NumberOfPackets",
                "NumberOfBytes",
                "AveragePacketLength",
                "StdDevOfPacketLength",
                "AveragePacketsPerSecond",
                "AverageBitsPerSecond",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            identity: vec!["Source".to_string(), "Destination".to_string()],
        }
    }
}

impl Default for RawDataConfig {
    fn default() -> Self {
        Self {
            train_csv: PathBuf::from("data/train.csv"),
            test_csv: PathBuf::from("data/test.csv"),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            dumps_dir: PathBuf::from(".flowseg/dumps"),
            train_name: "train".to_string(),
            test_name: "test".to_string(),
            features_suffix: "_features".to_string(),
            labels_suffix: "_labels".to_string(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: true,
        }
    }
}

impl PipelineConfig {
    /// Load from JSON file if present; otherwise return default
    pub fn load(path: &std::path::Path) -> Self {
        if path.exists() {
            if let Ok(data) = std::fs::read_to_string(path) {
                if let Ok(c) = serde_json::from_str::<PipelineConfig>(&data) {
                    return c;
                }
            }
        }
        Self::default()
    }
}
