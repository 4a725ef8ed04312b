//! flowseg — Per-IP flow history segmentation for intrusion detection datasets.
//!
//! Modular structure:
//! - [`features`] — Row featurization, participant extraction, max-abs scaling
//! - [`history`] — Per-identity history building, segmentation, labeling
//! - [`shaping`] — One-hot encoding, segment stacking, aligned shuffling
//! - [`dataset`] — Preprocessing orchestration and the dump cache
//! - [`logging`] — Structured JSON logging

pub mod config;
pub mod dataset;
pub mod error;
pub mod features;
pub mod history;
pub mod logging;
pub mod shaping;

pub use config::PipelineConfig;
pub use dataset::{DatasetCache, LabeledDataset};
pub use error::PipelineError;
pub use features::{HeaderMap, ParticipantSet};
pub use history::{ClassCounts, IpHistories};
pub use logging::StructuredLogger;
