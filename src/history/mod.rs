//! Per-identity flow histories: grouping, segmentation, and labeling.

mod builder;
mod label;
mod segment;

pub use builder::{separate_ips, IpHistories};
pub use label::{label_segments, ClassCounts};
pub use segment::{segment_histories, segment_history, SegmentedHistories};
