//! End-to-end: raw CSVs → preprocess → dump cache → load with shuffle
//! and test-size trimming; cache miss and corruption paths.

use flowseg::config::PipelineConfig;
use flowseg::dataset::{self, DatasetCache, LabeledDataset};
use ndarray::Axis;
use std::io::Write;
use std::path::Path;

fn write_csv(path: &Path, contents: &str) {
    let mut f = std::fs::File::create(path).unwrap();
    f.write_all(contents.as_bytes()).unwrap();
}

/// One identity per row (Destination left blank) so each segment's label is
/// recoverable from its feature value: malicious rows carry Length 100,
/// benign rows Length 1.
fn single_identity_csv(rows: &[(&str, u32)]) -> String {
    let mut out = String::from("Source,Destination,Length\n");
    for (ip, length) in rows {
        out.push_str(&format!("{},,{}\n", ip, length));
    }
    out
}

fn split_config(dir: &Path) -> PipelineConfig {
    let mut config = PipelineConfig::default();
    config.fields.numerical = vec!["Length".to_string()];
    config.fields.identity = vec!["Source".to_string(), "Destination".to_string()];
    config.seq_len = 1;
    config.malicious_ips = ["evil".to_string()].into_iter().collect();
    config.shuffle_seed = Some(1234);
    config.raw.train_csv = dir.join("train.csv");
    config.raw.test_csv = dir.join("test.csv");
    config.cache.dumps_dir = dir.join("dumps");
    config
}

fn seed_raw_files(config: &PipelineConfig) {
    let train: Vec<(&str, u32)> = (0..8)
        .map(|i| if i % 2 == 0 { ("evil", 100) } else { ("ok", 1) })
        .collect();
    write_csv(&config.raw.train_csv, &single_identity_csv(&train));

    let test: Vec<(&str, u32)> = (0..6)
        .map(|i| if i % 3 == 0 { ("evil", 100) } else { ("ok", 1) })
        .collect();
    write_csv(&config.raw.test_csv, &single_identity_csv(&test));
}

fn labels_match_features(dataset: &LabeledDataset) {
    for i in 0..dataset.len() {
        let malicious = dataset.x[[i, 0, 0]] == 1.0; // scaled 100 -> 1.0
        let expected = if malicious { [0u8, 1] } else { [1, 0] };
        assert_eq!(dataset.y.row(i).to_vec(), expected.to_vec());
    }
}

#[test]
fn preprocess_store_load_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let config = split_config(dir.path());
    seed_raw_files(&config);

    let (train, test) = dataset::preprocess_and_store(&config).unwrap();
    assert_eq!(train.len(), 8);
    assert_eq!(test.len(), 6);
    labels_match_features(&train);

    // Stored dumps read back bit-identically before any shuffle.
    let cache = DatasetCache::new(&config.cache);
    let reloaded = cache.load(&config.cache.train_name).unwrap();
    assert_eq!(reloaded.x, train.x);
    assert_eq!(reloaded.y, train.y);

    let (loaded_train, loaded_test) = dataset::load(&config, 4).unwrap();
    assert_eq!(loaded_train.len(), 8);
    assert_eq!(loaded_test.len(), 4); // trimmed after shuffle
    assert_eq!(loaded_train.x.len_of(Axis(0)), loaded_train.y.len_of(Axis(0)));

    // Shuffling kept every pair aligned.
    labels_match_features(&loaded_train);
    labels_match_features(&loaded_test);
}

#[test]
fn load_is_deterministic_under_a_fixed_seed() {
    let dir = tempfile::tempdir().unwrap();
    let config = split_config(dir.path());
    seed_raw_files(&config);
    dataset::preprocess_and_store(&config).unwrap();

    let (train_a, test_a) = dataset::load(&config, 3).unwrap();
    let (train_b, test_b) = dataset::load(&config, 3).unwrap();
    assert_eq!(train_a.x, train_b.x);
    assert_eq!(train_a.y, train_b.y);
    assert_eq!(test_a.x, test_b.x);
    assert_eq!(test_a.y, test_b.y);
}

#[test]
fn load_with_nothing_cached_is_a_miss() {
    let dir = tempfile::tempdir().unwrap();
    let config = split_config(dir.path());
    assert!(dataset::load(&config, 4).is_none());
}

#[test]
fn load_with_one_split_missing_is_a_miss() {
    let dir = tempfile::tempdir().unwrap();
    let config = split_config(dir.path());
    seed_raw_files(&config);
    dataset::preprocess_and_store(&config).unwrap();

    let labels = config
        .cache
        .dumps_dir
        .join(format!("{}{}", config.cache.train_name, config.cache.labels_suffix));
    std::fs::remove_file(labels).unwrap();

    assert!(dataset::load(&config, 4).is_none());
}

#[test]
fn corrupt_dump_reads_as_a_miss() {
    let dir = tempfile::tempdir().unwrap();
    let config = split_config(dir.path());
    seed_raw_files(&config);
    dataset::preprocess_and_store(&config).unwrap();

    let features = config
        .cache
        .dumps_dir
        .join(format!("{}{}", config.cache.test_name, config.cache.features_suffix));
    std::fs::write(features, b"not a dump").unwrap();

    let cache = DatasetCache::new(&config.cache);
    assert!(cache.load(&config.cache.test_name).is_none());
    assert!(dataset::load(&config, 4).is_none());
}

#[test]
fn short_histories_yield_an_empty_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = split_config(dir.path());
    config.seq_len = 16; // every identity has fewer vectors than this
    seed_raw_files(&config);

    let (train, test) = dataset::preprocess_and_store(&config).unwrap();
    assert!(train.is_empty());
    assert!(test.is_empty());
    assert_eq!(train.x.dim(), (0, 16, 1));
    assert_eq!(train.y.dim(), (0, 2));
}
