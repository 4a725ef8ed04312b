//! flowseg entrypoint: preprocess the configured capture files into dataset
//! dumps, skipping the work when both splits are already cached.

use chrono::Utc;
use flowseg::{
    config::PipelineConfig,
    dataset::{self, DatasetCache, LabeledDataset},
    logging::{LogEvent, StructuredLogger},
};
use tracing::info;

fn emit_split_summary(split: &str, dataset: &LabeledDataset) {
    let counts = dataset.class_counts();
    let event = LogEvent {
        ts: Utc::now().to_rfc3339(),
        level: "info",
        message: "split preprocessed",
        split: Some(split),
        segments: Some(dataset.len()),
        benign: Some(counts.benign),
        malignant: Some(counts.malignant),
        error: None,
    };
    StructuredLogger::emit_json(&event, &mut std::io::stdout());
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config_path = std::env::var("FLOWSEG_CONFIG_PATH")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| std::path::PathBuf::from("config.json"));
    let config = PipelineConfig::load(&config_path);

    StructuredLogger::init(config.log.json, &config.log.level);

    info!(dumps_dir = ?config.cache.dumps_dir, "flowseg starting");

    let cache = DatasetCache::new(&config.cache);
    let cached_train = cache.load(&config.cache.train_name);
    let cached_test = cache.load(&config.cache.test_name);
    if let (Some(train), Some(test)) = (cached_train, cached_test) {
        info!(
            train_segments = train.len(),
            test_segments = test.len(),
            "dataset dumps already present"
        );
        return Ok(());
    }

    let (train, test) = dataset::preprocess_and_store(&config)?;
    emit_split_summary(&config.cache.train_name, &train);
    emit_split_summary(&config.cache.test_name, &test);

    info!("flowseg preprocessing complete");
    Ok(())
}
