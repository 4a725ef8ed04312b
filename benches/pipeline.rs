//! Pipeline benchmark: rows → features → histories → segments.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flowseg::features::{featurize_row, HeaderMap, ParticipantSet};
use flowseg::history::{segment_histories, separate_ips};
use ndarray::Array2;

const N_ROWS: usize = 2000;
const N_FEATURES: usize = 8;

fn make_headers() -> HeaderMap {
    HeaderMap::from_record(&csv::StringRecord::from(vec![
        "Source", "Destination", "f0", "f1", "f2", "f3", "f4", "f5", "f6", "f7",
    ]))
}

fn make_records(n: usize) -> Vec<csv::StringRecord> {
    (0..n)
        .map(|i| {
            let src = format!("10.0.{}.{}", i % 16, i % 251);
            let dst = format!("192.168.{}.{}", i % 8, (i * 7) % 251);
            let mut cells = vec![src, dst];
            for f in 0..N_FEATURES {
                cells.push(format!("{}", (i * (f + 1)) % 1500));
            }
            csv::StringRecord::from(cells)
        })
        .collect()
}

fn make_matrix(n: usize) -> (Array2<f32>, Vec<ParticipantSet>) {
    let flat: Vec<f32> = (0..n * N_FEATURES).map(|i| (i % 1500) as f32).collect();
    let x = Array2::from_shape_vec((n, N_FEATURES), flat).unwrap();
    let participants = (0..n)
        .map(|i| {
            let mut p = ParticipantSet::new();
            p.insert(format!("10.0.{}.{}", i % 16, i % 251));
            p.insert(format!("192.168.{}.{}", i % 8, (i * 7) % 251));
            p
        })
        .collect();
    (x, participants)
}

fn bench_featurize_rows(c: &mut Criterion) {
    let headers = make_headers();
    let fields: Vec<String> = (0..N_FEATURES).map(|f| format!("f{}", f)).collect();
    let records = make_records(N_ROWS);

    c.bench_function("featurize_2000_rows", |b| {
        b.iter(|| {
            for (i, record) in records.iter().enumerate() {
                black_box(featurize_row(record, &headers, &fields, i + 1).unwrap());
            }
        })
    });
}

fn bench_history_building(c: &mut Criterion) {
    let (x, participants) = make_matrix(N_ROWS);

    c.bench_function("separate_ips_2000_rows", |b| {
        b.iter(|| black_box(separate_ips(black_box(&x), black_box(&participants))))
    });
}

fn bench_segmentation(c: &mut Criterion) {
    let (x, participants) = make_matrix(N_ROWS);
    let histories = separate_ips(&x, &participants);

    c.bench_function("segment_histories_seq16", |b| {
        b.iter(|| black_box(segment_histories(black_box(&histories), 16)))
    });
}

criterion_group!(
    benches,
    bench_featurize_rows,
    bench_history_building,
    bench_segmentation
);
criterion_main!(benches);
