//! Benchmark of the cleaning stages on synthetic protein measurements
//!
//! Run with: cargo bench --bench cleaning_benchmark

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use polars::prelude::*;
use rand::prelude::*;
use rand::SeedableRng;

use cortex_clean::pipeline::{
    drop_columns_with_many_missing, fill_missing_values, remove_outliers, Dataset, OutlierPass,
};

/// Generate measurement columns with ~5% missing cells and a sprinkling of spikes
fn generate_test_dataset(n_rows: usize, n_features: usize, seed: u64) -> Dataset {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    let ids: Vec<String> = (0..n_rows).map(|i| format!("mouse_{}", i)).collect();
    let mut columns: Vec<Column> = vec![Column::new("MouseID".into(), ids)];

    for i in 0..n_features {
        // Every fourth feature is mostly empty so the pruning stage has work to do
        let missing_rate = if i % 4 == 3 { 0.6 } else { 0.05 };
        let values: Vec<Option<f64>> = (0..n_rows)
            .map(|_| {
                if rng.gen::<f64>() < missing_rate {
                    None
                } else if rng.gen::<f64>() < 0.01 {
                    Some(rng.gen::<f64>() * 50.0 + 10.0)
                } else {
                    Some(rng.gen::<f64>() + 0.5)
                }
            })
            .collect();
        columns.push(Column::new(format!("protein_{}_N", i).into(), values));
    }

    Dataset::new(DataFrame::new(columns).expect("Failed to create DataFrame"))
}

fn feature_names(n_features: usize) -> Vec<String> {
    (0..n_features)
        .filter(|i| i % 4 != 3)
        .map(|i| format!("protein_{}_N", i))
        .collect()
}

/// Benchmark pruning and mean imputation across dataset sizes
fn benchmark_prune_and_impute(c: &mut Criterion) {
    let mut group = c.benchmark_group("prune_and_impute");

    let sizes = [(1_000, 20), (10_000, 40), (50_000, 80)];

    for (n_rows, n_features) in sizes {
        let dataset = generate_test_dataset(n_rows, n_features, 42);
        let names = feature_names(n_features);
        let targets: Vec<&str> = names.iter().map(String::as_str).collect();
        group.throughput(Throughput::Elements((n_rows * n_features) as u64));

        group.bench_with_input(
            BenchmarkId::new("prune", format!("{}x{}", n_rows, n_features)),
            &dataset,
            |b, dataset| {
                b.iter(|| {
                    let _ = drop_columns_with_many_missing(black_box(dataset), black_box(0.2));
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("impute", format!("{}x{}", n_rows, n_features)),
            &dataset,
            |b, dataset| {
                b.iter(|| {
                    let _ = fill_missing_values(black_box(dataset), black_box(&targets));
                });
            },
        );
    }

    group.finish();
}

/// Compare sequential and against-original outlier removal
fn benchmark_outlier_passes(c: &mut Criterion) {
    let mut group = c.benchmark_group("outlier_removal");

    let sizes = [10_000, 50_000, 100_000];

    for n_rows in sizes {
        let dataset = generate_test_dataset(n_rows, 8, 7);
        let names = feature_names(8);
        let targets: Vec<&str> = names.iter().map(String::as_str).collect();
        let (filled, _) =
            fill_missing_values(&dataset, &targets).expect("Failed to impute benchmark data");
        group.throughput(Throughput::Elements(n_rows as u64));

        for (label, pass) in [
            ("sequential", OutlierPass::Sequential),
            ("against_original", OutlierPass::AgainstOriginal),
        ] {
            group.bench_with_input(BenchmarkId::new(label, n_rows), &filled, |b, filled| {
                b.iter(|| {
                    let _ = remove_outliers(black_box(filled), black_box(&targets), black_box(pass));
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, benchmark_prune_and_impute, benchmark_outlier_passes);
criterion_main!(benches);
