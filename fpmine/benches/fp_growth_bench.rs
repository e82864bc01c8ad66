use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ndarray::Array2;
use rand::Rng;

use fpmine::{mine_binary_matrix, mine_with_config, MiningConfig};

/// Generate a synthetic 0/1 transaction matrix.
///
/// - `avg_transaction_size`: expected draws per transaction
/// - `density`: probability that a draw is kept (0.0-1.0)
fn generate_transactions(
    num_transactions: usize,
    num_items: usize,
    avg_transaction_size: usize,
    density: f64,
) -> Array2<i32> {
    let mut rng = rand::thread_rng();
    let mut data = vec![0i32; num_transactions * num_items];

    for tx_idx in 0..num_transactions {
        let random_factor: f64 = rng.gen();
        let num_items_in_tx = (avg_transaction_size as f64 * (0.5 + random_factor)).round() as usize;
        let num_items_in_tx = num_items_in_tx.min(num_items);

        for _ in 0..num_items_in_tx {
            let density_check: f64 = rng.gen();
            if density_check < density {
                let item = rng.gen_range(0..num_items);
                data[tx_idx * num_items + item] = 1;
            }
        }
    }

    Array2::from_shape_vec((num_transactions, num_items), data).unwrap()
}

fn bench_fp_growth_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("fp_growth_scaling");
    let config = MiningConfig::new(0.1);

    let configs = vec![
        ("small_100tx", 100, 20, 5),
        ("medium_500tx", 500, 50, 10),
        ("large_1000tx", 1000, 100, 15),
        ("xlarge_5000tx", 5000, 100, 20),
    ];

    for (name, num_tx, num_items, avg_size) in configs {
        let transactions = generate_transactions(num_tx, num_items, avg_size, 0.7);

        group.bench_with_input(BenchmarkId::from_parameter(name), &transactions, |b, tx| {
            b.iter(|| mine_binary_matrix(black_box(tx.view()), black_box(&config)));
        });
    }

    group.finish();
}

fn bench_fp_growth_min_support(c: &mut Criterion) {
    let mut group = c.benchmark_group("fp_growth_min_support");

    let transactions = generate_transactions(1000, 50, 10, 0.7);

    for &min_sup in &[0.05, 0.1, 0.2, 0.3, 0.5] {
        let config = MiningConfig::new(min_sup);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:.2}", min_sup)),
            &config,
            |b, config| {
                b.iter(|| mine_binary_matrix(black_box(transactions.view()), black_box(config)));
            },
        );
    }

    group.finish();
}

/// Recursion versus direct enumeration of single-path conditional trees.
fn bench_single_path_shortcut(c: &mut Criterion) {
    let mut group = c.benchmark_group("fp_growth_single_path");

    let transactions = generate_transactions(1000, 30, 8, 0.8);

    for enabled in [false, true] {
        let config = MiningConfig::new(0.05).with_single_path(enabled);
        group.bench_with_input(
            BenchmarkId::from_parameter(if enabled { "shortcut" } else { "recursive" }),
            &config,
            |b, config| {
                b.iter(|| mine_binary_matrix(black_box(transactions.view()), black_box(config)));
            },
        );
    }

    group.finish();
}

/// String labels pay for interning on top of mining.
fn bench_labelled_transactions(c: &mut Criterion) {
    let matrix = generate_transactions(1000, 50, 10, 0.7);
    let transactions: Vec<Vec<String>> = matrix
        .outer_iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .filter(|(_, &v)| v != 0)
                .map(|(item, _)| format!("item-{item}"))
                .collect()
        })
        .collect();
    let config = MiningConfig::new(0.1);

    c.bench_function("fp_growth_labelled", |b| {
        b.iter(|| mine_with_config(black_box(&transactions), black_box(&config)));
    });
}

criterion_group!(
    benches,
    bench_fp_growth_scaling,
    bench_fp_growth_min_support,
    bench_single_path_shortcut,
    bench_labelled_transactions
);
criterion_main!(benches);
