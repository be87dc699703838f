use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use freqmine::{
    apriori, mine_itemsets, prefix_span, CountStrategy, Corpus, FrequentLevel, MineConfig,
    NoopObserver,
};
use rand::Rng;

/// Generate synthetic `;`-delimited baskets
///
/// Parameters:
/// - num_transactions: Number of transactions
/// - num_items: Total number of possible items
/// - avg_transaction_size: Average items per transaction
/// - density: How dense the data is (0.0-1.0)
fn generate_baskets(
    num_transactions: usize,
    num_items: usize,
    avg_transaction_size: usize,
    density: f64,
) -> Corpus {
    let mut rng = rand::thread_rng();
    let mut lines = Vec::with_capacity(num_transactions);

    for _ in 0..num_transactions {
        let random_factor: f64 = rng.gen();
        let num_items_in_tx = (avg_transaction_size as f64 * (0.5 + random_factor)).round() as usize;
        let num_items_in_tx = num_items_in_tx.min(num_items);

        let mut items = Vec::with_capacity(num_items_in_tx);
        for _ in 0..num_items_in_tx {
            let density_check: f64 = rng.gen();
            if density_check < density {
                items.push(format!("item{}", rng.gen_range(0..num_items)));
            }
        }
        lines.push(items.join(";"));
    }

    Corpus::from_lines(lines)
}

/// Generate sentences over a small vocabulary so word runs repeat
fn generate_sentences(num_transactions: usize, vocabulary: usize, avg_len: usize) -> Corpus {
    let mut rng = rand::thread_rng();
    let lines: Vec<String> = (0..num_transactions)
        .map(|_| {
            let len = rng.gen_range(1..=avg_len * 2);
            (0..len)
                .map(|_| format!("w{}", rng.gen_range(0..vocabulary)))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();
    Corpus::from_lines(lines)
}

/// Benchmark Apriori with different dataset sizes
fn bench_apriori_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("apriori_scaling");
    group.sample_size(10);

    let configs = vec![
        ("small_100tx", 100, 20, 5),
        ("medium_500tx", 500, 50, 8),
        ("large_1000tx", 1000, 100, 10),
    ];

    for (name, num_tx, num_items, avg_size) in configs {
        let corpus = generate_baskets(num_tx, num_items, avg_size, 0.7);

        group.bench_with_input(BenchmarkId::from_parameter(name), &corpus, |b, corpus| {
            b.iter(|| apriori(black_box(corpus), black_box(0.1)));
        });
    }

    group.finish();
}

/// Full rescan against tid-list intersection on the same data
fn bench_count_strategy(c: &mut Criterion) {
    let mut group = c.benchmark_group("apriori_count_strategy");
    group.sample_size(10);

    let corpus = generate_baskets(2000, 40, 10, 0.8);

    for (name, strategy) in [("rescan", CountStrategy::Rescan), ("tid_list", CountStrategy::TidList)] {
        let config = MineConfig::default()
            .with_min_support(0.05)
            .with_count_strategy(strategy);

        group.bench_with_input(BenchmarkId::from_parameter(name), &config, |b, config| {
            b.iter(|| {
                let mut levels: Vec<FrequentLevel> = Vec::new();
                mine_itemsets(black_box(&corpus), config, &mut levels, &mut NoopObserver)
            });
        });
    }

    group.finish();
}

/// Benchmark sequence mining with different min_support thresholds
fn bench_prefix_span_min_support(c: &mut Criterion) {
    let mut group = c.benchmark_group("prefix_span_min_support");

    let corpus = generate_sentences(1000, 30, 12);

    for &min_sup in &[0.01, 0.05, 0.1, 0.2] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:.2}", min_sup)),
            &min_sup,
            |b, &sup| {
                b.iter(|| prefix_span(black_box(&corpus), black_box(sup)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_apriori_scaling,
    bench_count_strategy,
    bench_prefix_span_min_support
);
criterion_main!(benches);
