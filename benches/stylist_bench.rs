//! Criterion benchmarks for the recommendation engine.
//!
//! Uses synthetic catalogs of increasing size to measure the pairwise
//! enumeration and both searches.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use stylist_core::catalog::{Category, Product};
use stylist_core::constraint::PairSpace;
use stylist_core::evolution::{EvolutionConfig, EvolutionarySearch, FitnessWeights};
use stylist_core::optimal::{OptimalSearch, ScoringWeights};
use stylist_core::{Request, Stylist, StylistConfig};

const OCCASIONS: [&str; 4] = ["wedding", "party", "casual", "formal"];

// ===========================================================================
// Synthetic catalog: half outfits, half jewelry
// ===========================================================================

fn synthetic_catalog(n: usize) -> Vec<Product> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..n)
        .map(|i| {
            let category = if i % 2 == 0 {
                Category::Outfit
            } else {
                Category::Jewelry
            };
            Product::new(format!("p{i}"), format!("Item {i}"), rng.random_range(500..12_000), category)
                .with_description("embroidered silk with gold detailing")
                .with_occasion(OCCASIONS[i % OCCASIONS.len()])
        })
        .collect()
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_optimal(c: &mut Criterion) {
    let mut group = c.benchmark_group("optimal_search");
    group.sample_size(20);

    for &n in &[20, 100, 200] {
        let catalog = synthetic_catalog(n);
        let request = Request::new("wedding", 15_000)
            .expect("valid request")
            .with_preferences("gold silk");
        group.bench_with_input(BenchmarkId::from_parameter(n), &catalog, |b, catalog| {
            b.iter(|| {
                let space = PairSpace::build(black_box(catalog), request.budget);
                black_box(OptimalSearch::run(&space, &request, &ScoringWeights::default()))
            })
        });
    }
    group.finish();
}

fn bench_evolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("evolutionary_search");
    group.sample_size(20);

    for &n in &[20, 100, 200] {
        let catalog = synthetic_catalog(n);
        let request = Request::new("party", 15_000).expect("valid request");
        let space = PairSpace::build(&catalog, request.budget);
        group.bench_with_input(BenchmarkId::from_parameter(n), &space, |b, space| {
            b.iter(|| {
                let mut rng = StdRng::seed_from_u64(42);
                black_box(EvolutionarySearch::run(
                    black_box(space),
                    &request,
                    &EvolutionConfig::default(),
                    &FitnessWeights::default(),
                    &mut rng,
                ))
            })
        });
    }
    group.finish();
}

fn bench_recommend(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend");
    group.sample_size(10);

    let stylist = Stylist::new(StylistConfig::default().with_seed(42)).expect("valid config");
    for &n in &[20, 200] {
        let catalog = synthetic_catalog(n);
        let request = Request::new("formal", 12_000).expect("valid request");
        group.bench_with_input(BenchmarkId::from_parameter(n), &catalog, |b, catalog| {
            b.iter(|| black_box(stylist.recommend(black_box(catalog), &request)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_optimal, bench_evolution, bench_recommend);
criterion_main!(benches);
