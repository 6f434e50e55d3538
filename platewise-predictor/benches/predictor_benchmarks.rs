//! Criterion benchmarks for the rating predictor.
//!
//! Measures training time across table sizes (250, 500, 1000 restaurants) and
//! the cost of a single prediction against a trained model.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package platewise-predictor
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use std::hint::black_box;
use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use platewise_core::RestaurantProfile;
use platewise_core::test_support::synthetic_restaurants;
use platewise_predictor::{PredictorConfig, RatingPredictor};

/// Table sizes to benchmark.
const TABLE_SIZES: &[usize] = &[250, 500, 1000];

fn bench_fit_times(c: &mut Criterion) {
    let mut group = c.benchmark_group("fit_time");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(20));

    for &size in TABLE_SIZES {
        let restaurants = synthetic_restaurants(size);
        #[expect(
            clippy::as_conversions,
            reason = "Safe conversion for small table sizes"
        )]
        let throughput_size = size as u64;
        group.throughput(Throughput::Elements(throughput_size));
        group.bench_with_input(BenchmarkId::new("restaurants", size), &size, |b, _| {
            b.iter(|| {
                let mut predictor = RatingPredictor::with_config(PredictorConfig::default());
                #[expect(
                    clippy::let_underscore_must_use,
                    reason = "Benchmarking fit performance, score is intentionally discarded"
                )]
                let _ = predictor.fit(black_box(&restaurants));
            });
        });
    }

    group.finish();
}

fn bench_predict(c: &mut Criterion) {
    let restaurants = synthetic_restaurants(500);
    let mut predictor = RatingPredictor::new();
    if predictor.fit(&restaurants).is_err() {
        return;
    }
    let profile = RestaurantProfile {
        cuisines: "italian, pizza".to_owned(),
        city: "Gurgaon".to_owned(),
        average_cost_for_two: 700.0,
        has_table_booking: "Yes".to_owned(),
        has_online_delivery: "No".to_owned(),
    };

    c.bench_function("predict_one", |b| {
        b.iter(|| {
            #[expect(
                clippy::let_underscore_must_use,
                reason = "Benchmarking predict performance, estimate is intentionally discarded"
            )]
            let _ = predictor.predict_one(black_box(&profile));
        });
    });
}

criterion_group!(benches, bench_fit_times, bench_predict);
criterion_main!(benches);
