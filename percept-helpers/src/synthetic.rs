//! Deterministic toy datasets for demos, benches and tests.

use crate::{BinaryLabel, DataPoint};
use ndarray::array;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Upper bound of the duration-like feature.
pub const MAX_HOURS: f64 = 168.0;
/// Upper bound of the percentage-like feature.
pub const MAX_PERCENTAGE: f64 = 100.0;

/// Generates `n_per_class` negative and `n_per_class` positive points that are
/// linearly separable.
///
/// Negatives are drawn from `hours in [0, 60), percentage in [0, 45)`,
/// positives from `hours in [90, 168], percentage in [55, 100]`, so the line
/// `hours / 168 + percentage / 100 = 1` always separates them. Points are
/// interleaved (negative, positive, ...) so training sees both classes early.
pub fn linearly_separable(n_per_class: usize, seed: u64) -> Vec<DataPoint<BinaryLabel, f64>> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let mut data = Vec::with_capacity(n_per_class * 2);

    for _ in 0..n_per_class {
        let hours: f64 = rng.random_range(0.0..60.0);
        let pct: f64 = rng.random_range(0.0..45.0);
        data.push(DataPoint::new(array![hours, pct], BinaryLabel::Negative));

        let hours: f64 = rng.random_range(90.0..=MAX_HOURS);
        let pct: f64 = rng.random_range(55.0..=MAX_PERCENTAGE);
        data.push(DataPoint::new(array![hours, pct], BinaryLabel::Positive));
    }
    data
}
