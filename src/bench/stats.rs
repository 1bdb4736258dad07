//! Sample reduction

use crate::types::{ResultCell, SampleSet};

/// Arithmetic mean, `None` for an empty slice
pub fn mean(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    Some(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Population standard deviation (divisor N) around `mean`
pub fn population_std_dev(samples: &[f64], mean: f64) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum_sq: f64 = samples.iter().map(|x| (x - mean).powi(2)).sum();
    (sum_sq / samples.len() as f64).sqrt()
}

/// Reduce one sample set to its result cell. Both figures come from the same
/// samples; `None` only when the set is empty.
pub fn summarize(set: &SampleSet) -> Option<ResultCell> {
    let samples = set.samples();
    let mean = mean(samples)?;
    Some(ResultCell {
        mean,
        std_dev: population_std_dev(samples, mean),
    })
}
