//! Benchmark module
//! Key provisioning, per-call latency sampling and sample reduction

pub mod keys;
pub mod latency;
pub mod stats;

#[cfg(test)]
pub(crate) mod testing;

pub use keys::{KeyStore, ProvisionedKey};
pub use latency::{run_bench, time_decrypt, time_encrypt};

use std::time::Instant;
use tracing::{info, warn};

use crate::config::BenchConfig;
use crate::error::Result;
use crate::provider::CipherProvider;
use crate::report::{Report, ResultGrid};

/// Measure the full grid for one provider.
///
/// Keys are provisioned first; then, for each iteration count in order, every
/// key size is timed for encryption and afterwards for decryption. The first
/// failure ends the run and no report is produced.
pub fn run_benchmark<P: CipherProvider>(provider: &P, config: &BenchConfig) -> Result<Report> {
    config.validate()?;

    let started = Instant::now();
    let store = KeyStore::provision(provider, &config.keys)?;
    info!(
        provider = provider.name(),
        keys = store.generated(),
        timed_calls = config.total_operations(),
        "Measuring"
    );

    let mut grid = ResultGrid::default();
    for &iterations in &config.iterations {
        for &key_size in &config.keys {
            let key = store.get(key_size)?;
            let set = time_encrypt(provider, &key.key_pair, key_size, iterations)?;
            grid.record(iterations, &set)?;
        }
        for &key_size in &config.keys {
            let key = store.get(key_size)?;
            let set = time_decrypt(provider, &key.key_pair, key_size, iterations)?;
            grid.record(iterations, &set)?;
        }
    }

    let report = Report::assemble(provider.name(), config, &grid)?;

    for anomaly in report.scaling_anomalies() {
        warn!(
            provider = provider.name(),
            operation = %anomaly.operation,
            iterations = anomaly.iterations,
            smaller = anomaly.smaller.bits(),
            larger = anomaly.larger.bits(),
            smaller_mean = anomaly.smaller_mean,
            larger_mean = anomaly.larger_mean,
            "Larger key was not slower"
        );
    }

    info!(
        provider = provider.name(),
        rows = report.rows.len(),
        elapsed_s = started.elapsed().as_secs_f64(),
        "Benchmark complete"
    );
    Ok(report)
}
