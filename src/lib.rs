//! RSA-OAEP latency benchmark
//!
//! Times RSA public-key encryption and private-key decryption (OAEP with
//! MGF1-SHA256 and SHA-256, no label) across cryptographic providers, key
//! sizes and repetition counts, and reports mean and population standard
//! deviation per configuration.
//!
//! ## Architecture
//! - Provider: pluggable RSA implementations behind [`CipherProvider`]
//! - Bench: key provisioning, per-call timing, sample reduction
//! - Report: grid assembly and table rendering
//!
//! ## Example
//!
//! ```no_run
//! use rsa_bench::{run_benchmark, AwsLcProvider, BenchConfig};
//!
//! let config = BenchConfig::new(vec![10, 100], vec![2048]);
//! let report = run_benchmark(&AwsLcProvider, &config).unwrap();
//! println!("{report}");
//! ```

pub mod bench;
pub mod config;
pub mod error;
pub mod provider;
pub mod report;
pub mod types;

pub use bench::run_benchmark;
pub use config::{BenchConfig, Config, LoggingConfig};
pub use error::{BenchError, Result};
pub use provider::{AwsLcProvider, CipherProvider, ProviderError, ProviderKind, RustCryptoProvider};
pub use report::{Report, ResultGrid, ScalingAnomaly};
pub use types::{KeySize, Operation, Plaintext, ReportRow, ResultCell, SampleSet, PLAINTEXT_LEN};

use tracing::info;

/// Runs the configured grid once per selected provider
#[derive(Debug, Clone)]
pub struct BenchmarkSuite {
    config: Config,
}

impl BenchmarkSuite {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// One report per provider, in configuration order. Stops at the first
    /// failing provider, discarding reports already produced.
    pub fn run(&self) -> Result<Vec<Report>> {
        self.config.validate()?;

        let mut reports = Vec::with_capacity(self.config.providers.len());
        for &kind in &self.config.providers {
            info!(provider = %kind, "Starting provider");
            reports.push(run_provider(kind, &self.config.benchmark)?);
        }
        Ok(reports)
    }
}

/// Dispatch the generic harness to a concrete provider
pub fn run_provider(kind: ProviderKind, config: &BenchConfig) -> Result<Report> {
    match kind {
        ProviderKind::RustCrypto => run_benchmark(&RustCryptoProvider, config),
        ProviderKind::AwsLc => run_benchmark(&AwsLcProvider, config),
    }
}
