//! Per-call latency sampling for RSA-OAEP operations
//!
//! Each repetition is timed on its own so per-call variance survives into the
//! sample set. Only the provider call sits inside the timed region; plaintext
//! and ciphertext are prepared once per configuration and reused for every
//! repetition. There is no warm-up and no outlier trimming.

use std::hint::black_box;
use std::time::Instant;
use tracing::debug;

use crate::error::{BenchError, Result};
use crate::provider::{CipherProvider, ProviderError};
use crate::types::{KeySize, Operation, Plaintext, SampleSet};

/// Time `iterations` calls of `f`, one sample per call, in seconds.
///
/// Stops at the first failing call and returns its error; no partial samples
/// escape.
pub fn run_bench<T, F>(iterations: usize, mut f: F) -> std::result::Result<Vec<f64>, ProviderError>
where
    F: FnMut() -> std::result::Result<T, ProviderError>,
{
    let mut samples = Vec::with_capacity(iterations);

    for _ in 0..iterations {
        let start = Instant::now();
        let output = f();
        let elapsed = start.elapsed().as_secs_f64();
        black_box(output?);
        samples.push(elapsed);
    }

    Ok(samples)
}

/// Encrypt one fresh plaintext `iterations` times
pub fn time_encrypt<P: CipherProvider>(
    provider: &P,
    key_pair: &P::KeyPair,
    key_size: KeySize,
    iterations: usize,
) -> Result<SampleSet> {
    let plaintext = Plaintext::random()?;

    let samples = run_bench(iterations, || {
        provider.encrypt(key_pair, black_box(plaintext.as_bytes()))
    })
    .map_err(|source| operation_error(provider, key_size, Operation::Encrypt, source))?;

    debug!(
        provider = provider.name(),
        key_size = key_size.bits(),
        iterations,
        "Encrypt samples collected"
    );
    Ok(SampleSet::new(key_size, Operation::Encrypt, samples))
}

/// Decrypt one ciphertext, produced from one fresh plaintext, `iterations` times
pub fn time_decrypt<P: CipherProvider>(
    provider: &P,
    key_pair: &P::KeyPair,
    key_size: KeySize,
    iterations: usize,
) -> Result<SampleSet> {
    let plaintext = Plaintext::random()?;
    let ciphertext = provider
        .encrypt(key_pair, plaintext.as_bytes())
        .map_err(|source| operation_error(provider, key_size, Operation::Encrypt, source))?;

    let samples = run_bench(iterations, || {
        provider.decrypt(key_pair, black_box(ciphertext.as_slice()))
    })
    .map_err(|source| operation_error(provider, key_size, Operation::Decrypt, source))?;

    debug!(
        provider = provider.name(),
        key_size = key_size.bits(),
        iterations,
        "Decrypt samples collected"
    );
    Ok(SampleSet::new(key_size, Operation::Decrypt, samples))
}

fn operation_error<P: CipherProvider>(
    provider: &P,
    key_size: KeySize,
    operation: Operation,
    source: ProviderError,
) -> BenchError {
    BenchError::Operation {
        provider: provider.name(),
        key_size,
        operation,
        source,
    }
}
