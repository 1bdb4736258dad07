//! Error types for the benchmark.
//!
//! Every failure is fatal to the run: nothing here is recovered from, the
//! variants only carry enough context to say which provider, key size and
//! operation broke.

use thiserror::Error;

use crate::provider::ProviderError;
use crate::types::{KeySize, Operation};

/// The main error type for benchmark runs.
#[derive(Error, Debug)]
pub enum BenchError {
    /// Provider cannot generate keys of this size
    #[error("{provider}: unsupported key size {key_size}")]
    UnsupportedKeySize {
        provider: &'static str,
        key_size: KeySize,
    },

    /// Provider failed while generating a key pair
    #[error("{provider}: key generation failed for {key_size}: {source}")]
    KeyGeneration {
        provider: &'static str,
        key_size: KeySize,
        source: ProviderError,
    },

    /// A single encrypt or decrypt call failed
    #[error("{provider}: {operation} failed for {key_size}: {source}")]
    Operation {
        provider: &'static str,
        key_size: KeySize,
        operation: Operation,
        source: ProviderError,
    },

    /// Decrypting a fresh ciphertext did not give back the plaintext
    #[error("{provider}: round trip mismatch for {key_size}")]
    RoundTrip {
        provider: &'static str,
        key_size: KeySize,
    },

    /// OS random source failed
    #[error("Randomness source failed: {0}")]
    Randomness(#[from] rand::Error),

    /// Key size was measured without being provisioned
    #[error("No key pair provisioned for {0}")]
    MissingKey(KeySize),

    /// Aggregation found no result for a configuration
    #[error("Missing {operation} result for {key_size} x {iterations}")]
    MissingCell {
        key_size: KeySize,
        iterations: usize,
        operation: Operation,
    },

    /// Configuration failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// A specialized Result type for benchmark operations.
pub type Result<T> = std::result::Result<T, BenchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_configuration() {
        let err = BenchError::UnsupportedKeySize {
            provider: "rust-crypto",
            key_size: KeySize(512),
        };
        assert_eq!(err.to_string(), "rust-crypto: unsupported key size RSA-512");

        let err = BenchError::MissingCell {
            key_size: KeySize(2048),
            iterations: 10,
            operation: Operation::Decrypt,
        };
        assert_eq!(err.to_string(), "Missing decrypt result for RSA-2048 x 10");
    }
}
