//! Core types for the benchmark

use rand::{rngs::OsRng, RngCore};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;

/// Plaintext length in bytes. Largest payload OAEP-SHA256 accepts under a
/// 2048-bit modulus (256 - 2 * 32 - 2).
pub const PLAINTEXT_LEN: usize = 190;

/// RSA modulus size in bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeySize(pub u32);

impl KeySize {
    pub fn bits(&self) -> u32 {
        self.0
    }

    /// Modulus length in bytes, rounded up
    pub fn bytes(&self) -> usize {
        (self.0 as usize + 7) / 8
    }
}

impl From<u32> for KeySize {
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}

impl fmt::Display for KeySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RSA-{}", self.0)
    }
}

/// Measured operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Encrypt,
    Decrypt,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Encrypt => f.write_str("encrypt"),
            Operation::Decrypt => f.write_str("decrypt"),
        }
    }
}

/// Random message drawn once per harness invocation
#[derive(Clone, PartialEq, Eq)]
pub struct Plaintext(Vec<u8>);

impl Plaintext {
    /// Draw `PLAINTEXT_LEN` bytes from the OS generator
    pub fn random() -> Result<Self> {
        let mut bytes = vec![0u8; PLAINTEXT_LEN];
        OsRng.try_fill_bytes(&mut bytes)?;
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Plaintext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Plaintext({} bytes)", self.0.len())
    }
}

/// Per-call elapsed times in seconds for one (key size, operation, count) triple
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    pub key_size: KeySize,
    pub operation: Operation,
    samples: Vec<f64>,
}

impl SampleSet {
    pub(crate) fn new(key_size: KeySize, operation: Operation, samples: Vec<f64>) -> Self {
        Self {
            key_size,
            operation,
            samples,
        }
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Mean and population standard deviation of one sample set, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResultCell {
    pub mean: f64,
    pub std_dev: f64,
}

/// One line of the comparison table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub key_size: KeySize,
    pub iterations: usize,
    pub encrypt: ResultCell,
    pub decrypt: ResultCell,
}
