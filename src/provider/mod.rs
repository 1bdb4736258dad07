//! Asymmetric cipher providers
//!
//! The harness only sees [`CipherProvider`]; each implementation wraps one
//! RSA library with the padding fixed to OAEP, MGF1(SHA-256), SHA-256 and no
//! label.

mod aws_lc;
mod rust_crypto;

pub use aws_lc::AwsLcProvider;
pub use rust_crypto::RustCryptoProvider;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::types::KeySize;

/// Errors surfaced by the underlying RSA libraries
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error(transparent)]
    RustCrypto(#[from] rsa::Error),

    #[error("aws-lc: {0}")]
    AwsLc(#[from] aws_lc_rs::error::Unspecified),
}

/// Pluggable RSA-OAEP capability.
///
/// Key pairs carry their prepared OAEP contexts so that `encrypt` and
/// `decrypt` are a single library call each.
pub trait CipherProvider {
    type KeyPair;

    /// Short name used in logs and report headings
    fn name(&self) -> &'static str;

    /// Whether `generate` accepts this key size
    fn supports(&self, key_size: KeySize) -> bool;

    fn generate(&self, key_size: KeySize) -> Result<Self::KeyPair, ProviderError>;

    /// Public key bytes identifying the key material
    fn public_material(&self, key: &Self::KeyPair) -> Vec<u8>;

    fn encrypt(&self, key: &Self::KeyPair, plaintext: &[u8]) -> Result<Vec<u8>, ProviderError>;

    fn decrypt(&self, key: &Self::KeyPair, ciphertext: &[u8]) -> Result<Vec<u8>, ProviderError>;
}

/// Providers selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    RustCrypto,
    AwsLc,
}

impl ProviderKind {
    pub fn all() -> Vec<Self> {
        vec![Self::RustCrypto, Self::AwsLc]
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::RustCrypto => f.write_str(RustCryptoProvider::NAME),
            ProviderKind::AwsLc => f.write_str(AwsLcProvider::NAME),
        }
    }
}
