//! Key provisioning
//!
//! One key pair per distinct key size, generated before any measurement and
//! read-only afterwards.

use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::time::Instant;
use tracing::{debug, info};

use crate::error::{BenchError, Result};
use crate::provider::CipherProvider;
use crate::types::{KeySize, Operation, Plaintext};

/// Cached key pair plus the fingerprint of its public half
pub struct ProvisionedKey<K> {
    pub key_pair: K,
    pub fingerprint: String,
}

/// Key pairs for one benchmark run, keyed by size
pub struct KeyStore<K> {
    keys: BTreeMap<KeySize, ProvisionedKey<K>>,
    generated: usize,
}

impl<K> KeyStore<K> {
    /// Generate and self-check a key pair for every distinct size.
    ///
    /// Fails on the first unsupported size, generation error or round-trip
    /// mismatch, so either every key is available or none is.
    pub fn provision<P>(provider: &P, key_sizes: &[KeySize]) -> Result<Self>
    where
        P: CipherProvider<KeyPair = K>,
    {
        let mut store = Self {
            keys: BTreeMap::new(),
            generated: 0,
        };

        for &key_size in key_sizes {
            if store.keys.contains_key(&key_size) {
                continue;
            }
            if !provider.supports(key_size) {
                return Err(BenchError::UnsupportedKeySize {
                    provider: provider.name(),
                    key_size,
                });
            }

            let start = Instant::now();
            let key_pair = provider
                .generate(key_size)
                .map_err(|source| BenchError::KeyGeneration {
                    provider: provider.name(),
                    key_size,
                    source,
                })?;
            store.generated += 1;

            verify_round_trip(provider, &key_pair, key_size)?;

            let fingerprint = hex::encode(Sha256::digest(provider.public_material(&key_pair)));
            let short = &fingerprint[..16];
            info!(
                provider = provider.name(),
                key_size = key_size.bits(),
                fingerprint = short,
                elapsed_ms = start.elapsed().as_millis() as u64,
                "Key pair provisioned"
            );

            store.keys.insert(
                key_size,
                ProvisionedKey {
                    key_pair,
                    fingerprint,
                },
            );
        }

        Ok(store)
    }

    pub fn get(&self, key_size: KeySize) -> Result<&ProvisionedKey<K>> {
        self.keys
            .get(&key_size)
            .ok_or(BenchError::MissingKey(key_size))
    }

    /// Number of key pairs generated since provisioning
    pub fn generated(&self) -> usize {
        self.generated
    }

    pub fn key_sizes(&self) -> impl Iterator<Item = KeySize> + '_ {
        self.keys.keys().copied()
    }
}

/// Encrypt and decrypt a fresh plaintext; timings mean nothing if this fails
pub fn verify_round_trip<P: CipherProvider>(
    provider: &P,
    key_pair: &P::KeyPair,
    key_size: KeySize,
) -> Result<()> {
    let plaintext = Plaintext::random()?;

    let ciphertext = provider
        .encrypt(key_pair, plaintext.as_bytes())
        .map_err(|source| BenchError::Operation {
            provider: provider.name(),
            key_size,
            operation: Operation::Encrypt,
            source,
        })?;
    let decrypted = provider
        .decrypt(key_pair, &ciphertext)
        .map_err(|source| BenchError::Operation {
            provider: provider.name(),
            key_size,
            operation: Operation::Decrypt,
            source,
        })?;

    if decrypted != plaintext.as_bytes() {
        return Err(BenchError::RoundTrip {
            provider: provider.name(),
            key_size,
        });
    }

    debug!(provider = provider.name(), key_size = key_size.bits(), "Round trip verified");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bench::testing::MockProvider;

    #[test]
    fn test_one_key_per_distinct_size() {
        let provider = MockProvider::default();
        let sizes = [KeySize(2048), KeySize(4096), KeySize(2048)];
        let store = KeyStore::provision(&provider, &sizes).unwrap();

        assert_eq!(store.generated(), 2);
        assert_eq!(provider.generated.get(), 2);
        assert_eq!(
            store.key_sizes().collect::<Vec<_>>(),
            vec![KeySize(2048), KeySize(4096)]
        );
    }

    #[test]
    fn test_lookup_returns_same_key_material() {
        let provider = MockProvider::default();
        let store = KeyStore::provision(&provider, &[KeySize(2048)]).unwrap();

        let first = store.get(KeySize(2048)).unwrap();
        let second = store.get(KeySize(2048)).unwrap();
        assert_eq!(first.key_pair.id, second.key_pair.id);
        assert_eq!(first.fingerprint, second.fingerprint);
        assert_eq!(first.fingerprint.len(), 64);
        assert_eq!(store.generated(), 1);
    }

    #[test]
    fn test_unsupported_size_fails_before_generation() {
        let provider = MockProvider::default();
        let err = KeyStore::provision(&provider, &[KeySize(2048), KeySize(512)])
            .err()
            .unwrap();

        assert!(matches!(
            err,
            BenchError::UnsupportedKeySize { key_size: KeySize(512), .. }
        ));
        assert_eq!(provider.generated.get(), 1);
    }

    #[test]
    fn test_round_trip_mismatch_is_fatal() {
        let provider = MockProvider::corrupting();
        let err = KeyStore::provision(&provider, &[KeySize(2048)]).err().unwrap();
        assert!(matches!(err, BenchError::RoundTrip { .. }));
    }

    #[test]
    fn test_round_trip_decrypt_failure_is_fatal() {
        let provider = MockProvider::failing_decrypt_at(0);
        let err = KeyStore::provision(&provider, &[KeySize(2048)]).err().unwrap();
        assert!(matches!(
            err,
            BenchError::Operation { operation: Operation::Decrypt, .. }
        ));
    }

    #[test]
    fn test_missing_key() {
        let provider = MockProvider::default();
        let store = KeyStore::provision(&provider, &[KeySize(2048)]).unwrap();
        assert!(matches!(
            store.get(KeySize(4096)),
            Err(BenchError::MissingKey(KeySize(4096)))
        ));
    }
}
