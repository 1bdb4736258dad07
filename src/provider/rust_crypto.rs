//! Pure-Rust provider backed by the RustCrypto `rsa` crate

use rand::rngs::OsRng;
use rsa::oaep::{DecryptingKey, EncryptingKey};
use rsa::traits::{PublicKeyParts, RandomizedDecryptor, RandomizedEncryptor};
use rsa::{RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;

use super::{CipherProvider, ProviderError};
use crate::types::KeySize;

const MIN_BITS: u32 = 2048;
// RsaPublicKey refuses moduli above this without new_with_max_size
const MAX_BITS: u32 = 4096;

/// Key pair with OAEP-SHA256 contexts built once at generation
pub struct RustCryptoKeyPair {
    public_key: RsaPublicKey,
    encrypting: EncryptingKey<Sha256>,
    decrypting: DecryptingKey<Sha256>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RustCryptoProvider;

impl RustCryptoProvider {
    pub const NAME: &'static str = "rust-crypto";
}

impl CipherProvider for RustCryptoProvider {
    type KeyPair = RustCryptoKeyPair;

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn supports(&self, key_size: KeySize) -> bool {
        (MIN_BITS..=MAX_BITS).contains(&key_size.bits()) && key_size.bits() % 8 == 0
    }

    fn generate(&self, key_size: KeySize) -> Result<Self::KeyPair, ProviderError> {
        let private_key = RsaPrivateKey::new(&mut OsRng, key_size.bits() as usize)?;
        let public_key = RsaPublicKey::from(&private_key);

        Ok(RustCryptoKeyPair {
            encrypting: EncryptingKey::new(public_key.clone()),
            decrypting: DecryptingKey::new(private_key),
            public_key,
        })
    }

    fn public_material(&self, key: &Self::KeyPair) -> Vec<u8> {
        key.public_key.n().to_bytes_be()
    }

    fn encrypt(&self, key: &Self::KeyPair, plaintext: &[u8]) -> Result<Vec<u8>, ProviderError> {
        Ok(key.encrypting.encrypt_with_rng(&mut OsRng, plaintext)?)
    }

    // Blinded, as OpenSSL-derived providers always are
    fn decrypt(&self, key: &Self::KeyPair, ciphertext: &[u8]) -> Result<Vec<u8>, ProviderError> {
        Ok(key.decrypting.decrypt_with_rng(&mut OsRng, ciphertext)?)
    }
}
