//! In-memory provider for harness tests

use std::cell::{Cell, RefCell};

use crate::provider::{CipherProvider, ProviderError};
use crate::types::KeySize;

pub struct MockKey {
    pub id: u8,
    pub key_size: KeySize,
}

/// Reversible toy cipher that records every input it is handed
#[derive(Default)]
pub struct MockProvider {
    pub generated: Cell<u8>,
    pub encrypt_inputs: RefCell<Vec<Vec<u8>>>,
    pub decrypt_inputs: RefCell<Vec<Vec<u8>>>,
    /// Fail the encrypt call with this zero-based index
    pub fail_encrypt_at: Option<usize>,
    /// Fail the decrypt call with this zero-based index
    pub fail_decrypt_at: Option<usize>,
    /// Decrypt returns garbage
    pub corrupt: bool,
}

impl MockProvider {
    pub fn failing_encrypt_at(call: usize) -> Self {
        Self {
            fail_encrypt_at: Some(call),
            ..Self::default()
        }
    }

    pub fn failing_decrypt_at(call: usize) -> Self {
        Self {
            fail_decrypt_at: Some(call),
            ..Self::default()
        }
    }

    pub fn corrupting() -> Self {
        Self {
            corrupt: true,
            ..Self::default()
        }
    }
}

impl CipherProvider for MockProvider {
    type KeyPair = MockKey;

    fn name(&self) -> &'static str {
        "mock"
    }

    fn supports(&self, key_size: KeySize) -> bool {
        key_size.bits() >= 1024
    }

    fn generate(&self, key_size: KeySize) -> Result<MockKey, ProviderError> {
        let id = self.generated.get() + 1;
        self.generated.set(id);
        Ok(MockKey { id, key_size })
    }

    fn public_material(&self, key: &MockKey) -> Vec<u8> {
        let mut material = key.key_size.bits().to_be_bytes().to_vec();
        material.push(key.id);
        material
    }

    fn encrypt(&self, key: &MockKey, plaintext: &[u8]) -> Result<Vec<u8>, ProviderError> {
        let call = self.encrypt_inputs.borrow().len();
        self.encrypt_inputs.borrow_mut().push(plaintext.to_vec());
        if self.fail_encrypt_at == Some(call) {
            return Err(rsa::Error::MessageTooLong.into());
        }
        Ok(plaintext.iter().map(|b| b ^ key.id).collect())
    }

    fn decrypt(&self, key: &MockKey, ciphertext: &[u8]) -> Result<Vec<u8>, ProviderError> {
        let call = self.decrypt_inputs.borrow().len();
        self.decrypt_inputs.borrow_mut().push(ciphertext.to_vec());
        if self.fail_decrypt_at == Some(call) {
            return Err(rsa::Error::Decryption.into());
        }
        if self.corrupt {
            return Ok(vec![0u8; ciphertext.len()]);
        }
        Ok(ciphertext.iter().map(|b| b ^ key.id).collect())
    }
}
