//! Native provider backed by AWS-LC through `aws-lc-rs`

use aws_lc_rs::encoding::AsDer;
use aws_lc_rs::rsa::{
    KeySize as LcKeySize, OaepPrivateDecryptingKey, OaepPublicEncryptingKey,
    PrivateDecryptingKey, OAEP_SHA256_MGF1SHA256,
};

use super::{CipherProvider, ProviderError};
use crate::types::KeySize;

pub struct AwsLcKeyPair {
    public_der: Vec<u8>,
    encrypting: OaepPublicEncryptingKey,
    decrypting: OaepPrivateDecryptingKey,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AwsLcProvider;

impl AwsLcProvider {
    pub const NAME: &'static str = "aws-lc";

    fn key_size(key_size: KeySize) -> Option<LcKeySize> {
        match key_size.bits() {
            2048 => Some(LcKeySize::Rsa2048),
            3072 => Some(LcKeySize::Rsa3072),
            4096 => Some(LcKeySize::Rsa4096),
            8192 => Some(LcKeySize::Rsa8192),
            _ => None,
        }
    }
}

impl CipherProvider for AwsLcProvider {
    type KeyPair = AwsLcKeyPair;

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn supports(&self, key_size: KeySize) -> bool {
        Self::key_size(key_size).is_some()
    }

    fn generate(&self, key_size: KeySize) -> Result<Self::KeyPair, ProviderError> {
        let size = Self::key_size(key_size).ok_or(aws_lc_rs::error::Unspecified)?;
        let private_key = PrivateDecryptingKey::generate(size)?;
        let public_key = private_key.public_key();
        let public_der = public_key.as_der()?.as_ref().to_vec();

        Ok(AwsLcKeyPair {
            public_der,
            encrypting: OaepPublicEncryptingKey::new(public_key)?,
            decrypting: OaepPrivateDecryptingKey::new(private_key)?,
        })
    }

    fn public_material(&self, key: &Self::KeyPair) -> Vec<u8> {
        key.public_der.clone()
    }

    fn encrypt(&self, key: &Self::KeyPair, plaintext: &[u8]) -> Result<Vec<u8>, ProviderError> {
        let mut output = vec![0u8; key.encrypting.ciphertext_size()];
        let len = key
            .encrypting
            .encrypt(&OAEP_SHA256_MGF1SHA256, plaintext, &mut output, None)?
            .len();
        output.truncate(len);
        Ok(output)
    }

    fn decrypt(&self, key: &Self::KeyPair, ciphertext: &[u8]) -> Result<Vec<u8>, ProviderError> {
        let mut output = vec![0u8; key.decrypting.min_output_size()];
        let len = key
            .decrypting
            .decrypt(&OAEP_SHA256_MGF1SHA256, ciphertext, &mut output, None)?
            .len();
        output.truncate(len);
        Ok(output)
    }
}
