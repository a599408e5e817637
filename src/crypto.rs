//! Symmetric encryption of stored credentials.
//!
//! One key is loaded (or generated) at startup and used for every credential for the
//! lifetime of the process. Ciphertext is stored as base64 of
//! `[nonce: 24 bytes][ciphertext + Poly1305 tag]`.

use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine};
#[allow(deprecated)] // upstream generic-array 0.x deprecation
use chacha20poly1305::{
    aead::{Aead, KeyInit},
    XChaCha20Poly1305, XNonce,
};
use dioxus_logger::tracing;
use rand::RngCore;

use crate::error::crypto::CryptoError;

const KEY_LEN: usize = 32;
const NONCE_LEN: usize = 24;
const TAG_LEN: usize = 16;

/// XChaCha20-Poly1305 cipher bound to the process-wide credential key.
///
/// Constructed once at startup and shared by reference with the credential store.
#[derive(Clone)]
pub struct CredentialCipher {
    key: [u8; KEY_LEN],
}

impl CredentialCipher {
    /// Creates a cipher from raw key bytes.
    pub fn new(key: [u8; KEY_LEN]) -> Self {
        Self { key }
    }

    /// Loads the key file at `path`, generating and persisting a new key if the file
    /// does not exist yet.
    ///
    /// # Arguments
    /// - `path` - Location of the base64-encoded key file
    ///
    /// # Returns
    /// - `Ok(CredentialCipher)` - Cipher using the stored or freshly generated key
    /// - `Err(CryptoError::KeyFile)` - Key file could not be read or written
    /// - `Err(CryptoError::InvalidKey)` - Key file exists but is not a 32-byte base64 key
    pub fn load_or_create(path: impl AsRef<Path>) -> Result<Self, CryptoError> {
        let path = path.as_ref();
        let shown = path.display().to_string();

        if path.exists() {
            let contents = std::fs::read_to_string(path).map_err(|source| CryptoError::KeyFile {
                path: shown.clone(),
                source,
            })?;

            let bytes = STANDARD
                .decode(contents.trim())
                .map_err(|_| CryptoError::InvalidKey {
                    path: shown.clone(),
                })?;
            let key: [u8; KEY_LEN] = bytes
                .try_into()
                .map_err(|_| CryptoError::InvalidKey { path: shown })?;

            return Ok(Self::new(key));
        }

        let mut key = [0u8; KEY_LEN];
        rand::rng().fill_bytes(&mut key);

        std::fs::write(path, STANDARD.encode(key)).map_err(|source| CryptoError::KeyFile {
            path: shown.clone(),
            source,
        })?;

        tracing::info!("Generated new encryption key at {}", shown);

        Ok(Self::new(key))
    }

    /// Encrypts `plaintext` under a fresh random nonce.
    ///
    /// # Returns
    /// - `Ok(String)` - base64 of nonce followed by ciphertext and tag
    /// - `Err(CryptoError::Cipher)` - AEAD encryption failed
    #[allow(deprecated)]
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<String, CryptoError> {
        let cipher = XChaCha20Poly1305::new((&self.key).into());

        let mut nonce_bytes = [0u8; NONCE_LEN];
        rand::rng().fill_bytes(&mut nonce_bytes);
        let nonce = XNonce::from_slice(&nonce_bytes);

        let ciphertext = cipher
            .encrypt(nonce, plaintext)
            .map_err(|e| CryptoError::Cipher(e.to_string()))?;

        let mut blob = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        blob.extend_from_slice(&nonce_bytes);
        blob.extend_from_slice(&ciphertext);

        Ok(STANDARD.encode(blob))
    }

    /// Decrypts a value previously produced by [`CredentialCipher::encrypt`].
    ///
    /// # Returns
    /// - `Ok(Vec<u8>)` - Original plaintext
    /// - `Err(CryptoError::Encoding)` - Stored value is not base64
    /// - `Err(CryptoError::Cipher)` - Value is truncated, tampered, or from another key
    #[allow(deprecated)]
    pub fn decrypt(&self, encoded: &str) -> Result<Vec<u8>, CryptoError> {
        let blob = STANDARD.decode(encoded)?;

        if blob.len() < NONCE_LEN + TAG_LEN {
            return Err(CryptoError::Cipher("ciphertext too short".to_string()));
        }

        let (nonce_bytes, ct) = blob.split_at(NONCE_LEN);
        let nonce = XNonce::from_slice(nonce_bytes);
        let cipher = XChaCha20Poly1305::new((&self.key).into());

        cipher
            .decrypt(nonce, ct)
            .map_err(|e| CryptoError::Cipher(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn round_trip() {
        let cipher = CredentialCipher::new([0x42u8; 32]);

        let encrypted = cipher.encrypt(b"ltuid_v2=1; ltoken_v2=abc").unwrap();
        let decrypted = cipher.decrypt(&encrypted).unwrap();

        assert_eq!(decrypted, b"ltuid_v2=1; ltoken_v2=abc");
    }

    #[test]
    fn nonce_differs_per_encryption() {
        let cipher = CredentialCipher::new([0x42u8; 32]);

        let a = cipher.encrypt(b"same").unwrap();
        let b = cipher.encrypt(b"same").unwrap();

        assert_ne!(a, b);
    }

    #[test]
    fn wrong_key_fails() {
        let encrypted = CredentialCipher::new([0x42u8; 32]).encrypt(b"secret").unwrap();

        let result = CredentialCipher::new([0x43u8; 32]).decrypt(&encrypted);

        assert!(matches!(result, Err(CryptoError::Cipher(_))));
    }

    #[test]
    fn non_base64_input_fails() {
        let cipher = CredentialCipher::new([0x42u8; 32]);

        assert!(matches!(
            cipher.decrypt("not base64!"),
            Err(CryptoError::Encoding(_))
        ));
    }

    #[test]
    fn truncated_input_fails() {
        let cipher = CredentialCipher::new([0x42u8; 32]);

        let result = cipher.decrypt(&STANDARD.encode([0u8; 10]));

        assert!(matches!(result, Err(CryptoError::Cipher(_))));
    }

    /// Tests that a key generated on first run is reused on the next start.
    ///
    /// Expected: ciphertext written by the first instance decrypts with the second
    #[test]
    fn key_file_persists_across_loads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("encryption.key");

        let first = CredentialCipher::load_or_create(&path).unwrap();
        assert!(path.exists());
        let encrypted = first.encrypt(b"persisted").unwrap();

        let second = CredentialCipher::load_or_create(&path).unwrap();
        assert_eq!(second.decrypt(&encrypted).unwrap(), b"persisted");
    }

    #[test]
    fn short_key_file_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("encryption.key");
        std::fs::write(&path, STANDARD.encode([1u8; 16])).unwrap();

        let result = CredentialCipher::load_or_create(&path);

        assert!(matches!(result, Err(CryptoError::InvalidKey { .. })));
    }
}
