use thiserror::Error;

/// Failures of the credential cipher or its key file.
#[derive(Error, Debug)]
pub enum CryptoError {
    /// The key file could not be read or created.
    #[error("Failed to access encryption key file {path}: {source}")]
    KeyFile {
        /// Path of the key file
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The key file exists but does not decode to exactly 32 bytes.
    #[error("Encryption key file {path} does not contain a valid 32-byte key")]
    InvalidKey {
        /// Path of the key file
        path: String,
    },

    /// Stored ciphertext is not valid base64.
    #[error("Stored ciphertext is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),

    /// Authenticated encryption or decryption failed.
    ///
    /// On decryption this means the ciphertext was written under another key or was
    /// tampered with.
    #[error("Cipher operation failed: {0}")]
    Cipher(String),
}
