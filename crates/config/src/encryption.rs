//! Password-based value encryption.
//!
//! Responsibilities:
//! - Provide string-level encrypt/decrypt of individual property values.
//! - Handle key derivation using Argon2id and sealing with AES-256-GCM.
//! - Expose the [`EncryptorFactory`] seam so hosts can swap the cipher.
//!
//! Does NOT handle:
//! - Deciding which values get decrypted (see resolver/).
//! - Password resolution (see resolver/builder.rs).
//!
//! Invariants:
//! - Encryption is randomized: each value gets a fresh salt and nonce, so
//!   encrypting the same plaintext twice yields different ciphertext.
//! - `decrypt(encrypt(x)) == x` for the same password.
//! - Decryption failure is an expected condition, not a programming error.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use argon2::Argon2;
use rand::RngExt;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

const SALT_LEN: usize = 16;
const NONCE_LEN: usize = 12;
// AES-GCM appends a 16-byte tag, so even an empty plaintext seals to 16 bytes.
const MIN_CIPHERTEXT_LEN: usize = SALT_LEN + NONCE_LEN + 16;

/// Marker wrapping encrypted values in property files, e.g.
/// `secret=ENC(4fa3...)`. Bare ciphertext is accepted too.
pub const ENCRYPTED_VALUE_PREFIX: &str = "ENC(";
const ENCRYPTED_VALUE_SUFFIX: &str = ")";

/// Errors that can occur during encryption operations.
#[derive(Debug, Error)]
pub enum EncryptionError {
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Decryption failed: {0}")]
    DecryptionFailed(String),

    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),
}

pub type Result<T> = std::result::Result<T, EncryptionError>;

/// A reversible string-to-string cipher keyed by a password fixed at
/// construction time.
pub trait TextEncryptor: Send + Sync {
    /// Encrypt a plaintext value into its at-rest form.
    fn encrypt(&self, plaintext: &str) -> Result<String>;

    /// Decrypt an at-rest value back to plaintext.
    ///
    /// Fails with [`EncryptionError::DecryptionFailed`] when the input is not
    /// valid ciphertext for the configured password (malformed, truncated, or
    /// encrypted under a different password).
    fn decrypt(&self, ciphertext: &str) -> Result<String>;
}

/// Builds a [`TextEncryptor`] from a resolved password.
///
/// This is the extension seam for hosts that must interoperate with values
/// encrypted by another scheme: supply a factory producing that scheme's
/// encryptor instead of the default.
pub trait EncryptorFactory: Send + Sync {
    fn create(&self, password: SecretString) -> Box<dyn TextEncryptor>;
}

/// Factory for the default [`PbeTextEncryptor`].
#[derive(Debug, Default, Clone, Copy)]
pub struct PbeEncryptorFactory;

impl EncryptorFactory for PbeEncryptorFactory {
    fn create(&self, password: SecretString) -> Box<dyn TextEncryptor> {
        Box::new(PbeTextEncryptor::new(password))
    }
}

/// Password-based encryptor: Argon2id key derivation over a per-value salt,
/// AES-256-GCM sealing, hex armor.
///
/// Wire format of one encrypted value:
/// `hex(salt[16] || nonce[12] || ciphertext+tag)`.
pub struct PbeTextEncryptor {
    password: SecretString,
}

impl PbeTextEncryptor {
    /// Create an encryptor keyed by `password`. Construction is infallible;
    /// key derivation happens per operation because the salt is per value.
    pub fn new(password: SecretString) -> Self {
        Self { password }
    }

    fn derive_key(&self, salt: &[u8]) -> Result<[u8; 32]> {
        let argon2 = Argon2::default();
        let mut key = [0u8; 32];
        argon2
            .hash_password_into(self.password.expose_secret().as_bytes(), salt, &mut key)
            .map_err(|e| EncryptionError::KeyDerivationFailed(e.to_string()))?;
        Ok(key)
    }
}

impl TextEncryptor for PbeTextEncryptor {
    fn encrypt(&self, plaintext: &str) -> Result<String> {
        let mut salt = [0u8; SALT_LEN];
        rand::rng().fill(&mut salt);
        let mut nonce_bytes = [0u8; NONCE_LEN];
        rand::rng().fill(&mut nonce_bytes);

        let key = self.derive_key(&salt)?;
        let cipher = Aes256Gcm::new(&key.into());
        let ciphertext = cipher
            .encrypt(Nonce::from_slice(&nonce_bytes), plaintext.as_bytes())
            .map_err(|e| EncryptionError::EncryptionFailed(e.to_string()))?;

        let mut out = Vec::with_capacity(SALT_LEN + NONCE_LEN + ciphertext.len());
        out.extend_from_slice(&salt);
        out.extend_from_slice(&nonce_bytes);
        out.extend_from_slice(&ciphertext);
        Ok(hex::encode(out))
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String> {
        let armored = strip_wrapper(ciphertext);
        let bytes = hex::decode(armored)
            .map_err(|e| EncryptionError::DecryptionFailed(e.to_string()))?;
        if bytes.len() < MIN_CIPHERTEXT_LEN {
            return Err(EncryptionError::DecryptionFailed(format!(
                "ciphertext too short: {} bytes",
                bytes.len()
            )));
        }

        let (salt, rest) = bytes.split_at(SALT_LEN);
        let (nonce_bytes, sealed) = rest.split_at(NONCE_LEN);

        let key = self.derive_key(salt)?;
        let cipher = Aes256Gcm::new(&key.into());
        let plaintext = cipher
            .decrypt(Nonce::from_slice(nonce_bytes), sealed)
            .map_err(|e| EncryptionError::DecryptionFailed(e.to_string()))?;

        String::from_utf8(plaintext)
            .map_err(|e| EncryptionError::DecryptionFailed(e.to_string()))
    }
}

/// Strip the `ENC(...)` wrapper from a stored value, if present.
pub(crate) fn strip_wrapper(value: &str) -> &str {
    value
        .strip_prefix(ENCRYPTED_VALUE_PREFIX)
        .and_then(|rest| rest.strip_suffix(ENCRYPTED_VALUE_SUFFIX))
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn encryptor(password: &str) -> PbeTextEncryptor {
        PbeTextEncryptor::new(SecretString::new(password.to_string().into()))
    }

    #[test]
    fn roundtrip_restores_plaintext() {
        let enc = encryptor("SecretKey");
        let ciphertext = enc.encrypt("TextToEncrypt").unwrap();
        assert_ne!(ciphertext, "TextToEncrypt");
        assert_eq!(enc.decrypt(&ciphertext).unwrap(), "TextToEncrypt");
    }

    #[test]
    fn encryption_is_randomized() {
        let enc = encryptor("SecretKey");
        let a = enc.encrypt("same input").unwrap();
        let b = enc.encrypt("same input").unwrap();
        assert_ne!(a, b);
        assert_eq!(enc.decrypt(&a).unwrap(), enc.decrypt(&b).unwrap());
    }

    #[test]
    fn wrong_password_fails() {
        let ciphertext = encryptor("right password").encrypt("payload").unwrap();
        let err = encryptor("wrong password").decrypt(&ciphertext).unwrap_err();
        assert!(matches!(err, EncryptionError::DecryptionFailed(_)));
    }

    #[test]
    fn malformed_inputs_fail() {
        let enc = encryptor("SecretKey");
        assert!(enc.decrypt("not hex at all").is_err());
        assert!(enc.decrypt("").is_err());
        // Valid hex but far too short to hold salt + nonce + tag.
        assert!(enc.decrypt("deadbeef").is_err());
    }

    #[test]
    fn truncated_ciphertext_fails() {
        let enc = encryptor("SecretKey");
        let ciphertext = enc.encrypt("TextToEncrypt").unwrap();
        let truncated = &ciphertext[..ciphertext.len() - 8];
        assert!(enc.decrypt(truncated).is_err());
    }

    #[test]
    fn enc_wrapper_is_stripped() {
        let enc = encryptor("SecretKey");
        let ciphertext = enc.encrypt("wrapped").unwrap();
        let wrapped = format!("ENC({ciphertext})");
        assert_eq!(enc.decrypt(&wrapped).unwrap(), "wrapped");
    }

    #[test]
    fn strip_wrapper_leaves_bare_values_alone() {
        assert_eq!(strip_wrapper("ENC(abc)"), "abc");
        assert_eq!(strip_wrapper("abc"), "abc");
        // Unbalanced wrapper is treated as a bare value.
        assert_eq!(strip_wrapper("ENC(abc"), "ENC(abc");
    }

    proptest! {
        // Keep derivation cost manageable: Argon2 runs twice per case.
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn roundtrip_law(plaintext in ".{0,64}", password in "[a-zA-Z0-9]{1,16}") {
            let enc = encryptor(&password);
            let ciphertext = enc.encrypt(&plaintext).unwrap();
            prop_assert_eq!(enc.decrypt(&ciphertext).unwrap(), plaintext);
        }
    }
}
