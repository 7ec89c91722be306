//! Salted HMAC-SHA256 password hasher.
//!
//! Hashes are keyed with an application-level pepper and salted per
//! password. Verification recomputes the digest and compares in constant
//! time.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use uuid::Uuid;

use crate::domain::user::PasswordHash;
use crate::ports::PasswordHasher;

type HmacSha256 = Hmac<Sha256>;

/// HMAC-SHA256 implementation of the [`PasswordHasher`] port.
///
/// Encoded form: `{salt_hex}${digest_hex}`.
pub struct HmacPasswordHasher {
    pepper: String,
}

impl HmacPasswordHasher {
    /// Creates a hasher keyed with the application pepper.
    pub fn new(pepper: impl Into<String>) -> Self {
        Self {
            pepper: pepper.into(),
        }
    }

    fn digest(&self, salt: &[u8], raw_password: &str) -> Vec<u8> {
        let mut mac = HmacSha256::new_from_slice(self.pepper.as_bytes())
            .expect("HMAC accepts keys of any length");
        mac.update(salt);
        mac.update(raw_password.as_bytes());
        mac.finalize().into_bytes().to_vec()
    }
}

impl PasswordHasher for HmacPasswordHasher {
    fn hash(&self, raw_password: &str) -> PasswordHash {
        let salt = *Uuid::new_v4().as_bytes();
        let digest = self.digest(&salt, raw_password);
        PasswordHash::from_encoded(format!("{}${}", hex::encode(salt), hex::encode(digest)))
    }

    fn verify(&self, raw_password: &str, hash: &PasswordHash) -> bool {
        let Some((salt_hex, digest_hex)) = hash.as_str().split_once('$') else {
            return false;
        };
        let (Ok(salt), Ok(stored)) = (hex::decode(salt_hex), hex::decode(digest_hex)) else {
            return false;
        };
        let computed = self.digest(&salt, raw_password);
        computed.ct_eq(&stored).into()
    }
}
