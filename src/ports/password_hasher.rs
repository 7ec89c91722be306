//! Password hashing port.

use crate::domain::user::PasswordHash;

/// Port for hashing and verifying passwords.
///
/// Implementations must salt per password and verify in constant time.
/// Hashing is CPU-bound and synchronous; handlers call it inline.
pub trait PasswordHasher: Send + Sync {
    /// Hashes a raw password with a fresh salt.
    fn hash(&self, raw_password: &str) -> PasswordHash;

    /// Verifies a raw password against a stored hash.
    ///
    /// Returns false for malformed stored hashes rather than erroring, so a
    /// corrupt row reads as a failed login, not a 500.
    fn verify(&self, raw_password: &str, hash: &PasswordHash) -> bool;
}
