//! Credential adapters.

mod hmac_hasher;

pub use hmac_hasher::HmacPasswordHasher;
