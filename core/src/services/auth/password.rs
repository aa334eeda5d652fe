//! Password hashing seam

use async_trait::async_trait;

use crate::errors::DomainError;

/// One-way password hashing primitive
///
/// The domain only needs to hash on signup and check on signin. The concrete
/// algorithm lives in the infrastructure layer. Implementations with a real
/// work factor must not block the calling executor.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password
    async fn hash(&self, password: &str) -> Result<String, DomainError>;

    /// Check a plaintext password against a stored hash
    ///
    /// A hash that cannot be parsed counts as a mismatch, not an error.
    async fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError>;

    /// A valid hash no account owns
    ///
    /// Signin checks unknown usernames against it so both failure paths cost
    /// one full verification.
    fn decoy_hash(&self) -> &str;
}
