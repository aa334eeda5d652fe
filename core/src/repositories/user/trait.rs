//! User repository trait defining the interface for user data persistence.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// # Example
/// ```no_run
/// # use mb_core::repositories::UserRepository;
/// # async fn example(repo: &impl UserRepository) -> Result<(), Box<dyn std::error::Error>> {
/// if let Some(user) = repo.find_by_username("alice").await? {
///     println!("alice has roles {:?}", user.roles);
/// }
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique identifier
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by login name
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Check if the login name is already registered
    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError>;

    /// Check if the email address is already registered
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;

    /// Insert a new user, claiming its username and email atomically
    ///
    /// Fails with `UsernameTaken` or `EmailTaken` when another account
    /// already holds either, leaving that account untouched.
    async fn create(&self, user: &User) -> Result<(), DomainError>;

    /// Insert or overwrite a user together with its lookup indexes
    async fn save(&self, user: &User) -> Result<(), DomainError>;
}
