//! Business services containing domain logic and use cases.

pub mod auth;
pub mod ledger;
pub mod post;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, PasswordHasher};
pub use ledger::RefreshLedger;
pub use post::PostService;
pub use token::{TokenService, TokenServiceConfig};
