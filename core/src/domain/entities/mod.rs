//! Domain entities representing core business objects.

pub mod post;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use post::Post;
pub use token::{Claims, SignedToken, TokenKind, TokenPair};
pub use user::{User, ROLE_ADMIN, ROLE_USER};
