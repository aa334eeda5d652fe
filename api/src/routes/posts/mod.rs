//! Post route handlers
//!
//! Listing is public; creating needs a valid access token and deleting
//! additionally needs the `admin` role.

pub mod create;
pub mod delete;
pub mod list;

pub use create::create_post;
pub use delete::delete_post;
pub use list::list_posts;
