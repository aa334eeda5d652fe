//! Authentication route handlers
//!
//! This module contains all authentication-related endpoints:
//! - Signup and signin
//! - Refresh token rotation
//! - Signout

mod cookie;
pub mod refresh;
pub mod signin;
pub mod signout;
pub mod signup;

pub use cookie::{clear_refresh_cookie, refresh_cookie};
pub use refresh::refresh;
pub use signin::signin;
pub use signout::signout;
pub use signup::signup;
