//! Refresh token ledger
//!
//! Tracks which refresh token ids are active and which are blacklisted, and
//! performs single-use rotation and sign-out revocation on top of the
//! key-value store.

mod service;

#[cfg(test)]
mod tests;

pub use service::{active_key, blacklist_key, RefreshLedger, BLACKLISTED};
