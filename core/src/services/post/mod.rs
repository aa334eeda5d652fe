//! Board post use cases

mod service;

pub use service::PostService;
