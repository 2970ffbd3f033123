//! Shared helpers

pub mod http;
pub mod links;

pub use links::{first_link, is_on_domain};
