//! Configuration, data model and line classification

pub mod config;
pub mod models;
pub mod pinned;

pub use config::AppConfig;
pub use models::{Comment, CommentUser, SummaryItem};
pub use pinned::PinClassifier;
