//! ExpertLink Common Library
//!
//! Shared code for the ExpertLink services including:
//! - The chat query-interpretation pipeline
//! - Expert directory entity and repository
//! - Completion client abstraction
//! - Error types and handling
//! - Configuration management
//! - Metrics and observability

pub mod chat;
pub mod completion;
pub mod config;
pub mod db;
pub mod errors;
pub mod metrics;

// Re-export commonly used types
pub use chat::{classify, Classification, Lane, Lexicon, MatchQuery};
pub use completion::CompletionClient;
pub use config::AppConfig;
pub use db::{DbPool, Repository};
pub use errors::{AppError, Result};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
