//! Convergence
//!
//! Read-through caching front end for a Confluence wiki. Spaces, pages and
//! attachments are fetched from the wiki's REST API on first use, held in an
//! in-memory TTL store and served over HTTP with links rewritten to local
//! routes.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::DomainError;
pub use infrastructure::cache::ContentCache;
pub use infrastructure::confluence::ConfluenceClient;
