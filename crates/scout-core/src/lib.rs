//! Core scrape pipeline: keyword validation, query building, result
//! extraction, and time-bounded caching.

pub mod cache;
pub mod config;
pub mod error;
pub mod extract;
pub mod keyword;
pub mod models;
pub mod pipeline;
pub mod query;
pub mod testutil;
pub mod traits;

pub use cache::ResultCache;
pub use config::ScrapeConfig;
pub use error::AppError;
pub use keyword::Keyword;
pub use models::{ProductRecord, ResultSet};
pub use pipeline::ScrapePipeline;
pub use query::QueryUrlBuilder;
pub use traits::Fetcher;
