use std::sync::Arc;

use crate::cache::ResultCache;
use crate::config::ScrapeConfig;
use crate::error::AppError;
use crate::extract;
use crate::keyword;
use crate::models::ResultSet;
use crate::query::QueryUrlBuilder;
use crate::traits::Fetcher;

/// Orchestrates the scrape pipeline: validate, cache lookup, fetch,
/// extract, cache store.
///
/// Generic over the fetcher via the [`Fetcher`] trait, enabling dependency
/// injection and testability without real HTTP. Errors from validation and
/// fetching propagate unchanged; extraction cannot fail.
pub struct ScrapePipeline<F: Fetcher> {
    fetcher: F,
    urls: QueryUrlBuilder,
    cache: Arc<ResultCache>,
    config: ScrapeConfig,
}

impl<F: Fetcher> ScrapePipeline<F> {
    pub fn new(
        fetcher: F,
        urls: QueryUrlBuilder,
        cache: Arc<ResultCache>,
        config: ScrapeConfig,
    ) -> Self {
        Self {
            fetcher,
            urls,
            cache,
            config,
        }
    }

    /// Run the pipeline for a raw (unvalidated) keyword.
    pub async fn scrape(&self, raw: &str) -> Result<ResultSet, AppError> {
        let keyword = keyword::validate_with_limit(raw, self.config.keyword_max_len)?;

        if let Some(hit) = self.cache.get(keyword.as_str()) {
            tracing::debug!(keyword = %keyword, results = hit.len(), "Cache hit");
            return Ok(hit);
        }

        let url = self.urls.build(&keyword);
        tracing::info!(keyword = %keyword, %url, "Cache miss, fetching upstream");
        let markup = self.fetcher.fetch(&url).await?;
        tracing::debug!(bytes = markup.len(), "Fetched markup");

        let results = extract::extract(&markup, self.config.max_results);
        tracing::info!(keyword = %keyword, results = results.len(), "Extraction complete");

        self.cache.set(keyword.as_str(), results.clone());
        Ok(results)
    }
}
