use std::time::Duration;

/// Tunables consumed by the fetch/extract/cache pipeline.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// How long a cached result set stays valid.
    pub cache_ttl: Duration,

    /// Total fetch attempts per request, first try included.
    pub max_attempts: u32,

    /// Backoff base; attempt N waits N × base before retrying.
    pub retry_base_delay: Duration,

    /// Hard cap on records extracted per page.
    pub max_results: usize,

    /// Maximum keyword length after trimming.
    pub keyword_max_len: usize,

    /// Per-attempt request timeout.
    pub fetch_timeout: Duration,

    /// Maximum response body size in bytes; larger bodies fail the attempt.
    pub max_body_bytes: usize,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            cache_ttl: Duration::from_secs(300),
            max_attempts: 3,
            retry_base_delay: Duration::from_millis(1000),
            max_results: 20,
            keyword_max_len: 50,
            fetch_timeout: Duration::from_secs(10),
            max_body_bytes: 2_000_000,
        }
    }
}
