use std::future::Future;

use url::Url;

use crate::error::AppError;

/// Fetches raw search-results markup from a URL.
///
/// Implementations own the whole attempt policy: timeout, redirect
/// handling, body-size cap, and retry with backoff. The pipeline only sees
/// the final outcome.
pub trait Fetcher: Send + Sync + Clone {
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<String, AppError>> + Send;
}
