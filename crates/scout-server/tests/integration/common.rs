use std::sync::Arc;

use axum::Router;
use url::Url;

use scout_core::testutil::MockFetcher;
use scout_core::{QueryUrlBuilder, ResultCache, ScrapeConfig, ScrapePipeline};
use scout_server::routes;
use scout_server::state::AppState;

/// One well-formed search-result item.
pub const SAMPLE_MARKUP: &str = r#"<html><body>
    <div data-component-type="s-search-result">
      <h2><span>USB-C Charger 65W</span></h2>
      <i class="a-icon-star-small"><span class="a-icon-alt">4.5 out of 5 stars</span></i>
      <span aria-label="12,345 ratings">12,345</span>
      <img class="s-image" src="https://img.test/charger.jpg">
    </div>
</body></html>"#;

/// Build a test app around a mock fetcher; no real HTTP leaves the
/// process.
pub fn setup_test_app(fetcher: MockFetcher) -> Router {
    let config = ScrapeConfig::default();
    let cache = Arc::new(ResultCache::new(config.cache_ttl));
    let urls = QueryUrlBuilder::new(Url::parse("https://search.test").unwrap());
    let state = Arc::new(AppState {
        pipeline: ScrapePipeline::new(fetcher, urls, cache, config),
    });
    routes::router(state)
}
