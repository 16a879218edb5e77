use scout_core::{Fetcher, ScrapePipeline};

/// Shared application state, available to all route handlers via
/// `State<Arc<AppState>>`. Generic over the fetcher so tests can inject a
/// mock instead of real HTTP.
pub struct AppState<F: Fetcher> {
    pub pipeline: ScrapePipeline<F>,
}
