use url::Url;

use crate::keyword::Keyword;

/// Search endpoint used when no override is configured.
pub const DEFAULT_SEARCH_BASE: &str = "https://www.amazon.com";

/// Builds the upstream search URL for a validated keyword.
#[derive(Debug, Clone)]
pub struct QueryUrlBuilder {
    base: Url,
}

impl QueryUrlBuilder {
    pub fn new(base: Url) -> Self {
        Self { base }
    }

    /// Deterministic: percent-encodes the keyword into the fixed
    /// search-endpoint template. Cannot fail for a valid [`Keyword`].
    pub fn build(&self, keyword: &Keyword) -> Url {
        let mut url = self.base.clone();
        url.set_path("/s");
        url.query_pairs_mut()
            .clear()
            .append_pair("k", keyword.as_str());
        url
    }
}

impl Default for QueryUrlBuilder {
    fn default() -> Self {
        Self {
            base: Url::parse(DEFAULT_SEARCH_BASE).expect("static URL"),
        }
    }
}
