//! Test utilities: a mock [`Fetcher`] for dependency injection in unit
//! and integration tests.
//!
//! Uses `Arc<Mutex<_>>` for interior mutability so tests can assert on
//! recorded calls.

use std::sync::{Arc, Mutex};

use url::Url;

use crate::error::AppError;
use crate::traits::Fetcher;

/// Mock fetcher that returns scripted responses and records every call.
#[derive(Clone)]
pub struct MockFetcher {
    /// Queue of responses. Each call pops the first element; when empty,
    /// an empty page is returned.
    responses: Arc<Mutex<Vec<Result<String, AppError>>>>,
    /// URLs fetched, in call order.
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockFetcher {
    pub fn new(markup: &str) -> Self {
        Self::with_responses(vec![Ok(markup.to_string())])
    }

    pub fn with_error(error: AppError) -> Self {
        Self::with_responses(vec![Err(error)])
    }

    pub fn with_responses(responses: Vec<Result<String, AppError>>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Fetcher for MockFetcher {
    async fn fetch(&self, url: &Url) -> Result<String, AppError> {
        self.calls.lock().unwrap().push(url.to_string());

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok("<html><body></body></html>".to_string())
        } else {
            responses.remove(0)
        }
    }
}
