use std::time::Duration;

use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, Response, redirect};
use url::Url;

use scout_core::config::ScrapeConfig;
use scout_core::error::AppError;
use scout_core::traits::Fetcher;

// Realistic browser identity to reduce trivial blocking. Best effort only;
// no guarantee against real anti-scraping defenses.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";
const BROWSER_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8";
const BROWSER_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// HTTP fetcher using reqwest.
///
/// Redirects are never followed: a 3xx from the search host usually means
/// a consent wall or CAPTCHA, and following it silently would hand the
/// extractor an unrelated page. A 503 is retried with linear backoff up to
/// the configured attempt budget; any other failure ends the request
/// immediately.
#[derive(Clone)]
pub struct ReqwestFetcher {
    client: Client,
    max_attempts: u32,
    retry_base_delay: Duration,
    max_body_bytes: usize,
    timeout_secs: u64,
}

impl ReqwestFetcher {
    pub fn new(config: &ScrapeConfig) -> Result<Self, AppError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
        headers.insert(ACCEPT, HeaderValue::from_static(BROWSER_ACCEPT));
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static(BROWSER_ACCEPT_LANGUAGE),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.fetch_timeout)
            .redirect(redirect::Policy::none())
            .build()
            .map_err(|e| AppError::Network(e.to_string()))?;

        Ok(Self {
            client,
            max_attempts: config.max_attempts,
            retry_base_delay: config.retry_base_delay,
            max_body_bytes: config.max_body_bytes,
            timeout_secs: config.fetch_timeout.as_secs(),
        })
    }

    async fn attempt(&self, url: &Url) -> Result<String, AppError> {
        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            if e.is_timeout() {
                AppError::Timeout(self.timeout_secs)
            } else if e.is_connect() {
                AppError::Network(format!("connection failed: {e}"))
            } else {
                AppError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        if status.is_redirection() {
            return Err(AppError::Blocked(status.as_u16()));
        }
        // Success is [200, 400) per the transport's classification;
        // 3xx is already rejected above.
        if !(200..400).contains(&status.as_u16()) {
            return Err(AppError::UpstreamStatus(status.as_u16()));
        }

        self.read_capped(response).await
    }

    /// Stream the body, failing the attempt once it exceeds the cap.
    async fn read_capped(&self, mut response: Response) -> Result<String, AppError> {
        let mut body: Vec<u8> = Vec::new();
        while let Some(chunk) = response.chunk().await.map_err(|e| {
            if e.is_timeout() {
                AppError::Timeout(self.timeout_secs)
            } else {
                AppError::Network(format!("failed to read response body: {e}"))
            }
        })? {
            if body.len() + chunk.len() > self.max_body_bytes {
                return Err(AppError::BodyTooLarge(self.max_body_bytes));
            }
            body.extend_from_slice(&chunk);
        }
        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

impl Fetcher for ReqwestFetcher {
    async fn fetch(&self, url: &Url) -> Result<String, AppError> {
        let mut attempt = 1u32;
        loop {
            match self.attempt(url).await {
                Ok(body) => return Ok(body),
                Err(err) if err.is_retryable() && attempt < self.max_attempts => {
                    // Linear backoff: attempt index times the base delay.
                    // The sleep suspends only this task, not a thread.
                    let delay = self.retry_base_delay * attempt;
                    tracing::warn!(
                        %url,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        "Upstream temporarily unavailable, backing off"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) if err.is_retryable() => {
                    return Err(AppError::RetriesExhausted {
                        attempts: attempt,
                        last: err.to_string(),
                    });
                }
                Err(err) => return Err(err),
            }
        }
    }
}
