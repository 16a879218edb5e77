//! HTTP fetching for Scout: a reqwest-backed [`scout_core::Fetcher`] with
//! timeout, redirect, body-size, and retry policy.

pub mod fetcher;

pub use fetcher::ReqwestFetcher;
