use serde::{Deserialize, Serialize};

use scout_core::models::ProductRecord;

#[derive(Debug, Deserialize)]
pub struct ScrapeQuery {
    pub keyword: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ScrapeResponse {
    pub keyword: String,
    pub count: usize,
    pub results: Vec<ProductRecord>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
