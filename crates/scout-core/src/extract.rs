//! Field-isolated extraction of product records from search-results markup.
//!
//! Each field extractor is an independent `Option`-returning function:
//! markup drift on one field degrades that field to `None` and leaves the
//! other three untouched. Extraction never fails a record or the batch.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::models::ProductRecord;

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}

static ITEM: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"div[data-component-type="s-search-result"]"#));
static TITLE: LazyLock<Selector> = LazyLock::new(|| selector("h2 span"));
static RATING: LazyLock<Selector> = LazyLock::new(|| selector("i.a-icon-star-small span.a-icon-alt"));
static REVIEWS: LazyLock<Selector> = LazyLock::new(|| selector(r#"span[aria-label*="ratings"]"#));
static IMAGE: LazyLock<Selector> = LazyLock::new(|| selector("img.s-image"));

/// Matches rating text of the form "4.5 out of 5 stars".
static RATING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]*\.?[0-9]+)\s+out of").expect("static pattern"));

/// Parse markup into at most `max_results` product records, in document
/// order.
pub fn extract(markup: &str, max_results: usize) -> Vec<ProductRecord> {
    let document = Html::parse_document(markup);
    document
        .select(&ITEM)
        .take(max_results)
        .map(extract_record)
        .collect()
}

fn extract_record(item: ElementRef<'_>) -> ProductRecord {
    ProductRecord {
        title: extract_title(item),
        rating: extract_rating(item),
        reviews: extract_reviews(item),
        image: extract_image(item),
    }
}

/// First heading-text node under the item.
fn extract_title(item: ElementRef<'_>) -> Option<String> {
    let text: String = item.select(&TITLE).next()?.text().collect();
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Rating-icon alt text, e.g. "4.5 out of 5 stars". Parses the leading
/// float and keeps it only inside the valid star range.
fn extract_rating(item: ElementRef<'_>) -> Option<f64> {
    let text: String = item.select(&RATING).next()?.text().collect();
    let captured = RATING_RE.captures(&text)?.get(1)?;
    let rating: f64 = captured.as_str().parse().ok()?;
    (0.0..=5.0).contains(&rating).then_some(rating)
}

/// Review count from the element whose accessible label mentions
/// "ratings". Thousands separators and other non-digits are stripped.
fn extract_reviews(item: ElementRef<'_>) -> Option<u64> {
    let text: String = item.select(&REVIEWS).next()?.text().collect();
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

fn extract_image(item: ElementRef<'_>) -> Option<String> {
    item.select(&IMAGE)
        .next()?
        .value()
        .attr("src")
        .map(str::to_string)
}
