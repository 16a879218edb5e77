use serde::Serialize;

/// One product extracted from a search-results page.
///
/// Every field is optional: `None` means "not found in the markup", not an
/// error. A record with all fields `None` is valid, if useless.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRecord {
    pub title: Option<String>,
    /// Star rating in [0.0, 5.0].
    pub rating: Option<f64>,
    pub reviews: Option<u64>,
    pub image: Option<String>,
}

/// Records in source-markup order, at most [`crate::ScrapeConfig::max_results`].
pub type ResultSet = Vec<ProductRecord>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_serialize_as_null() {
        let record = ProductRecord {
            title: Some("USB-C Charger".into()),
            rating: None,
            reviews: Some(1234),
            image: None,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["title"], "USB-C Charger");
        assert_eq!(json["rating"], serde_json::Value::Null);
        assert_eq!(json["reviews"], 1234);
        assert_eq!(json["image"], serde_json::Value::Null);
    }
}
