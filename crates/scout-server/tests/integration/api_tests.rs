use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use scout_core::AppError;
use scout_core::testutil::MockFetcher;

use crate::common::{SAMPLE_MARKUP, setup_test_app};

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn scrape_returns_structured_records() {
    let app = setup_test_app(MockFetcher::new(SAMPLE_MARKUP));

    let response = app
        .oneshot(
            Request::get("/api/scrape?keyword=usb%20charger")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["keyword"], "usb charger");
    assert_eq!(json["count"], 1);
    assert_eq!(json["results"][0]["title"], "USB-C Charger 65W");
    assert_eq!(json["results"][0]["rating"], 4.5);
    assert_eq!(json["results"][0]["reviews"], 12345);
    assert_eq!(json["results"][0]["image"], "https://img.test/charger.jpg");
}

#[tokio::test]
async fn missing_keyword_returns_400() {
    let app = setup_test_app(MockFetcher::new(SAMPLE_MARKUP));

    let response = app
        .oneshot(Request::get("/api/scrape").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Keyword is required");
}

#[tokio::test]
async fn invalid_keyword_returns_400_with_verbatim_message() {
    let app = setup_test_app(MockFetcher::new(SAMPLE_MARKUP));

    let response = app
        .oneshot(
            Request::get("/api/scrape?keyword=usb@charger")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json["error"],
        "Keyword may only contain letters, digits, spaces, and hyphens"
    );
}

#[tokio::test]
async fn fetch_failure_returns_generic_503() {
    let app = setup_test_app(MockFetcher::with_error(AppError::RetriesExhausted {
        attempts: 3,
        last: "Upstream returned HTTP 503".into(),
    }));

    let response = app
        .oneshot(
            Request::get("/api/scrape?keyword=usb%20charger")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    // No internal detail leaks to the caller.
    let json = body_json(response).await;
    assert_eq!(json["error"], "Internal server error");
}

#[tokio::test]
async fn repeated_request_is_served_from_cache() {
    let fetcher = MockFetcher::new(SAMPLE_MARKUP);
    let app = setup_test_app(fetcher.clone());

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(
                Request::get("/api/scrape?keyword=usb%20charger")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["count"], 1);
    }

    assert_eq!(fetcher.call_count(), 1);
}

#[tokio::test]
async fn docs_page_is_served_at_root() {
    let app = setup_test_app(MockFetcher::new(SAMPLE_MARKUP));

    let response = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let page = String::from_utf8(body.to_vec()).unwrap();
    assert!(page.contains("/api/scrape"));
}
