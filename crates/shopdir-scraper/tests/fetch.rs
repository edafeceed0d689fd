//! Integration tests for `DirectoryClient`.
//!
//! Uses `wiremock` to stand up a local HTTP server for each test so no real
//! network traffic is made. Covers status handling, header propagation, and
//! the fetch-then-extract path for shop detail pages.

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shopdir_scraper::{DirectoryClient, ScrapeError};

/// Builds a `DirectoryClient` suitable for tests: 5-second timeout, descriptive UA.
fn test_client() -> DirectoryClient {
    DirectoryClient::new(5, "shopdir-test/0.1").expect("failed to build test DirectoryClient")
}

#[tokio::test]
async fn fetch_page_returns_the_body_on_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Shops/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body>ok</body></html>"))
        .mount(&server)
        .await;

    let client = test_client();
    let body = client
        .fetch_page(&format!("{}/Shops/", server.uri()))
        .await
        .expect("expected Ok for 200 response");

    assert!(body.contains("ok"), "body should round-trip unchanged");
}

#[tokio::test]
async fn fetch_page_sends_the_configured_user_agent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Shops/"))
        .and(header("user-agent", "shopdir-test/0.1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client();
    let result = client.fetch_page(&format!("{}/Shops/", server.uri())).await;

    assert!(
        result.is_ok(),
        "request without the configured User-Agent would not have matched: {result:?}"
    );
}

#[tokio::test]
async fn fetch_page_maps_404_to_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Shop/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = test_client();
    let url = format!("{}/Shop/gone", server.uri());
    let result = client.fetch_page(&url).await;

    match result.unwrap_err() {
        ScrapeError::UnexpectedStatus { status, url: u } => {
            assert_eq!(status, 404);
            assert_eq!(u, url, "error should carry the failed URL for logging");
        }
        other => panic!("expected ScrapeError::UnexpectedStatus, got: {other:?}"),
    }
}

#[tokio::test]
async fn fetch_page_maps_5xx_to_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Shops/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = test_client();
    let result = client.fetch_page(&format!("{}/Shops/", server.uri())).await;

    assert!(
        matches!(
            result.unwrap_err(),
            ScrapeError::UnexpectedStatus { status: 503, .. }
        ),
        "expected UnexpectedStatus with status 503"
    );
}

#[tokio::test]
async fn fetch_page_does_not_retry_a_failed_url() {
    let server = MockServer::start().await;

    // Exactly one request must arrive: a failure is skipped, never retried.
    Mock::given(method("GET"))
        .and(path("/Shops/"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client();
    let result = client.fetch_page(&format!("{}/Shops/", server.uri())).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn fetch_shop_details_extracts_a_record_from_the_body() {
    let server = MockServer::start().await;

    let detail_html = r##"
        <html>
          <head><title>Mock Shop | directory</title></head>
          <body>
            <h1>Mock Shop</h1>
            <a href="tel:5551234">call</a>
          </body>
        </html>
    "##;

    Mock::given(method("GET"))
        .and(path("/Shop/mock"))
        .respond_with(ResponseTemplate::new(200).set_body_string(detail_html))
        .mount(&server)
        .await;

    let client = test_client();
    let record = client
        .fetch_shop_details(&format!("{}/Shop/mock", server.uri()))
        .await
        .expect("expected Ok for a fetchable detail page");

    assert_eq!(record.name, "Mock Shop");
    assert_eq!(record.phone, "5551234");
    assert_eq!(record.address, "N/A");
    assert_eq!(record.website, "N/A");
    assert_eq!(record.whatsapp, "N/A");
    assert_eq!(record.city, "N/A");
    assert_eq!(record.responsible, "N/A");
}

#[tokio::test]
async fn fetch_shop_details_propagates_fetch_failure() {
    let server = MockServer::start().await;
    // No mock mounted: wiremock answers 404 for unmatched requests.

    let client = test_client();
    let result = client
        .fetch_shop_details(&format!("{}/Shop/missing", server.uri()))
        .await;

    assert!(
        matches!(
            result.unwrap_err(),
            ScrapeError::UnexpectedStatus { status: 404, .. }
        ),
        "a fetch failure must surface as an error, not an empty record"
    );
}
