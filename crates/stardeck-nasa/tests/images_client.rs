//! Integration tests for `NasaClient` using wiremock HTTP mocks.

use stardeck_nasa::{ApodMediaType, NasaClient, NasaError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> NasaClient {
    NasaClient::with_base_urls(
        "test-key",
        30,
        "stardeck-test/0.1",
        &server.uri(),
        &format!("{}/planetary/apod", server.uri()),
    )
    .expect("client construction should not fail")
}

#[tokio::test]
async fn search_images_returns_parsed_items() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "collection": {
            "version": "1.0",
            "href": "https://images-api.nasa.gov/search?q=juno",
            "items": [
                {
                    "href": "https://images-assets.nasa.gov/image/PIA21974/collection.json",
                    "data": [{
                        "nasa_id": "PIA21974",
                        "title": "Jupiter's Swirling Cloud Belts",
                        "keywords": ["Jupiter", "Juno"],
                        "date_created": "2017-12-21T00:00:00Z",
                        "center": "JPL",
                        "media_type": "image"
                    }],
                    "links": [{
                        "href": "https://images-assets.nasa.gov/image/PIA21974/PIA21974~thumb.jpg",
                        "rel": "preview",
                        "render": "image"
                    }]
                }
            ]
        }
    });

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "juno"))
        .and(query_param("media_type", "image"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let items = client.search_images("juno", 10).await.expect("should parse");

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].data[0].nasa_id.as_deref(), Some("PIA21974"));
    assert_eq!(
        items[0].links[0].href.as_deref(),
        Some("https://images-assets.nasa.gov/image/PIA21974/PIA21974~thumb.jpg")
    );
}

#[tokio::test]
async fn search_images_skips_undecodable_items() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "collection": {
            "items": [
                { "data": "not-an-array" },
                { "data": [{ "nasa_id": "OK1" }], "links": [{ "href": "https://x/ok1.jpg" }] }
            ]
        }
    });

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let items = test_client(&server)
        .search_images("anything", 10)
        .await
        .expect("should parse");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].data[0].nasa_id.as_deref(), Some("OK1"));
}

#[tokio::test]
async fn search_images_missing_collection_is_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let items = test_client(&server)
        .search_images("nothing", 10)
        .await
        .expect("should parse");
    assert!(items.is_empty());
}

#[tokio::test]
async fn search_images_null_items_is_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "collection": { "items": null } })),
        )
        .mount(&server)
        .await;

    let items = test_client(&server)
        .search_images("nothing", 10)
        .await
        .expect("null items is an empty result, not an error");
    assert!(items.is_empty());
}

#[tokio::test]
async fn search_images_limit_applies_before_decoding() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "collection": {
            "items": [
                { "data": null, "links": [{ "href": "https://x/a1.jpg" }] },
                { "data": [{ "nasa_id": "B1" }], "links": [{ "href": "https://x/b1.jpg" }] },
                { "data": [{ "nasa_id": "C1" }], "links": [{ "href": "https://x/c1.jpg" }] }
            ]
        }
    });

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server);

    let items = client.search_images("apollo", 1).await.expect("should parse");
    assert!(items.is_empty(), "record past the limit must not slide in");

    let items = client.search_images("apollo", 2).await.expect("should parse");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].data[0].nasa_id.as_deref(), Some("B1"));
}

#[tokio::test]
async fn search_images_non_2xx_is_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .search_images("apollo", 10)
        .await
        .expect_err("503 should fail");
    assert!(
        matches!(err, NasaError::UnexpectedStatus { status: 503, .. }),
        "expected UnexpectedStatus(503), got: {err:?}"
    );
}

#[tokio::test]
async fn search_images_invalid_json_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .search_images("apollo", 10)
        .await
        .expect_err("html body should fail");
    assert!(
        matches!(err, NasaError::Deserialize { .. }),
        "expected Deserialize, got: {err:?}"
    );
}

#[tokio::test]
async fn fetch_apod_sends_api_key() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "title": "The Horsehead Nebula",
        "date": "2026-10-19",
        "explanation": "A dark cloud of dust and gas.",
        "url": "https://apod.nasa.gov/apod/image/horsehead.jpg",
        "media_type": "image",
        "copyright": "Jane Doe"
    });

    Mock::given(method("GET"))
        .and(path("/planetary/apod"))
        .and(query_param("api_key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let apod = test_client(&server).fetch_apod().await.expect("should parse");
    assert_eq!(apod.title, "The Horsehead Nebula");
    assert_eq!(apod.media_type, ApodMediaType::Image);
    assert_eq!(apod.copyright.as_deref(), Some("Jane Doe"));
}

#[tokio::test]
async fn fetch_apod_error_does_not_leak_api_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/planetary/apod"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .fetch_apod()
        .await
        .expect_err("403 should fail");
    let message = err.to_string();
    assert!(message.contains("403"), "status missing: {message}");
    assert!(!message.contains("test-key"), "api key leaked: {message}");
}
