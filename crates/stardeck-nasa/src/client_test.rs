use super::*;

fn test_client(images: &str, apod: &str) -> NasaClient {
    NasaClient::with_base_urls("test-key", 30, "stardeck-test/0.1", images, apod)
        .expect("client construction should not fail")
}

#[test]
fn search_url_appends_query_and_media_type() {
    let client = test_client("https://images-api.nasa.gov", DEFAULT_APOD_BASE_URL);
    let url = client.search_url("juno jupiter").unwrap();
    assert_eq!(
        url.as_str(),
        "https://images-api.nasa.gov/search?q=juno+jupiter&media_type=image"
    );
}

#[test]
fn search_url_strips_trailing_slash() {
    let client = test_client("https://images-api.nasa.gov/", DEFAULT_APOD_BASE_URL);
    let url = client.search_url("apollo").unwrap();
    assert_eq!(
        url.as_str(),
        "https://images-api.nasa.gov/search?q=apollo&media_type=image"
    );
}

#[test]
fn search_url_keeps_base_path_prefix() {
    let client = test_client("http://127.0.0.1:9000/nasa", DEFAULT_APOD_BASE_URL);
    let url = client.search_url("iss").unwrap();
    assert_eq!(
        url.as_str(),
        "http://127.0.0.1:9000/nasa/search?q=iss&media_type=image"
    );
}

#[test]
fn search_url_encodes_special_characters() {
    let client = test_client(DEFAULT_IMAGES_BASE_URL, DEFAULT_APOD_BASE_URL);
    let url = client.search_url("mars & moon").unwrap();
    assert!(
        url.as_str().contains("q=mars+%26+moon"),
        "query param should be percent-encoded: {url}"
    );
}

#[test]
fn apod_url_carries_api_key() {
    let client = test_client(DEFAULT_IMAGES_BASE_URL, "https://api.nasa.gov/planetary/apod/");
    assert_eq!(
        client.apod_url().as_str(),
        "https://api.nasa.gov/planetary/apod?api_key=test-key"
    );
}

#[test]
fn redacted_url_drops_query() {
    let url = Url::parse("https://api.nasa.gov/planetary/apod?api_key=secret").unwrap();
    assert_eq!(redacted(&url), "https://api.nasa.gov/planetary/apod");
}

#[test]
fn rejects_invalid_base_url() {
    let result = NasaClient::with_base_urls("k", 30, "ua", "not a url", DEFAULT_APOD_BASE_URL);
    assert!(
        matches!(result, Err(NasaError::InvalidBaseUrl { .. })),
        "expected InvalidBaseUrl"
    );
}
