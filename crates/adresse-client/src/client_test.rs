use adresse_core::SearchType;

use super::*;

fn test_client(base_url: &str) -> AdresseClient {
    AdresseClient::with_base_url(base_url, 30, "adresse-test/0.1")
        .expect("client construction should not fail")
}

#[test]
fn build_query_uses_client_base_url() {
    let client = test_client("http://127.0.0.1:9999/");
    let input = SearchInput::new("8 bd du Port", Some(SearchType::Housenumber), false);
    assert_eq!(
        client.build_query(&input).url,
        "http://127.0.0.1:9999/search/?q=8%20bd%20du%20Port&type=housenumber&autocomplete=0"
    );
}

#[test]
fn invalid_base_url_is_rejected() {
    let result = AdresseClient::with_base_url("::::", 30, "adresse-test/0.1");
    assert!(matches!(result, Err(AdresseError::InvalidBaseUrl { .. })));
}

#[tokio::test]
async fn fetch_idle_descriptor_returns_none_without_request() {
    // Nothing listens here; an attempted request would fail.
    let client = test_client("http://127.0.0.1:9");
    let result = client.fetch(&RequestDescriptor::idle()).await;
    assert!(matches!(result, Ok(None)));
}

#[tokio::test]
async fn search_with_empty_text_returns_empty_list() {
    let client = test_client("http://127.0.0.1:9");
    let input = SearchInput::new("", Some(SearchType::Street), true);
    let records = client.search(&input).await.expect("idle search cannot fail");
    assert!(records.is_empty());
}
