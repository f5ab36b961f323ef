//! Integration tests for the DuckDuckGo-backed web search

#![allow(clippy::expect_used, clippy::panic)]

use serde_json::json;
use smart_lookup_tools::{LookupConfig, LookupToolset, Status, StatusRecord, WebSearchRecord};
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn toolset_for(server: &MockServer) -> LookupToolset {
    LookupToolset::new(LookupConfig::default().with_duckduckgo_base_url(server.uri()))
        .expect("client builds")
}

#[tokio::test]
async fn test_abstract_is_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("q", "Rust programming language"))
        .and(query_param("format", "json"))
        .and(query_param("no_redirect", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Abstract": "Rust is a general-purpose programming language.",
            "AbstractURL": "https://en.wikipedia.org/wiki/Rust_(programming_language)",
            "RelatedTopics": [{ "Text": "Cargo - package manager" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let record = toolset_for(&server)
        .search_google_like("Rust programming language")
        .await;

    assert_eq!(
        record,
        WebSearchRecord::Success {
            source: "DuckDuckGo".to_string(),
            summary: "Rust is a general-purpose programming language.".to_string(),
            url: "https://en.wikipedia.org/wiki/Rust_(programming_language)".to_string(),
        }
    );
}

#[tokio::test]
async fn test_related_topics_are_partial() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Abstract": "",
            "AbstractURL": "",
            "RelatedTopics": [
                { "Text": "Topic 1", "FirstURL": "https://duckduckgo.com/1" },
                { "Name": "Group", "Topics": [{ "Text": "Nested" }] },
                { "Text": "Topic 2" },
                { "Text": "Topic 3" },
                { "Text": "Topic 4" },
                { "Text": "Topic 5 (beyond the first five entries)" }
            ]
        })))
        .mount(&server)
        .await;

    let record = toolset_for(&server).search_google_like("mercury").await;

    assert_eq!(record.status(), Status::Partial);
    assert_eq!(
        record,
        WebSearchRecord::Partial {
            message: "No summary available, but related topics found.".to_string(),
            related_topics: vec![
                "Topic 1".to_string(),
                "Topic 2".to_string(),
                "Topic 3".to_string(),
                "Topic 4".to_string(),
            ],
        }
    );
}

#[tokio::test]
async fn test_null_abstract_url_still_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Abstract": "Some abstract",
            "AbstractURL": null,
            "RelatedTopics": []
        })))
        .mount(&server)
        .await;

    let record = toolset_for(&server).search_google_like("anything").await;

    assert_eq!(
        record,
        WebSearchRecord::Success {
            source: "DuckDuckGo".to_string(),
            summary: "Some abstract".to_string(),
            url: String::new(),
        }
    );
}

#[tokio::test]
async fn test_null_abstract_and_stray_topics_are_partial() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Abstract": null,
            "AbstractURL": null,
            "RelatedTopics": ["not a topic", { "Text": "T1" }, null, { "Text": null }, 7]
        })))
        .mount(&server)
        .await;

    let record = toolset_for(&server).search_google_like("anything").await;

    assert_eq!(
        record,
        WebSearchRecord::Partial {
            message: "No summary available, but related topics found.".to_string(),
            related_topics: vec!["T1".to_string()],
        }
    );
}

#[tokio::test]
async fn test_null_related_topics_is_nothing_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Abstract": null,
            "RelatedTopics": null
        })))
        .mount(&server)
        .await;

    let record = toolset_for(&server).search_google_like("anything").await;

    assert_eq!(
        record,
        WebSearchRecord::Error {
            error_message: "No results found.".to_string()
        }
    );
}

#[tokio::test]
async fn test_nothing_found_is_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Abstract": "",
            "RelatedTopics": []
        })))
        .mount(&server)
        .await;

    let record = toolset_for(&server).search_google_like("qwxzv").await;

    assert_eq!(
        record,
        WebSearchRecord::Error {
            error_message: "No results found.".to_string()
        }
    );
}

#[tokio::test]
async fn test_non_200_is_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let record = toolset_for(&server).search_google_like("rust").await;

    assert_eq!(
        record,
        WebSearchRecord::Error {
            error_message: "DuckDuckGo request failed (HTTP 500).".to_string()
        }
    );
}

#[tokio::test]
async fn test_timeout_is_caught() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let toolset = LookupToolset::new(
        LookupConfig::default()
            .with_duckduckgo_base_url(server.uri())
            .with_timeout(Duration::from_millis(200)),
    )
    .expect("client builds");

    let record = toolset.search_google_like("rust").await;

    let WebSearchRecord::Error { error_message } = record else {
        panic!("expected error");
    };
    assert!(error_message.starts_with("Search failed: "));
    assert!(error_message.contains("timed out"));
}
