//! Integration tests for linkwell-tools against a local mock HTTP server.
//!
//! The shortening-service endpoints are pointed at wiremock so the fallback
//! chain, the custom-alias path, and the batch limit can be exercised
//! without touching the network.

use linkwell_domain::traits::UrlToolkit;
use linkwell_store::SqliteStore;
use linkwell_tools::{ToolConfig, ToolError, UrlTools};
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn tools_against(server: &MockServer) -> UrlTools {
    let config = ToolConfig {
        tinyurl_api: format!("{}/tinyurl", server.uri()),
        chilpit_api: format!("{}/chilpit", server.uri()),
        vgd_api: format!("{}/vgd", server.uri()),
        timeout: Duration::from_secs(2),
    };
    let store = SqliteStore::new(":memory:").unwrap();
    UrlTools::with_config(store, config).unwrap()
}

#[tokio::test]
async fn test_validate_reachable_url() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/page"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let tools = tools_against(&server);
    let report = tools.validate_url(&format!("{}/page", server.uri())).await.unwrap();

    assert!(report.is_valid);
    assert!(report.is_reachable);
    assert_eq!(report.status_code, Some(200));
}

#[tokio::test]
async fn test_validate_unreachable_status() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let tools = tools_against(&server);
    let report = tools.validate_url(&format!("{}/missing", server.uri())).await.unwrap();

    assert!(report.is_valid);
    assert!(!report.is_reachable);
    assert_eq!(report.status_code, Some(404));
}

#[tokio::test]
async fn test_validate_normalized_url_is_not_a_redirect() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let tools = tools_against(&server);
    // server.uri() has no trailing slash; the client adds one when it builds
    // the request, which must not read as a redirect
    let report = tools.validate_url(&server.uri()).await.unwrap();

    assert!(report.is_reachable);
    assert!(!report.redirected);
}

#[tokio::test]
async fn test_validate_reports_actual_redirect() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/old"))
        .respond_with(
            ResponseTemplate::new(301).insert_header("location", format!("{}/new", server.uri())),
        )
        .mount(&server)
        .await;
    Mock::given(method("HEAD"))
        .and(path("/new"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let tools = tools_against(&server);
    let report = tools.validate_url(&format!("{}/old", server.uri())).await.unwrap();

    assert!(report.redirected);
    assert!(report.final_url.as_deref().unwrap_or_default().ends_with("/new"));
    assert_eq!(report.status_code, Some(200));
}

#[tokio::test]
async fn test_validate_rejects_malformed_url() {
    let server = MockServer::start().await;
    let tools = tools_against(&server);

    // normalize_url prepends https://, so the result still fails to parse
    let report = tools.validate_url("https://").await.unwrap();
    assert!(!report.is_valid);
    assert!(!report.is_reachable);
}

#[tokio::test]
async fn test_shorten_uses_first_working_service() {
    let server = MockServer::start().await;
    // TinyURL is down; Chilp.it answers
    Mock::given(method("GET"))
        .and(path("/tinyurl"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/chilpit"))
        .respond_with(ResponseTemplate::new(200).set_body_string("http://chilp.it/abc123"))
        .mount(&server)
        .await;
    // Target page for the best-effort metadata scrape after the shorten
    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><head><title>Target</title></head></html>"),
        )
        .mount(&server)
        .await;

    let tools = tools_against(&server);
    let target = format!("{}/page", server.uri());
    let report = tools.shorten_url(&target, None, None, Some("python, docs")).await.unwrap();

    assert_eq!(report.shortened, "http://chilp.it/abc123");
    assert_eq!(report.service, "Chilp.it");

    // The shorten was persisted, with the scraped title
    let listing = tools.list_my_urls(None, None, 10).await.unwrap();
    assert_eq!(listing.records.len(), 1);
    assert_eq!(listing.records[0].original_url, target);
    assert_eq!(listing.records[0].tags, vec!["python", "docs"]);
    assert_eq!(listing.records[0].title.as_deref(), Some("Target"));
}

#[tokio::test]
async fn test_shorten_all_services_failing() {
    let server = MockServer::start().await;
    for endpoint in ["/tinyurl", "/chilpit", "/vgd"] {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;
    }

    let tools = tools_against(&server);
    let result = tools.shorten_url("https://www.python.org", None, None, None).await;
    assert!(matches!(result, Err(ToolError::AllServicesFailed(_))));

    let listing = tools.list_my_urls(None, None, 10).await.unwrap();
    assert!(listing.records.is_empty(), "failed shorten must not persist");
}

#[tokio::test]
async fn test_custom_alias_via_vgd() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/vgd"))
        .and(query_param("shorturl", "mylink"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"shorturl": "https://v.gd/mylink"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .mount(&server)
        .await;

    let tools = tools_against(&server);
    let report = tools
        .shorten_url(&format!("{}/page", server.uri()), Some("mylink"), None, None)
        .await
        .unwrap();

    assert_eq!(report.shortened, "https://v.gd/mylink");
    assert_eq!(report.service, "V.gd");
    assert_eq!(report.custom_alias.as_deref(), Some("mylink"));
    assert!(report.to_string().contains("custom alias"));
}

#[tokio::test]
async fn test_custom_alias_already_taken() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/vgd"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            serde_json::json!({"errorcode": 2, "errormessage": "Short URL already taken"}),
        ))
        .mount(&server)
        .await;

    let tools = tools_against(&server);
    let result = tools.shorten_url("https://www.python.org", Some("taken"), None, None).await;
    assert!(matches!(result, Err(ToolError::AliasTaken(alias)) if alias == "taken"));
}

#[tokio::test]
async fn test_batch_rejects_over_twenty_urls() {
    let server = MockServer::start().await;
    let tools = tools_against(&server);

    let urls: Vec<String> = (0..21).map(|i| format!("https://site{i}.org")).collect();
    let result = tools.shorten_url_batch(&urls.join("\n"), Some("big"), None).await;

    assert!(matches!(result, Err(ToolError::BatchTooLarge { count: 21, max: 20 })));

    // Zero rows persisted on rejection
    let listing = tools.list_my_urls(None, None, 100).await.unwrap();
    assert!(listing.records.is_empty());
}

#[tokio::test]
async fn test_batch_rejects_empty_input() {
    let server = MockServer::start().await;
    let tools = tools_against(&server);

    let result = tools.shorten_url_batch("  \n ", None, None).await;
    assert!(matches!(result, Err(ToolError::EmptyBatch)));
}

#[tokio::test]
async fn test_batch_splits_on_newlines_and_commas() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tinyurl"))
        .respond_with(ResponseTemplate::new(200).set_body_string("https://tinyurl.com/x"))
        .mount(&server)
        .await;

    let tools = tools_against(&server);
    let report = tools
        .shorten_url_batch("https://a.com, https://b.com\nhttps://c.com", Some("mixed"), None)
        .await
        .unwrap();

    assert_eq!(report.requested, 3);
    assert_eq!(report.succeeded, 3);
    assert_eq!(report.collection_name.as_deref(), Some("mixed"));

    let listing = tools.list_my_urls(Some("mixed"), None, 100).await.unwrap();
    assert_eq!(listing.records.len(), 3);
}

#[tokio::test]
async fn test_batch_records_per_url_failures() {
    let server = MockServer::start().await;
    // Every service rejects everything; batch still completes
    for endpoint in ["/tinyurl", "/chilpit", "/vgd"] {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
    }

    let tools = tools_against(&server);
    let report = tools.shorten_url_batch("https://a.com\nhttps://b.com", None, None).await.unwrap();

    assert_eq!(report.requested, 2);
    assert_eq!(report.succeeded, 0);
    assert!(report.items.iter().all(|item| item.error.is_some()));
}

#[tokio::test]
async fn test_metadata_scrape() {
    let server = MockServer::start().await;
    let html = r#"<html><head>
        <title>Mock Page</title>
        <meta name="description" content="A page served by wiremock">
        </head><body>hello</body></html>"#;
    Mock::given(method("GET"))
        .and(path("/doc"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(html, "text/html"),
        )
        .mount(&server)
        .await;

    let tools = tools_against(&server);
    let report = tools.get_url_metadata(&format!("{}/doc", server.uri())).await.unwrap();

    assert_eq!(report.title, "Mock Page");
    assert_eq!(report.description, "A page served by wiremock");
    assert_eq!(report.status_code, 200);
    assert!(!report.is_secure, "wiremock serves plain http");
    assert_eq!(report.content_type.as_deref(), Some("text/html"));
    assert!(report.to_string().contains("Title: Mock Page"));
}

#[tokio::test]
async fn test_metadata_error_on_server_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/down"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let tools = tools_against(&server);
    let result = tools.get_url_metadata(&format!("{}/down", server.uri())).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_expand_follows_redirect_chain() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/short"))
        .respond_with(
            ResponseTemplate::new(301).insert_header("location", format!("{}/final", server.uri())),
        )
        .mount(&server)
        .await;
    Mock::given(method("HEAD"))
        .and(path("/final"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let tools = tools_against(&server);
    let report = tools.expand_url(&format!("{}/short", server.uri())).await.unwrap();

    assert!(report.final_url.ends_with("/final"));
    assert_eq!(report.redirect_count, 1);
    assert_eq!(report.status_code, 200);
    assert!(report.redirect_chain[0].ends_with("/short"));
}

#[tokio::test]
async fn test_collection_create_and_duplicate() {
    let server = MockServer::start().await;
    let tools = tools_against(&server);

    let first = tools.create_url_collection("x", Some("demo")).await.unwrap();
    assert!(first.created);

    let second = tools.create_url_collection("x", None).await.unwrap();
    assert!(!second.created);
    assert!(second.to_string().contains("already exists"));

    let listing = tools.list_collections().await.unwrap();
    assert_eq!(listing.collections.len(), 1);
}

#[tokio::test]
async fn test_search_after_shorten() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tinyurl"))
        .respond_with(ResponseTemplate::new(200).set_body_string("https://tinyurl.com/py"))
        .mount(&server)
        .await;

    let tools = tools_against(&server);
    tools.shorten_url_batch("https://www.python.org", None, None).await.unwrap();

    let hits = tools.search_urls("python", 10).await.unwrap();
    assert_eq!(hits.records.len(), 1);
    assert!(tools.search_urls("nonexistent", 10).await.unwrap().records.is_empty());
}
