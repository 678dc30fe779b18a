//! End-to-end scrape tests
//!
//! These tests use wiremock to serve a homepage and a privacy policy page
//! and run both passes against it.

use policy_scout::config::Config;
use policy_scout::scrape::Coordinator;
use policy_scout::ScrapeError;
use serde_json::{json, Value};
use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const HOMEPAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <title>Example Underwriting</title>
    <link rel="stylesheet" href="/static/site.css">
    <link rel="alternate" href="/fr" hreflang="fr">
    <script src="/static/app.js"></script>
</head>
<body>
    <nav class="top"><a href="/">Home</a><a href="/about">About</a></nav>
    <img src="/static/logo.png" alt="Logo">
    <footer id="legal"><a href="/privacy-policy">Privacy Policy</a></footer>
</body>
</html>"#;

const PRIVACY_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Privacy</title><script>var tracking = "ignored words";</script></head>
<body>
    <h1>Privacy Policy</h1>
    <p>We value your privacy. Your data is safe.</p>
    <p>Updated 2023</p>
    <p>© 2023 Example Ltd</p>
    <div class="cookie-banner">Accept cookies</div>
</body>
</html>"#;

/// Creates a test configuration pointing at the mock server
fn create_test_config(base_url: &str, output_dir: &Path) -> Config {
    let mut config = Config::default();
    config.scrape.page_url = base_url.to_string();
    config.scrape.terminator = "© 2023 Example Ltd".to_string();
    config.fetch.timeout_secs = 5;
    config.fetch.connect_timeout_secs = 2;
    config.output.directory = output_dir.to_string_lossy().into_owned();
    config
}

async fn mount_html(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

fn read_records(path: &Path) -> Vec<Value> {
    std::fs::read_to_string(path)
        .expect("Failed to read records")
        .lines()
        .map(|line| serde_json::from_str(line).expect("Invalid record"))
        .collect()
}

#[tokio::test]
async fn test_full_run_writes_all_outputs() {
    let mock_server = MockServer::start().await;
    mount_html(&mock_server, "/", HOMEPAGE).await;
    mount_html(&mock_server, "/privacy-policy", PRIVACY_PAGE).await;

    let output = TempDir::new().unwrap();
    let config = create_test_config(&mock_server.uri(), output.path());

    let coordinator = Coordinator::new(config).expect("Failed to create coordinator");
    let report = coordinator.run().await.expect("Scrape failed");

    assert_eq!(report.target_url.path(), "/privacy-policy");
    assert!(report.terminator_reached);

    // Resources: stylesheet, script, image; the hreflang alternate and anchors are skipped
    let resources = read_records(&output.path().join("resources.json"));
    assert_eq!(report.resources, 3);
    let tags: Vec<&str> = resources
        .iter()
        .map(|r| r["html-tag-name"].as_str().unwrap())
        .collect();
    assert_eq!(tags, vec!["link", "script", "img"]);
    assert_eq!(resources[2]["alt"], json!("Logo"));
    assert_eq!(resources[2]["parent-html-tag-name"]["html-tag-name"], json!("body"));

    // Links: every anchor, in document order, with text and parent info
    let links = read_records(&output.path().join("links.json"));
    assert_eq!(report.links, 3);
    assert_eq!(links.len(), 3);
    assert_eq!(links[0]["parent-html-tag-name"]["class"], json!("top"));
    assert_eq!(links[2]["html-tag-string"], json!("Privacy Policy"));
    assert_eq!(
        links[2]["parent-html-tag-name"],
        json!({ "id": "legal", "html-tag-name": "footer" })
    );

    // Frequency: body text up to and including the terminator, scripts excluded
    let content = std::fs::read_to_string(output.path().join("frequency.json")).unwrap();
    assert!(content.starts_with("{\n    \"privacy\": 2,"));
    let frequency: Value = serde_json::from_str(&content).unwrap();
    assert_eq!(
        frequency,
        json!({
            "privacy": 2,
            "policy": 1,
            "we": 1,
            "value": 1,
            "your": 2,
            "data": 1,
            "is": 1,
            "safe": 1,
            "updated": 1,
            "": 1,
            "example": 1,
            "ltd": 1
        })
    );
    assert_eq!(report.distinct_words, 12);
    assert_eq!(report.top_words[0], ("privacy".to_string(), 2));
}

#[tokio::test]
async fn test_missing_terminator_counts_whole_body() {
    let mock_server = MockServer::start().await;
    mount_html(&mock_server, "/", HOMEPAGE).await;
    mount_html(&mock_server, "/privacy-policy", PRIVACY_PAGE).await;

    let output = TempDir::new().unwrap();
    let mut config = create_test_config(&mock_server.uri(), output.path());
    config.scrape.terminator = "© 2024 Example Ltd".to_string();

    let report = Coordinator::new(config).unwrap().run().await.unwrap();
    assert!(!report.terminator_reached);

    let content = std::fs::read_to_string(&report.frequency_path).unwrap();
    let frequency: Value = serde_json::from_str(&content).unwrap();
    assert_eq!(frequency["cookies"], json!(1));
    assert_eq!(frequency["accept"], json!(1));
}

#[tokio::test]
async fn test_missing_link_is_reported() {
    let mock_server = MockServer::start().await;
    mount_html(
        &mock_server,
        "/",
        r#"<html><body><a href="/terms">Terms of Use</a></body></html>"#,
    )
    .await;

    let output = TempDir::new().unwrap();
    let config = create_test_config(&mock_server.uri(), output.path());

    let err = Coordinator::new(config).unwrap().run().await.unwrap_err();
    assert!(
        matches!(err, ScrapeError::LinkNotFound { ref text } if text == "Privacy Policy"),
        "unexpected error: {}",
        err
    );

    // The homepage pass completed before the failure
    assert!(output.path().join("links.json").exists());
    assert!(!output.path().join("frequency.json").exists());
}

#[tokio::test]
async fn test_link_without_href_is_reported() {
    let mock_server = MockServer::start().await;
    mount_html(
        &mock_server,
        "/",
        r#"<html><body><a name="policy">Privacy Policy</a></body></html>"#,
    )
    .await;

    let output = TempDir::new().unwrap();
    let config = create_test_config(&mock_server.uri(), output.path());

    let err = Coordinator::new(config).unwrap().run().await.unwrap_err();
    assert!(matches!(err, ScrapeError::MissingHref { .. }));
}

#[tokio::test]
async fn test_http_error_aborts_run() {
    let mock_server = MockServer::start().await;
    mount_html(&mock_server, "/", HOMEPAGE).await;
    Mock::given(method("GET"))
        .and(path("/privacy-policy"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let output = TempDir::new().unwrap();
    let config = create_test_config(&mock_server.uri(), output.path());

    let err = Coordinator::new(config).unwrap().run().await.unwrap_err();
    match err {
        ScrapeError::HttpStatus { url, status } => {
            assert_eq!(status, 404);
            assert!(url.ends_with("/privacy-policy"));
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[tokio::test]
async fn test_output_directory_is_created() {
    let mock_server = MockServer::start().await;
    mount_html(&mock_server, "/", HOMEPAGE).await;
    mount_html(&mock_server, "/privacy-policy", PRIVACY_PAGE).await;

    let output = TempDir::new().unwrap();
    let nested = output.path().join("runs").join("latest");
    let config = create_test_config(&mock_server.uri(), &nested);

    Coordinator::new(config).unwrap().run().await.unwrap();
    assert!(nested.join("resources.json").exists());
    assert!(nested.join("frequency.json").exists());
}

#[tokio::test]
async fn test_links_resolve_against_redirected_homepage() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(302).insert_header("location", "/en/"))
        .mount(&mock_server)
        .await;
    mount_html(
        &mock_server,
        "/en/",
        r#"<html><body><a href="privacy">Privacy Policy</a></body></html>"#,
    )
    .await;
    mount_html(&mock_server, "/en/privacy", PRIVACY_PAGE).await;

    let output = TempDir::new().unwrap();
    let config = create_test_config(&mock_server.uri(), output.path());

    let report = Coordinator::new(config).unwrap().run().await.unwrap();
    assert_eq!(report.target_url.path(), "/en/privacy");
    assert!(report.terminator_reached);
    assert_eq!(report.links, 1);
}
