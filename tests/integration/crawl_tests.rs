//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and drive the
//! full fetch, extract and enqueue cycle end-to-end.

use simple_crawler::config::CrawlConfig;
use simple_crawler::crawler::{run_crawl, Crawler};
use simple_crawler::state::PageState;
use std::path::Path;
use std::time::{Duration, Instant};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration scoped to the mock server, saving text only
fn create_test_config(server: &MockServer, seed_path: &str, text_dir: &Path) -> CrawlConfig {
    let base = server.uri();
    let mut config = CrawlConfig::new(
        format!("{}{}", base, seed_path),
        format!("^{}/", regex::escape(&base)),
        0,
    );
    config.save_text = true;
    config.text_dir = text_dir.to_string_lossy().into_owned();
    config
}

async fn mount_html(server: &MockServer, page_path: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body.to_string(), "text/html"))
        .mount(server)
        .await;
}

async fn mount_robots(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

/// Paths the server was asked for, in arrival order
async fn requested_paths(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| request.url.path().to_string())
        .collect()
}

fn dir_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[tokio::test]
async fn test_seed_links_are_filtered_and_enqueued() {
    let server = MockServer::start().await;
    let text_dir = TempDir::new().unwrap();

    mount_html(
        &server,
        "/a",
        r##"<html><body>
            <a href="/b">B</a>
            <a href="#frag">Fragment</a>
            <a href="http://other.com/x">Elsewhere</a>
            <a href="/a">Self</a>
        </body></html>"##,
    )
    .await;

    let config = create_test_config(&server, "/a", text_dir.path());
    let mut crawler = Crawler::new(config).unwrap();
    crawler.load_robots().await;

    let report = crawler.step().await.unwrap();
    assert_eq!(report.status, Some(200));
    assert_eq!(report.outcome, PageState::Html);
    assert_eq!(report.new_links, 1);

    let pending: Vec<&str> = crawler.frontier().pending().collect();
    assert_eq!(pending, vec![format!("{}/b", server.uri())]);

    let stats = crawler.stats();
    assert_eq!(stats.links_enqueued, 1);
    assert_eq!(stats.links_out_of_scope, 1);
    assert_eq!(stats.links_duplicate, 1);
}

#[tokio::test]
async fn test_robots_disallowed_link_is_never_requested() {
    let server = MockServer::start().await;
    let text_dir = TempDir::new().unwrap();

    mount_robots(&server, "User-agent: *\nDisallow: /private\n").await;
    mount_html(
        &server,
        "/start",
        r#"<a href="/private">Private</a><a href="/public">Public</a>"#,
    )
    .await;
    mount_html(&server, "/public", "<p>public page</p>").await;
    mount_html(&server, "/private", "<p>secret</p>").await;

    let config = create_test_config(&server, "/start", text_dir.path());
    let stats = run_crawl(config).await.unwrap();

    let paths = requested_paths(&server).await;
    assert!(paths.contains(&"/public".to_string()));
    assert!(!paths.contains(&"/private".to_string()));
    assert_eq!(stats.robots_entries, 1);
    assert_eq!(stats.links_blocked, 1);
}

#[tokio::test]
async fn test_error_status_does_not_stop_crawl() {
    let server = MockServer::start().await;
    let text_dir = TempDir::new().unwrap();

    mount_html(
        &server,
        "/start",
        r#"<a href="/missing">Gone</a><a href="/ok">Here</a>"#,
    )
    .await;
    mount_html(&server, "/ok", "<p>fine</p>").await;

    let config = create_test_config(&server, "/start", text_dir.path());
    let stats = run_crawl(config).await.unwrap();

    // Frontier order is FIFO, and the 404 is skipped without ending the run
    assert_eq!(
        requested_paths(&server).await,
        vec!["/robots.txt", "/start", "/missing", "/ok"]
    );
    assert_eq!(stats.outcome_count(PageState::Error), 1);
    assert_eq!(stats.outcome_count(PageState::Html), 2);
    assert_eq!(dir_entries(text_dir.path()), vec!["ok.txt", "start.txt"]);
}

#[tokio::test]
async fn test_non_html_response_writes_nothing() {
    let server = MockServer::start().await;
    let html_dir = TempDir::new().unwrap();
    let text_dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/data"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"links": ["/a"]}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let mut config = create_test_config(&server, "/data", text_dir.path());
    config.save_html = true;
    config.html_dir = html_dir.path().to_string_lossy().into_owned();

    let mut crawler = Crawler::new(config).unwrap();
    crawler.load_robots().await;
    let report = crawler.step().await.unwrap();

    assert_eq!(report.outcome, PageState::NonHtml);
    assert_eq!(report.to_string(), format!("{}/data -> 200 (skipped; non-html)", server.uri()));
    assert!(crawler.frontier().is_empty());
    assert!(dir_entries(html_dir.path()).is_empty());
    assert!(dir_entries(text_dir.path()).is_empty());
}

#[tokio::test]
async fn test_no_output_enabled_makes_no_requests() {
    let server = MockServer::start().await;
    mount_html(&server, "/start", "<p>never fetched</p>").await;

    let base = server.uri();
    let config = CrawlConfig::new(
        format!("{}/start", base),
        format!("^{}/", regex::escape(&base)),
        0,
    );

    assert!(Crawler::new(config.clone()).is_err());
    assert!(run_crawl(config).await.is_err());
    assert!(requested_paths(&server).await.is_empty());
}

#[tokio::test]
async fn test_cyclic_links_fetched_once() {
    let server = MockServer::start().await;
    let text_dir = TempDir::new().unwrap();

    mount_html(
        &server,
        "/a",
        r#"<a href="/a">A</a><a href="/b">B</a><a href="/a/">A again</a>"#,
    )
    .await;
    mount_html(
        &server,
        "/b",
        r#"<a href="/a#top">A</a><a href="/b">B</a><a href="/c">C</a>"#,
    )
    .await;
    mount_html(&server, "/c", r#"<a href="/a">A</a><a href="/b">B</a>"#).await;

    let config = create_test_config(&server, "/a", text_dir.path());
    let stats = run_crawl(config).await.unwrap();

    let paths = requested_paths(&server).await;
    for page in ["/a", "/b", "/c"] {
        assert_eq!(
            paths.iter().filter(|p| p.as_str() == page).count(),
            1,
            "{} should be fetched exactly once",
            page
        );
    }
    assert_eq!(stats.outcome_count(PageState::Html), 3);
    assert_eq!(stats.links_enqueued, 2);
}

#[tokio::test]
async fn test_seed_with_trailing_slash_fetched_once() {
    let server = MockServer::start().await;
    let text_dir = TempDir::new().unwrap();

    mount_html(
        &server,
        "/docs/",
        r#"<a href="/docs/">Docs</a><a href="/docs">Docs again</a><a href="/docs/#top">Top</a>"#,
    )
    .await;

    let config = create_test_config(&server, "/docs/", text_dir.path());
    let stats = run_crawl(config).await.unwrap();

    assert_eq!(requested_paths(&server).await, vec!["/robots.txt", "/docs/"]);
    assert_eq!(stats.outcome_count(PageState::Html), 1);
    assert_eq!(stats.links_enqueued, 0);
    assert_eq!(stats.links_duplicate, 3);
}

#[tokio::test]
async fn test_requests_are_paced() {
    let server = MockServer::start().await;
    let text_dir = TempDir::new().unwrap();

    mount_html(&server, "/one", r#"<a href="/two">next</a>"#).await;
    mount_html(&server, "/two", r#"<a href="/three">next</a>"#).await;
    mount_html(&server, "/three", "<p>end</p>").await;

    let mut config = create_test_config(&server, "/one", text_dir.path());
    config.sleep_time = 200;

    let mut crawler = Crawler::new(config).unwrap();
    crawler.load_robots().await;

    let mut finished = Vec::new();
    while crawler.step().await.is_some() {
        finished.push(Instant::now());
    }

    assert_eq!(finished.len(), 3);
    for pair in finished.windows(2) {
        assert!(pair[1] - pair[0] >= Duration::from_millis(200));
    }
}

#[tokio::test]
async fn test_saved_files_contents() {
    let server = MockServer::start().await;
    let html_dir = TempDir::new().unwrap();
    let text_dir = TempDir::new().unwrap();

    let page = "<html><head><title>Intro</title><style>p { color: red; }</style></head>\
                <body><p>Hello</p><script>var x = 1;</script><p>world</p></body></html>";
    mount_html(&server, "/docs/intro", page).await;

    let mut config = create_test_config(&server, "/docs/intro", text_dir.path());
    config.save_html = true;
    config.html_dir = html_dir.path().to_string_lossy().into_owned();

    let stats = run_crawl(config).await.unwrap();
    assert_eq!(stats.html_files_written, 1);
    assert_eq!(stats.text_files_written, 1);

    let html = std::fs::read_to_string(html_dir.path().join("intro.html")).unwrap();
    assert_eq!(html, page);

    let text = std::fs::read_to_string(text_dir.path().join("intro.txt")).unwrap();
    assert_eq!(text, "Intro Hello world ");
}

#[tokio::test]
async fn test_seed_blocked_by_robots() {
    let server = MockServer::start().await;
    let text_dir = TempDir::new().unwrap();

    mount_robots(&server, "User-agent: *\nDisallow: /start\n").await;
    mount_html(&server, "/start", "<p>blocked</p>").await;

    let config = create_test_config(&server, "/start", text_dir.path());
    let stats = run_crawl(config).await.unwrap();

    assert!(stats.seed_blocked);
    assert_eq!(stats.pages_fetched(), 0);
    assert_eq!(requested_paths(&server).await, vec!["/robots.txt"]);
}

#[tokio::test]
async fn test_robots_for_other_agents_ignored() {
    let server = MockServer::start().await;
    let text_dir = TempDir::new().unwrap();

    mount_robots(
        &server,
        "User-agent: Googlebot\nDisallow: /page\n\nUser-agent: *\nDisallow: /hidden\n",
    )
    .await;
    mount_html(&server, "/start", r#"<a href="/page">Page</a>"#).await;
    mount_html(&server, "/page", "<p>visible</p>").await;

    let config = create_test_config(&server, "/start", text_dir.path());
    let stats = run_crawl(config).await.unwrap();

    assert!(requested_paths(&server).await.contains(&"/page".to_string()));
    assert_eq!(stats.outcome_count(PageState::Html), 2);
}

#[tokio::test]
async fn test_unreachable_host_reports_error() {
    let text_dir = TempDir::new().unwrap();
    let mut config = CrawlConfig::new("http://127.0.0.1:1/start", "127\\.0\\.0\\.1", 0);
    config.save_text = true;
    config.text_dir = text_dir.path().to_string_lossy().into_owned();

    let mut crawler = Crawler::new(config).unwrap();
    crawler.load_robots().await;
    assert!(crawler.robots().is_empty());

    let report = crawler.step().await.unwrap();
    assert_eq!(report.status, None);
    assert_eq!(report.outcome, PageState::Error);
    assert_eq!(report.to_string(), "http://127.0.0.1:1/start -> --- (error!)");
    assert!(crawler.step().await.is_none());
}
