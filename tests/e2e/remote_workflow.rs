use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use serde_json::json;

use sitesearch::controller::{Controller, Startup};
use sitesearch::index::{IndexLoader, IndexSource};
use sitesearch::render::{MemoryContainer, Renderer};
use sitesearch::search::Scorer;
use sitesearch::test_utils::fixtures::SiteFixture;

use super::fixture::{blog_entries, now};

fn loader(server: &MockServer) -> IndexLoader {
    IndexLoader::new(IndexSource::resolve(&server.base_url(), "/search_index.json").unwrap())
        .unwrap()
}

#[test]
fn fetches_index_bypassing_caches() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/search_index.json")
            .header("cache-control", "no-cache, no-store")
            .header("pragma", "no-cache");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!(blog_entries()));
    });

    let startup = Controller::start(
        &loader(&server),
        Scorer::default(),
        Renderer::default(),
        MemoryContainer::new(),
    )
    .unwrap();
    mock.assert();

    let Startup::Ready(mut controller) = startup else {
        panic!("expected ready startup");
    };
    assert_eq!(controller.index().len(), 3);
    assert_eq!(controller.handle_input_at("hello", now()).unwrap(), 2);
}

#[test]
fn not_found_renders_unavailable_message() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/search_index.json");
        then.status(404);
    });

    let startup = Controller::start(
        &loader(&server),
        Scorer::default(),
        Renderer::default(),
        MemoryContainer::new(),
    )
    .unwrap();
    mock.assert();

    let Startup::Unavailable(container) = startup else {
        panic!("expected unavailable startup");
    };
    assert_eq!(
        container.contents(),
        Some(r#"<p class="muted">Search index not found. Add /search_index.json.</p>"#)
    );
}

#[test]
fn malformed_body_renders_unavailable_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/search_index.json");
        then.status(200).body("<html>oops</html>");
    });

    let startup = Controller::start(
        &loader(&server),
        Scorer::default(),
        Renderer::default(),
        MemoryContainer::new(),
    )
    .unwrap();
    assert!(!startup.is_ready());
}

#[test]
fn cli_searches_remote_site() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/search_index.json");
        then.status(200).json_body(json!(blog_entries()));
    });

    let site = SiteFixture::new();
    Command::cargo_bin("sitesearch")
        .unwrap()
        .current_dir(site.path())
        .env("SITESEARCH_CONFIG", site.path().join("absent.toml"))
        .args(["--robot", "search", "tomatoes", "--site"])
        .arg(format!("{}/blog/", server.base_url()))
        .assert()
        .success()
        .stdout(predicate::str::contains("/posts/garden/"));
}

#[test]
fn cli_remote_server_error_is_not_fatal() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/search_index.json");
        then.status(500);
    });

    let site = SiteFixture::new();
    Command::cargo_bin("sitesearch")
        .unwrap()
        .current_dir(site.path())
        .env("SITESEARCH_CONFIG", site.path().join("absent.toml"))
        .args(["search", "hello", "--site"])
        .arg(server.base_url())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Search index not found. Add /search_index.json.",
        ));
}
