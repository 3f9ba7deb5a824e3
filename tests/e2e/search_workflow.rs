use sitesearch::config::RenderConfig;
use sitesearch::controller::{Controller, Startup};
use sitesearch::index::IndexLoader;
use sitesearch::render::{MemoryContainer, OutputFormat, Renderer};
use sitesearch::search::{Highlighter, Scorer};
use sitesearch::test_utils::fixtures::SiteFixture;

use super::fixture::{blog_entries, now, recent_now};

fn start(site: &SiteFixture, renderer: Renderer) -> Controller<MemoryContainer> {
    let loader = IndexLoader::new(site.source()).unwrap();
    match Controller::start(&loader, Scorer::default(), renderer, MemoryContainer::new()).unwrap() {
        Startup::Ready(controller) => controller,
        Startup::Unavailable(container) => {
            panic!("index unavailable: {:?}", container.contents())
        }
    }
}

#[test]
fn typing_session_renders_each_keystroke() {
    let site = SiteFixture::new();
    site.write_entries(&blog_entries());
    let mut controller = start(&site, Renderer::default());

    assert_eq!(controller.handle_input_at("", now()).unwrap(), 0);
    assert_eq!(
        controller.container().contents(),
        Some(r#"<p class="muted">Type to search posts…</p>"#)
    );

    // Title match on the first post, content match on the rust post.
    assert_eq!(controller.handle_input_at("hello", now()).unwrap(), 2);
    let html = controller.container().contents().unwrap().to_string();
    assert!(html.find("/posts/hello/").unwrap() < html.find("/posts/rust/").unwrap());
    assert!(html.contains(r#"<div class="muted">Nov 6, 2025</div>"#));
    assert!(html.contains(r#"<div class="muted">Mar 1, 2024</div>"#));

    assert_eq!(controller.handle_input_at("hello zzz", now()).unwrap(), 2);
    assert_eq!(controller.handle_input_at("zzz", now()).unwrap(), 0);
    assert_eq!(
        controller.container().contents(),
        Some(r#"<p class="muted">No matches.</p>"#)
    );
    assert_eq!(controller.container().renders(), 4);
}

#[test]
fn tag_match_counts_once_and_is_case_insensitive() {
    let site = SiteFixture::new();
    site.write_entries(&blog_entries());
    let renderer = Renderer::new(
        OutputFormat::Json,
        Highlighter::default(),
        RenderConfig::default(),
    );
    let mut controller = start(&site, renderer);

    assert_eq!(controller.handle_input_at("RUST", now()).unwrap(), 2);
    let json: serde_json::Value =
        serde_json::from_str(controller.container().contents().unwrap()).unwrap();

    // Title (3) + tag (2) for the rust post. The garden post has two
    // matching tags but earns the tag weight once.
    assert_eq!(json["results"][0]["url"], "/posts/rust/");
    assert_eq!(json["results"][0]["score"], 5);
    assert_eq!(json["results"][1]["url"], "/posts/garden/");
    assert_eq!(json["results"][1]["score"], 2);
}

#[test]
fn recent_post_gets_bonus() {
    let site = SiteFixture::new();
    site.write_entries(&blog_entries());
    let renderer = Renderer::new(
        OutputFormat::Json,
        Highlighter::default(),
        RenderConfig::default(),
    );
    let mut controller = start(&site, renderer);

    controller.handle_input_at("welcome", recent_now()).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(controller.container().contents().unwrap()).unwrap();
    // Content (1) + recency (1).
    assert_eq!(json["results"][0]["score"], 2);
}

#[test]
fn snippet_falls_back_to_content_when_summary_null() {
    let site = SiteFixture::new();
    site.write_entries(&blog_entries());
    let mut controller = start(&site, Renderer::default());

    controller.handle_input_at("borrowing", now()).unwrap();
    let html = controller.container().contents().unwrap();
    assert!(html.contains(
        r#"<div class="snippet"><mark>Borrowing</mark> rules explained with a hello world example.</div>"#
    ));
}

#[test]
fn recent_post_surfaces_without_term_match() {
    let site = SiteFixture::new();
    site.write_entries(&blog_entries());
    let mut controller = start(&site, Renderer::default());

    assert_eq!(controller.handle_input_at("zzz", recent_now()).unwrap(), 1);
    assert!(controller.container().contents().unwrap().contains("/posts/hello/"));
}
