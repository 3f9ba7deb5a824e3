use std::fs;
use std::path::PathBuf;

use sitesearch::config::Config;
use sitesearch::index::IndexSource;
use sitesearch::render::OutputFormat;
use sitesearch::search::HighlightMode;
use sitesearch::test_utils::{TestCase, run_table_tests};

fn fixture_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}

fn load_fixture(relative: &str) -> Config {
    let content = fs::read_to_string(fixture_path(relative)).expect("read fixture");
    Config::from_toml(&content).expect("parse config")
}

#[test]
fn config_scoring_from_fixture() -> Result<(), String> {
    let cases = vec![
        TestCase {
            name: "default",
            input: "tests/fixtures/configs/default.toml",
            expected: (3u32, 2u32, 1u32, 2u32, 1u32, 60i64),
            should_panic: false,
        },
        TestCase {
            name: "custom",
            input: "tests/fixtures/configs/custom.toml",
            expected: (5u32, 2u32, 1u32, 2u32, 1u32, 14i64),
            should_panic: false,
        },
    ];

    run_table_tests(cases, |relative_path| {
        let config = load_fixture(relative_path);
        (
            config.scoring.title,
            config.scoring.summary,
            config.scoring.content,
            config.scoring.tags,
            config.scoring.recency_bonus,
            config.scoring.recency_days,
        )
    })
}

#[test]
fn config_render_from_fixture() -> Result<(), String> {
    let cases = vec![
        TestCase {
            name: "default",
            input: "tests/fixtures/configs/default.toml",
            expected: (
                OutputFormat::Html,
                200usize,
                false,
                "No matches.".to_string(),
                HighlightMode::Sequential,
                "mark".to_string(),
            ),
            should_panic: false,
        },
        TestCase {
            name: "custom",
            input: "tests/fixtures/configs/custom.toml",
            expected: (
                OutputFormat::Json,
                80usize,
                true,
                "Nothing found.".to_string(),
                HighlightMode::SinglePass,
                "strong".to_string(),
            ),
            should_panic: false,
        },
    ];

    run_table_tests(cases, |relative_path| {
        let config = load_fixture(relative_path);
        (
            config.render.format,
            config.render.snippet_chars,
            config.render.escape_html,
            config.render.no_matches_message,
            config.highlight.mode,
            config.highlight.tag,
        )
    })
}

#[test]
fn custom_fixture_resolves_remote_index() {
    let config = load_fixture("tests/fixtures/configs/custom.toml");
    let source = IndexSource::resolve(&config.index.site, &config.index.path).unwrap();
    assert_eq!(
        source,
        IndexSource::Remote(
            "https://blog.example.com/assets/search_index.json"
                .parse()
                .unwrap()
        )
    );
}

#[test]
fn explicit_config_path_skips_other_layers() {
    let config = Config::load(
        Some(fixture_path("tests/fixtures/configs/custom.toml").as_path()),
        &fixture_path("tests/fixtures"),
    )
    .unwrap();
    assert_eq!(config.highlight.tag, "strong");
}

#[test]
fn unknown_highlight_mode_rejected() {
    assert!(Config::from_toml("[highlight]\nmode = \"fuzzy\"").is_err());
}
