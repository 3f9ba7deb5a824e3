//! Machine-readable results for robot mode.

use serde::Serialize;

use super::{Notice, Renderer};
use crate::search::ScoredEntry;

#[derive(Debug, Serialize)]
struct ResponseJson<'a> {
    status: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
    terms: &'a [String],
    count: usize,
    results: Vec<ResultJson<'a>>,
}

#[derive(Debug, Serialize)]
struct ResultJson<'a> {
    title: &'a str,
    url: &'a str,
    date: &'a str,
    score: u32,
    /// Highlighted snippet markup.
    snippet: String,
    tags: &'a [String],
}

pub(crate) fn notice(notice: Notice, message: &str, terms: &[String]) -> String {
    to_string(&ResponseJson {
        status: notice.status(),
        message: Some(message),
        terms,
        count: 0,
        results: Vec::new(),
    })
}

pub(crate) fn results(renderer: &Renderer, ranked: &[ScoredEntry<'_>], terms: &[String]) -> String {
    let results = ranked
        .iter()
        .map(|scored| ResultJson {
            title: &scored.entry.title,
            url: &scored.entry.url,
            date: scored.entry.display_date(),
            score: scored.score,
            snippet: renderer
                .highlighter()
                .highlight(&renderer.snippet_source(scored), terms),
            tags: &scored.entry.tags,
        })
        .collect::<Vec<_>>();

    to_string(&ResponseJson {
        status: "ok",
        message: None,
        terms,
        count: results.len(),
        results,
    })
}

fn to_string(response: &ResponseJson<'_>) -> String {
    serde_json::to_string_pretty(response).unwrap_or_default()
}
