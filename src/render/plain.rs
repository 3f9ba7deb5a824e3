//! Terminal listing.

use colored::Colorize;

use super::Renderer;
use crate::search::ScoredEntry;

pub(crate) fn notice(message: &str) -> String {
    message.dimmed().to_string()
}

pub(crate) fn results(renderer: &Renderer, ranked: &[ScoredEntry<'_>], terms: &[String]) -> String {
    let highlighter = renderer.highlighter();
    // Matching runs over the raw text so later terms never see the escape
    // sequences inserted for earlier ones.
    let emphasize = |text: &str, terms: &[String]| {
        highlighter.highlight_segments(text, terms, str::to_string, |matched| {
            matched.yellow().bold().to_string()
        })
    };

    let mut out = String::new();
    for (position, scored) in ranked.iter().enumerate() {
        let entry = scored.entry;
        let title = emphasize(&entry.title, terms);
        out.push_str(&format!(
            "{}. {} {}\n",
            position + 1,
            title.bold(),
            format!("[{}]", scored.score).dimmed()
        ));

        let date = entry.display_date();
        if date.is_empty() {
            out.push_str(&format!("   {}\n", entry.url.cyan()));
        } else {
            out.push_str(&format!("   {}  {}\n", entry.url.cyan(), date.dimmed()));
        }

        let snippet = emphasize(&renderer.snippet_source(scored), terms);
        if !snippet.is_empty() {
            out.push_str(&format!("   {snippet}\n"));
        }
        if !entry.tags.is_empty() {
            let tags = entry
                .tags
                .iter()
                .map(|tag| format!("#{tag}"))
                .collect::<Vec<_>>()
                .join(" ");
            out.push_str(&format!("   {}\n", tags.dimmed()));
        }
        out.push('\n');
    }
    out.trim_end().to_string()
}
