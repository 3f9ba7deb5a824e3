//! HTML markup for the results area.

use std::fmt::Write as _;

use super::Renderer;
use crate::search::ScoredEntry;

pub(crate) fn notice(message: &str) -> String {
    format!(r#"<p class="muted">{message}</p>"#)
}

pub(crate) fn results(renderer: &Renderer, ranked: &[ScoredEntry<'_>], terms: &[String]) -> String {
    let escape = renderer.options().escape_html;
    let highlighter = renderer.highlighter();
    let text = |raw: &str| {
        if escape {
            escape_html(raw)
        } else {
            raw.to_string()
        }
    };
    // With escaping on, matching runs over the raw text and each segment is
    // escaped on output, so entity bodies are never matched.
    let emphasize = |raw: &str| {
        if escape {
            highlighter.highlight_segments(raw, terms, escape_html, |matched| {
                highlighter.wrap_tag(&escape_html(matched))
            })
        } else {
            highlighter.highlight(raw, terms)
        }
    };

    let mut out = String::new();
    for (position, scored) in ranked.iter().enumerate() {
        let entry = scored.entry;
        let title = emphasize(&entry.title);
        let snippet = emphasize(&renderer.snippet_source(scored));
        let tags = entry
            .tags
            .iter()
            .map(|tag| format!(r#"<span class="tag">{}</span>"#, text(tag)))
            .collect::<Vec<_>>()
            .join(" ");

        if position > 0 {
            out.push('\n');
        }
        let _ = write!(
            out,
            concat!(
                "<div class=\"result\">\n",
                "  <a href=\"{url}\">{title}</a>\n",
                "  <div class=\"muted\">{date}</div>\n",
                "  <div class=\"snippet\">{snippet}</div>\n",
                "  <div class=\"tags\">{tags}</div>\n",
                "</div>"
            ),
            url = text(&entry.url),
            title = title,
            date = text(entry.display_date()),
            snippet = snippet,
            tags = tags,
        );
    }
    out
}

/// Escape text for element content and double-quoted attributes.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
