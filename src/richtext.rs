//! Structured rich text rendering.
//!
//! The content API delivers post bodies as ordered block nodes (paragraphs,
//! headings, list items, preformatted text), each carrying inline formatting
//! runs over its text. This module renders those blocks two ways:
//!
//! - [`as_text`]: flat text, used by the reading-time estimator
//! - [`as_html`]: markup, used by the post page renderer
//!
//! All block text and link URLs are escaped on the way into markup. Spans
//! are trusted to be sorted by start and non-overlapping — the content API
//! delivers them that way; malformed runs are skipped rather than rendered
//! out of order.

use crate::types::{BlockKind, InlineSpan, RichTextBlock, SpanStyle};
use maud::{Markup, PreEscaped};

/// Flatten blocks to plain text, joined by a single space.
///
/// The join matches how the content API's own toolkit flattens rich text,
/// which matters because the reading-time word count runs over this exact
/// string.
pub fn as_text(blocks: &[RichTextBlock]) -> String {
    blocks
        .iter()
        .map(|b| b.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render blocks to HTML.
///
/// Consecutive list items are grouped under one `<ul>`. Inline spans become
/// `<strong>`, `<em>`, and `<a href>` wrappers.
pub fn as_html(blocks: &[RichTextBlock]) -> Markup {
    let mut out = String::new();
    let mut in_list = false;

    for block in blocks {
        if block.kind == BlockKind::ListItem {
            if !in_list {
                out.push_str("<ul>");
                in_list = true;
            }
            out.push_str("<li>");
            out.push_str(&render_inline(&block.text, &block.spans));
            out.push_str("</li>");
            continue;
        }
        if in_list {
            out.push_str("</ul>");
            in_list = false;
        }
        let tag = match block.kind {
            BlockKind::Paragraph => "p",
            BlockKind::Heading => "h3",
            BlockKind::Preformatted => "pre",
            BlockKind::ListItem => unreachable!(),
        };
        out.push_str(&format!(
            "<{tag}>{}</{tag}>",
            render_inline(&block.text, &block.spans)
        ));
    }
    if in_list {
        out.push_str("</ul>");
    }

    PreEscaped(out)
}

/// Apply inline spans to a block's text, escaping everything.
///
/// Offsets are char indices. Runs that overlap a previous run or are
/// inverted are skipped; out-of-range ends are clamped.
fn render_inline(text: &str, spans: &[InlineSpan]) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::new();
    let mut pos = 0;

    for span in spans {
        let start = span.start.min(chars.len());
        let end = span.end.min(chars.len());
        if start < pos || end <= start {
            continue;
        }
        push_escaped(&mut out, &chars[pos..start]);
        let (open, close) = span_tags(&span.style);
        out.push_str(&open);
        push_escaped(&mut out, &chars[start..end]);
        out.push_str(close);
        pos = end;
    }
    push_escaped(&mut out, &chars[pos..]);
    out
}

fn span_tags(style: &SpanStyle) -> (String, &'static str) {
    match style {
        SpanStyle::Strong => ("<strong>".to_string(), "</strong>"),
        SpanStyle::Em => ("<em>".to_string(), "</em>"),
        SpanStyle::Hyperlink { url } => {
            (format!(r#"<a href="{}">"#, escape(url)), "</a>")
        }
    }
}

fn push_escaped(out: &mut String, chars: &[char]) {
    for &c in chars {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_escaped(&mut out, &text.chars().collect::<Vec<_>>());
    out
}
