//! Shared types used across both pipeline stages.
//!
//! These types are serialized to JSON between stages (fetch → generate) and
//! on the wire from the content API, so the fetch manifest and the API
//! response share one vocabulary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The fields of a post shown on the listing page.
///
/// Summaries are immutable once fetched: the listing only ever appends to
/// its sequence, it never edits a card in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostSummary {
    /// Unique identifier, used for routing (`/post/<uid>/`)
    pub uid: String,
    /// Publication timestamp. `None` for drafts that have never been published.
    pub first_publication_date: Option<DateTime<Utc>>,
    pub title: String,
    pub subtitle: String,
    pub author: String,
}

/// The full document rendered on an individual post page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostDetail {
    pub uid: String,
    /// Publication timestamp. `None` for drafts.
    pub first_publication_date: Option<DateTime<Utc>>,
    pub title: String,
    /// Banner image URL. Optional; pages without one render without a banner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
    pub author: String,
    /// Content sections in render order. Order must be preserved.
    pub content: Vec<ContentSection>,
}

/// One section of a post: an optional heading plus a rich text body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    pub body: Vec<RichTextBlock>,
}

/// A block node of structured rich text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichTextBlock {
    pub kind: BlockKind,
    pub text: String,
    /// Inline formatting over `text`, addressed by char offsets.
    /// Assumed sorted by start and non-overlapping.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub spans: Vec<InlineSpan>,
}

impl RichTextBlock {
    /// A plain paragraph with no inline formatting.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Paragraph,
            text: text.into(),
            spans: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Paragraph,
    Heading,
    ListItem,
    Preformatted,
}

/// An inline formatting run: `[start, end)` in char offsets over the block text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineSpan {
    pub start: usize,
    pub end: usize,
    #[serde(flatten)]
    pub style: SpanStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SpanStyle {
    Strong,
    Em,
    Hyperlink { url: String },
}

/// Opaque reference to the next page of a listing query.
///
/// The underlying value is a URL the content API hands back, with page size
/// and offset already encoded. Consumers embed or dereference it whole —
/// never parse it, never construct one from parts. Only the content client
/// dereferences it; the renderer embeds it verbatim for the in-browser
/// load-more script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// The raw cursor value, for embedding or dereferencing as a unit.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One page of a listing query: the shape returned by `query_by_type` and
/// by every cursor fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostPage {
    pub results: Vec<PostSummary>,
    /// Cursor to the next page, or `None` when this is the last page.
    pub next_page: Option<Cursor>,
}
