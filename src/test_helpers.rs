//! Shared test utilities for the simple-press test suite.
//!
//! Provides compact builders for posts, pages, and sections, plus
//! [`FakeClient`], a scripted [`ContentClient`] that counts calls so tests
//! can assert not just what state resulted but how many fetches produced
//! it.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use crate::client::{ClientError, ContentClient};
use crate::types::{
    ContentSection, Cursor, PostDetail, PostPage, PostSummary, RichTextBlock,
};

// =========================================================================
// Builders
// =========================================================================

/// A published summary with placeholder subtitle and author.
pub fn summary(uid: &str, title: &str) -> PostSummary {
    PostSummary {
        uid: uid.to_string(),
        first_publication_date: None,
        title: title.to_string(),
        subtitle: format!("{title} subtitle"),
        author: "ada".to_string(),
    }
}

/// A detail whose sections each hold one paragraph of the given text.
pub fn detail(uid: &str, title: &str, bodies: &[&str]) -> PostDetail {
    PostDetail {
        uid: uid.to_string(),
        first_publication_date: None,
        title: title.to_string(),
        banner: None,
        author: "ada".to_string(),
        content: bodies.iter().map(|b| section(None, b)).collect(),
    }
}

/// One content section with an optional heading and a single paragraph.
pub fn section(heading: Option<&str>, body: &str) -> ContentSection {
    ContentSection {
        heading: heading.map(str::to_string),
        body: vec![RichTextBlock::paragraph(body)],
    }
}

/// A listing page with an optional next cursor.
pub fn page(results: Vec<PostSummary>, next: Option<&str>) -> PostPage {
    PostPage {
        results,
        next_page: next.map(Cursor::new),
    }
}

// =========================================================================
// Fake content client
// =========================================================================

/// Scripted [`ContentClient`].
///
/// Cursor fetches pop responses from a script in order; listing queries
/// return a fixed initial page; uid lookups search a fixed detail set.
/// Every entry point counts its calls.
pub struct FakeClient {
    initial_page: PostPage,
    summaries: Vec<PostSummary>,
    details: Vec<PostDetail>,
    scripted_pages: RefCell<VecDeque<Result<PostPage, ClientError>>>,
    fetch_calls: Cell<usize>,
    uid_calls: Cell<usize>,
}

impl FakeClient {
    /// A client whose cursor fetches run through `responses` in order.
    pub fn scripted(responses: Vec<Result<PostPage, ClientError>>) -> Self {
        Self {
            initial_page: PostPage {
                results: vec![],
                next_page: None,
            },
            summaries: vec![],
            details: vec![],
            scripted_pages: RefCell::new(responses.into()),
            fetch_calls: Cell::new(0),
            uid_calls: Cell::new(0),
        }
    }

    /// A client that resolves uid lookups against `details`.
    pub fn with_details(details: Vec<PostDetail>) -> Self {
        let mut client = Self::scripted(vec![]);
        client.details = details;
        client
    }

    pub fn set_initial_page(&mut self, page: PostPage) {
        self.initial_page = page;
    }

    pub fn set_summaries(&mut self, summaries: Vec<PostSummary>) {
        self.summaries = summaries;
    }

    pub fn script_pages(&mut self, responses: Vec<Result<PostPage, ClientError>>) {
        self.scripted_pages = RefCell::new(responses.into());
    }

    /// How many cursor fetches were issued.
    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.get()
    }

    /// How many uid lookups were issued.
    pub fn uid_calls(&self) -> usize {
        self.uid_calls.get()
    }

    /// An injectable failure. Status-shaped because transport errors can't
    /// be constructed without a connection attempt.
    pub fn failure() -> ClientError {
        ClientError::Status {
            status: 503,
            url: "https://api.example.dev/unavailable".to_string(),
        }
    }
}

impl ContentClient for FakeClient {
    fn query_by_type(&self, _doc_type: &str, _page_size: u32) -> Result<PostPage, ClientError> {
        Ok(self.initial_page.clone())
    }

    fn get_by_type(&self, _doc_type: &str) -> Result<Vec<PostSummary>, ClientError> {
        Ok(self.summaries.clone())
    }

    fn get_by_uid(&self, _doc_type: &str, uid: &str) -> Result<Option<PostDetail>, ClientError> {
        self.uid_calls.set(self.uid_calls.get() + 1);
        Ok(self.details.iter().find(|d| d.uid == uid).cloned())
    }

    fn fetch_page(&self, _cursor: &Cursor) -> Result<PostPage, ClientError> {
        self.fetch_calls.set(self.fetch_calls.get() + 1);
        self.scripted_pages
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("fetch_page called with no scripted response left"))
    }
}
