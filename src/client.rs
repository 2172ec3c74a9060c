//! Content API client.
//!
//! The data source is a hosted headless-CMS document API, consumed over
//! plain JSON. The contract is small:
//!
//! - `query_by_type` — first page of a listing query, with an opaque
//!   next-page cursor
//! - `fetch_page` — dereference a cursor; same response shape
//! - `get_by_type` — enumerate every summary of a type (route generation)
//! - `get_by_uid` — one document by identifier; `Ok(None)` when it does not
//!   resolve
//!
//! [`ContentClient`] is a trait so the pagination controller and both
//! pipeline stages can run against a scripted fake in tests. The real
//! implementation is [`HttpContentClient`], built by [`content_client`] from
//! explicit configuration — endpoint and token travel in, never ambient
//! globals.
//!
//! ## Wire format
//!
//! ```text
//! GET {url}/documents?type={type}&page_size={n}   → {"results": [...], "next_page": url|null}
//! GET {cursor}                                    → same shape
//! GET {url}/documents/{type}/{uid}                → post detail, or 404
//! ```

use crate::config::ApiConfig;
use crate::types::{Cursor, PostDetail, PostPage, PostSummary};
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("content API transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("content API returned status {status} for {url}")]
    Status { status: u16, url: String },
    #[error("malformed content API response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Request interface to the content API.
///
/// Failures are local to the operation that issued them; callers decide
/// what an error means for their state (the pagination controller, for one,
/// guarantees its state is untouched when a fetch fails).
pub trait ContentClient {
    /// First page of a listing query for `doc_type`, `page_size` items per page.
    fn query_by_type(&self, doc_type: &str, page_size: u32) -> Result<PostPage, ClientError>;

    /// Every summary of `doc_type`, for enumerating routes.
    fn get_by_type(&self, doc_type: &str) -> Result<Vec<PostSummary>, ClientError>;

    /// One document by identifier. `Ok(None)` is the not-found signal —
    /// an identifier that does not resolve is not a client error.
    fn get_by_uid(&self, doc_type: &str, uid: &str) -> Result<Option<PostDetail>, ClientError>;

    /// Dereference a pagination cursor. Returns the same shape as
    /// [`query_by_type`](ContentClient::query_by_type).
    fn fetch_page(&self, cursor: &Cursor) -> Result<PostPage, ClientError>;
}

/// Listing response as it appears on the wire. `next_page` is a bare URL
/// string there; it becomes an opaque [`Cursor`] at this boundary and is
/// never looked inside again.
#[derive(Debug, Deserialize)]
struct WirePage {
    results: Vec<PostSummary>,
    next_page: Option<String>,
}

impl From<WirePage> for PostPage {
    fn from(wire: WirePage) -> Self {
        PostPage {
            results: wire.results,
            next_page: wire.next_page.map(Cursor::new),
        }
    }
}

/// Blocking HTTP implementation of [`ContentClient`].
pub struct HttpContentClient {
    http: reqwest::blocking::Client,
    url: String,
    access_token: Option<String>,
}

/// Build a content client from explicit API configuration.
pub fn content_client(api: &ApiConfig) -> HttpContentClient {
    HttpContentClient {
        http: reqwest::blocking::Client::new(),
        url: api.url.trim_end_matches('/').to_string(),
        access_token: api.access_token.clone(),
    }
}

impl HttpContentClient {
    /// GET `url` and return the body, mapping non-success statuses to
    /// [`ClientError::Status`].
    fn get(&self, url: &str) -> Result<String, ClientError> {
        let mut request = self.http.get(url);
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }
        let response = request.send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.text()?)
    }

    fn get_page(&self, url: &str) -> Result<PostPage, ClientError> {
        let body = self.get(url)?;
        let wire: WirePage = serde_json::from_str(&body)?;
        Ok(wire.into())
    }
}

/// Page size used when enumerating a whole type.
const ENUMERATION_PAGE_SIZE: u32 = 100;

impl ContentClient for HttpContentClient {
    fn query_by_type(&self, doc_type: &str, page_size: u32) -> Result<PostPage, ClientError> {
        let url = format!(
            "{}/documents?type={doc_type}&page_size={page_size}",
            self.url
        );
        self.get_page(&url)
    }

    fn get_by_type(&self, doc_type: &str) -> Result<Vec<PostSummary>, ClientError> {
        let mut page = self.query_by_type(doc_type, ENUMERATION_PAGE_SIZE)?;
        let mut results = std::mem::take(&mut page.results);
        while let Some(cursor) = &page.next_page {
            page = self.fetch_page(cursor)?;
            results.append(&mut page.results);
        }
        Ok(results)
    }

    fn get_by_uid(&self, doc_type: &str, uid: &str) -> Result<Option<PostDetail>, ClientError> {
        let url = format!("{}/documents/{doc_type}/{uid}", self.url);
        match self.get(&url) {
            Ok(body) => Ok(Some(serde_json::from_str(&body)?)),
            Err(ClientError::Status { status: 404, .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn fetch_page(&self, cursor: &Cursor) -> Result<PostPage, ClientError> {
        self.get_page(cursor.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;

    #[test]
    fn wire_page_converts_next_page_to_cursor() {
        let json = r#"{
            "results": [{
                "uid": "first-post",
                "first_publication_date": "2021-03-15T10:00:00Z",
                "title": "First",
                "subtitle": "sub",
                "author": "ada"
            }],
            "next_page": "https://api.example.dev/documents?type=posts&page=2"
        }"#;
        let wire: WirePage = serde_json::from_str(json).unwrap();
        let page: PostPage = wire.into();
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].uid, "first-post");
        assert_eq!(
            page.next_page.unwrap().as_str(),
            "https://api.example.dev/documents?type=posts&page=2"
        );
    }

    #[test]
    fn wire_page_without_next_page_is_last() {
        let json = r#"{"results": [], "next_page": null}"#;
        let wire: WirePage = serde_json::from_str(json).unwrap();
        let page: PostPage = wire.into();
        assert_eq!(page.next_page, None);
    }

    #[test]
    fn factory_trims_trailing_slash() {
        let client = content_client(&ApiConfig {
            url: "https://api.example.dev/v2/".to_string(),
            access_token: None,
            content_type: "posts".to_string(),
            page_size: 1,
        });
        assert_eq!(client.url, "https://api.example.dev/v2");
    }

    #[test]
    fn draft_summary_parses_null_date() {
        let json = r#"{
            "uid": "draft",
            "first_publication_date": null,
            "title": "Draft",
            "subtitle": "unpublished",
            "author": "ada"
        }"#;
        let summary: PostSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.first_publication_date, None);
    }
}
