//! Route resolution.
//!
//! The site has two logical routes:
//!
//! - `/` — the post listing
//! - `/post/:uid` — one post detail page
//!
//! [`resolve`] maps request paths to routes, [`output_path`] maps routes to
//! files in the output directory, and [`url`] goes the other way for links
//! in generated markup.
//!
//! ## Detail lookup
//!
//! A detail route resolves to a [`PostLookup`], which keeps "still loading"
//! and "does not exist" apart instead of showing the loading shell for
//! both:
//!
//! - `Pending` — the route is plausible but its document has not been
//!   generated yet (a freshly published post before the next build)
//! - `Found` — the document resolved
//! - `NotFound` — the identifier does not resolve; rendered as an explicit
//!   not-found page

use crate::client::{ClientError, ContentClient};
use crate::types::PostDetail;
use std::path::PathBuf;

/// A logical route of the generated site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Listing,
    Post(String),
}

/// Resolve a request path to a route. `None` for paths outside the site.
pub fn resolve(path: &str) -> Option<Route> {
    let path = path.strip_suffix('/').unwrap_or(path);
    if path.is_empty() || path == "/" {
        return Some(Route::Listing);
    }
    let uid = path.strip_prefix("/post/")?;
    if uid.is_empty() || uid.contains('/') {
        return None;
    }
    Some(Route::Post(uid.to_string()))
}

/// File a route is written to, relative to the output directory.
pub fn output_path(route: &Route) -> PathBuf {
    match route {
        Route::Listing => PathBuf::from("index.html"),
        Route::Post(uid) => PathBuf::from("post").join(uid).join("index.html"),
    }
}

/// Site-relative URL for a route, for links in generated markup.
pub fn url(route: &Route) -> String {
    match route {
        Route::Listing => "/".to_string(),
        Route::Post(uid) => format!("/post/{uid}/"),
    }
}

/// Three-state result of resolving a post detail route.
#[derive(Debug, Clone, PartialEq)]
pub enum PostLookup {
    /// Resolution outstanding; render the transitional document.
    Pending,
    Found(Box<PostDetail>),
    NotFound,
}

/// Resolve one post by identifier: exactly one lookup against the content
/// client. A malformed or unknown identifier is a [`PostLookup::NotFound`],
/// not an error; errors are transport-level only.
pub fn resolve_post(
    client: &dyn ContentClient,
    doc_type: &str,
    uid: &str,
) -> Result<PostLookup, ClientError> {
    Ok(match client.get_by_uid(doc_type, uid)? {
        Some(post) => PostLookup::Found(Box::new(post)),
        None => PostLookup::NotFound,
    })
}
