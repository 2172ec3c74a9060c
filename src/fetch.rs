//! Content fetching and manifest generation.
//!
//! Stage 1 of the build pipeline. Queries the content API and produces a
//! structured manifest that the generate stage consumes, so generation can
//! run (and re-run) without touching the network.
//!
//! ## Manifest contents
//!
//! - the initial listing page, optionally advanced through the pagination
//!   cursor to pre-render extra pages (`listing.prerender`)
//! - every post detail that resolved, keyed by uid
//! - uids that were enumerated but did not resolve, so the generate stage
//!   can emit explicit not-found pages for them
//! - the config the fetch ran with

use crate::client::{ClientError, ContentClient};
use crate::config::SiteConfig;
use crate::listing::{Listing, LoadMore};
use crate::routes::{self, PostLookup};
use crate::types::{PostDetail, PostPage};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("content API error: {0}")]
    Client(#[from] ClientError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Manifest output from the fetch stage.
#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
    /// Listing state as baked into the static output.
    pub listing: PostPage,
    /// Every post detail that resolved.
    pub posts: Vec<PostDetail>,
    /// Enumerated uids whose detail lookup came back not-found. Usually a
    /// document unpublished between the enumeration and the lookup.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<String>,
    /// Config the fetch ran with; the generate stage renders with this.
    pub config: SiteConfig,
}

/// Fetch everything the generate stage needs.
///
/// The listing starts from one `query_by_type` call and is advanced
/// `prerender - 1` times through [`Listing::load_more`] — the same
/// transition the browser replays later, so what is baked in and what gets
/// hydrated are indistinguishable.
pub fn fetch(client: &dyn ContentClient, config: &SiteConfig) -> Result<Manifest, FetchError> {
    let doc_type = &config.api.content_type;

    let initial = client.query_by_type(doc_type, config.api.page_size)?;
    let mut listing = Listing::new(initial);
    for _ in 1..config.listing.prerender {
        if listing.load_more(client)? == LoadMore::Exhausted {
            break;
        }
    }

    let summaries = client.get_by_type(doc_type)?;
    let mut posts = Vec::new();
    let mut missing = Vec::new();
    for summary in &summaries {
        match routes::resolve_post(client, doc_type, &summary.uid)? {
            PostLookup::Found(post) => posts.push(*post),
            PostLookup::NotFound | PostLookup::Pending => missing.push(summary.uid.clone()),
        }
    }

    Ok(Manifest {
        listing: listing.into_page(),
        posts,
        missing,
        config: config.clone(),
    })
}
