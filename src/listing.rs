//! Listing pagination state.
//!
//! [`Listing`] owns the client-visible state of the post listing: the
//! ordered sequence of summaries shown so far (newest-appended-last) and
//! the opaque cursor to the next page. The sequence never shrinks and is
//! only mutated by [`Listing::load_more`].
//!
//! The same transition drives two consumers: the fetch stage advances a
//! `Listing` to pre-render extra pages into the manifest, and the embedded
//! browser script (`static/load-more.js`) replays it verbatim against the
//! live API when a visitor clicks "load more".
//!
//! ## One post per load
//!
//! A successful `load_more` appends exactly the **first** result of the
//! fetched page. The listing query is issued with a one-post page size, so
//! a well-formed response carries exactly one result and the head is the
//! whole page. The tests below pin the multi-result case as well, so a
//! change in the API's paging contract shows up as a test failure instead
//! of silently dropped posts.
//!
//! ## Failure and ordering
//!
//! On fetch failure the error propagates and the state is untouched — no
//! retry, no partial append. There is no mutual-exclusion guard either:
//! state lives on one thread (CLI) or one event loop (browser), and two
//! overlapping invocations in the browser would land in completion order.

use crate::client::{ClientError, ContentClient};
use crate::types::{Cursor, PostPage, PostSummary};

/// Outcome of a [`Listing::load_more`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMore {
    /// A page was fetched and its head appended.
    Appended,
    /// The cursor was already exhausted; nothing was fetched.
    Exhausted,
}

/// Client-visible listing state: visible posts plus the next-page cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    posts: Vec<PostSummary>,
    next_page: Option<Cursor>,
}

impl Listing {
    /// Seed the listing from the initial query's page.
    pub fn new(initial: PostPage) -> Self {
        Self {
            posts: initial.results,
            next_page: initial.next_page,
        }
    }

    /// Posts visible so far, in append order.
    pub fn posts(&self) -> &[PostSummary] {
        &self.posts
    }

    /// The current next-page cursor, if any pages remain.
    pub fn next_page(&self) -> Option<&Cursor> {
        self.next_page.as_ref()
    }

    /// Whether the load-more affordance should be shown.
    pub fn has_more(&self) -> bool {
        self.next_page.is_some()
    }

    /// Fetch the next page and append its head.
    ///
    /// With no cursor this is a no-op: no request is issued and
    /// [`LoadMore::Exhausted`] comes back. Otherwise exactly one fetch is
    /// issued; on success the first result is appended, the stored cursor
    /// is replaced by the returned one (possibly none, which hides the
    /// affordance), and [`LoadMore::Appended`] comes back. On failure the
    /// error propagates and `self` is exactly as it was before the call.
    pub fn load_more(&mut self, client: &dyn ContentClient) -> Result<LoadMore, ClientError> {
        let Some(cursor) = &self.next_page else {
            return Ok(LoadMore::Exhausted);
        };
        let page = client.fetch_page(cursor)?;
        // State mutation starts only after the fetch succeeded.
        if let Some(head) = page.results.into_iter().next() {
            self.posts.push(head);
        }
        self.next_page = page.next_page;
        Ok(LoadMore::Appended)
    }

    /// Consume the listing back into a page, for the fetch manifest.
    pub fn into_page(self) -> PostPage {
        PostPage {
            results: self.posts,
            next_page: self.next_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{page, summary, FakeClient};

    fn seeded(next: Option<&str>) -> Listing {
        Listing::new(page(vec![summary("post-a", "Post A")], next))
    }

    #[test]
    fn load_more_appends_one_and_installs_cursor() {
        let mut listing = seeded(Some("page-2"));
        let client = FakeClient::scripted(vec![Ok(page(
            vec![summary("post-b", "Post B")],
            Some("page-3"),
        ))]);

        let outcome = listing.load_more(&client).unwrap();

        assert_eq!(outcome, LoadMore::Appended);
        assert_eq!(listing.posts().len(), 2);
        assert_eq!(listing.posts()[1].uid, "post-b");
        assert_eq!(listing.next_page().unwrap().as_str(), "page-3");
        assert_eq!(client.fetch_calls(), 1);
    }

    #[test]
    fn load_more_on_last_page_clears_cursor() {
        let mut listing = seeded(Some("page-2"));
        let client =
            FakeClient::scripted(vec![Ok(page(vec![summary("post-b", "Post B")], None))]);

        listing.load_more(&client).unwrap();

        assert_eq!(listing.next_page(), None);
        assert!(!listing.has_more());
    }

    #[test]
    fn exhausted_listing_issues_no_fetch() {
        let mut listing = seeded(None);
        let client = FakeClient::scripted(vec![]);
        let before = listing.clone();

        let outcome = listing.load_more(&client).unwrap();

        assert_eq!(outcome, LoadMore::Exhausted);
        assert_eq!(client.fetch_calls(), 0);
        assert_eq!(listing, before);
    }

    #[test]
    fn failed_fetch_leaves_state_untouched() {
        let mut listing = seeded(Some("page-2"));
        let client = FakeClient::scripted(vec![Err(FakeClient::failure())]);
        let before = listing.clone();

        let result = listing.load_more(&client);

        assert!(result.is_err());
        assert_eq!(listing, before);
        // The affordance stays visible: cursor unchanged, retry possible.
        assert!(listing.has_more());
    }

    #[test]
    fn only_head_of_multi_result_page_is_appended() {
        // Pins the paging contract: if the API ever returns more than one
        // result per follow-up page, everything past the head is dropped.
        // A failure here means the API's page size changed and the append
        // rule needs a decision, not a silent widening.
        let mut listing = seeded(Some("page-2"));
        let client = FakeClient::scripted(vec![Ok(page(
            vec![summary("post-b", "Post B"), summary("post-c", "Post C")],
            None,
        ))]);

        listing.load_more(&client).unwrap();

        let uids: Vec<&str> = listing.posts().iter().map(|p| p.uid.as_str()).collect();
        assert_eq!(uids, vec!["post-a", "post-b"]);
        assert_eq!(listing.next_page(), None);
        assert!(!listing.has_more());
    }

    #[test]
    fn empty_result_page_appends_nothing_but_advances_cursor() {
        let mut listing = seeded(Some("page-2"));
        let client = FakeClient::scripted(vec![Ok(page(vec![], Some("page-3")))]);

        let outcome = listing.load_more(&client).unwrap();

        assert_eq!(outcome, LoadMore::Appended);
        assert_eq!(listing.posts().len(), 1);
        assert_eq!(listing.next_page().unwrap().as_str(), "page-3");
    }

    #[test]
    fn successive_loads_append_in_completion_order() {
        let mut listing = seeded(Some("page-2"));
        let client = FakeClient::scripted(vec![
            Ok(page(vec![summary("post-b", "Post B")], Some("page-3"))),
            Ok(page(vec![summary("post-c", "Post C")], None)),
        ]);

        listing.load_more(&client).unwrap();
        listing.load_more(&client).unwrap();

        let uids: Vec<&str> = listing.posts().iter().map(|p| p.uid.as_str()).collect();
        assert_eq!(uids, vec!["post-a", "post-b", "post-c"]);
        assert_eq!(client.fetch_calls(), 2);
    }

    #[test]
    fn into_page_round_trips_state() {
        let listing = seeded(Some("page-2"));
        let page = listing.clone().into_page();
        assert_eq!(Listing::new(page), listing);
    }
}
