//! # Simple Press
//!
//! A minimal static blog generator for headless-CMS content. A hosted
//! content API is the data source: posts are fetched by document type,
//! rendered into a paginated listing page and one detail page per post,
//! and further listing pages are hydrated in the browser through the API's
//! opaque pagination cursor.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! Content moves through two independent stages with a JSON manifest
//! between them:
//!
//! ```text
//! 1. Fetch     content API  →  manifest.json   (API documents → structured data)
//! 2. Generate  manifest     →  dist/           (final HTML site)
//! ```
//!
//! The split exists for the same reasons it would in any pipeline:
//!
//! - **Debuggability**: the manifest is human-readable JSON you can inspect.
//! - **Offline iteration**: generation re-runs without touching the network.
//! - **Testability**: generation is a pure function from manifest to files.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`client`] | Content API contract and the blocking HTTP implementation |
//! | [`listing`] | Pagination state: visible posts + opaque next-page cursor |
//! | [`readtime`] | Reading-time estimate from a post's content sections |
//! | [`richtext`] | Structured rich text → flat text and markup |
//! | [`routes`] | Path ↔ route mapping and three-state detail lookup |
//! | [`fetch`] | Stage 1 — queries the API, produces the manifest |
//! | [`generate`] | Stage 2 — renders the final HTML site from the manifest using Maud |
//! | [`render`] | Page templates: listing, post, pending, not-found |
//! | [`config`] | `press.toml` loading, validation, and CSS generation |
//! | [`types`] | Shared types serialized between stages and on the wire |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## One Pagination Transition, Two Runtimes
//!
//! "Load one more page" is a single state transition: fetch the current
//! cursor, append the head of the returned page, install the returned
//! cursor. [`listing::Listing`] implements it in Rust for build-time
//! pre-rendering and for tests; `static/load-more.js` replays it verbatim
//! in the browser against the live API. Keeping both sides on the same
//! transition means the baked pages and the hydrated ones cannot drift.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/): malformed
//! markup is a compile error, interpolation is type-checked Rust, and all
//! text is escaped by default — which matters when post titles and rich
//! text come from a remote API.
//!
//! ## Blocking HTTP
//!
//! The pipeline is a short-lived CLI issuing one request at a time, so the
//! content client uses `reqwest`'s blocking mode. No async runtime, no
//! cancellation tokens; a hung request hangs the build, and that is the
//! right behavior for a build tool.
//!
//! ## Pending Is Not Not-Found
//!
//! A detail route can be in three states: still loading, found, or
//! nonexistent. The generated output keeps them distinct — post pages for
//! found documents, explicit not-found pages (and `404.html`) for unknown
//! identifiers, and a separate transitional shell for routes published
//! after the last build. See [`routes::PostLookup`].

pub mod client;
pub mod config;
pub mod fetch;
pub mod generate;
pub mod listing;
pub mod output;
pub mod readtime;
pub mod render;
pub mod richtext;
pub mod routes;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
