//! HTML site generation.
//!
//! Stage 2 of the build pipeline. Takes the fetch manifest and writes the
//! final static site.
//!
//! ## Output structure
//!
//! ```text
//! dist/
//! ├── index.html                 # Listing page
//! ├── 404.html                   # Explicit not-found page
//! ├── post/
//! │   ├── index.html             # Pending shell for ungenerated routes
//! │   ├── how-to-rust/
//! │   │   └── index.html         # Post page
//! │   └── gone-post/
//! │       └── index.html         # Not-found page for an unresolved uid
//! ```
//!
//! The pending shell exists for hosts that rewrite unknown `/post/*` paths
//! to it: a freshly published post shows the transitional document until
//! the next build, while a genuinely unknown uid falls through to 404 —
//! the two states stay distinct all the way to the browser.

use crate::fetch::Manifest;
use crate::listing::Listing;
use crate::render;
use crate::routes::{self, PostLookup, Route};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// What was written, for CLI output.
#[derive(Debug, Default)]
pub struct GenerateStats {
    /// Post pages written.
    pub posts: usize,
    /// Not-found pages written for unresolved uids.
    pub not_found: usize,
}

/// Read a manifest file and generate the site from it.
pub fn generate_from_file(
    manifest_path: &Path,
    output_dir: &Path,
) -> Result<(Manifest, GenerateStats), GenerateError> {
    let content = fs::read_to_string(manifest_path)?;
    let manifest: Manifest = serde_json::from_str(&content)?;
    let stats = generate(&manifest, output_dir)?;
    Ok((manifest, stats))
}

/// Generate the site from a manifest.
pub fn generate(manifest: &Manifest, output_dir: &Path) -> Result<GenerateStats, GenerateError> {
    let config = &manifest.config;
    let css = render::page_css(config);
    let mut stats = GenerateStats::default();

    fs::create_dir_all(output_dir)?;

    let listing = Listing::new(manifest.listing.clone());
    let listing_html = render::render_listing(&listing, config, &css);
    write_route(output_dir, &Route::Listing, listing_html.into_string())?;

    for post in &manifest.posts {
        let route = Route::Post(post.uid.clone());
        let lookup = PostLookup::Found(Box::new(post.clone()));
        let html = render::render_lookup(&lookup, config, &css);
        write_route(output_dir, &route, html.into_string())?;
        stats.posts += 1;
    }

    // Unresolved uids get a real page at their route instead of silently
    // pretending to load.
    for uid in &manifest.missing {
        let route = Route::Post(uid.clone());
        let html = render::render_lookup(&PostLookup::NotFound, config, &css);
        write_route(output_dir, &route, html.into_string())?;
        stats.not_found += 1;
    }

    let pending = render::render_lookup(&PostLookup::Pending, config, &css);
    fs::create_dir_all(output_dir.join("post"))?;
    fs::write(
        output_dir.join("post").join("index.html"),
        pending.into_string(),
    )?;

    let not_found = render::render_not_found(config, &css);
    fs::write(output_dir.join("404.html"), not_found.into_string())?;

    Ok(stats)
}

fn write_route(output_dir: &Path, route: &Route, html: String) -> Result<(), GenerateError> {
    let path = output_dir.join(routes::output_path(route));
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, html)?;
    Ok(())
}
