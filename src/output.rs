//! CLI output formatting for both pipeline stages.
//!
//! Output is information-centric: the primary line for every post is its
//! positional index and title, with the route shown as indented context.
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure.
//!
//! ```text
//! Posts
//! 001 How to Rust
//!     Route: /post/how-to-rust/
//!     15 Mar 2021 · ada
//!
//! Listing: 1 visible, more pages available
//! ```

use crate::fetch::Manifest;
use crate::generate::GenerateStats;
use crate::routes::{self, Route};
use crate::types::PostSummary;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{pos:0>3}")
}

fn summary_lines(index: usize, post: &PostSummary) -> Vec<String> {
    let date = post
        .first_publication_date
        .map(|d| d.format("%d %b %Y").to_string())
        .unwrap_or_else(|| "draft".to_string());
    vec![
        format!("{} {}", format_index(index), post.title),
        format!("    Route: {}", routes::url(&Route::Post(post.uid.clone()))),
        format!("    {date} · {}", post.author),
    ]
}

/// Fetch stage output: every resolved post, unresolved uids, listing state.
pub fn format_fetch_output(manifest: &Manifest) -> Vec<String> {
    let mut lines = vec!["Posts".to_string()];
    for (idx, post) in manifest.posts.iter().enumerate() {
        let summary = PostSummary {
            uid: post.uid.clone(),
            first_publication_date: post.first_publication_date,
            title: post.title.clone(),
            subtitle: String::new(),
            author: post.author.clone(),
        };
        lines.extend(summary_lines(idx + 1, &summary));
    }

    if !manifest.missing.is_empty() {
        lines.push(String::new());
        lines.push("Unresolved".to_string());
        for (idx, uid) in manifest.missing.iter().enumerate() {
            lines.push(format!("{} {uid} (not found)", format_index(idx + 1)));
        }
    }

    lines.push(String::new());
    let more = if manifest.listing.next_page.is_some() {
        "more pages available"
    } else {
        "no further pages"
    };
    lines.push(format!(
        "Listing: {} visible, {more}",
        manifest.listing.results.len()
    ));
    lines
}

pub fn print_fetch_output(manifest: &Manifest) {
    for line in format_fetch_output(manifest) {
        println!("{line}");
    }
}

/// Generate stage output: route → file mapping plus totals.
pub fn format_generate_output(manifest: &Manifest, stats: &GenerateStats) -> Vec<String> {
    let mut lines = vec!["Home → index.html".to_string()];
    for (idx, post) in manifest.posts.iter().enumerate() {
        lines.push(format!(
            "{} {} → {}",
            format_index(idx + 1),
            post.title,
            routes::output_path(&Route::Post(post.uid.clone())).display()
        ));
    }
    for uid in &manifest.missing {
        lines.push(format!(
            "    {uid} → {} (not found)",
            routes::output_path(&Route::Post(uid.clone())).display()
        ));
    }
    lines.push(String::new());
    lines.push(format!(
        "Generated {} post pages, {} not-found pages",
        stats.posts, stats.not_found
    ));
    lines
}

pub fn print_generate_output(manifest: &Manifest, stats: &GenerateStats) {
    for line in format_generate_output(manifest, stats) {
        println!("{line}");
    }
}
