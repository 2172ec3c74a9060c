//! Reading-time estimation.
//!
//! Estimates how many minutes a post takes to read, shown next to the date
//! and author on the post page. The estimate is a word count over every
//! content section divided by a fixed 200 words-per-minute pace, rounded up.
//!
//! ## Counting rule
//!
//! Words are the fields produced by splitting on commas, periods, and
//! whitespace — **including empty fields**. Splitting an empty string yields
//! one empty field, so an empty (but present) heading counts as one word,
//! and `"a,b."` counts as three. This over-count is inherited from the
//! upstream site this generator replaces and is kept for output parity; do
//! not "fix" it without accepting that every published reading time shifts.

use crate::richtext;
use crate::types::ContentSection;

/// Words per minute assumed by the estimate.
const WORDS_PER_MINUTE: usize = 200;

/// Estimated reading minutes for a post's content sections.
///
/// Pure and total: any well-formed section list produces a value, and a
/// post with no sections reads in 0 minutes.
pub fn reading_minutes(sections: &[ContentSection]) -> u32 {
    let words: usize = sections.iter().map(section_words).sum();
    words.div_ceil(WORDS_PER_MINUTE) as u32
}

/// Word count of one section: heading (when present) plus flattened body.
///
/// The body always contributes at least one field — an empty body flattens
/// to the empty string, which splits to one empty field. See the module
/// docs for why that stays.
fn section_words(section: &ContentSection) -> usize {
    let heading = section
        .heading
        .as_deref()
        .map(count_fields)
        .unwrap_or(0);
    heading + count_fields(&richtext::as_text(&section.body))
}

fn count_fields(text: &str) -> usize {
    text.split(|c: char| c == ',' || c == '.' || c.is_whitespace())
        .count()
}
