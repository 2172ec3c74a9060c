//! Page renderers.
//!
//! Renders every document of the generated site with
//! [maud](https://maud.lambda.xyz/): compile-time checked markup, type-safe
//! interpolation, auto-escaped by default.
//!
//! ## Documents
//!
//! - **Listing** (`/index.html`): post cards plus the load-more affordance
//!   when a next-page cursor exists
//! - **Post** (`/post/<uid>/index.html`): banner, title, date, author,
//!   reading time, content sections
//! - **Pending**: transitional shell served for detail routes that have not
//!   been generated yet
//! - **Not found** (`404.html` and unresolvable uids): explicit, distinct
//!   from pending
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time: `static/style.css` (color
//! custom properties injected from config) and `static/load-more.js`, the
//! in-browser half of the pagination controller.

use crate::config::{self, SiteConfig};
use crate::listing::Listing;
use crate::readtime;
use crate::richtext;
use crate::routes::{self, PostLookup, Route};
use crate::types::{PostDetail, PostSummary};
use chrono::{DateTime, Utc};
use maud::{html, Markup, PreEscaped, DOCTYPE};

const CSS_STATIC: &str = include_str!("../static/style.css");
const LOAD_MORE_JS: &str = include_str!("../static/load-more.js");

/// Stylesheet for one build: config colors followed by the base styles.
pub fn page_css(config: &SiteConfig) -> String {
    format!(
        "{}\n\n{}",
        config::generate_color_css(&config.colors),
        CSS_STATIC
    )
}

/// Base HTML document shared by every page.
fn base_document(title: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css.to_string())) }
            }
            body {
                (content)
            }
        }
    }
}

/// Site header: the logo links back to the listing.
fn site_header(config: &SiteConfig) -> Markup {
    html! {
        header.site-header.container {
            a.logo href="/" {
                (config.site.title) span { "." }
            }
        }
    }
}

/// `dd Mon yyyy`, or a draft marker for unpublished posts.
fn format_date(date: Option<&DateTime<Utc>>) -> String {
    match date {
        Some(d) => d.format("%d %b %Y").to_string(),
        None => "draft".to_string(),
    }
}

/// One listing card.
fn post_card(post: &PostSummary) -> Markup {
    let href = routes::url(&Route::Post(post.uid.clone()));
    html! {
        a.post-card href=(href) {
            strong.title { (post.title) }
            p.subtitle { (post.subtitle) }
            div.post-info {
                span { (format_date(post.first_publication_date.as_ref())) }
                span { (post.author) }
            }
        }
    }
}

/// The listing page. The load-more button renders only while a next-page
/// cursor exists; the cursor travels whole in `data-next-page` for the
/// embedded script to dereference.
pub fn render_listing(listing: &Listing, config: &SiteConfig, css: &str) -> Markup {
    let content = html! {
        (site_header(config))
        main.container {
            @for post in listing.posts() {
                (post_card(post))
            }
        }
        @if let Some(cursor) = listing.next_page() {
            div.container {
                button.load-more type="button" data-next-page=(cursor.as_str()) {
                    "Load more posts"
                }
            }
            script { (PreEscaped(LOAD_MORE_JS)) }
        }
    };
    base_document(&config.site.title, css, content)
}

/// One post page.
pub fn render_post(post: &PostDetail, config: &SiteConfig, css: &str) -> Markup {
    let minutes = readtime::reading_minutes(&post.content);
    let title = format!("{} | {}", post.title, config.site.title);

    let content = html! {
        (site_header(config))
        @if let Some(banner) = &post.banner {
            img.banner src=(banner) alt="banner";
        }
        main.container.post-page {
            h1 { (post.title) }
            div.post-info {
                span { (format_date(post.first_publication_date.as_ref())) }
                span { (post.author) }
                span { (minutes) " min" }
            }
            div.post-body {
                @for section in &post.content {
                    div.section {
                        @if let Some(heading) = &section.heading {
                            h2 { (heading) }
                        }
                        (richtext::as_html(&section.body))
                    }
                }
            }
        }
    };
    base_document(&title, css, content)
}

/// Transitional shell for a detail route whose document is not generated
/// yet. Deliberately distinct from the not-found page.
pub fn render_pending(config: &SiteConfig, css: &str) -> Markup {
    let content = html! {
        (site_header(config))
        main.container.status-page {
            p { "Loading…" }
        }
    };
    base_document(&config.site.title, css, content)
}

/// Explicit not-found page.
pub fn render_not_found(config: &SiteConfig, css: &str) -> Markup {
    let title = format!("Post not found | {}", config.site.title);
    let content = html! {
        (site_header(config))
        main.container.status-page {
            h1 { "Post not found" }
            p { "This post does not exist. " a href="/" { "Back to the listing." } }
        }
    };
    base_document(&title, css, content)
}

/// Render a detail lookup in whichever of its three states it is in.
pub fn render_lookup(lookup: &PostLookup, config: &SiteConfig, css: &str) -> Markup {
    match lookup {
        PostLookup::Pending => render_pending(config, css),
        PostLookup::Found(post) => render_post(post, config, css),
        PostLookup::NotFound => render_not_found(config, css),
    }
}
