//! Shop-link extraction from directory list pages.

use std::collections::HashSet;

use scraper::{Html, Selector};

/// Anchors whose `href` starts with the shop-page path prefix.
const SHOP_LINK_SELECTOR: &str = r#"a[href^="/Shop/"]"#;

/// Extracts the unique shop detail URLs from a list page.
///
/// Matches anchors whose `href` begins with `/Shop/`, skips empty hrefs,
/// concatenates each onto `origin` to form an absolute URL, and deduplicates
/// by exact string equality. Output order is insertion order of first
/// occurrence.
#[must_use]
pub fn extract_shop_links(html: &str, origin: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let Ok(selector) = Selector::parse(SHOP_LINK_SELECTOR) else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    let mut links = Vec::new();
    for anchor in document.select(&selector) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        if href.is_empty() {
            continue;
        }
        let url = format!("{origin}{href}");
        if seen.insert(url.clone()) {
            links.push(url);
        }
    }
    links
}
