//! URL origin extraction for absolutizing shop links.

/// Extracts the scheme+host origin from the configured directory base URL.
///
/// Given `"https://emalls.ir/Shops/"`, returns `"https://emalls.ir"`. Shop
/// anchors on list pages carry site-relative paths (`/Shop/<slug>`), so this
/// origin is what they are concatenated onto.
#[must_use]
pub fn extract_site_origin(base_url: &str) -> String {
    reqwest::Url::parse(base_url).map_or_else(
        |e| {
            tracing::warn!(
                base_url,
                error = %e,
                "could not parse base_url as URL — falling back to string split for origin extraction; check SHOPDIR_BASE_URL"
            );
            // fallback: take "https://host" by splitting on '/' and taking first 3 parts
            base_url
                .trim_end_matches('/')
                .splitn(4, '/')
                .take(3)
                .collect::<Vec<_>>()
                .join("/")
        },
        |u| u.origin().ascii_serialization(),
    )
}
