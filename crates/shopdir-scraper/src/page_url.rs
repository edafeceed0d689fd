//! List-page URL templating.
//!
//! The directory paginates with a path suffix, not a query parameter: page 1
//! is the bare base URL and every later page appends `page.<n>/`.

/// Builds the URL of list page `page` from the directory base URL.
///
/// Page 1 maps to the bare base URL; page `n > 1` maps to `<base>page.<n>/`.
/// A missing trailing slash on `base_url` is normalized on.
#[must_use]
pub fn list_page_url(base_url: &str, page: u32) -> String {
    let trimmed = base_url.trim_end_matches('/');
    if page <= 1 {
        format!("{trimmed}/")
    } else {
        format!("{trimmed}/page.{page}/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_one_is_the_bare_base_url() {
        assert_eq!(
            list_page_url("https://emalls.ir/Shops/", 1),
            "https://emalls.ir/Shops/"
        );
    }

    #[test]
    fn later_pages_append_the_page_suffix() {
        assert_eq!(
            list_page_url("https://emalls.ir/Shops/", 7),
            "https://emalls.ir/Shops/page.7/"
        );
    }

    #[test]
    fn missing_trailing_slash_is_normalized() {
        assert_eq!(
            list_page_url("https://emalls.ir/Shops", 415),
            "https://emalls.ir/Shops/page.415/"
        );
        assert_eq!(
            list_page_url("https://emalls.ir/Shops", 1),
            "https://emalls.ir/Shops/"
        );
    }
}
