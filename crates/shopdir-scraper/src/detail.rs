//! Field extraction from shop detail pages.
//!
//! Each field is resolved independently through an ordered list of probes.
//! A probe either yields a non-empty trimmed string, in which case the chain
//! short-circuits, or the next probe runs; a chain that runs dry resolves to
//! the `"N/A"` placeholder. The probes encode the directory's observed page
//! structure (heading, class-tagged blocks, `tel:`/WhatsApp anchors, and one
//! legacy server-generated element id).

use scraper::{ElementRef, Html, Selector};

use shopdir_core::record::{ShopRecord, PLACEHOLDER};

/// One extraction rule: where to look and what to take from the match.
enum Probe {
    /// Text content of the first element matching the selector.
    Text(&'static str),
    /// `href` attribute of the first element matching the selector.
    Href(&'static str),
    /// `href` attribute with a fixed scheme prefix stripped.
    HrefStripPrefix(&'static str, &'static str),
    /// `<title>` text up to the first `|` delimiter.
    TitleHead,
}

const NAME_PROBES: &[Probe] = &[Probe::Text("h1"), Probe::TitleHead];
const ADDRESS_PROBES: &[Probe] = &[Probe::Text(".shop-address")];
const PHONE_PROBES: &[Probe] = &[Probe::HrefStripPrefix(r#"a[href^="tel:"]"#, "tel:")];
const WEBSITE_PROBES: &[Probe] = &[Probe::Href(".ex-link-icon.link-website")];
const WHATSAPP_PROBES: &[Probe] = &[Probe::Href(
    r#"a[href^="https://wa.me/"], a[href^="whatsapp://"]"#,
)];
const CITY_PROBES: &[Probe] = &[Probe::Text(".shop-location")];
const RESPONSIBLE_PROBES: &[Probe] = &[Probe::Text("#ContentPlaceHolder1_lblMasool1")];

/// Extracts a [`ShopRecord`] from a shop detail page.
///
/// Cannot fail: any field whose probe chain finds nothing is set to `"N/A"`.
/// The extracted record is written to the log before being returned.
#[must_use]
pub fn extract_shop_record(html: &str) -> ShopRecord {
    let document = Html::parse_document(html);

    let record = ShopRecord {
        name: resolve_field(&document, NAME_PROBES),
        address: resolve_field(&document, ADDRESS_PROBES),
        phone: resolve_field(&document, PHONE_PROBES),
        website: resolve_field(&document, WEBSITE_PROBES),
        whatsapp: resolve_field(&document, WHATSAPP_PROBES),
        city: resolve_field(&document, CITY_PROBES),
        responsible: resolve_field(&document, RESPONSIBLE_PROBES),
    };

    tracing::info!(?record, "extracted shop record");
    record
}

/// Runs a probe chain, returning the first non-empty result or the placeholder.
fn resolve_field(document: &Html, probes: &[Probe]) -> String {
    probes
        .iter()
        .find_map(|probe| evaluate(document, probe))
        .unwrap_or_else(|| PLACEHOLDER.to_owned())
}

/// Evaluates one probe. `None` means no match or an empty value after trimming.
fn evaluate(document: &Html, probe: &Probe) -> Option<String> {
    let raw = match probe {
        Probe::Text(selector) => select_first(document, selector)?
            .text()
            .collect::<String>(),
        Probe::Href(selector) => select_first(document, selector)?
            .value()
            .attr("href")?
            .to_owned(),
        Probe::HrefStripPrefix(selector, prefix) => {
            let href = select_first(document, selector)?.value().attr("href")?;
            href.strip_prefix(prefix).unwrap_or(href).to_owned()
        }
        Probe::TitleHead => {
            let title = select_first(document, "title")?.text().collect::<String>();
            title.split('|').next().unwrap_or_default().to_owned()
        }
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// First element matching `selector`, treating an unparsable selector as no match.
fn select_first<'a>(document: &'a Html, selector: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(selector).ok()?;
    document.select(&selector).next()
}

#[cfg(test)]
#[path = "detail_test.rs"]
mod tests;
