//! Sequential crawl driver.
//!
//! Walks the configured list-page range in order: fetch the list page,
//! collect its shop links, fetch each shop's detail page with a courtesy
//! delay in between, and export the page's batch as one workbook. Every
//! per-item failure is logged and skipped; nothing short of a config or
//! startup error aborts the run.

use std::time::Duration;

use shopdir_core::{AppConfig, ShopRecord};
use shopdir_export::save_page_workbook;
use shopdir_scraper::{
    extract_shop_links, extract_site_origin, list_page_url, DirectoryClient,
};

/// Aggregated counters for one full run, logged at completion.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunTotals {
    /// List pages fetched successfully.
    pub pages_scraped: u32,
    /// List pages skipped because the fetch failed.
    pub pages_failed: u32,
    /// Pages whose batch was written to a workbook.
    pub pages_exported: u32,
    /// Shop detail pages extracted into records.
    pub shops_scraped: u32,
    /// Shop detail pages skipped because the fetch failed.
    pub shops_failed: u32,
    /// Non-empty batches whose workbook write failed.
    pub exports_failed: u32,
}

/// Runs the full scrape over the configured page range.
///
/// # Errors
///
/// Returns an error only if the HTTP client cannot be constructed. Fetch and
/// export failures inside the loop are logged, counted, and skipped.
pub async fn run_scrape(config: &AppConfig) -> anyhow::Result<RunTotals> {
    let client = DirectoryClient::new(config.request_timeout_secs, &config.user_agent)
        .map_err(|e| anyhow::anyhow!("failed to build directory client: {e}"))?;
    let origin = extract_site_origin(&config.base_url);

    let mut totals = RunTotals::default();

    for page in config.start_page..=config.end_page {
        let page_url = list_page_url(&config.base_url, page);
        tracing::info!(page, url = %page_url, "scraping list page");

        let body = match client.fetch_page(&page_url).await {
            Ok(body) => body,
            Err(e) => {
                tracing::error!(page, url = %page_url, error = %e, "failed to fetch list page — skipping");
                totals.pages_failed += 1;
                continue;
            }
        };
        totals.pages_scraped += 1;

        let shop_links = extract_shop_links(&body, &origin);
        if shop_links.is_empty() {
            tracing::warn!(page, "no shop links found on list page");
            continue;
        }

        let mut batch: Vec<ShopRecord> = Vec::with_capacity(shop_links.len());
        for link in &shop_links {
            tracing::info!(url = %link, "scraping shop");
            match client.fetch_shop_details(link).await {
                Ok(record) => {
                    batch.push(record);
                    totals.shops_scraped += 1;
                }
                Err(e) => {
                    tracing::error!(url = %link, error = %e, "failed to fetch shop page — skipping");
                    totals.shops_failed += 1;
                }
            }

            // Courtesy delay after every shop fetch, success or not.
            if config.delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(config.delay_ms)).await;
            }
        }

        if batch.is_empty() {
            tracing::warn!(page, "no data found for list page");
            continue;
        }

        match save_page_workbook(&batch, page, &config.out_dir) {
            Ok(path) => {
                totals.pages_exported += 1;
                tracing::info!(page, path = %path.display(), rows = batch.len(), "saved page workbook");
            }
            Err(e) => {
                // A failed export forfeits this page's batch; the rest of the
                // range still runs.
                totals.exports_failed += 1;
                tracing::error!(page, error = %e, "failed to save page workbook — continuing");
            }
        }
    }

    tracing::info!(
        pages_scraped = totals.pages_scraped,
        pages_failed = totals.pages_failed,
        pages_exported = totals.pages_exported,
        shops_scraped = totals.shops_scraped,
        shops_failed = totals.shops_failed,
        exports_failed = totals.exports_failed,
        "scraping completed"
    );

    Ok(totals)
}

#[cfg(test)]
#[path = "crawl_test.rs"]
mod tests;
