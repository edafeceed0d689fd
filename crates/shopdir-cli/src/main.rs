use std::path::PathBuf;

use clap::Parser;

mod crawl;

#[derive(Debug, Parser)]
#[command(name = "shopdir")]
#[command(about = "Sequential shop-directory scraper with per-page spreadsheet export")]
struct Cli {
    /// First list page to scrape (inclusive)
    #[arg(long)]
    start_page: Option<u32>,

    /// Last list page to scrape (inclusive)
    #[arg(long)]
    end_page: Option<u32>,

    /// Delay between shop detail fetches, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Base URL of the paginated shop directory
    #[arg(long)]
    base_url: Option<String>,

    /// Directory to write the per-page workbooks into
    #[arg(long)]
    out_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let mut config = shopdir_core::load_app_config_from_env()?;
    apply_overrides(&mut config, cli)?;

    crawl::run_scrape(&config).await?;
    Ok(())
}

/// Applies CLI flag overrides on top of the env-derived config, re-checking
/// the page range since flags can invert it.
fn apply_overrides(config: &mut shopdir_core::AppConfig, cli: Cli) -> anyhow::Result<()> {
    if let Some(start_page) = cli.start_page {
        anyhow::ensure!(start_page >= 1, "--start-page must be at least 1");
        config.start_page = start_page;
    }
    if let Some(end_page) = cli.end_page {
        config.end_page = end_page;
    }
    if let Some(delay_ms) = cli.delay_ms {
        config.delay_ms = delay_ms;
    }
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(out_dir) = cli.out_dir {
        config.out_dir = out_dir;
    }
    anyhow::ensure!(
        config.start_page <= config.end_page,
        "page range is inverted: start page {} is greater than end page {}",
        config.start_page,
        config.end_page
    );
    Ok(())
}
