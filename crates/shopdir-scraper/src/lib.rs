pub mod client;
pub mod detail;
pub mod error;
pub mod links;
pub mod origin;
pub mod page_url;

pub use client::DirectoryClient;
pub use detail::extract_shop_record;
pub use error::ScrapeError;
pub use links::extract_shop_links;
pub use origin::extract_site_origin;
pub use page_url::list_page_url;
