mod detail;
mod extract;
pub mod models;
mod scraper;
mod scraper_error;
mod selectors;

pub use self::scraper::{HttpPageSource, ListingScraper, PageSource, Pipeline};
pub use scraper_error::ScraperError;
pub use selectors::DEFAULT_RECENT_TOKEN;
