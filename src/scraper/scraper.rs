// scraper.rs
use crate::domain::listing::DetailedListing;
use crate::domain::logic::filter_new_uploads;
use crate::scraper::detail::enrich;
use crate::scraper::extract::extract_listings;
use crate::scraper::models::{DetailEnrichment, ListingRecord};
use crate::scraper::selectors::{DetailSelectors, ListingSelectors};
use crate::scraper::ScraperError;
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, info, info_span, warn};
use url::Url;

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0 Safari/537.36";

/// Anything that can hand back the HTML of a page.
pub trait PageSource {
    fn fetch(&self, url: &str) -> Result<String, ScraperError>;
}

/// One scrape run, start to finish.
pub trait Pipeline {
    fn run(&self) -> Result<Vec<DetailedListing>, ScraperError>;
}

pub struct HttpPageSource {
    client: Client,
}

impl HttpPageSource {
    pub fn new(timeout: Duration) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        Ok(Self { client })
    }
}

impl PageSource for HttpPageSource {
    fn fetch(&self, url: &str) -> Result<String, ScraperError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(ScraperError::Network(format!("HTTP {status} for {url}")));
        }

        Ok(text)
    }
}

pub struct ListingScraper<S> {
    source: S,
    index_url: Url,
    listing_sel: ListingSelectors,
    detail_sel: DetailSelectors,
}

impl<S: PageSource> ListingScraper<S> {
    pub fn new(source: S, index_url: Url, recent_token: &str) -> Result<Self, ScraperError> {
        Ok(Self {
            source,
            index_url,
            listing_sel: ListingSelectors::new()?,
            detail_sel: DetailSelectors::new(recent_token)?,
        })
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Every listing on the index page, enriched, before filtering.
    /// A failed detail page degrades that listing instead of dropping it.
    pub fn fetch_all(&self) -> Result<Vec<DetailedListing>, ScraperError> {
        let html = self.source.fetch(self.index_url.as_str())?;
        let records = extract_listings(&html, &self.index_url, &self.listing_sel);
        info!("Index page parsed ({} listings)", records.len());

        let mut listings = Vec::with_capacity(records.len());
        for (i, record) in records.into_iter().enumerate() {
            debug!(listing = %record.id, "Visiting detail page {}", i + 1);

            if record.href.is_empty() {
                warn!(listing = %record.id, address = %record.address, "Listing has no link, skipping detail page");
                listings.push(DetailedListing { record, details: DetailEnrichment::default() });
                continue;
            }

            let details = match self.enrich_listing(&record) {
                Ok(details) => details,
                Err(e) => {
                    warn!(listing = %record.id, href = %record.href, "Failed to scrape detail page: {e}");
                    DetailEnrichment::default()
                }
            };

            listings.push(DetailedListing { record, details });
        }

        Ok(listings)
    }

    fn enrich_listing(&self, record: &ListingRecord) -> Result<DetailEnrichment, ScraperError> {
        let html = self.source.fetch(&record.href)?;
        Ok(enrich(&html, &self.detail_sel))
    }
}

impl<S: PageSource> Pipeline for ListingScraper<S> {
    fn run(&self) -> Result<Vec<DetailedListing>, ScraperError> {
        let _span = info_span!("scrape", url = %self.index_url).entered();
        info!("Web scrape running...");

        let listings = self.fetch_all()?;
        let fresh = filter_new_uploads(listings);

        info!("Web scrape done ({} new uploads)", fresh.len());
        Ok(fresh)
    }
}
