use crate::scraper::models::{DetailEnrichment, ListingRecord};

/// An index-page listing merged with its detail-page fields.
/// Listings whose detail page failed carry `DetailEnrichment::default()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailedListing {
    pub record: ListingRecord,
    pub details: DetailEnrichment,
}
