// src/domain/logic.rs

use crate::domain::listing::DetailedListing;

/// Keeps only the listings uploaded within the last day, in page order.
pub fn filter_new_uploads(listings: Vec<DetailedListing>) -> Vec<DetailedListing> {
    listings
        .into_iter()
        .filter(|l| l.details.new_upload)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: &str, new_upload: bool) -> DetailedListing {
        let mut l = DetailedListing::default();
        l.record.id = id.to_string();
        l.details.new_upload = new_upload;
        l
    }

    #[test]
    fn keeps_new_uploads_in_order() {
        let all = vec![listing("a", true), listing("b", false), listing("c", true)];
        let ids: Vec<_> = filter_new_uploads(all)
            .into_iter()
            .map(|l| l.record.id)
            .collect();
        assert_eq!(ids, ["a", "c"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let all = vec![listing("a", false), listing("b", true), listing("c", true)];
        let once = filter_new_uploads(all);
        let twice = filter_new_uploads(once.clone());
        assert_eq!(once, twice);
    }
}
