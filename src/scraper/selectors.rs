// scraper/selectors.rs
use crate::scraper::ScraperError;
use regex::Regex;
use scraper::Selector;

/// Index-page layout: one container per listing.
pub const LISTING_CONTAINER: &str = ".col-sm-4.col-md-4.col-lg-4";
pub const MOVE_IN_DATE: &str = ".move-in-date";
pub const AREA: &str = ".area_in_cm";
pub const ADDRESS_LINK: &str = ".address_link a";

/// Element that trails the area text ("54 <span>m²</span>").
pub const AREA_MARKUP_TAG: &str = "span";
pub const AREA_UNIT: &str = "m²";

pub const SHORTHAND_DETAIL: &str = ".AdShorthandDetails_homeq-shorthand-detail__R_giv";
pub const TRANSPARENCY: &str = ".AdTransparency_homeq-ad-transparency-container__4J_Ar";
pub const STATS_LIST: &str = ".AdStats_homeq-ad-stats-list__gOlTo";
pub const STAT: &str = ".AdStats_homeq-ad-stat__6RvQx";
pub const AMENITY_SECTION: &str = ".ObjectAd_homeq-ad-amenities-container__9auiL";
pub const AMENITY: &str = ".Amenity_homeq-ad-amenity-container__pa_Z1";
pub const AMENITY_EXISTS: &str = ".Amenity_homeq-ad-amenity-exists__H_1Us";

pub const APPLY_TYPE_PREFIX: &str = r"^Sortering:\s+";
pub const DEFAULT_RECENT_TOKEN: &str = "timmar";

/// A value looked up by its label, or by a fixed position when no entry
/// carries that label.
#[derive(Debug, Clone)]
pub struct LabeledSlot {
    pub label: &'static str,
    pub position: usize,
}

pub const RENT: LabeledSlot = LabeledSlot { label: "Hyra", position: 0 };
pub const FLOOR: LabeledSlot = LabeledSlot { label: "Våning", position: 3 };
pub const ELEVATOR: LabeledSlot = LabeledSlot { label: "Hiss", position: 0 };
pub const PATIO: LabeledSlot = LabeledSlot { label: "Uteplats", position: 1 };
pub const BALCONY: LabeledSlot = LabeledSlot { label: "Balkong", position: 2 };

fn sel(s: &str) -> Result<Selector, ScraperError> {
    Selector::parse(s).map_err(|e| ScraperError::Selector {
        selector: s.to_string(),
        reason: e.to_string(),
    })
}

fn pattern(s: &str) -> Result<Regex, ScraperError> {
    Regex::new(s).map_err(|e| ScraperError::Selector {
        selector: s.to_string(),
        reason: e.to_string(),
    })
}

#[derive(Debug, Clone)]
pub struct ListingSelectors {
    pub container: Selector,
    pub move_in_date: Selector,
    pub area: Selector,
    pub address_link: Selector,
}

impl ListingSelectors {
    pub fn new() -> Result<Self, ScraperError> {
        Ok(Self {
            container: sel(LISTING_CONTAINER)?,
            move_in_date: sel(MOVE_IN_DATE)?,
            area: sel(AREA)?,
            address_link: sel(ADDRESS_LINK)?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct DetailSelectors {
    pub paragraph: Selector,
    pub shorthand: Selector,
    pub transparency: Selector,
    pub stats_list: Selector,
    pub stat: Selector,
    pub amenity_section: Selector,
    pub amenity: Selector,
    pub amenity_exists: Selector,

    pub apply_type_prefix: Regex,
    /// Whole-word match of the "uploaded N hours ago" unit.
    pub recent_upload: Regex,
}

impl DetailSelectors {
    pub fn new(recent_token: &str) -> Result<Self, ScraperError> {
        Ok(Self {
            paragraph: sel("p")?,
            shorthand: sel(SHORTHAND_DETAIL)?,
            transparency: sel(TRANSPARENCY)?,
            stats_list: sel(STATS_LIST)?,
            stat: sel(STAT)?,
            amenity_section: sel(AMENITY_SECTION)?,
            amenity: sel(AMENITY)?,
            amenity_exists: sel(AMENITY_EXISTS)?,
            apply_type_prefix: pattern(APPLY_TYPE_PREFIX)?,
            recent_upload: pattern(&format!(r"\b{}\b", regex::escape(recent_token)))?,
        })
    }
}
