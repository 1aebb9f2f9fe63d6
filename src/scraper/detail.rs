// scraper/detail.rs
use crate::scraper::extract::{element_text, first_text};
use crate::scraper::models::DetailEnrichment;
use crate::scraper::selectors::{
    DetailSelectors, LabeledSlot, BALCONY, ELEVATOR, FLOOR, PATIO, RENT,
};
use scraper::{ElementRef, Html, Selector};

/// Read the supplemental fields from a listing's detail page.
///
/// Every field falls back to "" / false when its section is missing.
/// Stats and amenities are matched by their label first; when no entry
/// carries the label, the entry at the slot's fixed position is used.
pub fn enrich(html: &str, sel: &DetailSelectors) -> DetailEnrichment {
    let document = Html::parse_document(html);
    let root = document.root_element();

    let apply_type = section_paragraph(root, &sel.shorthand, &sel.paragraph);
    let apply_type = sel.apply_type_prefix.replace(&apply_type, "").into_owned();

    let upload_text = section_paragraph(root, &sel.transparency, &sel.paragraph);

    let stats = entries(root, &sel.stats_list, &sel.stat);
    let amenities = entries(root, &sel.amenity_section, &sel.amenity);

    DetailEnrichment {
        apply_type,
        new_upload: sel.recent_upload.is_match(&upload_text),
        rent: stat_value(&stats, &RENT, &sel.paragraph),
        floor: stat_value(&stats, &FLOOR, &sel.paragraph),
        elevator: has_amenity(&amenities, &ELEVATOR, sel),
        patio: has_amenity(&amenities, &PATIO, sel),
        balcony: has_amenity(&amenities, &BALCONY, sel),
    }
}

fn section_paragraph(root: ElementRef, section: &Selector, paragraph: &Selector) -> String {
    root.select(section)
        .next()
        .map(|s| first_text(s, paragraph))
        .unwrap_or_default()
}

fn entries<'a>(root: ElementRef<'a>, container: &Selector, entry: &Selector) -> Vec<ElementRef<'a>> {
    root.select(container)
        .next()
        .map(|c| c.select(entry).collect())
        .unwrap_or_default()
}

fn label_matches(text: &str, label: &str) -> bool {
    text.trim().trim_end_matches(':').to_lowercase() == label.to_lowercase()
}

fn find_slot<'a, 'b>(
    entries: &'b [ElementRef<'a>],
    slot: &LabeledSlot,
    label_of: impl Fn(ElementRef<'a>) -> String,
) -> Option<ElementRef<'a>> {
    entries
        .iter()
        .copied()
        .find(|e| label_matches(&label_of(*e), slot.label))
        .or_else(|| entries.get(slot.position).copied())
}

/// Second paragraph of the stat entry ("Hyra" / "8 450 kr").
fn stat_value(stats: &[ElementRef], slot: &LabeledSlot, paragraph: &Selector) -> String {
    find_slot(stats, slot, |e| first_text(e, paragraph))
        .and_then(|e| e.select(paragraph).nth(1))
        .map(element_text)
        .unwrap_or_default()
}

fn has_amenity(amenities: &[ElementRef], slot: &LabeledSlot, sel: &DetailSelectors) -> bool {
    let label_of = |e: ElementRef| match e.select(&sel.paragraph).next() {
        Some(p) => element_text(p),
        None => element_text(e),
    };

    find_slot(amenities, slot, label_of)
        .map(|e| e.select(&sel.amenity_exists).next().is_some())
        .unwrap_or(false)
}
