use crate::domain::listing::DetailedListing;
use maud::{html, Markup};

fn yes_no(value: bool) -> &'static str {
    if value {
        "Ja"
    } else {
        "Nej"
    }
}

/// One apartment as an HTML fragment for the email body.
pub fn listing_block(listing: &DetailedListing) -> Markup {
    let record = &listing.record;
    let details = &listing.details;

    html! {
        h3 { (record.address) }
        div { b { "Ansökningstyp" } " " (details.apply_type) }
        div { b { "Hyra" } " " (details.rent) }
        div { b { "Rum" } " " (record.rooms) }
        div { b { "Area" } " " (record.area) }
        div { b { "Balkong" } " " (yes_no(details.balcony)) }
        div { b { "Uteplats" } " " (yes_no(details.patio)) }
        div { b { "Våning" } " " (details.floor) }
        div { b { "Hiss" } " " (yes_no(details.elevator)) }
        div { a href=(record.href) target="_blank" { "Länk" } }
        div { "_____________________________" }
    }
}
