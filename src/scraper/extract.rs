// scraper/extract.rs
use crate::scraper::models::ListingRecord;
use crate::scraper::selectors::{ListingSelectors, AREA_MARKUP_TAG, AREA_UNIT};
use scraper::{ElementRef, Html, Node, Selector};
use url::Url;

/// Parse every listing column on the index page.
/// Sub-elements that are missing come back as empty strings.
pub fn extract_listings(html: &str, base: &Url, sel: &ListingSelectors) -> Vec<ListingRecord> {
    let document = Html::parse_document(html);

    document
        .select(&sel.container)
        .map(|column| extract_listing(column, base, sel))
        .collect()
}

fn extract_listing(column: ElementRef, base: &Url, sel: &ListingSelectors) -> ListingRecord {
    let move_in_date = first_text(column, &sel.move_in_date);

    let area_text = column
        .select(&sel.area)
        .next()
        .map(area_head_text)
        .unwrap_or_default();
    let (rooms, area) = split_rooms_area(&area_text);

    let link = column.select(&sel.address_link).next();
    let address = link.map(element_text).unwrap_or_default();
    let raw_href = link.and_then(|a| a.value().attr("href")).unwrap_or("");

    ListingRecord {
        id: id_from_href(raw_href).to_string(),
        address,
        href: resolve_href(base, raw_href),
        rooms,
        area,
        move_in_date,
    }
}

pub(crate) fn element_text(el: ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

pub(crate) fn first_text(scope: ElementRef, selector: &Selector) -> String {
    scope
        .select(selector)
        .next()
        .map(element_text)
        .unwrap_or_default()
}

fn is_markup_tag(node: &Node) -> bool {
    node.as_element()
        .is_some_and(|el| el.name() == AREA_MARKUP_TAG)
}

/// Decoded text before the trailing unit markup ("2 rum, 54 <span>m²</span>").
fn area_head_text(area: ElementRef) -> String {
    area.children()
        .take_while(|n| !is_markup_tag(n.value()))
        .filter_map(|n| n.value().as_text())
        .map(|t| &**t)
        .collect()
}

/// "2 rum, 54" -> ("2 rum", "54 m²")
pub fn split_rooms_area(area_text: &str) -> (String, String) {
    let head = area_text.trim();

    if head.is_empty() {
        return (String::new(), String::new());
    }

    match head.split_once(',') {
        Some((rooms, area)) => {
            let area = area.trim();
            let area = if area.is_empty() || area.ends_with(AREA_UNIT) {
                area.to_string()
            } else {
                format!("{area} {AREA_UNIT}")
            };
            (rooms.trim().to_string(), area)
        }
        None => (head.to_string(), String::new()),
    }
}

/// Last path segment of the link, "" when there is none.
pub fn id_from_href(href: &str) -> &str {
    href.rsplit_once('/').map(|(_, last)| last).unwrap_or("")
}

fn resolve_href(base: &Url, href: &str) -> String {
    if href.is_empty() {
        return String::new();
    }
    base.join(href)
        .map(String::from)
        .unwrap_or_else(|_| href.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://hyra.example.se/lediga").unwrap()
    }

    const INDEX: &str = r#"
        <html><body>
          <div class="col-sm-4 col-md-4 col-lg-4">
            <p class="move-in-date">2024-03-01</p>
            <p class="area_in_cm">2 rum, 54 <span>m²</span></p>
            <div class="address_link"><a href="/lagenhet/1234">Storgatan 1</a></div>
          </div>
          <div class="col-sm-4 col-md-4 col-lg-4">
            <p class="area_in_cm">1 rum</p>
          </div>
          <div class="col-sm-4 col-md-4 col-lg-4"></div>
        </body></html>
    "#;

    #[test]
    fn extracts_full_listing() {
        let sel = ListingSelectors::new().unwrap();
        let listings = extract_listings(INDEX, &base(), &sel);

        assert_eq!(listings.len(), 3);
        let first = &listings[0];
        assert_eq!(first.id, "1234");
        assert_eq!(first.address, "Storgatan 1");
        assert_eq!(first.href, "https://hyra.example.se/lagenhet/1234");
        assert_eq!(first.rooms, "2 rum");
        assert_eq!(first.area, "54 m²");
        assert_eq!(first.move_in_date, "2024-03-01");
    }

    #[test]
    fn missing_sub_elements_become_empty_strings() {
        let sel = ListingSelectors::new().unwrap();
        let listings = extract_listings(INDEX, &base(), &sel);

        assert_eq!(listings[1].rooms, "1 rum");
        assert_eq!(listings[1].area, "");
        assert_eq!(listings[1].href, "");
        assert_eq!(listings[2], ListingRecord::default());
    }

    #[test]
    fn area_entities_are_decoded_not_reescaped() {
        let html = r#"
          <div class="col-sm-4 col-md-4 col-lg-4">
            <p class="area_in_cm">2 rum &amp; kök, 54&nbsp;<span>m²</span></p>
          </div>
        "#;
        let sel = ListingSelectors::new().unwrap();
        let listings = extract_listings(html, &base(), &sel);

        assert_eq!(listings[0].rooms, "2 rum & kök");
        assert_eq!(listings[0].area, "54 m²");
    }

    #[test]
    fn no_containers_means_no_listings() {
        let sel = ListingSelectors::new().unwrap();
        assert!(extract_listings("<html></html>", &base(), &sel).is_empty());
    }

    #[test]
    fn id_is_last_segment() {
        assert_eq!(id_from_href("https://a.se/x/99"), "99");
        assert_eq!(id_from_href("/x/"), "");
        assert_eq!(id_from_href("plain"), "");
        assert_eq!(id_from_href(""), "");
    }

    #[test]
    fn area_without_markup_keeps_unit_once() {
        assert_eq!(
            split_rooms_area("3 rum, 71 m²"),
            ("3 rum".to_string(), "71 m²".to_string())
        );
        assert_eq!(split_rooms_area(""), (String::new(), String::new()));
    }
}
