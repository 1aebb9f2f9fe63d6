use crate::domain::listing::DetailedListing;
use crate::templates::components::listing_block;
use chrono::{NaiveDateTime, NaiveTime};
use maud::html;
use serde_json::{Map, Value};

/// Flat key/value mapping interpolated by the remote email template.
pub type TemplateParams = Map<String, Value>;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// `obj0..objN` HTML blocks in listing order, plus a `title` with the count.
pub fn found_params(listings: &[DetailedListing], site: &str) -> TemplateParams {
    let mut params = TemplateParams::new();

    for (i, listing) in listings.iter().enumerate() {
        params.insert(
            format!("obj{i}"),
            Value::String(listing_block(listing).into_string()),
        );
    }

    let count = listings.len();
    let apartment = if count == 1 {
        "ny lägenhet"
    } else {
        "nya lägenheter"
    };
    params.insert(
        "title".into(),
        Value::String(format!("{count} {apartment} hos {site}!")),
    );
    params.insert("count".into(), Value::from(count));

    params
}

pub fn nothing_params(attempts: u32, site: &str) -> TemplateParams {
    let mut params = TemplateParams::new();
    params.insert(
        "title".into(),
        Value::String(format!("{site} scraper - Inget nytt")),
    );
    params.insert(
        "obj0".into(),
        Value::String(format!(
            "{site} scraper har kört {attempts} antal gånger men hittade inga nya lägenheter."
        )),
    );
    params.insert("attempts".into(), Value::from(attempts));
    params
}

/// Sent once at process start.
pub fn startup_params(
    started_at: NaiveDateTime,
    run_at: NaiveTime,
    cutoff: NaiveTime,
    site: &str,
) -> TemplateParams {
    let body = html! {
        div { "Sedan kl " (started_at.format(TIMESTAMP_FORMAT)) " har web scraper varit igång." }
        div {
            "Den kommer kolla efter nya lägenheter på " (site)
            " mellan klockan " (run_at.format("%H:%M")) "-" (cutoff.format("%H:%M"))
            " varje dag. Happy hunting!"
        }
    };

    let mut params = TemplateParams::new();
    params.insert(
        "title".into(),
        Value::String(format!("{site} web scraper är igång!")),
    );
    params.insert("obj0".into(), Value::String(body.into_string()));
    params
}
