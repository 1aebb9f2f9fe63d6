// src/tests/utils.rs
use crate::domain::listing::DetailedListing;
use crate::mailer::{Mailer, MailerError};
use crate::schedule::Clock;
use crate::scraper::{PageSource, Pipeline, ScraperError};
use crate::templates::TemplateParams;
use chrono::NaiveDateTime;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

pub const INDEX_URL: &str = "https://hyra.example.se/lediga";

pub fn at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .unwrap_or_else(|e| panic!("bad timestamp {s}: {e}"))
}

/// Serves fixture HTML by url and remembers the order of requests.
#[derive(Default)]
pub struct FixturePages {
    pages: HashMap<String, String>,
    pub requested: RefCell<Vec<String>>,
}

impl FixturePages {
    pub fn with(mut self, url: &str, html: impl Into<String>) -> Self {
        self.pages.insert(url.to_string(), html.into());
        self
    }
}

impl PageSource for FixturePages {
    fn fetch(&self, url: &str) -> Result<String, ScraperError> {
        self.requested.borrow_mut().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| ScraperError::Network(format!("HTTP 404 Not Found for {url}")))
    }
}

/// Returns queued results in order, then empty results forever.
#[derive(Default)]
pub struct ScriptedPipeline {
    runs: RefCell<VecDeque<Result<Vec<DetailedListing>, ScraperError>>>,
}

impl ScriptedPipeline {
    pub fn new(runs: Vec<Result<Vec<DetailedListing>, ScraperError>>) -> Self {
        Self {
            runs: RefCell::new(runs.into()),
        }
    }
}

impl Pipeline for ScriptedPipeline {
    fn run(&self) -> Result<Vec<DetailedListing>, ScraperError> {
        self.runs.borrow_mut().pop_front().unwrap_or_else(|| Ok(Vec::new()))
    }
}

pub type SentEmails = Rc<RefCell<Vec<(String, TemplateParams)>>>;

#[derive(Clone, Default)]
pub struct RecordingMailer {
    pub sent: SentEmails,
    pub fail: bool,
}

impl Mailer for RecordingMailer {
    fn send(&self, template_id: &str, params: &TemplateParams) -> Result<(), MailerError> {
        self.sent
            .borrow_mut()
            .push((template_id.to_string(), params.clone()));
        if self.fail {
            return Err(MailerError::ApiError("400 - The service ID is invalid".into()));
        }
        Ok(())
    }
}

/// Time only moves when the scheduler sleeps.
pub struct FakeClock {
    now: Cell<NaiveDateTime>,
}

impl FakeClock {
    pub fn at(s: &str) -> Self {
        Self {
            now: Cell::new(at(s)),
        }
    }
}

impl Clock for FakeClock {
    fn now(&self) -> NaiveDateTime {
        self.now.get()
    }

    fn sleep_until(&self, until: NaiveDateTime) {
        if until > self.now.get() {
            self.now.set(until);
        }
    }
}

pub fn new_upload(address: &str) -> DetailedListing {
    let mut l = DetailedListing::default();
    l.record.address = address.to_string();
    l.details.new_upload = true;
    l
}
