// src/notifier.rs

use crate::domain::listing::DetailedListing;
use crate::mailer::Mailer;
use crate::schedule::ScheduleConfig;
use crate::templates::{found_params, nothing_params, startup_params, TemplateParams};
use chrono::NaiveDateTime;
use tracing::{debug, error, info};

/// Which remote template each kind of email goes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateStrategy {
    /// Every email uses one template that renders `title` + `objN`.
    Generic { template_id: String },
    /// Found (and startup) emails use `found`; empty results use `nothing`.
    Split { found: String, nothing: String },
}

impl TemplateStrategy {
    pub fn found(&self) -> &str {
        match self {
            TemplateStrategy::Generic { template_id } => template_id,
            TemplateStrategy::Split { found, .. } => found,
        }
    }

    pub fn nothing(&self) -> &str {
        match self {
            TemplateStrategy::Generic { template_id } => template_id,
            TemplateStrategy::Split { nothing, .. } => nothing,
        }
    }

    pub fn startup(&self) -> &str {
        self.found()
    }
}

/// Formats results into template params and hands them to the mailer.
/// Delivery failures are logged and dropped; nothing is retried.
pub struct Notifier<M> {
    mailer: M,
    templates: TemplateStrategy,
    site_name: String,
}

impl<M: Mailer> Notifier<M> {
    pub fn new(mailer: M, templates: TemplateStrategy, site_name: impl Into<String>) -> Self {
        Self {
            mailer,
            templates,
            site_name: site_name.into(),
        }
    }

    pub fn send_found(&self, listings: &[DetailedListing]) {
        info!("{} new listings found, sending the email!", listings.len());
        let params = found_params(listings, &self.site_name);
        self.dispatch(self.templates.found(), &params);
    }

    pub fn send_nothing(&self, attempts: u32) {
        info!("Nothing new today after {attempts} attempts, sending confirmation email.");
        let params = nothing_params(attempts, &self.site_name);
        self.dispatch(self.templates.nothing(), &params);
    }

    pub fn send_startup(&self, started_at: NaiveDateTime, schedule: &ScheduleConfig) {
        let params = startup_params(
            started_at,
            schedule.daily_run_at,
            schedule.cutoff,
            &self.site_name,
        );
        self.dispatch(self.templates.startup(), &params);
    }

    fn dispatch(&self, template_id: &str, params: &TemplateParams) {
        debug!(template_id, params = ?params, "Email value");

        match self.mailer.send(template_id, params) {
            Ok(()) => info!(template_id, "Email sent"),
            Err(e) => error!(template_id, "Failed to send email: {e}"),
        }
    }
}
