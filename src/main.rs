use crate::config::Config;
use crate::mailer::EmailJsMailer;
use crate::notifier::Notifier;
use crate::schedule::{Scheduler, SystemClock};
use crate::scraper::{HttpPageSource, ListingScraper};
use anyhow::Result;

mod config;
mod domain;
mod mailer;
mod notifier;
mod schedule;
mod scraper;
mod templates;

#[cfg(test)]
mod tests;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cfg = Config::from_env()?;
    tracing::info!(url = %cfg.url, "Starting listing watcher");

    let source = HttpPageSource::new(cfg.request_timeout)?;
    let pipeline = ListingScraper::new(source, cfg.url.clone(), &cfg.recent_upload_token)?;

    let mailer = EmailJsMailer::new(cfg.credentials.clone(), cfg.request_timeout)?;
    let notifier = Notifier::new(mailer, cfg.templates.clone(), cfg.site_name.clone());

    let mut scheduler = Scheduler::new(pipeline, notifier, SystemClock, cfg.schedule.clone());
    if cfg.send_startup_email {
        scheduler.announce_start();
    }

    scheduler.run_forever()
}
