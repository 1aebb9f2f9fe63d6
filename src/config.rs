use crate::mailer::EmailJsCredentials;
use crate::notifier::TemplateStrategy;
use crate::schedule::ScheduleConfig;
use crate::scraper::DEFAULT_RECENT_TOKEN;
use anyhow::{bail, Context, Result};
use chrono::NaiveTime;
use dotenvy::dotenv;
use std::env;
use std::time::Duration;
use url::Url;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub url: Url,
    pub credentials: EmailJsCredentials,
    pub templates: TemplateStrategy,
    pub site_name: String,
    pub schedule: ScheduleConfig,
    pub send_startup_email: bool,
    pub request_timeout: Duration,
    pub recent_upload_token: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| -> Result<String> {
            get(key)
                .filter(|v| !v.trim().is_empty())
                .with_context(|| format!("{key} must be set"))
        };

        let url = required("URL")?;
        let url = Url::parse(&url).with_context(|| format!("URL is not a valid url: {url}"))?;

        let credentials = EmailJsCredentials {
            service_id: required("SERVICE_ID")?,
            public_key: required("PUBLIC_KEY")?,
            private_key: required("PRIVATE_KEY")?,
        };

        let templates = match (get("FOUND_TEMPLATE_ID"), get("NOTHING_TEMPLATE_ID")) {
            (Some(found), Some(nothing)) => TemplateStrategy::Split { found, nothing },
            _ => {
                let Some(template_id) = get("EMAIL_TEMPLATE_ID").or_else(|| get("EMAIL_TEMPALTE_ID"))
                else {
                    bail!("EMAIL_TEMPLATE_ID, or FOUND_TEMPLATE_ID and NOTHING_TEMPLATE_ID, must be set");
                };
                TemplateStrategy::Generic { template_id }
            }
        };

        let defaults = ScheduleConfig::default();
        let schedule = ScheduleConfig {
            daily_run_at: parse_or(&get, "DAILY_RUN_AT", defaults.daily_run_at, parse_time)?,
            cutoff: parse_or(&get, "RETRY_CUTOFF", defaults.cutoff, parse_time)?,
            retry_interval: parse_or(&get, "RETRY_INTERVAL_SECS", defaults.retry_interval, parse_secs)?,
            startup_delay: get("STARTUP_DELAY_SECS")
                .map(|v| parse_secs(&v))
                .transpose()
                .context("STARTUP_DELAY_SECS must be a number of seconds")?,
        };

        Ok(Self {
            url,
            credentials,
            templates,
            site_name: get("SITE_NAME").unwrap_or_else(|| "Contentus".to_string()),
            schedule,
            send_startup_email: parse_or(&get, "SEND_STARTUP_EMAIL", true, |v| {
                v.parse::<bool>().map_err(anyhow::Error::from)
            })?,
            request_timeout: Duration::from_secs(parse_or(&get, "REQUEST_TIMEOUT_SECS", 60, |v| {
                v.parse::<u64>().map_err(anyhow::Error::from)
            })?),
            recent_upload_token: get("RECENT_UPLOAD_TOKEN")
                .unwrap_or_else(|| DEFAULT_RECENT_TOKEN.to_string()),
        })
    }
}

fn parse_or<T>(
    get: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
    parse: impl Fn(&str) -> Result<T>,
) -> Result<T> {
    match get(key) {
        Some(raw) => parse(raw.trim()).with_context(|| format!("{key} has an invalid value: {raw}")),
        None => Ok(default),
    }
}

/// "HH:MM" or "HH:MM:SS"
fn parse_time(raw: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .map_err(anyhow::Error::from)
}

fn parse_secs(raw: &str) -> Result<chrono::Duration> {
    let secs: i64 = raw.trim().parse()?;
    if secs < 0 {
        bail!("must not be negative");
    }
    Ok(chrono::Duration::seconds(secs))
}
