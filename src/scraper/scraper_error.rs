use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Invalid selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },
}
