// src/mailer.rs

use crate::templates::TemplateParams;
use reqwest::blocking::Client;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, Error)]
pub enum MailerError {
    #[error("Request failed: {0}")]
    RequestFailed(String),
    #[error("API error: {0}")]
    ApiError(String),
}

/// Delivers a parameter mapping to a remote, pre-defined template.
pub trait Mailer {
    fn send(&self, template_id: &str, params: &TemplateParams) -> Result<(), MailerError>;
}

#[derive(Debug, Clone)]
pub struct EmailJsCredentials {
    pub service_id: String,
    pub public_key: String,
    pub private_key: String,
}

pub struct EmailJsMailer {
    credentials: EmailJsCredentials,
    client: Client,
}

#[derive(Serialize)]
struct EmailJsPayload<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken")]
    access_token: &'a str,
    template_params: &'a TemplateParams,
}

impl EmailJsMailer {
    pub fn new(credentials: EmailJsCredentials, timeout: Duration) -> Result<Self, MailerError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| MailerError::RequestFailed(e.to_string()))?;

        Ok(Self {
            credentials,
            client,
        })
    }
}

impl Mailer for EmailJsMailer {
    fn send(&self, template_id: &str, params: &TemplateParams) -> Result<(), MailerError> {
        let payload = EmailJsPayload {
            service_id: &self.credentials.service_id,
            template_id,
            user_id: &self.credentials.public_key,
            access_token: &self.credentials.private_key,
            template_params: params,
        };

        let resp = self
            .client
            .post(EMAILJS_SEND_URL)
            .json(&payload)
            .send()
            .map_err(|e| MailerError::RequestFailed(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let error_body = resp.text().unwrap_or_else(|_| "(no body)".to_string());
            return Err(MailerError::ApiError(format!("{status} - {error_body}")));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn payload_matches_emailjs_shape() {
        let mut params = TemplateParams::new();
        params.insert("title".into(), Value::String("hej".into()));

        let payload = EmailJsPayload {
            service_id: "svc",
            template_id: "tpl",
            user_id: "pub",
            access_token: "priv",
            template_params: &params,
        };

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "service_id": "svc",
                "template_id": "tpl",
                "user_id": "pub",
                "accessToken": "priv",
                "template_params": { "title": "hej" }
            })
        );
    }
}
