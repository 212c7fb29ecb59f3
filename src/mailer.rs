//! External transactional-email client (EmailJS REST API).
//!
//! The form orchestrator only depends on the [`EmailClient`] trait, so tests
//! substitute a recording client and integration tests point the real client
//! at a mock server.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Serialize;

/// Production EmailJS send endpoint.
pub const EMAILJS_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Named values handed to the email template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
    /// Fixed recipient address, from configuration.
    pub to_email: String,
}

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

/// Opaque email-sending capability.
#[async_trait]
pub trait EmailClient: Send + Sync {
    /// Deliver one message through the service's template, resolving on
    /// success and failing with the service's error otherwise.
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &TemplateParams,
    ) -> Result<()>;
}

/// EmailJS-backed [`EmailClient`].
pub struct EmailJsClient {
    http: reqwest::Client,
    api_url: String,
    public_key: String,
}

impl EmailJsClient {
    /// Initialize the client with the account's public key.
    pub fn new(public_key: impl Into<String>) -> Self {
        Self::with_api_url(public_key, EMAILJS_API_URL)
    }

    /// Same as [`EmailJsClient::new`] but against a custom endpoint.
    /// Integration tests use this to target a mock server.
    pub fn with_api_url(public_key: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: api_url.into(),
            public_key: public_key.into(),
        }
    }
}

#[async_trait]
impl EmailClient for EmailJsClient {
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &TemplateParams,
    ) -> Result<()> {
        let request = SendEmailRequest {
            service_id,
            template_id,
            user_id: &self.public_key,
            template_params: params,
        };

        let response = self
            .http
            .post(&self.api_url)
            .json(&request)
            .send()
            .await
            .context("Failed to send request to EmailJS API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("EmailJS API error ({}): {}", status, body);
        }

        Ok(())
    }
}
