//! Webmail backend HTTP client
//!
//! Uses synchronous HTTP (ureq) to be executor-agnostic. Status codes are
//! not turned into errors by the agent: `POST /emails` answers 400 with a
//! JSON `{"error": ...}` body that has to reach the compose banner.

use anyhow::{Context, Result};
use log::{debug, warn};
use ureq::Agent;
use url::Url;

use super::wire::{FlagUpdate, SendResponse};
use super::{ApiError, MailApi, Method, paths};
use crate::config::BackendConfig;
use crate::models::{ComposeDraft, Email, EmailId, Mailbox};

/// Blocking client for the webmail backend
pub struct HttpMailClient {
    agent: Agent,
    base_url: Url,
}

impl HttpMailClient {
    /// Create a client for the backend at `base_url`
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base_url =
            Url::parse(base_url).with_context(|| format!("Invalid backend URL: {}", base_url))?;

        // Keep any path prefix when joining request paths onto it
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let agent: Agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .into();

        Ok(Self { agent, base_url })
    }

    /// Create a client from loaded configuration
    pub fn from_config(config: &BackendConfig) -> Result<Self> {
        Self::new(&config.base_url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL for a request path such as `/emails/inbox`
    pub fn url(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .with_context(|| format!("Failed to build URL for {}", path))
    }

    /// GET a JSON document, failing on non-success status
    fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path)?;

        let mut response = self
            .agent
            .get(url.as_str())
            .header("Accept", "application/json")
            .call()
            .with_context(|| format!("Failed to send GET {}", path))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                method: Method::Get,
                path: path.to_string(),
                status: status.as_u16(),
            }
            .into());
        }

        response
            .body_mut()
            .read_json()
            .with_context(|| format!("Failed to parse GET {} response", path))
    }
}

impl MailApi for HttpMailClient {
    fn list_mailbox(&self, mailbox: Mailbox) -> Result<Vec<Email>> {
        self.get_json(&paths::mailbox(mailbox))
    }

    fn get_email(&self, id: EmailId) -> Result<Email> {
        self.get_json(&paths::email(id))
    }

    fn send_email(&self, draft: &ComposeDraft) -> Result<SendResponse> {
        let url = self.url(paths::EMAILS)?;

        let mut response = self
            .agent
            .post(url.as_str())
            .send_json(draft)
            .context("Failed to send POST /emails")?;

        let status = response.status();
        debug!("POST /emails returned HTTP {}", status.as_u16());

        // Rejections arrive as 4xx with an error body
        response
            .body_mut()
            .read_json()
            .with_context(|| format!("Failed to parse POST /emails response (HTTP {})", status))
    }

    fn update_flags(&self, id: EmailId, update: FlagUpdate) -> Result<()> {
        let path = paths::email(id);
        let url = self.url(&path)?;

        let response = self
            .agent
            .put(url.as_str())
            .send_json(update)
            .with_context(|| format!("Failed to send PUT {}", path))?;

        let status = response.status();
        if !status.is_success() {
            warn!("PUT {} returned HTTP {}", path, status.as_u16());
        }
        Ok(())
    }
}
