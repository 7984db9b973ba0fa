//! Webmail backend integration
//!
//! This module provides:
//! - The `MailApi` trait covering the four backend calls
//! - A blocking HTTP client for a real backend
//! - An in-process backend that records every request

mod client;
mod error;
mod memory;
mod request;

pub use client::HttpMailClient;
pub use error::ApiError;
pub use memory::InMemoryMailApi;
pub use request::{Method, Request};

use anyhow::Result;

use crate::models::{ComposeDraft, Email, EmailId, Mailbox};
use wire::{FlagUpdate, SendResponse};

/// The backend HTTP contract
///
/// Implementations are blocking so callers can choose their own executor.
/// Transport failures surface as `Err`; business errors from the send
/// endpoint come back inside `SendResponse::error`.
pub trait MailApi: Send + Sync {
    /// `GET /emails/{mailbox}`
    fn list_mailbox(&self, mailbox: Mailbox) -> Result<Vec<Email>>;

    /// `GET /emails/{id}`
    fn get_email(&self, id: EmailId) -> Result<Email>;

    /// `POST /emails`
    fn send_email(&self, draft: &ComposeDraft) -> Result<SendResponse>;

    /// `PUT /emails/{id}`; the response body is ignored
    fn update_flags(&self, id: EmailId, update: FlagUpdate) -> Result<()>;
}

/// Request paths, relative to the backend base URL
pub mod paths {
    use crate::models::{EmailId, Mailbox};

    pub const EMAILS: &str = "/emails";

    pub fn mailbox(mailbox: Mailbox) -> String {
        format!("{}/{}", EMAILS, mailbox.as_str())
    }

    pub fn email(id: EmailId) -> String {
        format!("{}/{}", EMAILS, id)
    }
}

/// Request and response bodies
pub mod wire {
    use serde::{Deserialize, Serialize};

    /// Body of `PUT /emails/{id}`; exactly one flag per request
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum FlagUpdate {
        Archived(bool),
        Read(bool),
    }

    /// Response of `POST /emails`
    ///
    /// The backend answers `{"message": ...}` on success and
    /// `{"error": ...}` when it rejects the email.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct SendResponse {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub message: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub error: Option<String>,
    }

    impl SendResponse {
        pub fn sent(message: impl Into<String>) -> Self {
            Self {
                message: Some(message.into()),
                error: None,
            }
        }

        pub fn rejected(error: impl Into<String>) -> Self {
            Self {
                message: None,
                error: Some(error.into()),
            }
        }
    }
}
