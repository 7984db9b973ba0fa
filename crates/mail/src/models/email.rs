//! Email model as served by the backend

use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend identifier for an email
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailId(pub i64);

impl EmailId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for EmailId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for EmailId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single email as returned by `GET /emails/{mailbox}` or `GET /emails/{id}`
///
/// The client never derives state from these fields beyond display; `read`
/// and `archived` only change through `PUT /emails/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    pub id: EmailId,
    /// Sender address
    pub sender: String,
    /// Recipient addresses in display form
    pub recipients: Vec<String>,
    pub subject: String,
    /// Plain text body
    pub body: String,
    /// Server-formatted timestamp, displayed verbatim
    pub timestamp: String,
    pub read: bool,
    pub archived: bool,
}

impl Email {
    /// Create a new email builder
    pub fn builder(id: i64) -> EmailBuilder {
        EmailBuilder::new(EmailId(id))
    }
}

/// Builder for creating Email instances
pub struct EmailBuilder {
    id: EmailId,
    sender: String,
    recipients: Vec<String>,
    subject: String,
    body: String,
    timestamp: String,
    read: bool,
    archived: bool,
}

impl EmailBuilder {
    fn new(id: EmailId) -> Self {
        Self {
            id,
            sender: String::new(),
            recipients: Vec::new(),
            subject: String::new(),
            body: String::new(),
            timestamp: String::new(),
            read: false,
            archived: false,
        }
    }

    pub fn sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = sender.into();
        self
    }

    pub fn recipients<I, S>(mut self, recipients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.recipients = recipients.into_iter().map(Into::into).collect();
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    pub fn read(mut self, read: bool) -> Self {
        self.read = read;
        self
    }

    pub fn archived(mut self, archived: bool) -> Self {
        self.archived = archived;
        self
    }

    pub fn build(self) -> Email {
        Email {
            id: self.id,
            sender: self.sender,
            recipients: self.recipients,
            subject: self.subject,
            body: self.body,
            timestamp: self.timestamp,
            read: self.read,
            archived: self.archived,
        }
    }
}
