//! Compose form content

use serde::{Deserialize, Serialize};

use super::Email;

/// Prefix marking a reply subject
const REPLY_PREFIX: &str = "Re:";

/// The three compose fields, serialized as the `POST /emails` body
///
/// `recipients` is the raw comma-separated text the user typed; the backend
/// splits and validates it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposeDraft {
    pub recipients: String,
    pub subject: String,
    pub body: String,
}

impl ComposeDraft {
    /// A blank draft
    pub fn empty() -> Self {
        Self::default()
    }

    /// Draft pre-filled as a reply to `email`
    pub fn reply_to(email: &Email) -> Self {
        Self {
            recipients: email.sender.clone(),
            subject: reply_subject(&email.subject),
            body: quote_body(email),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.recipients.is_empty() && self.subject.is_empty() && self.body.is_empty()
    }
}

/// `"Re: {subject}"`, unless the subject is already a reply
pub fn reply_subject(subject: &str) -> String {
    if subject.starts_with(REPLY_PREFIX) {
        subject.to_string()
    } else {
        format!("{} {}", REPLY_PREFIX, subject)
    }
}

/// Blank line, attribution line, then the original body
fn quote_body(email: &Email) -> String {
    format!(
        "\n\nOn {}, {} wrote:\n{}",
        email.timestamp, email.sender, email.body
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn original(subject: &str) -> Email {
        Email::builder(1)
            .sender("alice@example.com")
            .recipients(["bob@example.com"])
            .subject(subject)
            .body("See you there.")
            .timestamp("Mar 01 2024, 09:30 AM")
            .build()
    }

    #[test]
    fn test_reply_adds_prefix() {
        let draft = ComposeDraft::reply_to(&original("Hello"));
        assert_eq!(draft.subject, "Re: Hello");
    }

    #[test]
    fn test_reply_keeps_existing_prefix() {
        let draft = ComposeDraft::reply_to(&original("Re: Hello"));
        assert_eq!(draft.subject, "Re: Hello");
    }

    #[test]
    fn test_reply_prefix_is_case_sensitive() {
        assert_eq!(reply_subject("RE: Hello"), "Re: RE: Hello");
    }

    #[test]
    fn test_reply_recipient_and_quote() {
        let draft = ComposeDraft::reply_to(&original("Hello"));
        assert_eq!(draft.recipients, "alice@example.com");
        assert_eq!(
            draft.body,
            "\n\nOn Mar 01 2024, 09:30 AM, alice@example.com wrote:\nSee you there."
        );
    }

    #[test]
    fn test_empty_draft() {
        assert!(ComposeDraft::empty().is_empty());
        assert!(!ComposeDraft::reply_to(&original("Hello")).is_empty());
    }

    #[test]
    fn test_serializes_as_post_body() {
        let draft = ComposeDraft {
            recipients: "a@example.com, b@example.com".to_string(),
            subject: "Hi".to_string(),
            body: "Body".to_string(),
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "recipients": "a@example.com, b@example.com",
                "subject": "Hi",
                "body": "Body"
            })
        );
    }
}
