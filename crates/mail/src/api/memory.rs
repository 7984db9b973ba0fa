//! In-memory backend implementation
//!
//! Mirrors the server's mailbox rules for a single signed-in user and keeps
//! a log of every request it receives. Used by tests and offline demos of
//! the controller.

use anyhow::Result;
use chrono::Local;
use log::{debug, warn};
use std::collections::HashSet;
use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

use super::wire::{FlagUpdate, SendResponse};
use super::{ApiError, MailApi, Method, Request, paths};
use crate::models::{ComposeDraft, Email, EmailId, Mailbox};

/// Timestamp format used by the backend's serializer
const TIMESTAMP_FORMAT: &str = "%b %d %Y, %I:%M %p";

/// In-memory implementation of MailApi
///
/// Emails are returned in insertion order. Inbox holds unarchived mail the
/// user received, Archive holds archived mail the user received, and Sent
/// holds mail the user sent.
pub struct InMemoryMailApi {
    user: String,
    users: RwLock<HashSet<String>>,
    emails: RwLock<Vec<Email>>,
    requests: RwLock<Vec<Request>>,
    offline: AtomicBool,
}

impl InMemoryMailApi {
    /// Create an empty backend signed in as `user`
    pub fn new(user: impl Into<String>) -> Self {
        let user = user.into();
        let mut users = HashSet::new();
        users.insert(user.clone());

        Self {
            user,
            users: RwLock::new(users),
            emails: RwLock::new(Vec::new()),
            requests: RwLock::new(Vec::new()),
            offline: AtomicBool::new(false),
        }
    }

    /// The signed-in user's address
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Register another address that mail can be sent to
    pub fn add_user(&self, email: impl Into<String>) {
        self.users.write().unwrap().insert(email.into());
    }

    /// Store an email, replacing any with the same id
    pub fn insert(&self, email: Email) {
        let mut emails = self.emails.write().unwrap();
        match emails.iter_mut().find(|e| e.id == email.id) {
            Some(existing) => *existing = email,
            None => emails.push(email),
        }
    }

    /// Current server-side state of an email
    pub fn email(&self, id: EmailId) -> Option<Email> {
        self.emails.read().unwrap().iter().find(|e| e.id == id).cloned()
    }

    /// All stored emails in insertion order
    pub fn emails(&self) -> Vec<Email> {
        self.emails.read().unwrap().clone()
    }

    /// Every request received so far, oldest first
    pub fn requests(&self) -> Vec<Request> {
        self.requests.read().unwrap().clone()
    }

    /// Requests matching a method and path
    pub fn requests_to(&self, method: Method, path: &str) -> Vec<Request> {
        self.requests
            .read()
            .unwrap()
            .iter()
            .filter(|r| r.is(method, path))
            .cloned()
            .collect()
    }

    pub fn clear_requests(&self) {
        self.requests.write().unwrap().clear();
    }

    /// While offline every call is recorded and then fails as unreachable
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Log the request, then fail it if the backend is offline
    fn receive(&self, request: Request) -> Result<()> {
        debug!("In-memory backend received {}", request);
        let offline = self.offline.load(Ordering::SeqCst);
        let (method, path) = (request.method, request.path.clone());
        self.requests.write().unwrap().push(request);

        if offline {
            return Err(ApiError::Offline { method, path }.into());
        }
        Ok(())
    }

    fn in_mailbox(&self, email: &Email, mailbox: Mailbox) -> bool {
        let received = email.recipients.iter().any(|r| r == &self.user);
        match mailbox {
            Mailbox::Inbox => received && !email.archived,
            Mailbox::Sent => email.sender == self.user,
            Mailbox::Archive => received && email.archived,
        }
    }

    fn next_id(&self) -> EmailId {
        let emails = self.emails.read().unwrap();
        EmailId(emails.iter().map(|e| e.id.0).max().unwrap_or(0) + 1)
    }
}

impl MailApi for InMemoryMailApi {
    fn list_mailbox(&self, mailbox: Mailbox) -> Result<Vec<Email>> {
        self.receive(Request::get(paths::mailbox(mailbox)))?;

        let emails = self.emails.read().unwrap();
        Ok(emails
            .iter()
            .filter(|e| self.in_mailbox(e, mailbox))
            .cloned()
            .collect())
    }

    fn get_email(&self, id: EmailId) -> Result<Email> {
        let path = paths::email(id);
        self.receive(Request::get(path.clone()))?;

        self.email(id).ok_or_else(|| {
            ApiError::Status {
                method: Method::Get,
                path,
                status: 404,
            }
            .into()
        })
    }

    fn send_email(&self, draft: &ComposeDraft) -> Result<SendResponse> {
        self.receive(Request::post(paths::EMAILS, draft))?;

        let recipients: Vec<String> = draft
            .recipients
            .split(',')
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(str::to_string)
            .collect();

        if recipients.is_empty() {
            return Ok(SendResponse::rejected("At least one recipient required."));
        }

        {
            let users = self.users.read().unwrap();
            if let Some(unknown) = recipients.iter().find(|r| !users.contains(*r)) {
                return Ok(SendResponse::rejected(format!(
                    "User with email {} does not exist.",
                    unknown
                )));
            }
        }

        let email = Email::builder(self.next_id().0)
            .sender(self.user.clone())
            .recipients(recipients)
            .subject(draft.subject.clone())
            .body(draft.body.clone())
            .timestamp(Local::now().format(TIMESTAMP_FORMAT).to_string())
            .read(true)
            .build();
        self.emails.write().unwrap().push(email);

        Ok(SendResponse::sent("Email sent successfully."))
    }

    fn update_flags(&self, id: EmailId, update: FlagUpdate) -> Result<()> {
        self.receive(Request::put(paths::email(id), &update))?;

        let mut emails = self.emails.write().unwrap();
        match emails.iter_mut().find(|e| e.id == id) {
            Some(email) => match update {
                FlagUpdate::Archived(archived) => email.archived = archived,
                FlagUpdate::Read(read) => email.read = read,
            },
            None => warn!("PUT for unknown email {}", id),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ME: &str = "me@example.com";

    fn backend() -> InMemoryMailApi {
        let api = InMemoryMailApi::new(ME);
        api.add_user("friend@example.com");
        api.insert(
            Email::builder(1)
                .sender("friend@example.com")
                .recipients([ME])
                .subject("Inbox mail")
                .build(),
        );
        api.insert(
            Email::builder(2)
                .sender("friend@example.com")
                .recipients([ME])
                .subject("Archived mail")
                .archived(true)
                .build(),
        );
        api.insert(
            Email::builder(3)
                .sender(ME)
                .recipients(["friend@example.com"])
                .subject("Sent mail")
                .read(true)
                .build(),
        );
        api
    }

    fn subjects(emails: &[Email]) -> Vec<&str> {
        emails.iter().map(|e| e.subject.as_str()).collect()
    }

    #[test]
    fn test_mailbox_membership() {
        let api = backend();
        assert_eq!(subjects(&api.list_mailbox(Mailbox::Inbox).unwrap()), ["Inbox mail"]);
        assert_eq!(subjects(&api.list_mailbox(Mailbox::Sent).unwrap()), ["Sent mail"]);
        assert_eq!(
            subjects(&api.list_mailbox(Mailbox::Archive).unwrap()),
            ["Archived mail"]
        );
    }

    #[test]
    fn test_requests_are_recorded() {
        let api = backend();
        api.list_mailbox(Mailbox::Sent).unwrap();
        api.update_flags(EmailId(1), FlagUpdate::Read(true)).unwrap();

        let requests = api.requests();
        assert_eq!(requests.len(), 2);
        assert!(requests[0].is(Method::Get, "/emails/sent"));
        assert!(requests[1].is(Method::Put, "/emails/1"));
        assert_eq!(requests[1].body, Some(serde_json::json!({ "read": true })));
    }

    #[test]
    fn test_get_unknown_email_is_404() {
        let api = backend();
        let err = api.get_email(EmailId(99)).unwrap_err();
        let api_err = err.downcast_ref::<ApiError>().unwrap();
        assert_eq!(api_err.status(), Some(404));
    }

    #[test]
    fn test_update_flags() {
        let api = backend();
        api.update_flags(EmailId(1), FlagUpdate::Archived(true)).unwrap();
        assert!(api.email(EmailId(1)).unwrap().archived);
        assert!(api.list_mailbox(Mailbox::Inbox).unwrap().is_empty());
    }

    #[test]
    fn test_send_rejects_empty_recipients() {
        let api = backend();
        let response = api.send_email(&ComposeDraft::empty()).unwrap();
        assert_eq!(response.error.as_deref(), Some("At least one recipient required."));
    }

    #[test]
    fn test_send_rejects_unknown_user() {
        let api = backend();
        let draft = ComposeDraft {
            recipients: "friend@example.com, stranger@example.com".to_string(),
            ..ComposeDraft::default()
        };
        let response = api.send_email(&draft).unwrap();
        assert_eq!(
            response.error.as_deref(),
            Some("User with email stranger@example.com does not exist.")
        );
    }

    #[test]
    fn test_send_stores_sent_mail() {
        let api = backend();
        let draft = ComposeDraft {
            recipients: "friend@example.com".to_string(),
            subject: "New".to_string(),
            body: "Hello".to_string(),
        };
        let response = api.send_email(&draft).unwrap();
        assert!(response.error.is_none());

        let sent = api.list_mailbox(Mailbox::Sent).unwrap();
        assert_eq!(subjects(&sent), ["Sent mail", "New"]);
        assert_eq!(sent[1].id, EmailId(4));
        assert!(!sent[1].timestamp.is_empty());
    }

    #[test]
    fn test_offline_records_then_fails() {
        let api = backend();
        api.set_offline(true);

        let err = api.list_mailbox(Mailbox::Inbox).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ApiError>(),
            Some(ApiError::Offline { .. })
        ));
        assert_eq!(api.requests_to(Method::Get, "/emails/inbox").len(), 1);
    }
}
