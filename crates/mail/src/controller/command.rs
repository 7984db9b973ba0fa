//! Network work requested by the controller

use crate::api::wire::{FlagUpdate, SendResponse};
use crate::api::{Request, paths};
use crate::models::{ComposeDraft, Email, EmailId, Mailbox};

/// A backend call the host must perform, tagged with the view generation
/// that issued it
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub generation: u64,
    pub kind: CommandKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CommandKind {
    /// Fill the mailbox list
    LoadMailbox(Mailbox),
    /// Re-fetch the email shown in the detail view
    LoadEmail(EmailId),
    /// Submit the compose form
    SendEmail(ComposeDraft),
    /// Set the archived flag; `archived` is the new value
    ToggleArchive { id: EmailId, archived: bool },
    /// Mark an opened email as read
    MarkRead(EmailId),
}

impl Command {
    pub fn new(generation: u64, kind: CommandKind) -> Self {
        Self { generation, kind }
    }

    /// The HTTP request this command performs
    pub fn request(&self) -> Request {
        match &self.kind {
            CommandKind::LoadMailbox(mailbox) => Request::get(paths::mailbox(*mailbox)),
            CommandKind::LoadEmail(id) => Request::get(paths::email(*id)),
            CommandKind::SendEmail(draft) => Request::post(paths::EMAILS, draft),
            CommandKind::ToggleArchive { id, archived } => {
                Request::put(paths::email(*id), &FlagUpdate::Archived(*archived))
            }
            CommandKind::MarkRead(id) => Request::put(paths::email(*id), &FlagUpdate::Read(true)),
        }
    }
}

/// Successful result of a command
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Mailbox(Vec<Email>),
    Email(Email),
    Sent(SendResponse),
    Updated,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Method;
    use serde_json::json;

    #[test]
    fn test_request_mapping() {
        let list = Command::new(1, CommandKind::LoadMailbox(Mailbox::Sent)).request();
        assert!(list.is(Method::Get, "/emails/sent"));
        assert_eq!(list.body, None);

        let archive = Command::new(
            1,
            CommandKind::ToggleArchive {
                id: EmailId(9),
                archived: false,
            },
        )
        .request();
        assert!(archive.is(Method::Put, "/emails/9"));
        assert_eq!(archive.body, Some(json!({ "archived": false })));

        let read = Command::new(1, CommandKind::MarkRead(EmailId(9))).request();
        assert_eq!(read.body, Some(json!({ "read": true })));
    }

    #[test]
    fn test_send_request_body() {
        let draft = ComposeDraft {
            recipients: "a@example.com".to_string(),
            subject: "Hi".to_string(),
            body: String::new(),
        };
        let request = Command::new(3, CommandKind::SendEmail(draft)).request();
        assert!(request.is(Method::Post, "/emails"));
        assert_eq!(
            request.body,
            Some(json!({ "recipients": "a@example.com", "subject": "Hi", "body": "" }))
        );
    }
}
