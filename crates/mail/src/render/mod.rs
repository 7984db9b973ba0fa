//! Render tree for UI consumption
//!
//! [`render`] turns the current [`ViewState`] into the complete visible
//! screen. Hosts draw the returned [`Screen`] as-is; they never patch a
//! previous one.

use crate::controller::{ViewState, archive_label};
use crate::models::{Email, Mailbox};

/// Everything visible for the active view
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Mailbox(MailboxPanel),
    Detail(DetailPanel),
    Compose(ComposePanel),
}

/// Mailbox list panel
#[derive(Debug, Clone, PartialEq)]
pub struct MailboxPanel {
    pub mailbox: Mailbox,
    /// Heading, e.g. "Inbox"
    pub title: String,
    pub rows: Vec<MailboxRow>,
    pub loading: bool,
}

/// One clickable row of the mailbox list
#[derive(Debug, Clone, PartialEq)]
pub struct MailboxRow {
    /// Position in the list, passed back to `ViewController::open_email`
    pub index: usize,
    pub sender: String,
    pub subject: String,
    pub timestamp: String,
    /// Read mail is drawn in secondary styling
    pub muted: bool,
}

/// Single email panel
#[derive(Debug, Clone, PartialEq)]
pub struct DetailPanel {
    /// From/To/Subject/Timestamp, empty until the re-fetch lands
    pub headers: Vec<HeaderLine>,
    /// Plain text, never interpreted as markup
    pub body: String,
    /// Archive button label; `None` hides the button
    pub archive_button: Option<String>,
    pub loading: bool,
}

/// Labelled header line such as `From: alice@example.com`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderLine {
    pub label: &'static str,
    pub value: String,
}

/// Compose form panel
#[derive(Debug, Clone, PartialEq)]
pub struct ComposePanel {
    pub recipients: String,
    pub subject: String,
    pub body: String,
    /// Error banner text from a rejected send
    pub error: Option<String>,
}

/// Build the screen for `state`
pub fn render(state: &ViewState) -> Screen {
    match state {
        ViewState::List(view) => Screen::Mailbox(MailboxPanel {
            mailbox: view.mailbox,
            title: view.mailbox.title().to_string(),
            rows: view
                .emails
                .iter()
                .enumerate()
                .map(|(index, email)| MailboxRow {
                    index,
                    sender: email.sender.clone(),
                    subject: email.subject.clone(),
                    timestamp: email.timestamp.clone(),
                    muted: email.read,
                })
                .collect(),
            loading: !view.loaded,
        }),
        ViewState::Detail(view) => Screen::Detail(DetailPanel {
            headers: view.fetched.as_ref().map(header_lines).unwrap_or_default(),
            body: view
                .fetched
                .as_ref()
                .map(|email| email.body.clone())
                .unwrap_or_default(),
            archive_button: archive_label(view.mailbox).map(str::to_string),
            loading: view.fetched.is_none(),
        }),
        ViewState::Compose(view) => Screen::Compose(ComposePanel {
            recipients: view.draft.recipients.clone(),
            subject: view.draft.subject.clone(),
            body: view.draft.body.clone(),
            error: view.error.clone(),
        }),
    }
}

fn header_lines(email: &Email) -> Vec<HeaderLine> {
    vec![
        HeaderLine {
            label: "From",
            value: email.sender.clone(),
        },
        HeaderLine {
            label: "To",
            // Same display form as the web page: comma-joined, no spaces
            value: email.recipients.join(","),
        },
        HeaderLine {
            label: "Subject",
            value: email.subject.clone(),
        },
        HeaderLine {
            label: "Timestamp",
            value: email.timestamp.clone(),
        },
    ]
}
