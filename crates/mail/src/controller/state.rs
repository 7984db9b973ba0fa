//! View states

use crate::models::{ComposeDraft, Email, Mailbox};

/// The one active view. Switching views replaces the whole value.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    List(ListView),
    Detail(DetailView),
    Compose(ComposeView),
}

impl ViewState {
    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            ViewState::List(_) => "list",
            ViewState::Detail(_) => "detail",
            ViewState::Compose(_) => "compose",
        }
    }

    /// Mailbox the current view belongs to, if any
    pub fn mailbox(&self) -> Option<Mailbox> {
        match self {
            ViewState::List(view) => Some(view.mailbox),
            ViewState::Detail(view) => Some(view.mailbox),
            ViewState::Compose(_) => None,
        }
    }
}

/// Mailbox list
#[derive(Debug, Clone, PartialEq)]
pub struct ListView {
    pub mailbox: Mailbox,
    /// Emails in response order
    pub emails: Vec<Email>,
    /// Set once the list response has arrived
    pub loaded: bool,
}

impl ListView {
    pub fn new(mailbox: Mailbox) -> Self {
        Self {
            mailbox,
            emails: Vec::new(),
            loaded: false,
        }
    }
}

/// Single email
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    /// The email handed over by the list; archive and reply act on it
    pub email: Email,
    /// Mailbox the email was opened from
    pub mailbox: Mailbox,
    /// Fresh copy from `GET /emails/{id}`, rendered once it arrives
    pub fetched: Option<Email>,
}

/// Compose form
#[derive(Debug, Clone, PartialEq)]
pub struct ComposeView {
    pub draft: ComposeDraft,
    /// Message from a rejected send
    pub error: Option<String>,
}
