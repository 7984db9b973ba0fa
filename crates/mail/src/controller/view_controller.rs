//! The view controller
//!
//! Owns the single active view and decides which backend calls each user
//! action needs. It performs no I/O: every operation returns the commands
//! to run, and results come back through [`ViewController::complete`].

use anyhow::Result;
use log::{debug, error, info, warn};

use super::command::{Command, CommandKind, Outcome};
use super::state::{ComposeView, DetailView, ListView, ViewState};
use crate::models::{ComposeDraft, Email, Mailbox};

/// Navigation bar buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Inbox,
    Sent,
    Archived,
    Compose,
}

/// Label of the archive button for mail opened from `mailbox`; `None` hides it
pub fn archive_label(mailbox: Mailbox) -> Option<&'static str> {
    match mailbox {
        Mailbox::Sent => None,
        Mailbox::Archive => Some("Unarchive"),
        Mailbox::Inbox => Some("Archive"),
    }
}

/// Controller for the list, detail and compose views
///
/// Each view switch bumps a generation counter. Commands carry the
/// generation that issued them, so list, detail and send results that
/// arrive after the user moved on never paint over the new view. A late
/// detail result still marks its email read.
#[derive(Debug, Clone)]
pub struct ViewController {
    state: ViewState,
    generation: u64,
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewController {
    /// An empty inbox list; call [`start`](Self::start) to load it
    pub fn new() -> Self {
        Self {
            state: ViewState::List(ListView::new(Mailbox::Inbox)),
            generation: 0,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Initial load: the inbox
    pub fn start(&mut self) -> Vec<Command> {
        info!("Loading inbox");
        self.show_mailbox(Mailbox::Inbox)
    }

    /// Handle a navigation bar click
    pub fn navigate(&mut self, target: NavTarget) -> Vec<Command> {
        match target {
            NavTarget::Inbox => self.show_mailbox(Mailbox::Inbox),
            NavTarget::Sent => self.show_mailbox(Mailbox::Sent),
            NavTarget::Archived => self.show_mailbox(Mailbox::Archive),
            NavTarget::Compose => {
                self.show_compose(None);
                Vec::new()
            }
        }
    }

    /// Switch to an empty list of `mailbox` and request its contents
    pub fn show_mailbox(&mut self, mailbox: Mailbox) -> Vec<Command> {
        self.switch(ViewState::List(ListView::new(mailbox)));
        vec![self.command(CommandKind::LoadMailbox(mailbox))]
    }

    /// Row click in the list view
    pub fn open_email(&mut self, index: usize) -> Vec<Command> {
        let ViewState::List(view) = &self.state else {
            warn!("Ignoring row click outside the list view");
            return Vec::new();
        };
        let Some(email) = view.emails.get(index).cloned() else {
            warn!("No email at row {} of {}", index, view.mailbox);
            return Vec::new();
        };
        let mailbox = view.mailbox;
        self.show_detail(email, mailbox)
    }

    /// Switch to the compose form, blank or pre-filled as a reply
    pub fn show_compose(&mut self, reply_to: Option<&Email>) {
        let draft = match reply_to {
            Some(email) => ComposeDraft::reply_to(email),
            None => ComposeDraft::empty(),
        };
        self.switch(ViewState::Compose(ComposeView { draft, error: None }));
    }

    /// Submit the compose form with the current field values
    pub fn submit_compose(&mut self, draft: ComposeDraft) -> Vec<Command> {
        let ViewState::Compose(view) = &mut self.state else {
            warn!("Ignoring submit outside the compose view");
            return Vec::new();
        };
        view.draft = draft.clone();
        info!("Sending email to {:?}", draft.recipients);
        vec![self.command(CommandKind::SendEmail(draft))]
    }

    /// Switch to the detail view for `email`, opened from `mailbox`
    pub fn show_detail(&mut self, email: Email, mailbox: Mailbox) -> Vec<Command> {
        let id = email.id;
        self.switch(ViewState::Detail(DetailView {
            email,
            mailbox,
            fetched: None,
        }));
        vec![self.command(CommandKind::LoadEmail(id))]
    }

    /// Archive button click in the detail view
    pub fn toggle_archive(&mut self) -> Vec<Command> {
        let ViewState::Detail(view) = &self.state else {
            warn!("Ignoring archive outside the detail view");
            return Vec::new();
        };
        if archive_label(view.mailbox).is_none() {
            warn!("Archive is not offered for {} mail", view.mailbox);
            return Vec::new();
        }
        let kind = CommandKind::ToggleArchive {
            id: view.email.id,
            archived: !view.email.archived,
        };
        vec![self.command(kind)]
    }

    /// Reply button click in the detail view; uses the email already in hand
    pub fn reply(&mut self) {
        let ViewState::Detail(view) = &self.state else {
            warn!("Ignoring reply outside the detail view");
            return;
        };
        let email = view.email.clone();
        self.show_compose(Some(&email));
    }

    /// Apply the result of `command` and return any follow-up commands
    ///
    /// Failures are logged and otherwise ignored; nothing is retried.
    pub fn complete(&mut self, command: &Command, result: Result<Outcome>) -> Vec<Command> {
        let outcome = match result {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("{} failed: {:#}", command.request(), e);
                return Vec::new();
            }
        };

        match (&command.kind, outcome) {
            // Always back to the inbox, whichever mailbox the email came from
            (CommandKind::ToggleArchive { id, archived }, _) => {
                info!(
                    "Email {} {}",
                    id,
                    if *archived { "archived" } else { "unarchived" }
                );
                self.show_mailbox(Mailbox::Inbox)
            }
            (CommandKind::MarkRead(id), _) => {
                debug!("Email {} marked as read", id);
                Vec::new()
            }
            // Opening an email marks it read even if the user has already
            // moved on; only the detail view update is skipped
            (CommandKind::LoadEmail(_), Outcome::Email(email)) => {
                let id = email.id;
                let unread = !email.read;
                if command.generation != self.generation {
                    debug!("Email {} arrived after its detail view closed", id);
                } else {
                    debug!("Loaded email {}", id);
                    if let ViewState::Detail(view) = &mut self.state {
                        view.fetched = Some(email);
                    }
                }
                if unread {
                    vec![self.command(CommandKind::MarkRead(id))]
                } else {
                    Vec::new()
                }
            }
            _ if command.generation != self.generation => {
                debug!(
                    "Dropping stale result of {} (generation {}, now {})",
                    command.request(),
                    command.generation,
                    self.generation
                );
                Vec::new()
            }
            (CommandKind::LoadMailbox(mailbox), Outcome::Mailbox(emails)) => {
                debug!("Loaded {} emails from {}", emails.len(), mailbox);
                if let ViewState::List(view) = &mut self.state {
                    view.emails = emails;
                    view.loaded = true;
                }
                Vec::new()
            }
            (CommandKind::SendEmail(_), Outcome::Sent(response)) => match response.error {
                Some(message) => {
                    warn!("Send rejected: {}", message);
                    if let ViewState::Compose(view) = &mut self.state {
                        view.error = Some(message);
                    }
                    Vec::new()
                }
                None => {
                    info!("Email sent");
                    self.show_mailbox(Mailbox::Sent)
                }
            },
            (kind, outcome) => {
                warn!("Unexpected outcome {:?} for {:?}", outcome, kind);
                Vec::new()
            }
        }
    }

    fn switch(&mut self, state: ViewState) {
        self.generation += 1;
        debug!(
            "Switching to {} view (generation {})",
            state.name(),
            self.generation
        );
        self.state = state;
    }

    fn command(&self, kind: CommandKind) -> Command {
        Command::new(self.generation, kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::wire::SendResponse;
    use crate::models::EmailId;

    fn email(id: i64, read: bool) -> Email {
        Email::builder(id)
            .sender("alice@example.com")
            .recipients(["me@example.com"])
            .subject(format!("Subject {}", id))
            .body("Body")
            .timestamp("Jan 01 2024, 10:00 AM")
            .read(read)
            .build()
    }

    fn list_of(controller: &ViewController) -> &ListView {
        match controller.state() {
            ViewState::List(view) => view,
            other => panic!("expected list view, got {}", other.name()),
        }
    }

    fn loaded_inbox(emails: Vec<Email>) -> ViewController {
        let mut controller = ViewController::new();
        let commands = controller.start();
        controller.complete(&commands[0], Ok(Outcome::Mailbox(emails)));
        controller
    }

    #[test]
    fn test_show_mailbox_issues_one_load() {
        for mailbox in Mailbox::ALL {
            let mut controller = ViewController::new();
            let commands = controller.show_mailbox(mailbox);
            assert_eq!(commands.len(), 1);
            assert_eq!(commands[0].kind, CommandKind::LoadMailbox(mailbox));

            let view = list_of(&controller);
            assert_eq!(view.mailbox, mailbox);
            assert!(view.emails.is_empty());
            assert!(!view.loaded);
        }
    }

    #[test]
    fn test_mailbox_result_keeps_response_order() {
        let controller = loaded_inbox(vec![email(5, false), email(2, true), email(9, false)]);
        let ids: Vec<i64> = list_of(&controller).emails.iter().map(|e| e.id.0).collect();
        assert_eq!(ids, [5, 2, 9]);
        assert!(list_of(&controller).loaded);
    }

    #[test]
    fn test_switching_mailbox_clears_list() {
        let mut controller = loaded_inbox(vec![email(1, false)]);
        controller.show_mailbox(Mailbox::Sent);
        assert!(list_of(&controller).emails.is_empty());
    }

    #[test]
    fn test_archive_labels() {
        assert_eq!(archive_label(Mailbox::Inbox), Some("Archive"));
        assert_eq!(archive_label(Mailbox::Archive), Some("Unarchive"));
        assert_eq!(archive_label(Mailbox::Sent), None);
    }

    #[test]
    fn test_open_email_refetches() {
        let mut controller = loaded_inbox(vec![email(1, false), email(2, false)]);
        let commands = controller.open_email(1);
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].kind, CommandKind::LoadEmail(EmailId(2)));

        match controller.state() {
            ViewState::Detail(view) => {
                assert_eq!(view.email.id, EmailId(2));
                assert_eq!(view.mailbox, Mailbox::Inbox);
                assert!(view.fetched.is_none());
            }
            other => panic!("expected detail view, got {}", other.name()),
        }
    }

    #[test]
    fn test_open_email_out_of_range() {
        let mut controller = loaded_inbox(vec![email(1, false)]);
        let generation = controller.generation();
        assert!(controller.open_email(3).is_empty());
        assert_eq!(controller.generation(), generation);
    }

    #[test]
    fn test_unread_detail_marks_read_once() {
        let mut controller = ViewController::new();
        let commands = controller.show_detail(email(4, false), Mailbox::Inbox);
        let follow_up = controller.complete(&commands[0], Ok(Outcome::Email(email(4, false))));
        assert_eq!(follow_up.len(), 1);
        assert_eq!(follow_up[0].kind, CommandKind::MarkRead(EmailId(4)));
    }

    #[test]
    fn test_read_detail_does_not_mark_read() {
        let mut controller = ViewController::new();
        let commands = controller.show_detail(email(4, false), Mailbox::Inbox);
        let follow_up = controller.complete(&commands[0], Ok(Outcome::Email(email(4, true))));
        assert!(follow_up.is_empty());
    }

    #[test]
    fn test_toggle_archive_flips_flag_of_email_in_hand() {
        let mut controller = ViewController::new();
        let archived = Email {
            archived: true,
            ..email(6, true)
        };
        controller.show_detail(archived, Mailbox::Archive);
        let commands = controller.toggle_archive();
        assert_eq!(
            commands[0].kind,
            CommandKind::ToggleArchive {
                id: EmailId(6),
                archived: false
            }
        );
    }

    #[test]
    fn test_archive_completion_returns_to_inbox() {
        for mailbox in [Mailbox::Inbox, Mailbox::Archive] {
            let mut controller = ViewController::new();
            controller.show_detail(email(6, true), mailbox);
            let commands = controller.toggle_archive();

            let follow_up = controller.complete(&commands[0], Ok(Outcome::Updated));
            assert_eq!(follow_up[0].kind, CommandKind::LoadMailbox(Mailbox::Inbox));
            assert_eq!(list_of(&controller).mailbox, Mailbox::Inbox);
        }
    }

    #[test]
    fn test_archive_not_offered_for_sent() {
        let mut controller = ViewController::new();
        controller.show_detail(email(6, true), Mailbox::Sent);
        assert!(controller.toggle_archive().is_empty());
    }

    #[test]
    fn test_failed_archive_stays_put() {
        let mut controller = ViewController::new();
        controller.show_detail(email(6, true), Mailbox::Inbox);
        let commands = controller.toggle_archive();

        let follow_up = controller.complete(&commands[0], Err(anyhow::anyhow!("connection reset")));
        assert!(follow_up.is_empty());
        assert!(matches!(controller.state(), ViewState::Detail(_)));
    }

    #[test]
    fn test_reply_prefills_from_email_in_hand() {
        let mut controller = ViewController::new();
        controller.show_detail(email(3, true), Mailbox::Inbox);
        controller.reply();

        match controller.state() {
            ViewState::Compose(view) => {
                assert_eq!(view.draft.recipients, "alice@example.com");
                assert_eq!(view.draft.subject, "Re: Subject 3");
                assert!(view.error.is_none());
            }
            other => panic!("expected compose view, got {}", other.name()),
        }
    }

    #[test]
    fn test_send_error_stays_in_compose() {
        let mut controller = ViewController::new();
        controller.show_compose(None);
        let draft = ComposeDraft {
            recipients: "nobody".to_string(),
            ..ComposeDraft::default()
        };
        let commands = controller.submit_compose(draft.clone());
        assert_eq!(commands[0].kind, CommandKind::SendEmail(draft.clone()));

        let follow_up = controller.complete(
            &commands[0],
            Ok(Outcome::Sent(SendResponse::rejected("Invalid recipient"))),
        );
        assert!(follow_up.is_empty());
        match controller.state() {
            ViewState::Compose(view) => {
                assert_eq!(view.error.as_deref(), Some("Invalid recipient"));
                assert_eq!(view.draft, draft);
            }
            other => panic!("expected compose view, got {}", other.name()),
        }
    }

    #[test]
    fn test_send_success_shows_sent() {
        let mut controller = ViewController::new();
        controller.show_compose(None);
        let commands = controller.submit_compose(ComposeDraft::default());

        let follow_up =
            controller.complete(&commands[0], Ok(Outcome::Sent(SendResponse::sent("ok"))));
        assert_eq!(follow_up[0].kind, CommandKind::LoadMailbox(Mailbox::Sent));
        assert_eq!(list_of(&controller).mailbox, Mailbox::Sent);
    }

    #[test]
    fn test_show_compose_clears_error_banner() {
        let mut controller = ViewController::new();
        controller.show_compose(None);
        let commands = controller.submit_compose(ComposeDraft::default());
        controller.complete(&commands[0], Ok(Outcome::Sent(SendResponse::rejected("bad"))));

        controller.show_compose(None);
        match controller.state() {
            ViewState::Compose(view) => {
                assert!(view.error.is_none());
                assert!(view.draft.is_empty());
            }
            other => panic!("expected compose view, got {}", other.name()),
        }
    }

    #[test]
    fn test_submit_outside_compose_is_ignored() {
        let mut controller = ViewController::new();
        assert!(controller.submit_compose(ComposeDraft::default()).is_empty());
    }

    #[test]
    fn test_stale_mailbox_result_is_dropped() {
        let mut controller = ViewController::new();
        let inbox = controller.show_mailbox(Mailbox::Inbox);
        let sent = controller.show_mailbox(Mailbox::Sent);

        controller.complete(&inbox[0], Ok(Outcome::Mailbox(vec![email(1, false)])));
        let view = list_of(&controller);
        assert_eq!(view.mailbox, Mailbox::Sent);
        assert!(!view.loaded);

        controller.complete(&sent[0], Ok(Outcome::Mailbox(vec![email(2, true)])));
        assert_eq!(list_of(&controller).emails[0].id, EmailId(2));
    }

    #[test]
    fn test_late_detail_result_still_marks_read() {
        let mut controller = ViewController::new();
        let detail = controller.show_detail(email(4, false), Mailbox::Inbox);
        controller.show_mailbox(Mailbox::Inbox);

        let follow_up = controller.complete(&detail[0], Ok(Outcome::Email(email(4, false))));
        assert_eq!(follow_up.len(), 1);
        assert_eq!(follow_up[0].kind, CommandKind::MarkRead(EmailId(4)));

        // The list view is left alone
        let view = list_of(&controller);
        assert_eq!(view.mailbox, Mailbox::Inbox);
        assert!(!view.loaded);
    }

    #[test]
    fn test_late_read_detail_result_is_dropped() {
        let mut controller = ViewController::new();
        let detail = controller.show_detail(email(4, true), Mailbox::Inbox);
        controller.show_compose(None);

        let follow_up = controller.complete(&detail[0], Ok(Outcome::Email(email(4, true))));
        assert!(follow_up.is_empty());
        assert!(matches!(controller.state(), ViewState::Compose(_)));
    }

    #[test]
    fn test_navigate() {
        let mut controller = ViewController::new();
        let commands = controller.navigate(NavTarget::Archived);
        assert_eq!(commands[0].kind, CommandKind::LoadMailbox(Mailbox::Archive));

        assert!(controller.navigate(NavTarget::Compose).is_empty());
        assert!(matches!(controller.state(), ViewState::Compose(_)));
    }
}
