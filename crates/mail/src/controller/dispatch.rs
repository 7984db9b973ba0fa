//! Command execution against a backend

use anyhow::Result;
use log::debug;
use std::collections::VecDeque;
use std::sync::Arc;

use super::command::{Command, CommandKind, Outcome};
use super::view_controller::ViewController;
use crate::api::MailApi;
use crate::api::wire::FlagUpdate;

/// Runs controller commands against a `MailApi`
///
/// `execute` blocks on the backend call, so UI hosts run it on a
/// background executor and hand the result back to the controller on the
/// UI thread.
#[derive(Clone)]
pub struct Dispatcher {
    api: Arc<dyn MailApi>,
}

impl Dispatcher {
    pub fn new(api: Arc<dyn MailApi>) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &Arc<dyn MailApi> {
        &self.api
    }

    /// Perform one command
    pub fn execute(&self, command: &Command) -> Result<Outcome> {
        debug!("Executing {}", command.request());
        match &command.kind {
            CommandKind::LoadMailbox(mailbox) => self.api.list_mailbox(*mailbox).map(Outcome::Mailbox),
            CommandKind::LoadEmail(id) => self.api.get_email(*id).map(Outcome::Email),
            CommandKind::SendEmail(draft) => self.api.send_email(draft).map(Outcome::Sent),
            CommandKind::ToggleArchive { id, archived } => self
                .api
                .update_flags(*id, FlagUpdate::Archived(*archived))
                .map(|()| Outcome::Updated),
            CommandKind::MarkRead(id) => self
                .api
                .update_flags(*id, FlagUpdate::Read(true))
                .map(|()| Outcome::Updated),
        }
    }

    /// Execute `commands` and every follow-up in FIFO order until none
    /// remain. Returns the number of commands executed.
    pub fn run(&self, controller: &mut ViewController, commands: Vec<Command>) -> usize {
        let mut queue: VecDeque<Command> = commands.into();
        let mut executed = 0;

        while let Some(command) = queue.pop_front() {
            let result = self.execute(&command);
            executed += 1;
            queue.extend(controller.complete(&command, result));
        }

        executed
    }
}
