//! View controller and command execution
//!
//! The controller owns view state and emits [`Command`]s; the
//! [`Dispatcher`] performs them against a [`MailApi`](crate::api::MailApi)
//! and feeds the results back.

mod command;
mod dispatch;
mod state;
mod view_controller;

pub use command::{Command, CommandKind, Outcome};
pub use dispatch::Dispatcher;
pub use state::{ComposeView, DetailView, ListView, ViewState};
pub use view_controller::{NavTarget, ViewController, archive_label};
