//! GPUI views for the Courier mail app, one per controller view

mod compose;
mod email;
mod mailbox;

pub use compose::ComposeView;
pub use email::EmailView;
pub use mailbox::MailboxView;
