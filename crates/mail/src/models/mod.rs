//! Domain models for webmail entities

mod draft;
mod email;
mod mailbox;

pub use draft::ComposeDraft;
pub use email::{Email, EmailBuilder, EmailId};
pub use mailbox::Mailbox;
