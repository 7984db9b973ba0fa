//! Mail crate - Business logic for the Letterbox webmail client
//!
//! This crate provides platform-independent webmail functionality:
//! - Domain models (Email, Mailbox, ComposeDraft)
//! - Backend API trait, HTTP client and in-memory backend
//! - View controller for the list, detail and compose views
//! - Render tree describing the visible screen
//!
//! This crate has zero UI dependencies; hosts drive the controller and
//! draw the render tree.

pub mod api;
pub mod config;
pub mod controller;
pub mod models;
pub mod render;

pub use api::{ApiError, HttpMailClient, InMemoryMailApi, MailApi, Method, Request};
pub use api::wire::{FlagUpdate, SendResponse};
pub use config::BackendConfig;
pub use controller::{
    Command, CommandKind, ComposeView, DetailView, Dispatcher, ListView, NavTarget, Outcome,
    ViewController, ViewState, archive_label,
};
pub use models::{ComposeDraft, Email, EmailId, Mailbox};
pub use render::{
    ComposePanel, DetailPanel, HeaderLine, MailboxPanel, MailboxRow, Screen, render,
};
