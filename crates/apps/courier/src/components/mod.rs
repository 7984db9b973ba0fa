//! Reusable UI components for Courier

mod email_row;
mod nav_item;

pub use email_row::EmailRow;
pub use nav_item::NavItem;
