//! tabstrip selection state
//!
//! The controller behind a tab strip: tabs and panels register as they mount,
//! one tab is active at a time, and the Nth registered tab governs the Nth
//! registered panel.

mod controller;
mod error;
mod event;
mod ledger;
mod selection;
mod token;

pub use controller::TabController;
pub use error::TabError;
pub use event::{SelectionChanged, SubscriptionId};
pub use selection::Selection;
pub use token::{resolve, InstanceId, Token};

pub type Result<T> = std::result::Result<T, TabError>;
