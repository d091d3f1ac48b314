//! Selection change notifications

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::token::Token;

/// Emitted whenever the active tab changes, including the first-tab default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionChanged {
    /// Previously active tab, `None` if nothing was selected
    pub previous: Option<Token>,
    /// Newly active tab
    pub current: Token,
    pub at: DateTime<Utc>,
}

impl SelectionChanged {
    pub fn new(previous: Option<Token>, current: Token) -> Self {
        Self {
            previous,
            current,
            at: Utc::now(),
        }
    }
}

/// Handle returned by `TabController::subscribe`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub(crate) u64);
