//! Active selection state machine
//!
//! ```text
//! Unset
//!   ↓ first tab registers / explicit select
//! Selected(token)
//!   ↓ explicit select
//! Selected(other)
//! ```
//!
//! There is no way back to `Unset`.

use serde::{Deserialize, Serialize};

use crate::token::Token;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "token", rename_all = "lowercase")]
pub enum Selection {
    /// No tab chosen yet
    #[default]
    Unset,
    /// The given tab is active
    Selected(Token),
}

impl Selection {
    pub fn new(default: Option<Token>) -> Self {
        match default {
            Some(token) => Selection::Selected(token),
            None => Selection::Unset,
        }
    }

    pub fn token(&self) -> Option<&Token> {
        match self {
            Selection::Selected(token) => Some(token),
            Selection::Unset => None,
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Selection::Unset)
    }

    /// Exact match against the stored token
    pub fn is(&self, token: &Token) -> bool {
        self.token() == Some(token)
    }

    /// Unconditional transition to `Selected(token)`.
    ///
    /// Returns the replaced state, or `None` if `token` was already selected.
    pub fn select(&mut self, token: Token) -> Option<Selection> {
        if self.is(&token) {
            return None;
        }
        Some(std::mem::replace(self, Selection::Selected(token)))
    }

    /// Default-activation rule: only fires while `Unset`
    pub fn activate_default(&mut self, token: &Token) -> bool {
        if !self.is_unset() {
            return false;
        }
        *self = Selection::Selected(token.clone());
        true
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selection::Unset => write!(f, "unset"),
            Selection::Selected(token) => write!(f, "selected({})", token),
        }
    }
}
