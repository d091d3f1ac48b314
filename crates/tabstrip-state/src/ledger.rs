//! Registration ledger
//!
//! Insertion-ordered, duplicate-free list of tokens. One ledger holds tabs,
//! another holds panels; nothing ties the two together except the order in
//! which callers register into them.

use crate::token::Token;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Ledger {
    entries: Vec<Token>,
}

impl Ledger {
    /// Append `token` unless already present. Returns the token's index and
    /// whether it was newly added.
    pub fn register(&mut self, token: Token) -> (usize, bool) {
        if let Some(index) = self.position(&token) {
            return (index, false);
        }
        self.entries.push(token);
        (self.entries.len() - 1, true)
    }

    pub fn position(&self, token: &Token) -> Option<usize> {
        self.entries.iter().position(|t| t == token)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.entries.iter()
    }
}
