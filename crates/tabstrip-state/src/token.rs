//! Tab and panel identity
//!
//! A token is either a caller-supplied id ("tab1") or the identity of a
//! mounted instance. Explicit ids always win over instance identity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::TabError;
use crate::Result;

/// Opaque identity of one mounted tab or panel instance.
///
/// Every call to [`InstanceId::new`] yields a value that compares unequal to
/// every other instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceId(Uuid);

impl InstanceId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for InstanceId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Token {
    /// Caller-supplied identifier, compared by value
    Explicit(String),
    /// Identity of a mounted instance
    Instance(InstanceId),
}

impl Token {
    /// Build an explicit token, rejecting empty ids
    pub fn explicit(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(TabError::EmptyId);
        }
        Ok(Token::Explicit(id))
    }

    /// Token for an instance that is already mounted
    pub fn for_instance(instance: InstanceId, explicit_id: Option<&str>) -> Self {
        match non_empty(explicit_id) {
            Some(id) => Token::Explicit(id.to_string()),
            None => Token::Instance(instance),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Explicit(id) => write!(f, "{}", id),
            Token::Instance(instance) => write!(f, "{}", instance),
        }
    }
}

impl From<InstanceId> for Token {
    fn from(instance: InstanceId) -> Self {
        Token::Instance(instance)
    }
}

/// Resolve the token for a tab or panel.
///
/// `instance` is `None` until the owner has mounted. Returns `None` when no
/// token is available yet; such an owner cannot be registered.
pub fn resolve(instance: Option<InstanceId>, explicit_id: Option<&str>) -> Option<Token> {
    if let Some(id) = non_empty(explicit_id) {
        return Some(Token::Explicit(id.to_string()));
    }
    instance.map(Token::Instance)
}

fn non_empty(id: Option<&str>) -> Option<&str> {
    id.filter(|id| !id.is_empty())
}
