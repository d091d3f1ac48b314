//! Tab error types

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TabError {
    #[error("Instance is not mounted: {0}")]
    Unmounted(String),

    #[error("Explicit id cannot be empty")]
    EmptyId,

    #[error("Tab not registered: {0}")]
    UnknownTab(String),
}
