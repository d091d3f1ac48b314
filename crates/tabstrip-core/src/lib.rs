//! tabstrip
//!
//! Tab groups for a presentation layer: each group owns one selection
//! controller and hands out tab and panel handles bound to it.

mod config;
mod error;
mod group;

pub use config::Config;
pub use error::CoreError;
pub use group::{PanelHandle, TabGroup, TabHandle};

// Re-export the selection state
pub use tabstrip_state::{
    resolve, InstanceId, Selection, SelectionChanged, SubscriptionId, TabController,
    TabError, Token,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
///
/// `RUST_LOG` takes precedence over the configured filter.
pub fn init_logging(config: &Config) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    fmt().with_env_filter(filter).with_target(true).init();
}
