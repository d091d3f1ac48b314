//! Tab groups and the handles a presentation layer renders from
//!
//! A `TabGroup` owns one controller. Tabs and panels get a handle each; the
//! handle has no identity until it is mounted, after which it registers
//! itself and can be queried on every render.

use tabstrip_state::{resolve, InstanceId, TabController, TabError, Token};

use crate::config::Config;
use crate::Result;

pub struct TabGroup {
    controller: TabController,
}

impl TabGroup {
    pub fn new(default_active: Option<Token>) -> Self {
        tracing::info!(
            default_active = ?default_active.as_ref().map(ToString::to_string),
            "Created tab group"
        );

        Self {
            controller: TabController::new(default_active),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config.default_token()?))
    }

    /// Controller handle for injecting into custom tab/panel types
    pub fn controller(&self) -> &TabController {
        &self.controller
    }

    /// New unmounted tab. `id` of `None` (or empty) falls back to instance
    /// identity.
    pub fn tab(&self, id: Option<&str>) -> TabHandle {
        TabHandle::new(self.controller.clone(), id)
    }

    pub fn panel(&self, id: Option<&str>) -> PanelHandle {
        PanelHandle::new(self.controller.clone(), id)
    }

    pub fn active_tab(&self) -> Option<Token> {
        self.controller.active_tab()
    }
}

impl Default for TabGroup {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Identity shared by tab and panel handles
#[derive(Debug)]
struct Mount {
    explicit_id: Option<String>,
    instance: Option<InstanceId>,
}

impl Mount {
    fn new(explicit_id: Option<&str>) -> Self {
        Self {
            explicit_id: explicit_id.map(str::to_string),
            instance: None,
        }
    }

    fn token(&self) -> Option<Token> {
        resolve(self.instance, self.explicit_id.as_deref())
    }

    fn mount(&mut self) -> Token {
        let instance = *self.instance.get_or_insert_with(InstanceId::new);
        Token::for_instance(instance, self.explicit_id.as_deref())
    }

    /// Token, but only once mounted
    fn mounted_token(&self) -> Option<Token> {
        self.instance
            .map(|instance| Token::for_instance(instance, self.explicit_id.as_deref()))
    }

    fn label(&self) -> String {
        self.explicit_id
            .clone()
            .unwrap_or_else(|| "<anonymous>".to_string())
    }
}

#[derive(Debug)]
pub struct TabHandle {
    controller: TabController,
    mount: Mount,
}

impl TabHandle {
    pub fn new(controller: TabController, id: Option<&str>) -> Self {
        Self {
            controller,
            mount: Mount::new(id),
        }
    }

    /// Comparison token; `None` for an anonymous tab that is not mounted yet
    pub fn token(&self) -> Option<Token> {
        self.mount.token()
    }

    pub fn is_mounted(&self) -> bool {
        self.mount.instance.is_some()
    }

    /// Register with the controller. Safe to call on every render.
    pub fn mount(&mut self) -> Token {
        let token = self.mount.mount();
        self.controller.register_tab(token.clone());
        token
    }

    /// Whether the tab should render emphasized
    pub fn is_active(&self) -> bool {
        self.mount
            .mounted_token()
            .is_some_and(|token| self.controller.is_active_tab(&token))
    }

    /// User clicked the tab
    pub fn select(&self) -> Result<Token> {
        let token = self
            .mount
            .mounted_token()
            .ok_or_else(|| TabError::Unmounted(self.mount.label()))?;
        self.controller.set_active_tab(token.clone());
        Ok(token)
    }
}

#[derive(Debug)]
pub struct PanelHandle {
    controller: TabController,
    mount: Mount,
}

impl PanelHandle {
    pub fn new(controller: TabController, id: Option<&str>) -> Self {
        Self {
            controller,
            mount: Mount::new(id),
        }
    }

    pub fn token(&self) -> Option<Token> {
        self.mount.token()
    }

    pub fn is_mounted(&self) -> bool {
        self.mount.instance.is_some()
    }

    pub fn mount(&mut self) -> Token {
        let token = self.mount.mount();
        self.controller.register_panel(token.clone());
        token
    }

    /// Whether the panel's content should render
    pub fn is_visible(&self) -> bool {
        self.mount
            .mounted_token()
            .is_some_and(|token| self.controller.is_active_panel(&token))
    }
}
