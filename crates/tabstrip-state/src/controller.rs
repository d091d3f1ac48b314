//! Tab Controller
//!
//! Owns the tab ledger, the panel ledger and the active selection of one tab
//! group. Cloning the controller shares that state, so a single controller
//! can be handed to every tab and panel of the group. Separate groups must
//! construct separate controllers.
//!
//! Panels are matched to tabs by position: the panel registered Nth is
//! visible when the tab registered Nth is active. Declaring panels in a
//! different order than their tabs silently pairs them wrong.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::error::TabError;
use crate::event::{SelectionChanged, SubscriptionId};
use crate::ledger::Ledger;
use crate::selection::Selection;
use crate::token::Token;
use crate::Result;

type Callback = Arc<dyn Fn(&SelectionChanged) + Send + Sync>;

#[derive(Debug, Default)]
struct ControllerState {
    tabs: Ledger,
    panels: Ledger,
    selection: Selection,
}

#[derive(Default)]
struct Subscribers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Callback)>,
}

pub struct TabController {
    /// Ledgers and active selection
    state: Arc<RwLock<ControllerState>>,
    /// Selection-changed callbacks
    subscribers: Arc<RwLock<Subscribers>>,
}

impl TabController {
    pub fn new(default_active: Option<Token>) -> Self {
        if let Some(token) = &default_active {
            tracing::debug!(token = %token, "Tab controller created with default tab");
        }

        Self {
            state: Arc::new(RwLock::new(ControllerState {
                selection: Selection::new(default_active),
                ..ControllerState::default()
            })),
            subscribers: Arc::new(RwLock::new(Subscribers::default())),
        }
    }

    /// Register a tab. The first tab registered while nothing is selected
    /// becomes active.
    pub fn register_tab(&self, token: Token) {
        let change = {
            let mut state = self.state.write();
            let (index, added) = state.tabs.register(token.clone());
            if added {
                tracing::debug!(token = %token, index, "Registered tab");
            } else {
                tracing::trace!(token = %token, index, "Tab already registered");
            }

            if state.selection.activate_default(&token) {
                tracing::debug!(token = %token, "Activated first registered tab");
                Some(SelectionChanged::new(None, token))
            } else {
                None
            }
        };

        if let Some(change) = change {
            self.notify(&change);
        }
    }

    /// Register a panel. Never affects the selection.
    pub fn register_panel(&self, token: Token) {
        let mut state = self.state.write();
        let (index, added) = state.panels.register(token.clone());
        if added {
            tracing::debug!(token = %token, index, "Registered panel");
        } else {
            tracing::trace!(token = %token, index, "Panel already registered");
        }
    }

    /// Make `token` the active tab, whether or not it is registered
    pub fn set_active_tab(&self, token: Token) {
        let change = {
            let mut state = self.state.write();
            state.selection.select(token.clone()).map(|previous| {
                tracing::debug!(from = %previous, to = %token, "Tab selection transition");
                SelectionChanged::new(previous.token().cloned(), token)
            })
        };

        if let Some(change) = change {
            self.notify(&change);
        }
    }

    pub fn is_active_tab(&self, token: &Token) -> bool {
        self.state.read().selection.is(token)
    }

    /// True iff the panel's position in the panel ledger equals the active
    /// tab's position in the tab ledger
    pub fn is_active_panel(&self, token: &Token) -> bool {
        let state = self.state.read();
        let Some(active) = state
            .selection
            .token()
            .and_then(|active| state.tabs.position(active))
        else {
            return false;
        };
        state.panels.position(token) == Some(active)
    }

    pub fn active_tab(&self) -> Option<Token> {
        self.state.read().selection.token().cloned()
    }

    pub fn selection(&self) -> Selection {
        self.state.read().selection.clone()
    }

    /// Position of the active tab in the tab ledger
    pub fn active_index(&self) -> Option<usize> {
        let state = self.state.read();
        state
            .selection
            .token()
            .and_then(|active| state.tabs.position(active))
    }

    pub fn tab_index_of(&self, token: &Token) -> Result<usize> {
        self.state
            .read()
            .tabs
            .position(token)
            .ok_or_else(|| TabError::UnknownTab(token.to_string()))
    }

    pub fn tabs(&self) -> Vec<Token> {
        self.state.read().tabs.iter().cloned().collect()
    }

    pub fn panels(&self) -> Vec<Token> {
        self.state.read().panels.iter().cloned().collect()
    }

    pub fn tab_count(&self) -> usize {
        self.state.read().tabs.len()
    }

    pub fn panel_count(&self) -> usize {
        self.state.read().panels.len()
    }

    /// Call `callback` after every selection change
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&SelectionChanged) + Send + Sync + 'static,
    {
        let mut subscribers = self.subscribers.write();
        let id = SubscriptionId(subscribers.next_id);
        subscribers.next_id += 1;
        subscribers.entries.push((id, Arc::new(callback)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.write();
        let before = subscribers.entries.len();
        subscribers.entries.retain(|(existing, _)| *existing != id);
        subscribers.entries.len() != before
    }

    // Callbacks run with no lock held so they can query the controller.
    fn notify(&self, change: &SelectionChanged) {
        let callbacks: Vec<Callback> = self
            .subscribers
            .read()
            .entries
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();

        for callback in callbacks {
            callback(change);
        }
    }
}

impl Default for TabController {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Clone for TabController {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            subscribers: Arc::clone(&self.subscribers),
        }
    }
}

impl std::fmt::Debug for TabController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("TabController")
            .field("tabs", &state.tabs)
            .field("panels", &state.panels)
            .field("selection", &state.selection)
            .field("subscribers", &self.subscribers.read().entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::InstanceId;
    use parking_lot::Mutex;

    fn explicit(id: &str) -> Token {
        Token::explicit(id).unwrap()
    }

    fn three_tab_group(default: Option<&str>) -> TabController {
        let controller = TabController::new(default.map(explicit));
        for id in ["tab1", "tab2", "tab3"] {
            controller.register_tab(explicit(id));
        }
        for id in ["tab1", "tab2", "tab3"] {
            controller.register_panel(explicit(id));
        }
        controller
    }

    #[test]
    fn test_tab_controller() {
        let controller = three_tab_group(Some("tab1"));

        assert!(controller.is_active_tab(&explicit("tab1")));
        assert!(controller.is_active_panel(&explicit("tab1")));
        assert!(!controller.is_active_tab(&explicit("tab2")));
        assert!(!controller.is_active_panel(&explicit("tab2")));
        assert!(!controller.is_active_panel(&explicit("tab3")));

        controller.set_active_tab(explicit("tab3"));
        assert!(controller.is_active_tab(&explicit("tab3")));
        assert!(controller.is_active_panel(&explicit("tab3")));
        assert!(!controller.is_active_tab(&explicit("tab1")));
        assert!(!controller.is_active_panel(&explicit("tab1")));
    }

    #[test]
    fn test_first_registered_tab_becomes_active() {
        let controller = TabController::default();
        assert_eq!(controller.active_tab(), None);

        let a = Token::from(InstanceId::new());
        let b = Token::from(InstanceId::new());
        controller.register_tab(a.clone());
        assert!(controller.is_active_tab(&a));

        controller.register_tab(b.clone());
        assert!(controller.is_active_tab(&a));
        assert!(!controller.is_active_tab(&b));

        controller.set_active_tab(b.clone());
        assert!(controller.is_active_tab(&b));
        assert!(!controller.is_active_tab(&a));
    }

    #[test]
    fn test_default_not_overridden_by_registration() {
        let controller = three_tab_group(Some("tab2"));
        assert!(controller.is_active_tab(&explicit("tab2")));
        assert_eq!(controller.active_index(), Some(1));
    }

    #[test]
    fn test_panel_follows_tab_position() {
        let controller = three_tab_group(None);
        let panels = controller.panels();

        for (i, tab) in controller.tabs().into_iter().enumerate() {
            controller.set_active_tab(tab);
            for (j, panel) in panels.iter().enumerate() {
                assert_eq!(controller.is_active_panel(panel), i == j);
            }
        }
    }

    #[test]
    fn test_positional_pairing_ignores_ids() {
        // Panels declared out of order pair with tabs by position only
        let controller = TabController::default();
        controller.register_tab(explicit("tab1"));
        controller.register_tab(explicit("tab2"));
        controller.register_panel(explicit("tab2"));
        controller.register_panel(explicit("tab1"));

        assert!(controller.is_active_panel(&explicit("tab2")));
        assert!(!controller.is_active_panel(&explicit("tab1")));
    }

    #[test]
    fn test_duplicate_registration() {
        let controller = three_tab_group(None);
        controller.register_tab(explicit("tab2"));
        controller.register_panel(explicit("tab2"));

        assert_eq!(controller.tab_count(), 3);
        assert_eq!(controller.panel_count(), 3);
        assert_eq!(controller.tab_index_of(&explicit("tab2")).unwrap(), 1);
    }

    #[test]
    fn test_unknown_tokens_are_inactive() {
        let controller = three_tab_group(None);
        assert!(!controller.is_active_panel(&explicit("never")));
        assert!(controller.tab_index_of(&explicit("never")).is_err());

        // Selecting an unregistered tab is accepted but matches no panel
        controller.set_active_tab(explicit("ghost"));
        assert!(controller.is_active_tab(&explicit("ghost")));
        assert_eq!(controller.active_index(), None);
        assert!(!controller.is_active_panel(&explicit("tab1")));

        controller.register_tab(explicit("ghost"));
        controller.register_panel(explicit("ghost-panel"));
        assert!(controller.is_active_panel(&explicit("ghost-panel")));
    }

    #[test]
    fn test_unset_reports_nothing_active() {
        let controller = TabController::default();
        controller.register_panel(explicit("tab1"));
        assert!(controller.selection().is_unset());
        assert!(!controller.is_active_panel(&explicit("tab1")));
        assert!(!controller.is_active_tab(&explicit("tab1")));
    }

    #[test]
    fn test_clones_share_state() {
        let controller = TabController::default();
        let handle = controller.clone();
        handle.register_tab(explicit("tab1"));
        assert!(controller.is_active_tab(&explicit("tab1")));

        let other_group = TabController::default();
        assert_eq!(other_group.tab_count(), 0);
    }

    #[test]
    fn test_subscribers_notified() {
        let controller = TabController::default();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        let id = controller.subscribe(move |change| {
            sink.lock()
                .push((change.previous.clone(), change.current.clone()));
        });

        controller.register_tab(explicit("tab1"));
        controller.register_tab(explicit("tab2"));
        controller.set_active_tab(explicit("tab2"));
        controller.set_active_tab(explicit("tab2"));

        assert_eq!(
            *seen.lock(),
            vec![
                (None, explicit("tab1")),
                (Some(explicit("tab1")), explicit("tab2")),
            ]
        );

        assert!(controller.unsubscribe(id));
        assert!(!controller.unsubscribe(id));
        controller.set_active_tab(explicit("tab1"));
        assert_eq!(seen.lock().len(), 2);
    }

    #[test]
    fn test_subscriber_can_query_controller() {
        let controller = three_tab_group(Some("tab1"));
        let visible = Arc::new(Mutex::new(None));

        let handle = controller.clone();
        let sink = Arc::clone(&visible);
        controller.subscribe(move |_| {
            *sink.lock() = handle.active_index();
        });

        controller.set_active_tab(explicit("tab2"));
        assert_eq!(*visible.lock(), Some(1));
    }
}
