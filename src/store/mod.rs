pub mod actions;
pub mod org_top_bar;

pub use actions::Action;
pub use org_top_bar::OrgBarState;

use std::collections::VecDeque;
use std::sync::Arc;

/// Most recent dispatches kept for the debug view.
const DISPATCH_LOG_CAP: usize = 64;

/// Explicit store context: owns the authoritative state slice and runs the
/// reducer once per dispatched action, in dispatch order. Created at app
/// startup, dropped at shutdown; passed by reference to consumers.
pub struct Store {
    state: Arc<OrgBarState>,
    dispatch_log: VecDeque<String>,
}

impl Store {
    pub fn new() -> Self {
        // Seed the slice the way a store-init dispatch would: reduce the
        // absent state with an action nobody handles.
        Self {
            state: org_top_bar::reduce(None, &Action::None),
            dispatch_log: VecDeque::new(),
        }
    }

    /// Current authoritative state for rendering collaborators.
    pub fn state(&self) -> &Arc<OrgBarState> {
        &self.state
    }

    /// Run the reducer and replace the held reference with its return value.
    pub fn dispatch(&mut self, action: &Action) {
        let next = org_top_bar::reduce(Some(Arc::clone(&self.state)), action);
        if !Arc::ptr_eq(&next, &self.state) {
            tracing::debug!(?action, is_visible = next.is_visible, "org bar slice replaced");
        }
        self.state = next;

        if self.dispatch_log.len() == DISPATCH_LOG_CAP {
            self.dispatch_log.pop_front();
        }
        let entry = serde_json::to_string(action).unwrap_or_else(|_| format!("{action:?}"));
        self.dispatch_log.push_back(entry);
    }

    /// Recent dispatches, oldest first.
    pub fn dispatch_log(&self) -> impl Iterator<Item = &str> {
        self.dispatch_log.iter().map(|s| s.as_str())
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_hidden() {
        assert!(!Store::new().state().is_visible);
    }

    #[test]
    fn dispatch_replaces_state_in_order() {
        let mut store = Store::new();
        store.dispatch(&Action::SetVisibility { is_visible: true });
        assert!(store.state().is_visible);
        store.dispatch(&Action::SetVisibility { is_visible: false });
        assert!(!store.state().is_visible);
    }

    #[test]
    fn foreign_dispatch_keeps_the_same_reference() {
        let mut store = Store::new();
        let before = Arc::clone(store.state());
        store.dispatch(&Action::ToggleDark);
        assert!(Arc::ptr_eq(store.state(), &before));
    }

    #[test]
    fn dispatch_log_is_bounded() {
        let mut store = Store::new();
        for i in 0..(DISPATCH_LOG_CAP + 10) {
            store.dispatch(&Action::SetVisibility { is_visible: i % 2 == 0 });
        }
        assert_eq!(store.dispatch_log().count(), DISPATCH_LOG_CAP);
    }

    #[test]
    fn dispatch_log_records_actions_as_json() {
        let mut store = Store::new();
        store.dispatch(&Action::SetVisibility { is_visible: true });
        let entries: Vec<&str> = store.dispatch_log().collect();
        assert_eq!(entries, vec![r#"{"SetVisibility":{"is_visible":true}}"#]);
    }
}
