// src/app/state.rs
use crate::prefs::{self, Prefs};
use crate::store::{Action, Store};

pub struct AppState {
    /// The store context object. Created here at startup, dropped with the
    /// app at shutdown; consumers receive it by reference, never globally.
    pub store: Store,

    /// Dark UI theme (shell-level, not part of the org bar slice).
    pub dark: bool,

    /// Set when prefs changed and need a save this frame.
    pub prefs_dirty: bool,

    pub last_window_title: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        let mut store = Store::new();
        let saved = prefs::load();

        // Restoring persisted visibility is an action-creator concern; the
        // reducer only ever sees the target value.
        if let Some(p) = saved {
            store.dispatch(&Action::SetVisibility {
                is_visible: p.org_bar_visible,
            });
        }

        Self {
            store,
            dark: saved.unwrap_or_default().dark,
            prefs_dirty: false,
            last_window_title: None,
        }
    }

    pub fn current_prefs(&self) -> Prefs {
        Prefs {
            org_bar_visible: self.store.state().is_visible,
            dark: self.dark,
        }
    }

    pub fn save_prefs(&mut self) {
        if let Err(err) = prefs::save(&self.current_prefs()) {
            tracing::warn!("Failed to save prefs: {err:#}");
        }
        self.prefs_dirty = false;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
