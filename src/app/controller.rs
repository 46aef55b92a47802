// src/app/controller.rs
use super::state::AppState;
use crate::store::Action;

impl AppState {
    /// Single entry point for actions emitted by the UI. Keep ordering
    /// stable: store dispatch first, then shell-level handling.
    pub fn apply_action(&mut self, action: Action) {
        self.store.dispatch(&action);

        match action {
            Action::SetVisibility { .. } => {
                self.prefs_dirty = true;
            }
            Action::ToggleDark => {
                self.dark = !self.dark;
                self.prefs_dirty = true;
            }
            Action::None => {}
        }
    }
}
