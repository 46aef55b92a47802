// src/store/org_top_bar.rs
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::actions::Action;

/// State slice backing the organization top bar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgBarState {
    pub is_visible: bool,
}

impl Default for OrgBarState {
    fn default() -> Self {
        // Bar starts hidden until something dispatches SetVisibility.
        Self { is_visible: false }
    }
}

/// Pure visibility reducer.
///
/// `None` stands in for an uninitialized slice and is replaced with the
/// default state before processing. `SetVisibility` produces a fresh
/// allocation with the field overridden; every other action returns the
/// input `Arc` untouched, so no-op dispatches preserve reference identity
/// (`Arc::ptr_eq`).
pub fn reduce(state: Option<Arc<OrgBarState>>, action: &Action) -> Arc<OrgBarState> {
    let state = state.unwrap_or_default();
    match action {
        Action::SetVisibility { is_visible } => {
            let mut next = (*state).clone();
            next.is_visible = *is_visible;
            Arc::new(next)
        }
        _ => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn foreign_actions() -> Vec<Action> {
        vec![Action::ToggleDark, Action::None]
    }

    #[test]
    fn uninitialized_slice_defaults_to_hidden() {
        let st = reduce(None, &Action::None);
        assert_eq!(*st, OrgBarState { is_visible: false });
    }

    #[test]
    fn set_visibility_on_uninitialized_slice() {
        let st = reduce(None, &Action::SetVisibility { is_visible: true });
        assert!(st.is_visible);
    }

    #[test]
    fn foreign_actions_preserve_reference_identity() {
        let s = Arc::new(OrgBarState { is_visible: true });
        for a in foreign_actions() {
            let out = reduce(Some(s.clone()), &a);
            assert!(Arc::ptr_eq(&out, &s), "{a:?} must not replace the slice");
        }
    }

    #[test]
    fn set_visibility_allocates_even_when_value_unchanged() {
        let s = Arc::new(OrgBarState { is_visible: true });
        let out = reduce(Some(s.clone()), &Action::SetVisibility { is_visible: true });
        assert!(!Arc::ptr_eq(&out, &s));
        assert_eq!(*out, *s);
    }

    proptest! {
        #[test]
        fn set_visibility_stores_target_value(initial: bool, target: bool) {
            let s = Arc::new(OrgBarState { is_visible: initial });
            let out = reduce(Some(s.clone()), &Action::SetVisibility { is_visible: target });
            prop_assert_eq!(out.is_visible, target);
            // Input slice is untouched.
            prop_assert_eq!(s.is_visible, initial);
        }

        #[test]
        fn set_visibility_is_idempotent(initial: bool, target: bool) {
            let a = Action::SetVisibility { is_visible: target };
            let s = Arc::new(OrgBarState { is_visible: initial });
            let once = reduce(Some(s.clone()), &a);
            let twice = reduce(Some(once.clone()), &a);
            prop_assert_eq!(&*once, &*twice);
        }
    }
}
