use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Show or hide the organization top bar. Carries the target value
    /// directly; this is a setter, not a toggle.
    SetVisibility { is_visible: bool },

    // Shell-level actions; the visibility reducer ignores these.
    ToggleDark,

    None,
}
