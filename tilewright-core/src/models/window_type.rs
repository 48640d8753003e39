use serde::{Deserialize, Serialize};

/// `_NET_WM_WINDOW_TYPE` values.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowType {
    Desktop,
    Dock,
    Toolbar,
    Menu,
    Utility,
    Splash,
    Dialog,
    DropdownMenu,
    PopupMenu,
    Tooltip,
    Notification,
    Combo,
    Dnd,
    Normal,
}

impl WindowType {
    #[must_use]
    pub const fn is_special(self) -> bool {
        !matches!(self, Self::Normal)
    }
}
