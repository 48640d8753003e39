use super::{maximized, Arrangement};
use crate::models::{Manager, Xyhw};

/// Like maximized, after clearing the window system's own maximize state.
pub fn arrange(manager: &Manager, workarea: &Xyhw, gap: i32) -> Arrangement {
    Arrangement {
        placements: maximized::arrange(manager, workarea, gap),
        unmaximize: true,
    }
}
