use crate::models::{Manager, WindowHandle, Xyhw};

/// Every client gets the whole workarea. The window system's stacking order
/// decides which one is seen.
pub fn arrange(manager: &Manager, workarea: &Xyhw, gap: i32) -> Vec<(WindowHandle, Xyhw)> {
    let area = workarea.shrink(gap);
    manager
        .ordered()
        .into_iter()
        .map(|handle| (handle, area))
        .collect()
}
