use crate::models::WindowHandle;
use crate::Command;

/// Properties whose change notifications the engine reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Atom {
    WmState,
    WmDesktop,
    WmName,
    ClientList,
    ActiveWindow,
    CurrentDesktop,
    NumberOfDesktops,
    DesktopGeometry,
    Workarea,
    Other(String),
}

/// Notifications coming out of the window system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowEvent {
    /// Geometry of a window changed (`ConfigureNotify`).
    Structure(WindowHandle),
    /// A property on a window changed.
    Property(WindowHandle, Atom),
    /// A property on the root window changed.
    Root(Atom),
    /// Screens were added, removed or resized.
    ScreenChange,
    /// A request from the control surface.
    SendCommand(Command),
}
