#[cfg(test)]
mod mock_window_system;

use crate::errors::Result;
use crate::models::{PointerState, Screen, WindowHandle, WindowInfo, WindowState, Xyhw};
use crate::WindowEvent;

use futures::prelude::*;
use std::pin::Pin;

#[cfg(test)]
pub use self::mock_window_system::{MockWindowSystem, Request as MockRequest};

/// The connection to the windowing protocol.
///
/// Requests are fire-and-forget: the resulting notifications come back through
/// [`WindowSystem::get_next_events`].
pub trait WindowSystem {
    /// Query everything the engine tracks about a window.
    ///
    /// # Errors
    ///
    /// Fails if the window no longer exists.
    fn window_info(&self, handle: WindowHandle) -> Result<WindowInfo>;

    /// Move and resize the client area of a window.
    ///
    /// # Errors
    ///
    /// Fails if the window no longer exists.
    fn move_resize(&mut self, handle: WindowHandle, xyhw: Xyhw) -> Result<()>;

    /// # Errors
    ///
    /// Fails if the window no longer exists.
    fn set_state(&mut self, handle: WindowHandle, state: WindowState, on: bool) -> Result<()>;

    /// # Errors
    ///
    /// Fails if the window no longer exists.
    fn set_decoration(&mut self, handle: WindowHandle, on: bool) -> Result<()>;

    /// # Errors
    ///
    /// Fails if the window no longer exists.
    fn activate(&mut self, handle: WindowHandle) -> Result<()>;

    /// Move a window to another desktop.
    ///
    /// # Errors
    ///
    /// Fails if the window no longer exists.
    fn set_desktop(&mut self, handle: WindowHandle, desktop: usize) -> Result<()>;

    /// Managed windows, bottom to top.
    fn stacking_order(&self) -> Vec<WindowHandle>;

    /// Managed windows in mapping order.
    fn client_list(&self) -> Vec<WindowHandle>;

    fn active_window(&self) -> Option<WindowHandle>;

    fn current_desktop(&self) -> usize;

    /// Screen under the pointer.
    fn current_screen(&self) -> usize;

    fn desktop_count(&self) -> usize;

    fn screens(&self) -> Vec<Screen>;

    fn pointer(&self) -> PointerState;

    fn get_next_events(&mut self) -> Vec<WindowEvent>;

    fn wait_readable(&self) -> Pin<Box<dyn Future<Output = ()>>>;

    fn flush(&self);
}
