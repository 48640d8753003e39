use super::WindowSystem;
use crate::errors::{Result, TileError};
use crate::models::{Extents, PointerState, Screen, WindowHandle, WindowInfo, WindowState, Xyhw};
use crate::WindowEvent;
use std::collections::HashMap;

/// A request the engine made, recorded for assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    MoveResize(WindowHandle, Xyhw),
    SetState(WindowHandle, WindowState, bool),
    SetDecoration(WindowHandle, bool),
    Activate(WindowHandle),
    SetDesktop(WindowHandle, usize),
}

/// In-memory window system used by the tests.
#[derive(Debug, Clone)]
pub struct MockWindowSystem {
    pub windows: HashMap<WindowHandle, WindowInfo>,
    pub client_list: Vec<WindowHandle>,
    pub stacking: Vec<WindowHandle>,
    pub active: Option<WindowHandle>,
    pub desktop: usize,
    pub desktops: usize,
    pub screens: Vec<Screen>,
    pub pointer: PointerState,
    pub frame: Extents,
    pub events: Vec<WindowEvent>,
    pub requests: Vec<Request>,
}

impl Default for MockWindowSystem {
    fn default() -> Self {
        Self {
            windows: HashMap::new(),
            client_list: vec![],
            stacking: vec![],
            active: None,
            desktop: 0,
            desktops: 1,
            screens: vec![Screen::new(0, Xyhw::new(0, 0, 1000, 800))],
            pointer: PointerState::default(),
            frame: Extents::default(),
            events: vec![],
            requests: vec![],
        }
    }
}

impl MockWindowSystem {
    /// Map a new window on top of the stack.
    pub fn map(&mut self, handle: WindowHandle, info: WindowInfo) {
        self.windows.insert(handle, info);
        self.client_list.push(handle);
        self.stacking.push(handle);
    }

    pub fn unmap(&mut self, handle: WindowHandle) {
        self.windows.remove(&handle);
        self.client_list.retain(|h| *h != handle);
        self.stacking.retain(|h| *h != handle);
    }

    /// Change a window's outer geometry as if the user dragged it.
    pub fn drag_to(&mut self, handle: WindowHandle, geometry: Xyhw) {
        if let Some(info) = self.windows.get_mut(&handle) {
            info.dimensions.geometry = geometry;
        }
    }

    #[must_use]
    pub fn geometry(&self, handle: WindowHandle) -> Option<Xyhw> {
        self.windows.get(&handle).map(|w| w.dimensions.geometry)
    }

    #[must_use]
    pub fn move_resize_count(&self) -> usize {
        self.requests
            .iter()
            .filter(|r| matches!(r, Request::MoveResize(..)))
            .count()
    }
}

impl WindowSystem for MockWindowSystem {
    fn window_info(&self, handle: WindowHandle) -> Result<WindowInfo> {
        self.windows
            .get(&handle)
            .cloned()
            .ok_or(TileError::UnknownWindow(handle))
    }

    fn move_resize(&mut self, handle: WindowHandle, xyhw: Xyhw) -> Result<()> {
        let info = self
            .windows
            .get_mut(&handle)
            .ok_or(TileError::UnknownWindow(handle))?;
        info.dimensions.geometry = xyhw.with_extents(&info.dimensions.extents);
        self.requests.push(Request::MoveResize(handle, xyhw));
        Ok(())
    }

    fn set_state(&mut self, handle: WindowHandle, state: WindowState, on: bool) -> Result<()> {
        let info = self
            .windows
            .get_mut(&handle)
            .ok_or(TileError::UnknownWindow(handle))?;
        info.states.retain(|s| *s != state);
        if on {
            info.states.push(state);
        }
        self.requests.push(Request::SetState(handle, state, on));
        Ok(())
    }

    fn set_decoration(&mut self, handle: WindowHandle, on: bool) -> Result<()> {
        let frame = self.frame;
        let info = self
            .windows
            .get_mut(&handle)
            .ok_or(TileError::UnknownWindow(handle))?;
        info.dimensions.decorated = on;
        info.dimensions.extents = if on { frame } else { Extents::default() };
        self.requests.push(Request::SetDecoration(handle, on));
        Ok(())
    }

    fn activate(&mut self, handle: WindowHandle) -> Result<()> {
        if !self.windows.contains_key(&handle) {
            return Err(TileError::UnknownWindow(handle));
        }
        self.active = Some(handle);
        self.stacking.retain(|h| *h != handle);
        self.stacking.push(handle);
        self.requests.push(Request::Activate(handle));
        Ok(())
    }

    fn set_desktop(&mut self, handle: WindowHandle, desktop: usize) -> Result<()> {
        let info = self
            .windows
            .get_mut(&handle)
            .ok_or(TileError::UnknownWindow(handle))?;
        info.desktop = Some(desktop);
        self.requests.push(Request::SetDesktop(handle, desktop));
        Ok(())
    }

    fn stacking_order(&self) -> Vec<WindowHandle> {
        self.stacking.clone()
    }

    fn client_list(&self) -> Vec<WindowHandle> {
        self.client_list.clone()
    }

    fn active_window(&self) -> Option<WindowHandle> {
        self.active
    }

    fn current_desktop(&self) -> usize {
        self.desktop
    }

    fn current_screen(&self) -> usize {
        crate::models::screen_at(&self.screens, self.pointer.x, self.pointer.y)
    }

    fn desktop_count(&self) -> usize {
        self.desktops
    }

    fn screens(&self) -> Vec<Screen> {
        self.screens.clone()
    }

    fn pointer(&self) -> PointerState {
        self.pointer
    }

    fn get_next_events(&mut self) -> Vec<WindowEvent> {
        std::mem::take(&mut self.events)
    }

    fn wait_readable(&self) -> std::pin::Pin<Box<dyn std::future::Future<Output = ()>>> {
        Box::pin(futures::future::pending())
    }

    fn flush(&self) {}
}
