//! Window information as reported by the window system.
#![allow(clippy::module_name_repetitions)]

use super::WindowState;
use super::WindowType;
use super::Xyhw;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A backend-agnostic handle to a window used to identify it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct WindowHandle(pub u32);

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Size of the frame a decorating window manager draws around a window.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Extents {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

/// Geometry of a window. `geometry` is the outer frame including `extents`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dimensions {
    pub geometry: Xyhw,
    pub extents: Extents,
    pub decorated: bool,
}

/// Everything the engine needs to know about a window at one point in time.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowInfo {
    pub class: String,
    pub name: String,
    pub types: Vec<WindowType>,
    pub states: Vec<WindowState>,
    /// `None` when the window is shown on all desktops.
    pub desktop: Option<usize>,
    pub dimensions: Dimensions,
}

impl WindowInfo {
    #[must_use]
    pub fn has_state(&self, state: WindowState) -> bool {
        self.states.contains(&state)
    }

    #[must_use]
    pub fn is_maximized(&self) -> bool {
        self.has_state(WindowState::MaximizedVert) || self.has_state(WindowState::MaximizedHorz)
    }

    #[must_use]
    pub fn is_minimized(&self) -> bool {
        self.has_state(WindowState::Hidden)
    }

    #[must_use]
    pub fn is_sticky(&self) -> bool {
        self.desktop.is_none() || self.has_state(WindowState::Sticky)
    }

    /// Special windows (docks, dialogs, menus, modal or hidden windows ...) are never tiled.
    #[must_use]
    pub fn is_special(&self) -> bool {
        self.types.iter().any(|t| t.is_special())
            || self.states.iter().any(|s| s.is_special())
    }
}
