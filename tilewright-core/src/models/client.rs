//! A tracked window.
use super::{Extents, Location, WindowHandle, WindowInfo, WindowState, Xyhw};
use crate::config::Config;
use crate::window_systems::WindowSystem;
use sha2::{Digest, Sha256};
use std::time::{Duration, Instant};

/// Clients younger than this are considered brand new.
const NEW_CLIENT: Duration = Duration::from_millis(1000);

/// One tracked window together with the state it had before tiling.
#[derive(Debug, Clone)]
pub struct Client {
    pub handle: WindowHandle,
    /// Snapshot taken when tracking started, or loaded from the cache.
    pub original: WindowInfo,
    /// Last known state: refreshed from the window system, and from the
    /// engine's own placements.
    pub latest: WindowInfo,
    pub location: Location,
    /// Last outer frame requested by the engine.
    pub placed: Option<Xyhw>,
    /// Snapshot most recently handed to the cache.
    persisted: Option<WindowInfo>,
    locked: bool,
    created: Instant,
}

impl Client {
    /// Start tracking a window. A cached snapshot for the same class takes the
    /// place of the observed original geometry.
    pub fn new(handle: WindowHandle, info: WindowInfo, location: Location, config: &impl Config) -> Self {
        let mut original = info.clone();
        if let Some(cached) = config.load_client(&cache_key(&info.class)) {
            tracing::debug!(%handle, class = %info.class, "Using cached geometry");
            original.dimensions = cached.dimensions;
            original.states = cached.states;
        }
        Self {
            handle,
            original,
            latest: info,
            location,
            placed: None,
            persisted: None,
            locked: false,
            created: Instant::now(),
        }
    }

    #[must_use]
    pub fn is_new(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created) < NEW_CLIENT
    }

    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.locked
    }

    /// Reject the next placement request.
    pub fn lock(&mut self) {
        self.locked = true;
    }

    pub fn unlock(&mut self) {
        self.locked = false;
    }

    #[must_use]
    pub fn geometry(&self) -> Xyhw {
        self.latest.dimensions.geometry
    }

    /// True if `geometry` is the outcome of the engine's own last placement.
    #[must_use]
    pub fn is_echo(&self, geometry: &Xyhw) -> bool {
        self.placed.as_ref() == Some(geometry)
    }

    /// Refresh `latest` from the window system and persist the snapshot.
    /// Returns false if the window no longer resolves.
    pub fn update<S: WindowSystem>(&mut self, window_system: &S, config: &impl Config) -> bool {
        match window_system.window_info(self.handle) {
            Ok(info) => {
                self.latest = info;
                self.persist(config);
                true
            }
            Err(err) => {
                tracing::debug!(handle = %self.handle, error = %err, "Window vanished");
                false
            }
        }
    }

    /// Save the snapshot keyed by the window class. Nothing is written
    /// unless it changed since the last save.
    pub fn persist(&mut self, config: &impl Config) -> bool {
        let snapshot = self.snapshot();
        if self.persisted.as_ref() == Some(&snapshot) {
            return false;
        }
        config.save_client(&cache_key(&snapshot.class), &snapshot);
        self.persisted = Some(snapshot);
        true
    }

    /// Place the outer frame of the window. A locked client rejects the
    /// request once and unlocks itself.
    pub fn move_resize<S: WindowSystem>(&mut self, window_system: &mut S, frame: Xyhw) -> bool {
        if self.locked {
            tracing::trace!(handle = %self.handle, "Locked, skipping placement");
            self.unlock();
            return false;
        }
        let dimensions = &self.latest.dimensions;
        let extents = if dimensions.decorated {
            dimensions.extents
        } else {
            Extents::default()
        };
        match window_system.move_resize(self.handle, frame.without_extents(&extents)) {
            Ok(()) => {
                self.placed = Some(frame);
                self.latest.dimensions.geometry = frame;
                true
            }
            Err(err) => {
                tracing::warn!(handle = %self.handle, error = %err, "Placement failed");
                false
            }
        }
    }

    pub fn set_decoration<S: WindowSystem>(&mut self, window_system: &mut S, on: bool) {
        if self.latest.dimensions.decorated == on {
            return;
        }
        if let Err(err) = window_system.set_decoration(self.handle, on) {
            tracing::warn!(handle = %self.handle, error = %err, "Decoration change failed");
            return;
        }
        if let Ok(info) = window_system.window_info(self.handle) {
            self.latest = info;
        }
    }

    /// Clear the window system's maximize state.
    pub fn unmaximize<S: WindowSystem>(&mut self, window_system: &mut S) {
        for state in [WindowState::MaximizedVert, WindowState::MaximizedHorz] {
            if self.latest.has_state(state) {
                if let Err(err) = window_system.set_state(self.handle, state, false) {
                    tracing::warn!(handle = %self.handle, error = %err, "Unmaximize failed");
                }
            }
        }
        self.latest
            .states
            .retain(|s| !matches!(s, WindowState::MaximizedVert | WindowState::MaximizedHorz));
    }

    /// Write back the original or the latest geometry, decoration and
    /// maximize state.
    pub fn restore<S: WindowSystem>(&mut self, window_system: &mut S, to_original: bool) {
        let snapshot = if to_original {
            self.original.clone()
        } else {
            self.latest.clone()
        };
        tracing::debug!(handle = %self.handle, to_original, "Restoring");

        self.unlock();
        self.set_decoration(window_system, snapshot.dimensions.decorated);
        self.move_resize(window_system, snapshot.dimensions.geometry);
        for state in [WindowState::MaximizedVert, WindowState::MaximizedHorz] {
            if snapshot.has_state(state) {
                if let Err(err) = window_system.set_state(self.handle, state, true) {
                    tracing::warn!(handle = %self.handle, error = %err, "Maximize failed");
                }
            }
        }
        self.placed = None;
    }

    fn snapshot(&self) -> WindowInfo {
        WindowInfo {
            dimensions: self.original.dimensions,
            states: self.original.states.clone(),
            ..self.latest.clone()
        }
    }
}

/// Stable cache key of a window class.
#[must_use]
pub fn cache_key(class: &str) -> String {
    format!("{:x}", Sha256::digest(class.as_bytes()))
}
