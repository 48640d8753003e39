use crate::config::{Config, IgnoreRules};
use crate::models::dto::TrackerState;
use crate::models::{
    screen_at, Client, HandlerSlots, Location, Pointer, Screen, WindowHandle, WindowInfo,
    Workspace, Xyhw,
};
use crate::utils::event_bus::{EventBus, StateEvent, StateMessage};
use crate::window_systems::WindowSystem;
use std::collections::{BTreeMap, HashMap};
use std::time::Instant;
use tokio::sync::mpsc;

/// Owns every workspace and tracked client, and turns window system
/// notifications into manager and layout calls.
#[derive(Debug)]
pub struct Tracker<C, S> {
    pub config: C,
    pub window_system: S,
    pub clients: HashMap<WindowHandle, Client>,
    pub workspaces: BTreeMap<Location, Workspace>,
    pub handlers: HandlerSlots,
    pub pointer: Pointer,
    pub(crate) debounce: Option<Instant>,
    pub(crate) screens: Vec<Screen>,
    pub(crate) desktops: usize,
    pub(crate) workplace: Location,
    pub(crate) ignore_rules: IgnoreRules,
    event_bus: EventBus,
}

impl<C, S> Tracker<C, S>
where
    C: Config,
    S: WindowSystem,
{
    /// Build the workspaces for the current topology and track the existing windows.
    pub fn new(config: C, window_system: S) -> Self {
        let ignore_rules = IgnoreRules::new(&config.ignore_rules());
        let mut tracker = Self {
            config,
            window_system,
            clients: HashMap::new(),
            workspaces: BTreeMap::new(),
            handlers: HandlerSlots::default(),
            pointer: Pointer::default(),
            debounce: None,
            screens: vec![],
            desktops: 0,
            workplace: Location::default(),
            ignore_rules,
            event_bus: EventBus::default(),
        };
        tracker.rebuild_workspaces();
        tracker.update_clients();
        tracker
    }

    /// Observe state changes.
    pub fn subscribe(&mut self) -> mpsc::Receiver<StateMessage> {
        self.event_bus.subscribe()
    }

    /// Desktop and screen the user is working on.
    #[must_use]
    pub const fn workplace(&self) -> Location {
        self.workplace
    }

    /// Put every tracked client back in its original state.
    pub fn shutdown(&mut self) {
        tracing::info!(clients = self.clients.len(), "Restoring clients");
        for client in self.clients.values_mut() {
            client.restore(&mut self.window_system, true);
        }
        self.clients.clear();
        self.handlers.clear();
        self.debounce = None;
        self.window_system.flush();
    }

    #[must_use]
    pub fn state(&self) -> TrackerState {
        TrackerState::from(self)
    }

    pub(crate) fn emit(&mut self, event: StateEvent) {
        if !self.event_bus.has_subscribers() {
            return;
        }
        let message = StateMessage {
            event,
            state: self.state(),
        };
        self.event_bus.publish(&message);
    }

    pub(crate) fn workarea(&self, location: Location) -> Option<Xyhw> {
        self.screens
            .iter()
            .find(|s| s.id == location.screen)
            .map(|s| s.workarea)
    }

    pub(crate) fn clamp_desktop(&self, desktop: usize) -> usize {
        desktop.min(self.desktops.saturating_sub(1))
    }

    /// Where a window belongs: its desktop (the current one when sticky) on the
    /// screen containing its center.
    pub(crate) fn location_for(&self, info: &WindowInfo) -> Location {
        let desktop = match info.desktop {
            Some(desktop) if !info.is_sticky() && desktop < self.desktops => desktop,
            _ => self.window_system.current_desktop(),
        };
        let (x, y) = info.dimensions.geometry.center();
        Location::new(self.clamp_desktop(desktop), screen_at(&self.screens, x, y))
    }

    pub(crate) fn is_trackable(&self, info: &WindowInfo) -> bool {
        let geometry = info.dimensions.geometry;
        !info.is_special()
            && geometry.w() > 0
            && geometry.h() > 0
            && !self.ignore_rules.matches(info)
    }

    /// Start tracking a window. Returns the location it joined.
    pub(crate) fn attach(&mut self, handle: WindowHandle, info: WindowInfo) -> Option<Location> {
        let location = self.location_for(&info);
        if !self.workspaces.contains_key(&location) {
            tracing::warn!(%handle, %location, "No workspace for window");
            return None;
        }
        let mut client = Client::new(handle, info, location, &self.config);
        if !self.config.window_decoration() {
            client.set_decoration(&mut self.window_system, false);
        }
        let stacking = self.window_system.stacking_order();
        if let Some(workspace) = self.workspaces.get_mut(&location) {
            workspace.add_client(handle, &stacking);
        }
        self.clients.insert(handle, client);
        tracing::debug!(%handle, %location, "Tracking window");
        Some(location)
    }

    /// Stop tracking a window and restore it if it still exists. Returns the
    /// location it left.
    pub(crate) fn detach(&mut self, handle: WindowHandle) -> Option<Location> {
        let mut client = self.clients.remove(&handle)?;
        for workspace in self.workspaces.values_mut() {
            workspace.remove_client(handle);
        }
        self.handlers.forget(handle);
        if self.window_system.window_info(handle).is_ok() {
            client.restore(&mut self.window_system, true);
        }
        tracing::debug!(%handle, location = %client.location, "Untracking window");
        Some(client.location)
    }

    /// Lay out a workspace and request the resulting geometries.
    pub(crate) fn tile(&mut self, location: Location) -> bool {
        let Some(workspace) = self.workspaces.get(&location) else {
            return false;
        };
        if !workspace.enabled {
            return false;
        }
        let Some(workarea) = self.workarea(location) else {
            return false;
        };
        let arrangement = workspace.arrange(&workarea, self.config.gap());
        tracing::trace!(%location, layout = %workspace.layout(), "Tiling");
        for (handle, frame) in arrangement.placements {
            if let Some(client) = self.clients.get_mut(&handle) {
                if arrangement.unmaximize {
                    client.unmaximize(&mut self.window_system);
                }
                client.move_resize(&mut self.window_system, frame);
            }
        }
        self.emit(StateEvent::WindowsChange);
        true
    }

    /// Stop tiling a workspace and restore its clients.
    pub(crate) fn untile(&mut self, location: Location, to_original: bool) -> bool {
        let Some(workspace) = self.workspaces.get_mut(&location) else {
            return false;
        };
        workspace.enabled = false;
        for client in self.clients.values_mut().filter(|c| c.location == location) {
            client.restore(&mut self.window_system, to_original);
        }
        self.emit(StateEvent::WorkspacesChange);
        true
    }

    /// Move a client to the manager of another workspace keeping its roles.
    /// Returns the location it came from.
    pub(crate) fn relocate(&mut self, handle: WindowHandle, target: Location) -> Option<Location> {
        let source = self.clients.get(&handle)?.location;
        if source == target || !self.workspaces.contains_key(&target) {
            return None;
        }
        let roles = self
            .workspaces
            .get_mut(&source)
            .map(|workspace| {
                let roles = workspace.roles(handle);
                workspace.remove_client(handle);
                roles
            })
            .unwrap_or_default();
        let stacking = self.window_system.stacking_order();
        if let Some(workspace) = self.workspaces.get_mut(&target) {
            workspace.add_client_with_roles(handle, &roles, &stacking);
        }
        if let Some(client) = self.clients.get_mut(&handle) {
            client.location = target;
        }
        tracing::debug!(%handle, from = %source, to = %target, "Moved client");
        self.emit(StateEvent::ClientsChange);
        Some(source)
    }

    /// Retile both ends of a relocation. A client dropped on a workspace that
    /// does not tile gets its original geometry back.
    pub(crate) fn tile_relocated(&mut self, handle: WindowHandle, source: Location, target: Location) {
        self.tile(source);
        let target_enabled = self.workspaces.get(&target).is_some_and(|w| w.enabled);
        if target_enabled {
            self.tile(target);
        } else if let Some(client) = self.clients.get_mut(&handle) {
            client.restore(&mut self.window_system, true);
        }
    }

    pub(crate) fn arm_debounce(&mut self, now: Instant) {
        self.debounce = Some(now + self.config.debounce());
    }
}
