use crate::config::Config;
use crate::models::{Location, WindowHandle, Workspace};
use crate::tracker::Tracker;
use crate::utils::event_bus::StateEvent;
use crate::window_systems::WindowSystem;
use std::collections::BTreeMap;

impl<C: Config, S: WindowSystem> Tracker<C, S> {
    /// Screens or desktops changed. A different number of either rebuilds the
    /// workspace map, a geometry change only retiles.
    pub(crate) fn topology_handler(&mut self) -> bool {
        let screens = self.window_system.screens();
        let desktops = self.window_system.desktop_count().max(1);
        if screens == self.screens && desktops == self.desktops {
            return false;
        }

        if screens.len() == self.screens.len() && desktops == self.desktops {
            tracing::debug!("Screen geometry changed");
            self.handlers.clear();
            self.debounce = None;
            self.screens = screens;
            self.emit(StateEvent::WorkspacesChange);
        } else {
            tracing::info!(screens = screens.len(), desktops, "Topology changed, rebuilding workspaces");
            self.rebuild_workspaces();
        }

        let locations: Vec<Location> = self.workspaces.keys().copied().collect();
        for location in locations {
            self.tile(location);
        }
        true
    }

    /// Create one workspace per desktop and screen and re-home every tracked
    /// client. Layout and tiling state survive for locations that still exist.
    pub(crate) fn rebuild_workspaces(&mut self) {
        self.handlers.clear();
        self.debounce = None;
        self.screens = self.window_system.screens();
        self.desktops = self.window_system.desktop_count().max(1);

        let mut workspaces = BTreeMap::new();
        for desktop in 0..self.desktops {
            for screen in &self.screens {
                let location = Location::new(desktop, screen.id);
                let mut workspace = Workspace::new(location, &self.config);
                if let Some(previous) = self.workspaces.get(&location) {
                    workspace.set_layout(previous.layout());
                    workspace.enabled = previous.enabled;
                }
                workspaces.insert(location, workspace);
            }
        }
        self.workspaces = workspaces;
        self.workplace = Location::new(
            self.clamp_desktop(self.window_system.current_desktop()),
            self.window_system.current_screen(),
        );

        let listed = self.window_system.client_list();
        let mut order: Vec<WindowHandle> = listed
            .iter()
            .copied()
            .filter(|h| self.clients.contains_key(h))
            .collect();
        let mut unlisted: Vec<WindowHandle> = self
            .clients
            .keys()
            .copied()
            .filter(|h| !listed.contains(h))
            .collect();
        unlisted.sort();
        order.append(&mut unlisted);

        let stacking = self.window_system.stacking_order();
        for handle in order {
            let Some(location) = self.clients.get(&handle).map(|c| self.location_for(&c.latest)) else {
                continue;
            };
            if let Some(workspace) = self.workspaces.get_mut(&location) {
                workspace.add_client(handle, &stacking);
            }
            if let Some(client) = self.clients.get_mut(&handle) {
                client.location = location;
                client.unlock();
            }
        }
        self.emit(StateEvent::WorkspacesChange);
    }

    /// The current desktop changed: sticky clients follow it.
    pub(crate) fn desktop_switch_handler(&mut self) -> bool {
        let desktop = self.clamp_desktop(self.window_system.current_desktop());
        if desktop == self.workplace.desktop {
            return false;
        }
        self.workplace.desktop = desktop;
        self.emit(StateEvent::WorkplaceChange);

        let mut sticky: Vec<(WindowHandle, Location)> = self
            .clients
            .values()
            .filter(|c| c.latest.is_sticky() && c.location.desktop != desktop)
            .map(|c| (c.handle, c.location))
            .collect();
        sticky.sort();
        for (handle, location) in sticky {
            let target = Location::new(desktop, location.screen);
            if let Some(source) = self.relocate(handle, target) {
                self.tile_relocated(handle, source, target);
            }
        }
        true
    }
}
