use crate::config::Config;
use crate::layouts::Layout;
use crate::models::{Location, WindowHandle};
use crate::tracker::Tracker;
use crate::utils::event_bus::StateEvent;
use crate::window_systems::WindowSystem;
use crate::Atom;
use std::time::Instant;

impl<C: Config, S: WindowSystem> Tracker<C, S> {
    pub(crate) fn property_handler(&mut self, handle: WindowHandle, atom: &Atom, now: Instant) -> bool {
        match atom {
            Atom::WmState => self.state_handler(handle, now),
            Atom::WmDesktop => self.window_desktop_handler(handle),
            Atom::WmName => {
                let Some(client) = self.clients.get_mut(&handle) else {
                    return false;
                };
                client.update(&self.window_system, &self.config)
            }
            _ => false,
        }
    }

    pub(crate) fn root_property_handler(&mut self, atom: &Atom) -> bool {
        match atom {
            Atom::ClientList | Atom::ActiveWindow => {
                let changed = self.update_clients();
                if *atom == Atom::ActiveWindow {
                    let stacking = self.window_system.stacking_order();
                    for workspace in self.workspaces.values_mut() {
                        workspace.restack(&stacking);
                    }
                }
                self.persist_clients();
                changed
            }
            Atom::CurrentDesktop => self.desktop_switch_handler(),
            Atom::NumberOfDesktops | Atom::DesktopGeometry | Atom::Workarea => {
                self.topology_handler()
            }
            _ => false,
        }
    }

    /// Maximized clients are put back into the layout, and the workspace
    /// switches to the maximized layout unless the client just appeared.
    /// Clients that stop being tileable (minimized, fullscreen ...) are
    /// released.
    fn state_handler(&mut self, handle: WindowHandle, now: Instant) -> bool {
        let Some(client) = self.clients.get_mut(&handle) else {
            return self.update_clients();
        };
        if !client.update(&self.window_system, &self.config) {
            return self.update_clients();
        }
        let info = client.latest.clone();
        let location = client.location;

        if !self.is_trackable(&info) {
            tracing::debug!(%handle, "Window no longer tileable");
            if let Some(location) = self.detach(handle) {
                self.emit(StateEvent::ClientsChange);
                self.tile(location);
            }
            return true;
        }
        if !info.is_maximized() {
            return false;
        }

        let Some(client) = self.clients.get_mut(&handle) else {
            return false;
        };
        client.unmaximize(&mut self.window_system);
        if !client.is_new(now) {
            let switched = self
                .workspaces
                .get_mut(&location)
                .is_some_and(|w| w.enabled && w.set_layout(Layout::Maximized));
            if switched {
                tracing::debug!(%handle, %location, "Maximize request, switching layout");
                self.emit(StateEvent::WorkspacesChange);
            }
            if let Err(err) = self.window_system.activate(handle) {
                tracing::warn!(%handle, error = %err, "Activation failed");
            }
        }
        self.tile(location)
    }

    /// Follow a client to the desktop it was sent to, keeping its screen.
    fn window_desktop_handler(&mut self, handle: WindowHandle) -> bool {
        let Some(client) = self.clients.get_mut(&handle) else {
            return false;
        };
        if !client.update(&self.window_system, &self.config) {
            return false;
        }
        let screen = client.location.screen;
        let latest = client.latest.clone();
        let desktop = self.location_for(&latest).desktop;
        let target = Location::new(desktop, screen);
        match self.relocate(handle, target) {
            Some(source) => {
                self.tile_relocated(handle, source, target);
                true
            }
            None => false,
        }
    }
}
