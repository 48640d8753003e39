use crate::config::Config;
use crate::errors::{Result, TileError};
use crate::layouts::Layout;
use crate::models::{Location, Manager, WindowHandle};
use crate::tracker::Tracker;
use crate::utils::event_bus::StateEvent;
use crate::window_systems::WindowSystem;
use crate::Command;

impl<C: Config, S: WindowSystem> Tracker<C, S> {
    /// Execute a control surface request.
    ///
    /// Returns true if anything changed.
    ///
    /// # Errors
    ///
    /// Fails on an unknown layout, a desktop or screen out of range, or when
    /// no window is given and none is active. The engine is left unchanged.
    pub fn command_handler(&mut self, command: &Command) -> Result<bool> {
        tracing::debug!(?command, "Command");
        match command {
            Command::Tile(location) => {
                let location = self.target(*location)?;
                Ok(self.tile_command(location))
            }
            Command::Untile(location) => {
                let location = self.target(*location)?;
                Ok(self.untile(location, false))
            }
            Command::Toggle(location) => {
                let location = self.target(*location)?;
                if self.workspaces.get(&location).is_some_and(|w| w.enabled) {
                    Ok(self.untile(location, false))
                } else {
                    Ok(self.tile_command(location))
                }
            }
            Command::Restore(location) => {
                let location = self.target(*location)?;
                Ok(self.untile(location, true))
            }
            Command::CycleLayout { step, location } => {
                let location = self.target(*location)?;
                if let Some(workspace) = self.workspaces.get_mut(&location) {
                    let layout = workspace.cycle_layout(*step);
                    tracing::debug!(%location, %layout, "Cycled layout");
                }
                self.emit(StateEvent::WorkspacesChange);
                self.tile(location);
                Ok(true)
            }
            Command::SetLayout { name, location } => {
                let location = self.target(*location)?;
                let layout: Layout = name.parse()?;
                let available = self
                    .workspaces
                    .get_mut(&location)
                    .is_some_and(|w| w.set_layout(layout));
                if !available {
                    return Err(TileError::UnknownLayout(name.clone()));
                }
                self.emit(StateEvent::WorkspacesChange);
                self.tile(location);
                Ok(true)
            }
            Command::MakeMaster(location) => {
                let location = self.target(*location)?;
                let Some(handle) = self.active_in(location) else {
                    return Ok(false);
                };
                Ok(self.manager_command(location, |m| m.make_master(handle)))
            }
            Command::IncreaseMaster(location) => {
                let location = self.target(*location)?;
                Ok(self.manager_command(location, Manager::increase_masters))
            }
            Command::DecreaseMaster(location) => {
                let location = self.target(*location)?;
                Ok(self.manager_command(location, Manager::decrease_masters))
            }
            Command::IncreaseSlave(location) => {
                let location = self.target(*location)?;
                Ok(self.manager_command(location, Manager::increase_slaves))
            }
            Command::DecreaseSlave(location) => {
                let location = self.target(*location)?;
                Ok(self.manager_command(location, Manager::decrease_slaves))
            }
            Command::IncreaseProportion(location) => {
                let location = self.target(*location)?;
                Ok(self.manager_command(location, Manager::increase_proportion))
            }
            Command::DecreaseProportion(location) => {
                let location = self.target(*location)?;
                Ok(self.manager_command(location, Manager::decrease_proportion))
            }
            Command::NextClient(location) => {
                let location = self.target(*location)?;
                Ok(self.focus_relative(location, 1))
            }
            Command::PreviousClient(location) => {
                let location = self.target(*location)?;
                Ok(self.focus_relative(location, -1))
            }
            Command::MoveClientToDesktop { window, desktop } => {
                let handle = self.window(*window)?;
                if *desktop >= self.desktops {
                    return Err(TileError::DesktopOutOfRange(*desktop));
                }
                self.window_system.set_desktop(handle, *desktop)?;
                let Some(client) = self.clients.get_mut(&handle) else {
                    return Ok(false);
                };
                client.update(&self.window_system, &self.config);
                let target = Location::new(*desktop, client.location.screen);
                Ok(self.move_client(handle, target))
            }
            Command::MoveClientToScreen { window, screen } => {
                let handle = self.window(*window)?;
                if !self.screens.iter().any(|s| s.id == *screen) {
                    return Err(TileError::ScreenOutOfRange(*screen));
                }
                let Some(client) = self.clients.get(&handle) else {
                    return Ok(false);
                };
                let target = Location::new(client.location.desktop, *screen);
                Ok(self.move_client(handle, target))
            }
        }
    }

    /// Resolve an optional location to an existing workspace, defaulting to
    /// the workplace.
    fn target(&self, location: Option<Location>) -> Result<Location> {
        let location = location.unwrap_or(self.workplace);
        if location.desktop >= self.desktops {
            return Err(TileError::DesktopOutOfRange(location.desktop));
        }
        if !self.screens.iter().any(|s| s.id == location.screen) {
            return Err(TileError::ScreenOutOfRange(location.screen));
        }
        if !self.workspaces.contains_key(&location) {
            return Err(TileError::NoWorkspace(location));
        }
        Ok(location)
    }

    /// The given window or the active one. It must be tracked.
    fn window(&self, window: Option<WindowHandle>) -> Result<WindowHandle> {
        let handle = window
            .or_else(|| self.window_system.active_window())
            .ok_or(TileError::NoActiveWindow)?;
        if !self.clients.contains_key(&handle) {
            return Err(TileError::UnknownWindow(handle));
        }
        Ok(handle)
    }

    fn active_in(&self, location: Location) -> Option<WindowHandle> {
        self.window_system
            .active_window()
            .filter(|h| self.clients.get(h).is_some_and(|c| c.location == location))
    }

    fn tile_command(&mut self, location: Location) -> bool {
        if let Some(workspace) = self.workspaces.get_mut(&location) {
            workspace.enabled = true;
        }
        self.emit(StateEvent::WorkspacesChange);
        self.tile(location)
    }

    fn manager_command(&mut self, location: Location, op: impl FnOnce(&mut Manager) -> bool) -> bool {
        let changed = self
            .workspaces
            .get_mut(&location)
            .is_some_and(|w| op(w.manager_mut()));
        if changed {
            self.emit(StateEvent::WorkspacesChange);
            self.tile(location);
        }
        changed
    }

    /// Activate the client `step` positions away from the active one, or the
    /// first client if none of this workspace is active.
    fn focus_relative(&mut self, location: Location, step: i32) -> bool {
        let Some(workspace) = self.workspaces.get(&location) else {
            return false;
        };
        let manager = workspace.manager();
        let next = match self.active_in(location) {
            Some(active) => manager.relative(active, step),
            None => manager.ordered().first().copied(),
        };
        let Some(next) = next else {
            return false;
        };
        if let Err(err) = self.window_system.activate(next) {
            tracing::warn!(handle = %next, error = %err, "Activation failed");
            return false;
        }
        let stacking = self.window_system.stacking_order();
        if let Some(workspace) = self.workspaces.get_mut(&location) {
            workspace.restack(&stacking);
        }
        true
    }

    fn move_client(&mut self, handle: WindowHandle, target: Location) -> bool {
        match self.relocate(handle, target) {
            Some(source) => {
                self.tile_relocated(handle, source, target);
                true
            }
            None => false,
        }
    }
}
