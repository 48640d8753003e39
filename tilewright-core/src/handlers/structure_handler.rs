use crate::config::Config;
use crate::models::{screen_at, Directions, Location, Slot, Target, WindowHandle, Xyhw};
use crate::tracker::Tracker;
use crate::utils::event_bus::StateEvent;
use crate::window_systems::WindowSystem;
use std::time::Instant;

impl<C: Config, S: WindowSystem> Tracker<C, S> {
    /// Classify a geometry change of a tracked client as a resize or a move.
    pub(crate) fn structure_handler(&mut self, handle: WindowHandle, now: Instant) -> bool {
        let Some(client) = self.clients.get_mut(&handle) else {
            return false;
        };
        let previous = client.geometry();
        if !client.update(&self.window_system, &self.config) {
            return false;
        }
        let current = client.geometry();
        let location = client.location;
        if current == previous || client.is_echo(&current) {
            return false;
        }
        if !self.workspaces.get(&location).is_some_and(|w| w.enabled) {
            return false;
        }

        let directions = current.directions_from(&previous);
        let every_edge = directions.top && directions.right && directions.bottom && directions.left;
        let resized = current.is_resized_from(&previous);
        let moved = current.is_moved_from(&previous);

        if resized && !every_edge {
            if self.handlers.movement.is_some() {
                return false;
            }
            self.resize_handler(handle, location, &current, directions, now)
        } else if moved && !resized {
            if self.handlers.resize.is_some() {
                return false;
            }
            self.move_handler(handle, location, now)
        } else {
            tracing::trace!(%handle, "Ambiguous geometry change");
            false
        }
    }

    /// Live resize: derive proportions and retile right away. The dragged
    /// client is locked so it keeps the geometry the user gives it.
    fn resize_handler(
        &mut self,
        handle: WindowHandle,
        location: Location,
        geometry: &Xyhw,
        directions: Directions,
        now: Instant,
    ) -> bool {
        arm(&mut self.handlers.resize, handle);
        self.poll_pointer(now);

        let Some(workarea) = self.workarea(location) else {
            return false;
        };
        let gap = self.config.gap();
        let updated = self
            .workspaces
            .get_mut(&location)
            .is_some_and(|w| w.update_proportions(&workarea, gap, handle, geometry, directions));
        if updated {
            self.emit(StateEvent::WorkspacesChange);
        }
        if let Some(client) = self.clients.get_mut(&handle) {
            client.lock();
        }
        self.tile(location);

        if !self.pointer.pressed() {
            self.arm_debounce(now);
        }
        true
    }

    /// Speculative move: find what the client would be dropped onto.
    fn move_handler(&mut self, handle: WindowHandle, location: Location, now: Instant) -> bool {
        arm(&mut self.handlers.movement, handle);
        self.poll_pointer(now);

        let dragging = self.handlers.movement.is_some_and(|s| s.dragging);
        let (x, y) = (self.pointer.state.x, self.pointer.state.y);
        let hovered = Location::new(location.desktop, screen_at(&self.screens, x, y));

        let target_client = self
            .clients
            .values()
            .filter(|c| c.handle != handle && c.location == hovered)
            .find(|c| c.geometry().contains_point(x, y))
            .map(|c| c.handle);
        self.handlers.swap_client = target_client.map(|target| Slot {
            source: handle,
            target: Some(Target::Client(target)),
            dragging,
        });

        let other_screen = hovered != location && self.workspaces.contains_key(&hovered);
        self.handlers.swap_screen = other_screen.then_some(Slot {
            source: handle,
            target: Some(Target::Workspace(hovered)),
            dragging,
        });

        if !self.pointer.pressed() {
            self.arm_debounce(now);
        }
        false
    }
}

/// Keep a pending slot for `handle`, replacing one for another client.
fn arm(slot: &mut Option<Slot>, handle: WindowHandle) {
    match slot {
        Some(pending) if pending.source == handle => {}
        _ => *slot = Some(Slot::new(handle)),
    }
}
