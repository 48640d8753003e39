use crate::config::Config;
use crate::models::{Location, Slot, Target, WindowHandle};
use crate::tracker::Tracker;
use crate::utils::event_bus::StateEvent;
use crate::window_systems::WindowSystem;
use std::collections::BTreeSet;
use std::time::Instant;

impl<C: Config, S: WindowSystem> Tracker<C, S> {
    /// Commit pending actions once the debounce deadline passed.
    pub fn debounce_handler(&mut self, now: Instant) -> bool {
        match self.debounce {
            Some(deadline) if now >= deadline => {}
            _ => return false,
        }
        self.debounce = None;
        // Still dragging. The release re-arms the deadline.
        if self.pointer.pressed() {
            return false;
        }
        self.commit()
    }

    /// Apply the pending actions in order: screen swap, client swap, then
    /// snap moved or resized clients back into the layout. Every slot is
    /// cleared and each affected workspace is retiled once.
    pub fn commit(&mut self) -> bool {
        let slots = std::mem::take(&mut self.handlers);
        self.debounce = None;
        let mut retile = BTreeSet::new();

        if let Some(Slot {
            source,
            target: Some(Target::Workspace(target)),
            dragging: true,
        }) = slots.swap_screen
        {
            if let Some(origin) = self.relocate(source, target) {
                retile.insert(origin);
                retile.insert(target);
                let target_enabled = self.workspaces.get(&target).is_some_and(|w| w.enabled);
                if !target_enabled {
                    if let Some(client) = self.clients.get_mut(&source) {
                        client.restore(&mut self.window_system, true);
                    }
                }
            }
        }

        if let Some(Slot {
            source,
            target: Some(Target::Client(target)),
            dragging: true,
        }) = slots.swap_client
        {
            if let Some(location) = self.swap_clients(source, target) {
                retile.insert(location);
            }
        }

        if let Some(slot) = slots.movement.or(slots.resize) {
            for client in self.clients.values_mut() {
                client.unlock();
            }
            if let Some(client) = self.clients.get(&slot.source) {
                retile.insert(client.location);
            }
        }

        let changed = !retile.is_empty();
        for location in retile {
            self.tile(location);
        }
        changed
    }

    /// Exchange two clients of the same workspace.
    fn swap_clients(&mut self, a: WindowHandle, b: WindowHandle) -> Option<Location> {
        let location = self.clients.get(&a)?.location;
        if self.clients.get(&b)?.location != location {
            return None;
        }
        let swapped = self.workspaces.get_mut(&location)?.manager_mut().swap(a, b);
        if !swapped {
            return None;
        }
        tracing::debug!(%a, %b, %location, "Swapped clients");
        self.emit(StateEvent::ClientsChange);
        Some(location)
    }
}
