use crate::config::Config;
use crate::models::WindowHandle;
use crate::tracker::Tracker;
use crate::utils::event_bus::StateEvent;
use crate::window_systems::WindowSystem;
use std::collections::BTreeSet;

impl<C: Config, S: WindowSystem> Tracker<C, S> {
    /// Bring the tracked set in line with the window system: release windows
    /// that vanished or stopped being tileable and take in new ones. Running it
    /// again without outside changes does nothing.
    pub fn update_clients(&mut self) -> bool {
        let listed = self.window_system.client_list();
        let mut touched = BTreeSet::new();

        let mut tracked: Vec<WindowHandle> = self.clients.keys().copied().collect();
        tracked.sort();
        for handle in tracked {
            let keep = listed.contains(&handle)
                && self
                    .window_system
                    .window_info(handle)
                    .is_ok_and(|info| self.is_trackable(&info));
            if !keep {
                if let Some(location) = self.detach(handle) {
                    touched.insert(location);
                }
            }
        }

        for handle in listed {
            if self.clients.contains_key(&handle) {
                continue;
            }
            let Ok(info) = self.window_system.window_info(handle) else {
                continue;
            };
            if !self.is_trackable(&info) {
                continue;
            }
            if let Some(location) = self.attach(handle, info) {
                touched.insert(location);
            }
        }

        if touched.is_empty() {
            return false;
        }
        self.emit(StateEvent::ClientsChange);
        for location in touched {
            self.tile(location);
        }
        true
    }

    /// Save the snapshot of every tracked client that changed since its last save.
    pub(crate) fn persist_clients(&mut self) -> usize {
        let mut saved = 0;
        for client in self.clients.values_mut() {
            if client.persist(&self.config) {
                saved += 1;
            }
        }
        saved
    }
}
