use crate::config::Config;
use crate::tracker::Tracker;
use crate::window_systems::WindowSystem;
use crate::WindowEvent;
use std::time::Instant;

impl<C: Config, S: WindowSystem> Tracker<C, S> {
    /// Process one notification from the window system.
    /// Returns true if the engine state or any window changed.
    pub fn window_event_handler(&mut self, event: WindowEvent, now: Instant) -> bool {
        match event {
            WindowEvent::Structure(handle) => self.structure_handler(handle, now),
            WindowEvent::Property(handle, atom) => self.property_handler(handle, &atom, now),
            WindowEvent::Root(atom) => self.root_property_handler(&atom),
            WindowEvent::ScreenChange => self.topology_handler(),
            WindowEvent::SendCommand(command) => match self.command_handler(&command) {
                Ok(changed) => changed,
                Err(err) => {
                    tracing::warn!(?command, error = %err, "Command failed");
                    false
                }
            },
        }
    }
}
