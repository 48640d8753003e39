use crate::config::Config;
use crate::tracker::Tracker;
use crate::utils::event_bus::StateEvent;
use crate::window_systems::WindowSystem;
use std::time::Instant;

impl<C: Config, S: WindowSystem> Tracker<C, S> {
    /// Periodic pointer poll. A button release arms the debounce of pending
    /// actions; entering another screen changes the workplace.
    pub fn pointer_handler(&mut self, now: Instant) -> bool {
        if self.poll_pointer(now) && !self.handlers.is_idle() {
            self.arm_debounce(now);
        }

        let screen = self.window_system.current_screen();
        if screen == self.workplace.screen {
            return false;
        }
        tracing::debug!(from = self.workplace.screen, to = screen, "Screen changed");
        self.workplace.screen = screen;
        self.emit(StateEvent::WorkplaceChange);
        true
    }

    /// Refresh the pointer state. Returns true if a button was released.
    pub(crate) fn poll_pointer(&mut self, now: Instant) -> bool {
        let state = self.window_system.pointer();
        let released = self.pointer.update(state, now);
        if self.pointer.held_for(self.config.drag_threshold(), now) {
            self.handlers.latch_dragging();
        }
        released
    }
}
