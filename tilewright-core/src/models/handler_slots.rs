use super::{Location, WindowHandle};
use serde::{Deserialize, Serialize};

/// What a pending move would be dropped onto.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Client(WindowHandle),
    Workspace(Location),
}

/// A pending user action on one client.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub source: WindowHandle,
    pub target: Option<Target>,
    /// Latched once the pointer button was held long enough.
    pub dragging: bool,
}

impl Slot {
    #[must_use]
    pub const fn new(source: WindowHandle) -> Self {
        Self {
            source,
            target: None,
            dragging: false,
        }
    }
}

/// The pending actions collected until the next commit.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HandlerSlots {
    pub resize: Option<Slot>,
    pub movement: Option<Slot>,
    pub swap_client: Option<Slot>,
    pub swap_screen: Option<Slot>,
}

impl HandlerSlots {
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        self.resize.is_none()
            && self.movement.is_none()
            && self.swap_client.is_none()
            && self.swap_screen.is_none()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Mark every pending action as a drag.
    pub fn latch_dragging(&mut self) {
        for slot in [
            &mut self.resize,
            &mut self.movement,
            &mut self.swap_client,
            &mut self.swap_screen,
        ]
        .into_iter()
        .flatten()
        {
            slot.dragging = true;
        }
    }

    /// Forget everything pending for a client that went away.
    pub fn forget(&mut self, handle: WindowHandle) {
        for slot in [
            &mut self.resize,
            &mut self.movement,
            &mut self.swap_client,
            &mut self.swap_screen,
        ] {
            let involved = slot.is_some_and(|s| {
                s.source == handle || s.target == Some(Target::Client(handle))
            });
            if involved {
                *slot = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forgetting_a_client_clears_slots_pointing_at_it() {
        let mut slots = HandlerSlots {
            movement: Some(Slot::new(WindowHandle(1))),
            swap_client: Some(Slot {
                source: WindowHandle(1),
                target: Some(Target::Client(WindowHandle(2))),
                dragging: false,
            }),
            ..HandlerSlots::default()
        };
        slots.forget(WindowHandle(2));
        assert!(slots.swap_client.is_none());
        assert!(slots.movement.is_some());
        slots.forget(WindowHandle(1));
        assert!(slots.is_idle());
    }

    #[test]
    fn latching_marks_every_pending_slot() {
        let mut slots = HandlerSlots {
            resize: Some(Slot::new(WindowHandle(1))),
            ..HandlerSlots::default()
        };
        slots.latch_dragging();
        assert!(slots.resize.is_some_and(|s| s.dragging));
    }
}
