use super::Xyhw;
use serde::{Deserialize, Serialize};

/// A physical output. `workarea` is the part of `bbox` not covered by panels.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Screen {
    pub id: usize,
    pub bbox: Xyhw,
    pub workarea: Xyhw,
}

impl Screen {
    #[must_use]
    pub const fn new(id: usize, bbox: Xyhw) -> Self {
        Self {
            id,
            bbox,
            workarea: bbox,
        }
    }

    #[must_use]
    pub const fn contains_point(&self, x: i32, y: i32) -> bool {
        self.bbox.contains_point(x, y)
    }
}

/// Index of the screen containing the given point, falling back to the first screen.
#[must_use]
pub fn screen_at(screens: &[Screen], x: i32, y: i32) -> usize {
    screens
        .iter()
        .find(|s| s.contains_point(x, y))
        .or_else(|| screens.first())
        .map_or(0, |s| s.id)
}
