//! Rectangles used for windows, screens and layout slots.
#![allow(clippy::module_name_repetitions)]
use serde::{Deserialize, Serialize};

use super::Extents;

/// A rectangle with x,y from the top left corner.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, Copy, Hash)]
pub struct Xyhw {
    x: i32,
    y: i32,
    h: i32,
    w: i32,
}

/// Which edges of a rectangle moved between two observations.
#[allow(clippy::struct_excessive_bools)]
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Directions {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl Directions {
    /// Swap the horizontal edges, used for mirrored layouts.
    #[must_use]
    pub const fn mirrored(self) -> Self {
        Self {
            top: self.top,
            right: self.left,
            bottom: self.bottom,
            left: self.right,
        }
    }

    /// Swap axis, used to express a horizontal layout as a vertical one.
    #[must_use]
    pub const fn transposed(self) -> Self {
        Self {
            top: self.left,
            right: self.bottom,
            bottom: self.right,
            left: self.top,
        }
    }
}

impl Xyhw {
    #[must_use]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, h, w }
    }

    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }
    #[must_use]
    pub const fn h(&self) -> i32 {
        self.h
    }
    #[must_use]
    pub const fn w(&self) -> i32 {
        self.w
    }
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x + self.w
    }
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }

    #[must_use]
    pub const fn contains_point(&self, x: i32, y: i32) -> bool {
        let max_x = self.x + self.w;
        let max_y = self.y + self.h;
        (self.x <= x && x <= max_x) && (self.y <= y && y <= max_y)
    }

    #[must_use]
    pub const fn center(&self) -> (i32, i32) {
        let x = self.x + (self.w / 2);
        let y = self.y + (self.h / 2);
        (x, y)
    }

    /// Shrink the rectangle by `gap` pixels on every edge.
    #[must_use]
    pub fn shrink(&self, gap: i32) -> Self {
        Self {
            x: self.x + gap,
            y: self.y + gap,
            w: (self.w - 2 * gap).max(0),
            h: (self.h - 2 * gap).max(0),
        }
    }

    /// Remove decoration extents from an outer frame, giving the client area.
    #[must_use]
    pub fn without_extents(&self, extents: &Extents) -> Self {
        Self {
            x: self.x + extents.left,
            y: self.y + extents.top,
            w: (self.w - extents.left - extents.right).max(0),
            h: (self.h - extents.top - extents.bottom).max(0),
        }
    }

    /// Add decoration extents to a client area, giving the outer frame.
    #[must_use]
    pub fn with_extents(&self, extents: &Extents) -> Self {
        Self {
            x: self.x - extents.left,
            y: self.y - extents.top,
            w: self.w + extents.left + extents.right,
            h: self.h + extents.top + extents.bottom,
        }
    }

    /// Swap the x and y axis.
    #[must_use]
    pub const fn transposed(&self) -> Self {
        Self {
            x: self.y,
            y: self.x,
            w: self.h,
            h: self.w,
        }
    }

    /// Reflect horizontally inside `area`.
    #[must_use]
    pub const fn mirrored_in(&self, area: &Self) -> Self {
        Self {
            x: area.x + area.x + area.w - (self.x + self.w),
            y: self.y,
            w: self.w,
            h: self.h,
        }
    }

    #[must_use]
    pub const fn is_resized_from(&self, previous: &Self) -> bool {
        self.w != previous.w || self.h != previous.h
    }

    #[must_use]
    pub const fn is_moved_from(&self, previous: &Self) -> bool {
        self.x != previous.x || self.y != previous.y
    }

    /// Edges that changed position compared to `previous`.
    #[must_use]
    pub const fn directions_from(&self, previous: &Self) -> Directions {
        Directions {
            top: self.y != previous.y,
            right: self.right() != previous.right(),
            bottom: self.bottom() != previous.bottom(),
            left: self.x != previous.x,
        }
    }
}
