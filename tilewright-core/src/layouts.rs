mod fullscreen;
mod horizontal;
mod maximized;
mod split;
mod vertical;

use crate::errors::TileError;
use crate::models::{Directions, Manager, WindowHandle, Xyhw};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const VERTICAL_LEFT: &str = "VerticalLeft";
pub const VERTICAL_RIGHT: &str = "VerticalRight";
pub const HORIZONTAL_TOP: &str = "HorizontalTop";
pub const HORIZONTAL_BOTTOM: &str = "HorizontalBottom";
pub const MAXIMIZED: &str = "Maximized";
pub const FULLSCREEN: &str = "Fullscreen";

/// Tiling strategies. Each one is a pair of pure functions over a [`Manager`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Layout {
    /// Masters in a band on the left, slaves stacked on the right.
    #[default]
    VerticalLeft,
    VerticalRight,
    /// Masters in a band at the top, slaves side by side below.
    HorizontalTop,
    HorizontalBottom,
    Maximized,
    Fullscreen,
}

impl Layout {
    pub const ALL: [Self; 6] = [
        Self::VerticalLeft,
        Self::VerticalRight,
        Self::HorizontalTop,
        Self::HorizontalBottom,
        Self::Maximized,
        Self::Fullscreen,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::VerticalLeft => VERTICAL_LEFT,
            Self::VerticalRight => VERTICAL_RIGHT,
            Self::HorizontalTop => HORIZONTAL_TOP,
            Self::HorizontalBottom => HORIZONTAL_BOTTOM,
            Self::Maximized => MAXIMIZED,
            Self::Fullscreen => FULLSCREEN,
        }
    }

    /// Layouts giving every client the whole workarea.
    #[must_use]
    pub const fn is_monocle(self) -> bool {
        matches!(self, Self::Maximized | Self::Fullscreen)
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Layout {
    type Err = TileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|layout| layout.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| TileError::UnknownLayout(s.to_owned()))
    }
}

/// Result of laying out a manager: outer frame per client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arrangement {
    pub placements: Vec<(WindowHandle, Xyhw)>,
    /// Clear OS level maximize state before placing.
    pub unmaximize: bool,
}

/// Compute the outer frame of every client of `manager` inside `workarea`.
#[must_use]
pub fn arrange(layout: Layout, manager: &Manager, workarea: &Xyhw, gap: i32) -> Arrangement {
    let placements = match layout {
        Layout::VerticalLeft => vertical::arrange(manager, workarea, gap, false),
        Layout::VerticalRight => vertical::arrange(manager, workarea, gap, true),
        Layout::HorizontalTop => horizontal::arrange(manager, workarea, gap, false),
        Layout::HorizontalBottom => horizontal::arrange(manager, workarea, gap, true),
        Layout::Maximized => maximized::arrange(manager, workarea, gap),
        Layout::Fullscreen => return fullscreen::arrange(manager, workarea, gap),
    };
    Arrangement {
        placements,
        unmaximize: false,
    }
}

/// Derive proportion changes from the observed outer `geometry` of `handle`
/// after the edges in `directions` moved. Returns true if a table changed.
///
/// Rejected updates leave the proportions as they were: the drag went past
/// the adjustable range and the next increment may succeed again.
pub fn update_proportions(
    layout: Layout,
    manager: &mut Manager,
    workarea: &Xyhw,
    gap: i32,
    handle: WindowHandle,
    geometry: &Xyhw,
    directions: Directions,
) -> bool {
    match layout {
        Layout::VerticalLeft => {
            vertical::update_proportions(manager, workarea, gap, handle, geometry, directions, false)
        }
        Layout::VerticalRight => {
            vertical::update_proportions(manager, workarea, gap, handle, geometry, directions, true)
        }
        Layout::HorizontalTop => horizontal::update_proportions(
            manager, workarea, gap, handle, geometry, directions, false,
        ),
        Layout::HorizontalBottom => horizontal::update_proportions(
            manager, workarea, gap, handle, geometry, directions, true,
        ),
        Layout::Maximized | Layout::Fullscreen => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layouts_parse_from_their_names() {
        for layout in Layout::ALL {
            assert_eq!(layout.name().parse::<Layout>().ok(), Some(layout));
        }
        assert_eq!("maximized".parse::<Layout>().ok(), Some(Layout::Maximized));
        assert!(matches!(
            "Spiral".parse::<Layout>(),
            Err(TileError::UnknownLayout(_))
        ));
    }
}
