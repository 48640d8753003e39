use serde::{Deserialize, Serialize};
use std::fmt;

/// A (desktop, screen) pair. Every location owns exactly one workspace.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    pub desktop: usize,
    pub screen: usize,
}

impl Location {
    #[must_use]
    pub const fn new(desktop: usize, screen: usize) -> Self {
        Self { desktop, screen }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "desktop {} screen {}", self.desktop, self.screen)
    }
}
