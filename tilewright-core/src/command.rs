use crate::models::{Location, WindowHandle};
use serde::{Deserialize, Serialize};

/// Requests from the control surface. A missing location or window means the
/// active one.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub enum Command {
    Tile(Option<Location>),
    Untile(Option<Location>),
    Toggle(Option<Location>),
    CycleLayout {
        step: i32,
        location: Option<Location>,
    },
    SetLayout {
        name: String,
        location: Option<Location>,
    },
    MakeMaster(Option<Location>),
    IncreaseMaster(Option<Location>),
    DecreaseMaster(Option<Location>),
    IncreaseSlave(Option<Location>),
    DecreaseSlave(Option<Location>),
    IncreaseProportion(Option<Location>),
    DecreaseProportion(Option<Location>),
    NextClient(Option<Location>),
    PreviousClient(Option<Location>),
    /// Stop tiling and put every client back where it was before tiling.
    Restore(Option<Location>),
    MoveClientToDesktop {
        window: Option<WindowHandle>,
        desktop: usize,
    },
    MoveClientToScreen {
        window: Option<WindowHandle>,
        screen: usize,
    },
}
