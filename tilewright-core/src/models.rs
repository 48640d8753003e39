//! Objects (such as clients and workspaces) the engine is built from.
mod client;
mod handler_slots;
mod location;
mod manager;
mod pointer;
mod proportions;
mod screen;
mod window;
mod window_state;
mod window_type;
mod workspace;
mod xyhw;

pub mod dto;

pub use client::{cache_key, Client};
pub use handler_slots::{HandlerSlots, Slot, Target};
pub use location::Location;
pub use manager::{Manager, Pool, Role};
pub use pointer::{Pointer, PointerState};
pub use proportions::{Proportions, Table};
pub use screen::{screen_at, Screen};
pub use window::{Dimensions, Extents, WindowHandle, WindowInfo};
pub use window_state::WindowState;
pub use window_type::WindowType;
pub use workspace::{Tiling, Workspace};
pub use xyhw::{Directions, Xyhw};
