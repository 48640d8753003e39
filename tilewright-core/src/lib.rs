//! Tiling engine for stacking window managers.
// We deny clippy pedantic lints, primarily to keep code as correct as possible.
#![warn(clippy::pedantic)]
// Geometry math converts between pixels and proportions all over the place.
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
mod command;
pub mod config;
pub mod errors;
mod event_loop;
mod handlers;
pub mod layouts;
pub mod models;
mod tracker;
pub mod utils;
mod window_event;
pub mod window_systems;

pub use command::Command;
pub use config::Config;
pub use errors::{Result, TileError};
pub use layouts::Layout;
pub use tracker::Tracker;
pub use utils::event_bus::{StateEvent, StateMessage};
pub use window_event::{Atom, WindowEvent};
pub use window_systems::WindowSystem;
