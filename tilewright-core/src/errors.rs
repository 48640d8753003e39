use crate::models::{Location, WindowHandle};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TileError>;

#[derive(Debug, Error)]
pub enum TileError {
    #[error("Unknown window {0}")]
    UnknownWindow(WindowHandle),
    #[error("Could not parse layout: {0}")]
    UnknownLayout(String),
    #[error("No active window")]
    NoActiveWindow,
    #[error("No workspace at {0}")]
    NoWorkspace(Location),
    #[error("Desktop {0} is out of range")]
    DesktopOutOfRange(usize),
    #[error("Screen {0} is out of range")]
    ScreenOutOfRange(usize),
    #[error("Invalid ignore rule: {0}")]
    InvalidRule(#[from] regex::Error),
}
