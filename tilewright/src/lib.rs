//! Configuration, persistence and logging around the tilewright engine.
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]
mod config;
pub mod utils;

pub use config::*;
