//! Shared helpers of the engine.
pub mod event_bus;
pub mod helpers;
