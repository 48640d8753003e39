mod ignore_rule;
mod pool_limits;

use crate::layouts::Layout;
use crate::models::WindowInfo;
use std::time::Duration;

pub use ignore_rule::{IgnoreRule, IgnoreRules};
pub use pool_limits::PoolLimits;

pub trait Config {
    /// Start with tiling enabled on every workspace.
    fn tiling_enabled(&self) -> bool;

    /// Layouts available on every workspace, in cycling order.
    fn layouts(&self) -> Vec<Layout>;

    /// Layout a new workspace starts with.
    fn initial_layout(&self) -> Layout;

    /// Pixels kept free around and between tiled windows.
    fn gap(&self) -> i32;

    /// Initial share of the master band.
    fn proportion(&self) -> f64;

    /// Smallest share any proportion entry may shrink to.
    fn proportion_min(&self) -> f64;

    /// Amount the master band grows or shrinks per command.
    fn proportion_step(&self) -> f64;

    fn masters(&self) -> PoolLimits;

    fn slaves(&self) -> PoolLimits;

    /// Keep window decorations on tiled windows.
    fn window_decoration(&self) -> bool;

    fn ignore_rules(&self) -> Vec<IgnoreRule>;

    /// Quiet time before a drag or burst of geometry changes is committed.
    fn debounce(&self) -> Duration;

    /// Interval between pointer polls.
    fn pointer_poll(&self) -> Duration;

    /// How long a button must be held before a change counts as a drag.
    fn drag_threshold(&self) -> Duration;

    /// Attempt to persist the snapshot of a window.
    ///
    /// **Note:** this function cannot fail, and is called from the event loop:
    /// implementations must not block on I/O.
    fn save_client(&self, key: &str, info: &WindowInfo);

    /// Load a persisted snapshot if it exists.
    fn load_client(&self, key: &str) -> Option<WindowInfo>;
}
