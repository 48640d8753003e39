use serde::{Deserialize, Serialize};

/// Visible slot count a pool starts with and the range it may change in.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolLimits {
    /// Fewest visible slots. Slave pools never go below one.
    #[serde(default)]
    pub min: usize,
    pub initial: usize,
    pub max: usize,
}
