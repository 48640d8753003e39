use super::Config;
use tilewright_core::config::PoolLimits;
use tilewright_core::layouts::Layout;

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_owned(),
            tiling_enabled: true,
            layouts: Layout::ALL.to_vec(),
            initial_layout: Layout::default(),
            gap: 0,
            proportion: 0.5,
            proportion_min: 0.1,
            proportion_step: 0.05,
            masters: PoolLimits { min: 0, initial: 1, max: 4 },
            slaves: PoolLimits { min: 1, initial: 3, max: 8 },
            window_decoration: true,
            ignore: vec![],
            debounce: 50,
            pointer_poll: 50,
            drag_threshold: 150,
            cacher: None,
        }
    }
}
