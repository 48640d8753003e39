//! `tilewright` general configuration

mod checks;
mod default;

use crate::utils::cacher::Cacher;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tilewright_core::config::{IgnoreRule, PoolLimits};
use tilewright_core::layouts::Layout;
use tilewright_core::models::WindowInfo;
use xdg::BaseDirectories;

/// General configuration
///
/// # Example
///
/// In `config.toml`
///
/// ```toml
/// gap = 8
/// layouts = ["VerticalLeft", "HorizontalTop", "Maximized"]
///
/// [masters]
/// initial = 1
/// max = 3
///
/// [[ignore]]
/// class = "^pavucontrol$"
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub tiling_enabled: bool,
    pub layouts: Vec<Layout>,
    pub initial_layout: Layout,
    pub gap: i32,
    pub proportion: f64,
    pub proportion_min: f64,
    pub proportion_step: f64,
    pub masters: PoolLimits,
    pub slaves: PoolLimits,
    pub window_decoration: bool,
    pub ignore: Vec<IgnoreRule>,
    /// Milliseconds of quiet before a drag is committed.
    pub debounce: u64,
    /// Milliseconds between pointer polls.
    pub pointer_poll: u64,
    /// Milliseconds a button must be held for a geometry change to count as a drag.
    pub drag_threshold: u64,

    #[serde(skip)]
    pub cacher: Option<Cacher>,
}

/// Load the user configuration from the XDG config directory, writing the
/// defaults there first if it doesn't exist, and attach the window cache.
///
/// # Errors
///
/// Fails if the file can't be read, written or parsed.
pub fn load_or_create() -> Result<Config> {
    let path = default_path()?;
    let mut config = if path.exists() {
        tracing::debug!(path = %path.display(), "Loading config file");
        load_from_path(&path)?
    } else {
        let config = Config::default();
        write_to_file(&path, &config)?;
        config
    };
    config.cacher = Cacher::new()
        .map_err(|err| tracing::warn!(error = %err, "Window cache unavailable"))
        .ok();
    Ok(config)
}

/// Path of `config.toml` in the XDG config directory.
///
/// # Errors
///
/// Fails if the base directories can't be resolved or created.
pub fn default_path() -> Result<PathBuf> {
    let path = BaseDirectories::with_prefix("tilewright")?;
    Ok(path.place_config_file("config.toml")?)
}

/// Read the configuration at `path`. A missing file yields the defaults.
///
/// # Errors
///
/// Fails if the file can't be read or isn't valid TOML for [`Config`].
pub fn load_from_path(path: &Path) -> Result<Config> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "Config file not found, using defaults");
        return Ok(Config::default());
    }
    let contents = fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

/// Write the configuration as TOML.
///
/// # Errors
///
/// Fails if serialization or writing fails.
pub fn write_to_file(path: &Path, config: &Config) -> Result<()> {
    let toml = toml::to_string(config)?;
    fs::write(path, toml)?;
    Ok(())
}

impl tilewright_core::Config for Config {
    fn tiling_enabled(&self) -> bool {
        self.tiling_enabled
    }

    fn layouts(&self) -> Vec<Layout> {
        self.layouts.clone()
    }

    fn initial_layout(&self) -> Layout {
        self.initial_layout
    }

    fn gap(&self) -> i32 {
        self.gap.max(0)
    }

    fn proportion(&self) -> f64 {
        self.proportion
    }

    fn proportion_min(&self) -> f64 {
        self.proportion_min
    }

    fn proportion_step(&self) -> f64 {
        self.proportion_step
    }

    fn masters(&self) -> PoolLimits {
        self.masters
    }

    fn slaves(&self) -> PoolLimits {
        self.slaves
    }

    fn window_decoration(&self) -> bool {
        self.window_decoration
    }

    fn ignore_rules(&self) -> Vec<IgnoreRule> {
        self.ignore.clone()
    }

    fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce)
    }

    fn pointer_poll(&self) -> Duration {
        Duration::from_millis(self.pointer_poll.max(1))
    }

    fn drag_threshold(&self) -> Duration {
        Duration::from_millis(self.drag_threshold)
    }

    /// Inside a tokio runtime the write runs on the blocking pool, so the
    /// event loop never waits on the disk.
    fn save_client(&self, key: &str, info: &WindowInfo) {
        let Some(cacher) = self.cacher.clone() else {
            return;
        };
        let (key, info) = (key.to_owned(), info.clone());
        let write = move || {
            if let Err(err) = cacher.save(&key, &info) {
                tracing::warn!(key = %key, error = %err, "Could not cache window");
            }
        };
        match tokio::runtime::Handle::try_current() {
            Ok(runtime) => {
                runtime.spawn_blocking(write);
            }
            Err(_) => write(),
        }
    }

    fn load_client(&self, key: &str) -> Option<WindowInfo> {
        let cacher = self.cacher.as_ref()?;
        cacher
            .load(key)
            .map_err(|err| tracing::warn!(key, error = %err, "Could not read cached window"))
            .ok()
            .flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilewright_core::models::Xyhw;
    use tilewright_core::Config as _;

    #[test]
    fn partial_files_keep_the_defaults() {
        let config: Config = toml::from_str(
            r#"
            gap = 12
            layouts = ["HorizontalTop", "Maximized"]

            [[ignore]]
            class = "^mpv$"
            title = "Picture"
            "#,
        )
        .unwrap();
        assert_eq!(config.gap, 12);
        assert_eq!(config.layouts, vec![Layout::HorizontalTop, Layout::Maximized]);
        assert_eq!(config.ignore.len(), 1);
        assert_eq!(config.masters, Config::default().masters);
        assert_eq!(config.debounce(), Duration::from_millis(50));
    }

    #[test]
    fn defaults_survive_a_round_trip_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        write_to_file(&path, &Config::default()).unwrap();
        assert_eq!(load_from_path(&path).unwrap(), Config::default());
    }

    #[test]
    fn missing_files_load_the_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_from_path(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn malformed_files_are_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "gap = \"wide\"").unwrap();
        assert!(load_from_path(&path).is_err());
    }

    #[test]
    fn clients_are_cached_through_the_cacher() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            cacher: Some(Cacher::with_dir(dir.path())),
            ..Config::default()
        };
        let mut info = WindowInfo::default();
        info.dimensions.geometry = Xyhw::new(1, 2, 3, 4);
        config.save_client("abc", &info);
        assert_eq!(config.load_client("abc"), Some(info));
        assert_eq!(config.load_client("missing"), None);
    }

    #[tokio::test]
    async fn cache_writes_run_off_the_runtime_thread() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            cacher: Some(Cacher::with_dir(dir.path())),
            ..Config::default()
        };
        let info = WindowInfo {
            class: "term".to_owned(),
            ..WindowInfo::default()
        };
        config.save_client("term", &info);

        let mut loaded = None;
        for _ in 0..200 {
            loaded = config.load_client("term");
            if loaded.is_some() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        assert_eq!(loaded, Some(info));
    }

    #[test]
    fn without_a_cacher_nothing_is_stored() {
        let config = Config::default();
        config.save_client("abc", &WindowInfo::default());
        assert_eq!(config.load_client("abc"), None);
    }
}
