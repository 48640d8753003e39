//! Window snapshots persisted across restarts, one JSON file per key.
use std::fs;
use std::path::{Path, PathBuf};
use tilewright_core::models::WindowInfo;
use xdg::{BaseDirectories, BaseDirectoriesError};

#[derive(thiserror::Error, Debug)]
pub enum CacheError {
    #[error("Couldn't open base directory: {0}")]
    BaseDirError(#[from] BaseDirectoriesError),
    #[error("IO Error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Malformed snapshot: {0}")]
    SerdeError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cacher {
    cache_dir: PathBuf,
}

impl Cacher {
    const CACHE_DIR_NAME: &'static str = "tilewright";

    /// Cache in the XDG cache directory, created if missing.
    ///
    /// # Errors
    ///
    /// Fails if the base directories can't be resolved or the directory
    /// can't be created.
    pub fn new() -> Result<Self, CacheError> {
        let base = BaseDirectories::new()?;
        let cache_dir = base.create_cache_directory(Self::CACHE_DIR_NAME)?;
        Ok(Self { cache_dir })
    }

    /// Cache in an existing directory.
    pub fn with_dir(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
        }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.cache_dir
    }

    fn path(&self, key: &str) -> PathBuf {
        self.cache_dir.join(format!("{key}.json"))
    }

    /// # Errors
    ///
    /// Fails if the snapshot can't be written.
    pub fn save(&self, key: &str, info: &WindowInfo) -> Result<(), CacheError> {
        let json = serde_json::to_string(info)?;
        fs::write(self.path(key), json)?;
        Ok(())
    }

    /// Snapshot stored under `key`, `None` if there is none.
    ///
    /// # Errors
    ///
    /// Fails if the file exists but can't be read or parsed.
    pub fn load(&self, key: &str) -> Result<Option<WindowInfo>, CacheError> {
        let path = self.path(key);
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&contents)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilewright_core::models::{cache_key, Dimensions, WindowState, Xyhw};

    #[test]
    fn snapshots_survive_a_new_cacher() {
        let dir = tempfile::tempdir().unwrap();
        let info = WindowInfo {
            class: "firefox".to_owned(),
            states: vec![WindowState::MaximizedVert],
            desktop: Some(2),
            dimensions: Dimensions {
                geometry: Xyhw::new(10, 20, 800, 600),
                decorated: true,
                ..Dimensions::default()
            },
            ..WindowInfo::default()
        };
        let key = cache_key(&info.class);
        Cacher::with_dir(dir.path()).save(&key, &info).unwrap();

        let loaded = Cacher::with_dir(dir.path()).load(&key).unwrap();
        assert_eq!(loaded, Some(info));
        assert!(dir.path().join(format!("{key}.json")).exists());
    }

    #[test]
    fn missing_snapshots_are_none() {
        let dir = tempfile::tempdir().unwrap();
        let cacher = Cacher::with_dir(dir.path());
        assert!(cacher.load(&cache_key("nothing")).unwrap().is_none());
    }

    #[test]
    fn corrupt_snapshots_are_errors() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("broken.json"), "{ not json").unwrap();
        let cacher = Cacher::with_dir(dir.path());
        assert!(matches!(cacher.load("broken"), Err(CacheError::SerdeError(_))));
    }
}
