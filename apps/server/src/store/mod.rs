//! File-backed default portfolio store.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use vnfolio_core::{errors::Error, DefaultPortfolioConfig, DefaultPortfolioStore, Result};

/// Stores the default portfolio as pretty-printed JSON at `path`.
///
/// Writes land in a sibling temp file that is then renamed over the target.
#[derive(Debug)]
pub struct FilePortfolioStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FilePortfolioStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_locked(&self) -> Result<Option<DefaultPortfolioConfig>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let raw = fs::read(&self.path).map_err(|e| persistence("read", &self.path, e))?;
        if raw.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        let config = serde_json::from_slice(&raw).map_err(|e| persistence("parse", &self.path, e))?;
        Ok(Some(config))
    }

    fn persist_locked(&self, config: &DefaultPortfolioConfig) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| persistence("create", parent, e))?;
        }

        let json = serde_json::to_string_pretty(config)
            .map_err(|e| persistence("serialize", &self.path, e))?;

        let tmp = self.temp_path();
        fs::write(&tmp, json).map_err(|e| persistence("write", &tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            persistence("replace", &self.path, e)
        })
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

fn persistence(action: &str, path: &Path, err: impl std::fmt::Display) -> Error {
    Error::Persistence(format!("Failed to {} {}: {}", action, path.display(), err))
}

impl DefaultPortfolioStore for FilePortfolioStore {
    fn read(&self) -> Result<Option<DefaultPortfolioConfig>> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| Error::Persistence("Portfolio file lock poisoned".into()))?;
        self.load_locked()
    }

    fn write(&self, config: &DefaultPortfolioConfig) -> Result<()> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| Error::Persistence("Portfolio file lock poisoned".into()))?;
        self.persist_locked(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tempfile::tempdir;
    use vnfolio_core::HoldingSpec;

    #[test]
    fn test_missing_file_reads_none() {
        let dir = tempdir().unwrap();
        let store = FilePortfolioStore::new(dir.path().join("default_portfolio.json"));
        assert_eq!(store.read().unwrap(), None);
    }

    #[test]
    fn test_empty_file_reads_none() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("default_portfolio.json");
        fs::write(&path, "  \n").unwrap();
        assert_eq!(FilePortfolioStore::new(path).read().unwrap(), None);
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("default_portfolio.json");
        let store = FilePortfolioStore::new(&path);
        let config = DefaultPortfolioConfig::new(vec![
            HoldingSpec::new("FPT", dec!(55)),
            HoldingSpec::new("MWG", dec!(45)),
        ]);

        store.write(&config).unwrap();

        assert_eq!(store.read().unwrap(), Some(config));
        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"stocks\""));
        assert!(raw.contains("\"percentage\""));
        assert!(!store.temp_path().exists());
    }

    #[test]
    fn test_write_replaces_wholesale() {
        let dir = tempdir().unwrap();
        let store = FilePortfolioStore::new(dir.path().join("p.json"));

        store.write(&DefaultPortfolioConfig::builtin()).unwrap();
        let replacement = DefaultPortfolioConfig::new(vec![HoldingSpec::new("VNM", dec!(100))]);
        store.write(&replacement).unwrap();

        assert_eq!(store.read().unwrap(), Some(replacement));
    }

    #[test]
    fn test_corrupt_file_is_persistence_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("p.json");
        fs::write(&path, "{not json").unwrap();

        let err = FilePortfolioStore::new(path).read().unwrap_err();
        assert!(matches!(err, Error::Persistence(_)));
    }
}
