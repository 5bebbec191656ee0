//! Config store for soundworks projects
//!
//! Application and environment configs live in the project's `config/`
//! directory, either as JSON or YAML. Both formats parse into the same
//! [`Record`] so every schema operation is independent of serialization.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tracing::debug;

use crate::error::Result;

mod descriptor;
mod format;
mod store;

pub use descriptor::ProjectDescriptor;
pub use format::ConfigFormat;
pub use store::{
    env_filename, read_record, write_record, ConfigEntry, ConfigStore, APPLICATION_PATTERN,
    CONFIG_PATTERN, ENV_PATTERN, JSON_CONFIG_PATTERN,
};

/// In-memory shape of any config file, key order preserved
pub type Record = serde_json::Value;

/// First free backup name for `path`: `<path>.bak`, then `<path>.bak.1`, ...
pub fn backup_path(path: &Utf8Path) -> Utf8PathBuf {
    let first = Utf8PathBuf::from(format!("{}.bak", path));
    if !first.exists() {
        return first;
    }

    (1..)
        .map(|n| Utf8PathBuf::from(format!("{}.bak.{}", path, n)))
        .find(|candidate| !candidate.exists())
        .unwrap_or(first)
}

/// Move `path` aside to a fresh backup name, never replacing an older backup
pub fn backup(path: &Utf8Path) -> Result<Utf8PathBuf> {
    let target = backup_path(path);
    fs::rename(path, &target)?;
    debug!("Backed up {} to {}", path, target);
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_backups_never_replace_each_other() {
        let temp = TempDir::new().unwrap();
        let dir = Utf8PathBuf::try_from(temp.path().to_path_buf()).unwrap();
        let path = dir.join("application.yaml");

        for content in ["first", "second", "third"] {
            fs::write(&path, content).unwrap();
            backup(&path).unwrap();
        }

        assert!(!path.exists());
        assert_eq!(fs::read_to_string(dir.join("application.yaml.bak")).unwrap(), "first");
        assert_eq!(fs::read_to_string(dir.join("application.yaml.bak.1")).unwrap(), "second");
        assert_eq!(fs::read_to_string(dir.join("application.yaml.bak.2")).unwrap(), "third");
    }

    #[test]
    fn test_backup_of_missing_file_fails() {
        let temp = TempDir::new().unwrap();
        let dir = Utf8PathBuf::try_from(temp.path().to_path_buf()).unwrap();
        assert!(backup(&dir.join("env-default.yaml")).is_err());
    }
}
