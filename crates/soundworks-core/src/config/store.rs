//! Reading and writing config files in a project's config directory

use camino::{Utf8Path, Utf8PathBuf};
use globset::{Glob, GlobMatcher};
use std::fs;
use tracing::debug;

use super::{backup, ConfigFormat, Record};
use crate::error::Result;
use crate::types::{ApplicationConfig, EnvConfig};

/// Application config, any supported format
pub const APPLICATION_PATTERN: &str = "application.{yaml,yml,json,json5}";

/// Environment configs, any supported format
pub const ENV_PATTERN: &str = "env-*.{yaml,yml,json,json5}";

/// Every config file managed by the CLI
pub const CONFIG_PATTERN: &str = "{application,env-*}.{yaml,yml,json,json5}";

/// JSON config files, candidates for the YAML upgrade
pub const JSON_CONFIG_PATTERN: &str = "{application,env-*}.{json,json5}";

/// A parsed config file
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigEntry {
    pub path: Utf8PathBuf,
    pub record: Record,
}

impl ConfigEntry {
    /// Format of the file on disk
    pub fn format(&self) -> Result<ConfigFormat> {
        ConfigFormat::from_path(&self.path)
    }

    /// File name without extension, e.g. `env-default`
    pub fn stem(&self) -> &str {
        self.path.file_stem().unwrap_or_default()
    }

    /// File name with extension
    pub fn file_name(&self) -> &str {
        self.path.file_name().unwrap_or_default()
    }

    /// Environment name for `env-<name>.*` files
    pub fn env_name(&self) -> Option<&str> {
        self.stem().strip_prefix("env-")
    }
}

/// Config store bound to one config directory
#[derive(Debug, Clone)]
pub struct ConfigStore {
    dir: Utf8PathBuf,
}

impl ConfigStore {
    /// Create a store for `dir`
    pub fn new(dir: impl Into<Utf8PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The config directory
    pub fn dir(&self) -> &Utf8Path {
        &self.dir
    }

    /// Whether the config directory exists
    pub fn exists(&self) -> bool {
        self.dir.is_dir()
    }

    /// List files whose name matches `pattern`, sorted by name
    ///
    /// A missing directory yields an empty list.
    pub fn list(&self, pattern: &str) -> Result<Vec<Utf8PathBuf>> {
        if !self.exists() {
            return Ok(Vec::new());
        }

        let matcher = compile(pattern)?;
        let mut paths = Vec::new();

        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }

            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };

            if matcher.is_match(&name) {
                paths.push(self.dir.join(name));
            }
        }

        paths.sort();
        Ok(paths)
    }

    /// Read and parse every file matching `pattern`
    pub fn read(&self, pattern: &str) -> Result<Vec<ConfigEntry>> {
        self.list(pattern)?
            .into_iter()
            .map(|path| {
                let record = read_record(&path)?;
                Ok(ConfigEntry { path, record })
            })
            .collect()
    }

    /// Serialize `record` by the extension of `filename`, overwriting any existing file
    pub fn write(&self, filename: &str, record: &Record) -> Result<Utf8PathBuf> {
        let path = self.dir.join(filename);
        write_record(&path, record)?;
        Ok(path)
    }

    /// Move `path` to a fresh backup name, then write `record` at `path`
    pub fn rewrite_with_backup(&self, path: &Utf8Path, record: &Record) -> Result<Utf8PathBuf> {
        let rendered = ConfigFormat::from_path(path)?.render(record)?;
        let saved = backup(path)?;
        fs::write(path, rendered)?;
        Ok(saved)
    }

    /// Whether any application or env config is still stored as JSON
    pub fn has_json_config(&self) -> Result<bool> {
        Ok(!self.list(JSON_CONFIG_PATTERN)?.is_empty())
    }

    /// Format of the application config, if one exists
    pub fn application_format(&self) -> Result<Option<ConfigFormat>> {
        match self.list(APPLICATION_PATTERN)?.first() {
            Some(path) => Ok(Some(ConfigFormat::from_path(path)?)),
            None => Ok(None),
        }
    }

    /// Read the application config as a typed record
    pub fn read_application(&self) -> Result<Option<(Utf8PathBuf, ApplicationConfig)>> {
        let Some(entry) = self.read(APPLICATION_PATTERN)?.into_iter().next() else {
            return Ok(None);
        };

        let config = ApplicationConfig::from_record(&entry.path, entry.record)?;
        Ok(Some((entry.path, config)))
    }

    /// Write the application config at `path`, refusing records that break its invariants
    pub fn write_application(&self, path: &Utf8Path, config: &ApplicationConfig) -> Result<()> {
        config.validate()?;
        write_record(path, &config.to_record()?)
    }

    /// Read every environment config as typed records
    pub fn read_envs(&self) -> Result<Vec<(Utf8PathBuf, EnvConfig)>> {
        self.read(ENV_PATTERN)?
            .into_iter()
            .map(|entry| {
                let env = EnvConfig::from_record(&entry.path, entry.record)?;
                Ok((entry.path, env))
            })
            .collect()
    }

    /// Write `env-<name>.<ext>` in the given format
    pub fn write_env(&self, name: &str, format: ConfigFormat, env: &EnvConfig) -> Result<Utf8PathBuf> {
        let filename = env_filename(name, format);
        self.write(&filename, &env.to_record()?)
    }
}

/// File name of an environment config
pub fn env_filename(name: &str, format: ConfigFormat) -> String {
    format!("env-{}.{}", name, format.extension())
}

/// Read and parse a single config file
pub fn read_record(path: &Utf8Path) -> Result<Record> {
    let format = ConfigFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;
    format.parse(path, &content)
}

/// Serialize a record by the extension of `path`
pub fn write_record(path: &Utf8Path, record: &Record) -> Result<()> {
    let rendered = ConfigFormat::from_path(path)?.render(record)?;
    fs::write(path, rendered)?;
    debug!("Wrote {}", path);
    Ok(())
}

fn compile(pattern: &str) -> Result<GlobMatcher> {
    Ok(Glob::new(pattern)?.compile_matcher())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde_json::json;
    use tempfile::TempDir;

    fn store() -> (ConfigStore, TempDir) {
        let temp = TempDir::new().unwrap();
        let dir = Utf8PathBuf::try_from(temp.path().to_path_buf()).unwrap();
        (ConfigStore::new(dir), temp)
    }

    #[test]
    fn test_read_missing_dir_is_empty() {
        let store = ConfigStore::new("/definitely/not/here");
        assert!(store.read(CONFIG_PATTERN).unwrap().is_empty());
    }

    #[test]
    fn test_write_then_read_both_formats() {
        let (store, _temp) = store();
        let record = json!({ "name": "x", "author": "", "clients": { "player": { "runtime": "browser" } } });

        store.write("application.json", &record).unwrap();
        store.write("env-default.yaml", &json!({ "port": 8000 })).unwrap();

        let entries = store.read(CONFIG_PATTERN).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].file_name(), "application.json");
        assert_eq!(entries[0].record, record);
        assert_eq!(entries[1].env_name(), Some("default"));
        assert_eq!(entries[1].record, json!({ "port": 8000 }));
    }

    #[test]
    fn test_backups_are_not_matched() {
        let (store, _temp) = store();
        store.write("application.yaml", &json!({ "name": "x" })).unwrap();
        std::fs::write(store.dir().join("application.json.bak"), "{}").unwrap();

        let paths = store.list(CONFIG_PATTERN).unwrap();
        assert_eq!(paths.len(), 1);
        assert!(!store.has_json_config().unwrap());
    }

    #[test]
    fn test_unsupported_extension_on_write() {
        let (store, _temp) = store();
        let err = store.write("application.toml", &json!({})).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_rewrite_with_backup() {
        let (store, _temp) = store();
        let path = store.write("env-default.yaml", &json!({ "subpath": "/app" })).unwrap();

        let backup = store
            .rewrite_with_backup(&path, &json!({ "baseUrl": "/app" }))
            .unwrap();

        assert_eq!(backup, store.dir().join("env-default.yaml.bak"));
        assert_eq!(read_record(&path).unwrap(), json!({ "baseUrl": "/app" }));
        let saved = std::fs::read_to_string(&backup).unwrap();
        assert!(saved.contains("subpath"));
    }

    #[test]
    fn test_second_rewrite_keeps_first_backup() {
        let (store, _temp) = store();
        let path = store.write("application.yaml", &json!({ "name": "v1" })).unwrap();

        store.rewrite_with_backup(&path, &json!({ "name": "v2" })).unwrap();
        let second = store.rewrite_with_backup(&path, &json!({ "name": "v3" })).unwrap();

        assert_eq!(second, store.dir().join("application.yaml.bak.1"));
        let first = std::fs::read_to_string(store.dir().join("application.yaml.bak")).unwrap();
        assert!(first.contains("v1"));
        assert!(std::fs::read_to_string(&second).unwrap().contains("v2"));
        assert_eq!(read_record(&path).unwrap(), json!({ "name": "v3" }));
        assert_eq!(store.list(CONFIG_PATTERN).unwrap(), vec![path]);
    }

    #[test]
    fn test_application_format() {
        let (store, _temp) = store();
        assert_eq!(store.application_format().unwrap(), None);
        store.write("application.json", &json!({ "name": "x" })).unwrap();
        assert_eq!(store.application_format().unwrap(), Some(ConfigFormat::Json));
    }

    #[test]
    fn test_env_filename() {
        assert_eq!(env_filename("prod", ConfigFormat::Yaml), "env-prod.yaml");
        assert_eq!(env_filename("default", ConfigFormat::Json), "env-default.json");
    }
}
