//! Minimal view of a project's `package.json`

use camino::Utf8Path;
use semver::Version;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use tracing::warn;

use crate::error::{Error, Result};
use crate::version::parse_loose;

/// Name of the framework package whose version gates some migrations
pub const FRAMEWORK_PACKAGE_NAME: &str = "@soundworks/core";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default)]
    pub dependencies: Map<String, Value>,

    #[serde(default)]
    pub dev_dependencies: Map<String, Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PackageManifest {
    /// Load `package.json`, `None` when absent
    pub fn load(path: &Utf8Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| Error::config_parse(path.as_str(), e.to_string()))
    }

    /// Version spec of a runtime dependency
    pub fn dependency(&self, name: &str) -> Option<&str> {
        self.dependencies.get(name).and_then(Value::as_str)
    }

    /// Whether `name` is a runtime or dev dependency
    pub fn has_dependency(&self, name: &str) -> bool {
        self.dependencies.contains_key(name) || self.dev_dependencies.contains_key(name)
    }

    /// Names of runtime and dev dependencies
    pub fn dependency_names(&self) -> impl Iterator<Item = &str> {
        self.dependencies
            .keys()
            .chain(self.dev_dependencies.keys())
            .map(String::as_str)
    }

    /// Declared framework version, `None` when absent or not a version
    pub fn framework_version(&self) -> Option<Version> {
        let spec = self.dependency(FRAMEWORK_PACKAGE_NAME)?;

        match parse_loose(spec) {
            Ok(version) => Some(version),
            Err(_) => {
                warn!(
                    "Cannot interpret {} version \"{}\", assuming a recent release",
                    FRAMEWORK_PACKAGE_NAME, spec
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_load_and_query() {
        let temp = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(temp.path().join("package.json")).unwrap();
        std::fs::write(
            &path,
            r#"{
  "name": "my-app",
  "dependencies": { "@soundworks/core": "^4.0.0-alpha.29", "@soundworks/plugin-sync": "^2.0.0" },
  "devDependencies": { "@soundworks/build": "^1.0.0" }
}"#,
        )
        .unwrap();

        let manifest = PackageManifest::load(&path).unwrap().unwrap();
        assert_eq!(manifest.name.as_deref(), Some("my-app"));
        assert!(manifest.has_dependency("@soundworks/build"));
        assert!(!manifest.has_dependency("@soundworks/plugin-platform-init"));
        assert_eq!(manifest.dependency_names().count(), 3);
        assert_eq!(
            manifest.framework_version(),
            Some(Version::parse("4.0.0-alpha.29").unwrap())
        );
    }

    #[test]
    fn test_missing_manifest() {
        let temp = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(temp.path().join("package.json")).unwrap();
        assert!(PackageManifest::load(&path).unwrap().is_none());
    }

    #[test]
    fn test_unparseable_framework_version() {
        let mut manifest = PackageManifest::default();
        manifest
            .dependencies
            .insert(FRAMEWORK_PACKAGE_NAME.into(), "github:collective-soundworks/soundworks".into());
        assert_eq!(manifest.framework_version(), None);
    }
}
