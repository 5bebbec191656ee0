//! Well-known locations inside a soundworks project

use camino::{Utf8Path, Utf8PathBuf};

use crate::error::{Error, Result};

/// Project descriptor file name
pub const PROJECT_FILE_NAME: &str = ".soundworks";

/// Config directory, relative to the project root
pub const CONFIG_DIRNAME: &str = "config";

/// Legacy config loader, candidate for override during upgrades
pub const LOAD_CONFIG_PATHNAME: &str = "src/utils/load-config.js";

/// Client sources, relative to the project root
pub const CLIENTS_SRC_PATHNAME: &str = "src/clients";

/// Launcher shipped by `@soundworks/helpers`, relative to the project root
pub const EJECT_LAUNCHER_SRC_PATHNAME: &str = "node_modules/@soundworks/helpers/browser-client";

/// Default destination of an ejected launcher, relative to the project root
pub const EJECT_LAUNCHER_DEFAULT_PATHNAME: &str = "src/clients/launcher";

/// Package manifest file name
pub const PACKAGE_MANIFEST_NAME: &str = "package.json";

/// Resolved paths of one project, threaded through every entry point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    root: Utf8PathBuf,
}

impl ProjectPaths {
    /// Paths rooted at `root`
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Paths rooted at the process working directory
    pub fn from_current_dir() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let root = Utf8PathBuf::try_from(cwd)
            .map_err(|_| Error::invalid_config("Current directory path is not valid UTF-8"))?;
        Ok(Self::new(root))
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub fn project_file(&self) -> Utf8PathBuf {
        self.root.join(PROJECT_FILE_NAME)
    }

    pub fn config_dir(&self) -> Utf8PathBuf {
        self.root.join(CONFIG_DIRNAME)
    }

    pub fn load_config(&self) -> Utf8PathBuf {
        self.root.join(LOAD_CONFIG_PATHNAME)
    }

    pub fn package_manifest(&self) -> Utf8PathBuf {
        self.root.join(PACKAGE_MANIFEST_NAME)
    }

    pub fn clients_src(&self) -> Utf8PathBuf {
        self.root.join(CLIENTS_SRC_PATHNAME)
    }

    pub fn eject_launcher_src(&self) -> Utf8PathBuf {
        self.root.join(EJECT_LAUNCHER_SRC_PATHNAME)
    }

    /// Whether the project descriptor exists
    pub fn is_project(&self) -> bool {
        self.project_file().is_file()
    }

    /// Fail with `MissingProjectMarker` unless the descriptor exists
    pub fn ensure_project(&self) -> Result<()> {
        if self.is_project() {
            Ok(())
        } else {
            Err(Error::missing_project_marker(self.project_file().as_str()))
        }
    }

    /// Express `path` relative to the project root when possible
    pub fn relative<'a>(&self, path: &'a Utf8Path) -> &'a Utf8Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_paths_layout() {
        let paths = ProjectPaths::new("/tmp/my-app");
        assert_eq!(paths.project_file(), Utf8PathBuf::from("/tmp/my-app/.soundworks"));
        assert_eq!(paths.config_dir(), Utf8PathBuf::from("/tmp/my-app/config"));
        assert_eq!(
            paths.load_config(),
            Utf8PathBuf::from("/tmp/my-app/src/utils/load-config.js")
        );
    }

    #[test]
    fn test_ensure_project_missing_marker() {
        let temp = tempfile::TempDir::new().unwrap();
        let root = Utf8PathBuf::try_from(temp.path().to_path_buf()).unwrap();
        let paths = ProjectPaths::new(root);

        let err = paths.ensure_project().unwrap_err();
        assert!(matches!(err, Error::MissingProjectMarker { .. }));

        std::fs::write(paths.project_file(), "{}").unwrap();
        assert!(paths.ensure_project().is_ok());
    }

    #[test]
    fn test_relative() {
        let paths = ProjectPaths::new("/tmp/my-app");
        let file = Utf8PathBuf::from("/tmp/my-app/config/application.yaml");
        assert_eq!(paths.relative(&file), Utf8Path::new("config/application.yaml"));
        let outside = Utf8PathBuf::from("/etc/hosts");
        assert_eq!(paths.relative(&outside), outside.as_path());
    }
}
