//! Temporary projects scaffolded from the bundled template

use camino::Utf8PathBuf;
use soundworks_core::{ApplicationConfig, ConfigStore, ProjectPaths};
use soundworks_projects::templates::{scaffold, TemplateCatalog};
use tempfile::TempDir;

pub const PROJECT_NAME: &str = "my-app";

/// A scaffolded project living in a temporary directory
pub struct TestProject {
    _temp: TempDir,
    pub paths: ProjectPaths,
    pub catalog: TemplateCatalog,
}

impl TestProject {
    /// Scaffold the default bundled template into `<tmp>/my-app`
    pub fn scaffolded() -> Self {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let root = Utf8PathBuf::try_from(temp.path().join(PROJECT_NAME)).expect("UTF-8 temp dir");

        let catalog = TemplateCatalog::load(None).expect("Bundled templates");
        let template = catalog.find("js").expect("Bundled js template");
        scaffold(template, PROJECT_NAME, &root).expect("Failed to scaffold project");

        Self {
            _temp: temp,
            paths: ProjectPaths::new(root),
            catalog,
        }
    }

    pub fn path(&self, relative: &str) -> Utf8PathBuf {
        self.paths.root().join(relative)
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.path(relative).exists()
    }

    pub fn read(&self, relative: &str) -> String {
        let path = self.path(relative);
        std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read '{}': {}", path, e))
    }

    pub fn write(&self, relative: &str, content: &str) -> &Self {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        std::fs::write(&path, content).unwrap_or_else(|e| panic!("Failed to write '{}': {}", path, e));
        self
    }

    pub fn application(&self) -> ApplicationConfig {
        ConfigStore::new(self.paths.config_dir())
            .read_application()
            .expect("Readable application config")
            .map(|(_, config)| config)
            .expect("Application config present")
    }
}
