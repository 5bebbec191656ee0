//! Temporary soundworks project trees

use camino::Utf8PathBuf;
use serde_json::Value;
use soundworks_core::config::read_record;
use soundworks_core::{ProjectDescriptor, ProjectPaths};
use soundworks_upgrade::MigrationContext;
use std::collections::BTreeMap;
use tempfile::TempDir;
use walkdir::WalkDir;

/// A project living in a temporary directory
pub struct TestProject {
    _temp: TempDir,
    pub paths: ProjectPaths,
}

impl TestProject {
    /// Empty directory, not a project yet
    pub fn empty() -> Self {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let root = Utf8PathBuf::try_from(temp.path().to_path_buf()).expect("UTF-8 temp dir");
        Self {
            _temp: temp,
            paths: ProjectPaths::new(root),
        }
    }

    /// Project with a descriptor and an empty config directory
    pub fn with_descriptor(descriptor: &str) -> Self {
        let project = Self::empty();
        project.write(".soundworks", descriptor);
        std::fs::create_dir_all(project.paths.config_dir()).expect("Failed to create config dir");
        project
    }

    pub fn write(&self, relative: &str, content: &str) -> &Self {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        std::fs::write(&path, content)
            .unwrap_or_else(|e| panic!("Failed to write '{}': {}", path, e));
        self
    }

    /// Declare `@soundworks/core` in `package.json`
    pub fn framework(&self, version: &str) -> &Self {
        self.write(
            "package.json",
            &format!(
                r#"{{ "name": "x", "dependencies": {{ "@soundworks/core": "{}" }} }}"#,
                version
            ),
        )
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

    pub fn record(&self, relative: &str) -> Value {
        read_record(&self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to parse '{}': {}", relative, e))
    }

    pub fn descriptor_field(&self, key: &str) -> Option<Value> {
        ProjectDescriptor::read_field(&self.paths.project_file(), key).expect("Readable descriptor")
    }

    pub fn context(&self) -> MigrationContext {
        MigrationContext::for_project(&self.paths).expect("Failed to build migration context")
    }

    /// Relative path and contents of every file in the project
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        WalkDir::new(self.paths.root())
            .into_iter()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| {
                let relative = entry
                    .path()
                    .strip_prefix(self.paths.root())
                    .expect("Entry under project root")
                    .to_string_lossy()
                    .into_owned();
                let content = std::fs::read_to_string(entry.path()).unwrap_or_default();
                (relative, content)
            })
            .collect()
    }
}
