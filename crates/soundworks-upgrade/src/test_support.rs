//! Throwaway project trees for unit tests

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::Value;
use soundworks_core::config::read_record;
use soundworks_core::{ProjectDescriptor, ProjectPaths};
use std::collections::BTreeMap;
use tempfile::TempDir;

use crate::step::MigrationContext;

pub struct Project {
    _temp: TempDir,
    paths: ProjectPaths,
}

impl Project {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let root = Utf8PathBuf::try_from(temp.path().to_path_buf()).unwrap();
        Self {
            _temp: temp,
            paths: ProjectPaths::new(root),
        }
    }

    pub fn descriptor(self, content: &str) -> Self {
        self.file(".soundworks", content);
        self
    }

    pub fn file(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    pub fn path(&self, relative: &str) -> Utf8PathBuf {
        self.paths.root().join(relative)
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.path(relative).exists()
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative)).unwrap()
    }

    pub fn record(&self, relative: &str) -> Value {
        read_record(&self.path(relative)).unwrap()
    }

    pub fn descriptor_field(&self, key: &str) -> Option<Value> {
        ProjectDescriptor::read_field(&self.paths.project_file(), key).unwrap()
    }

    pub fn context(&self) -> MigrationContext {
        MigrationContext::for_project(&self.paths).unwrap()
    }

    /// Every file under the project with its contents
    pub fn snapshot(&self) -> BTreeMap<Utf8PathBuf, String> {
        list_files(self.paths.root())
            .into_iter()
            .map(|path| {
                let content = std::fs::read_to_string(&path).unwrap();
                (path, content)
            })
            .collect()
    }
}

fn list_files(dir: &Utf8Path) -> Vec<Utf8PathBuf> {
    let mut files = Vec::new();
    for entry in dir.read_dir_utf8().unwrap() {
        let path = entry.unwrap().path().to_path_buf();
        if path.is_dir() {
            files.extend(list_files(&path));
        } else {
            files.push(path);
        }
    }
    files
}
