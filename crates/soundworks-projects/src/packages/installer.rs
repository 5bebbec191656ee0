//! Install and uninstall plugins and libraries through npm

use camino::Utf8Path;
use soundworks_core::package::PackageManifest;
use soundworks_core::{AnswerProvider, Choice, ProjectPaths, Question};
use tracing::info;

use super::database::{PackageEntry, PackageKind};
use super::runner::CommandRunner;
use crate::error::Result;

pub const NPM: &str = "npm";
pub const NPM_CHECK: &str = "npm-check";

/// Changes to the dependencies of one package family
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackagePlan {
    pub kind: PackageKind,
    pub to_install: Vec<String>,
    pub to_remove: Vec<String>,
}

impl PackagePlan {
    pub fn is_empty(&self) -> bool {
        self.to_install.is_empty() && self.to_remove.is_empty()
    }

    /// Run `npm install` then `npm uninstall` as needed
    pub async fn apply(&self, runner: &dyn CommandRunner, cwd: &Utf8Path) -> Result<()> {
        if !self.to_install.is_empty() {
            npm_packages(runner, cwd, "install", &self.to_install).await?;
        }
        if !self.to_remove.is_empty() {
            npm_packages(runner, cwd, "uninstall", &self.to_remove).await?;
        }

        info!("{} updated", self.kind);
        Ok(())
    }

    /// Documentation of the newly installed packages
    pub fn installed_docs(&self) -> Vec<&'static PackageEntry> {
        self.to_install
            .iter()
            .filter_map(|name| self.kind.find(name))
            .collect()
    }
}

/// Known packages of `kind` that are runtime dependencies of the project
pub fn installed(kind: PackageKind, manifest: &PackageManifest) -> Vec<&'static str> {
    kind.entries()
        .iter()
        .filter(|entry| manifest.dependencies.contains_key(entry.name))
        .map(|entry| entry.name)
        .collect()
}

/// Ask which packages of `kind` the project should depend on
///
/// Installed packages are pre-selected; the plan holds the difference.
pub fn plan_packages(
    kind: PackageKind,
    manifest: &PackageManifest,
    answers: &dyn AnswerProvider,
) -> Result<PackagePlan> {
    let installed = installed(kind, manifest);

    let choices = kind
        .entries()
        .iter()
        .map(|entry| Choice::new(entry.name).selected(installed.contains(&entry.name)))
        .collect();

    let selected = answers.multi_select(Question::multi_select(
        format!("Select the {} you would like to install/uninstall", kind),
        choices,
    ))?;

    let to_install = selected
        .iter()
        .filter(|name| !installed.contains(&name.as_str()))
        .cloned()
        .collect();
    let to_remove = installed
        .iter()
        .filter(|name| !selected.iter().any(|s| s == *name))
        .map(|name| name.to_string())
        .collect();

    Ok(PackagePlan {
        kind,
        to_install,
        to_remove,
    })
}

/// Load `package.json`, which must exist
pub fn load_manifest(paths: &ProjectPaths) -> Result<PackageManifest> {
    let path = paths.package_manifest();
    PackageManifest::load(&path)?
        .ok_or_else(|| soundworks_core::Error::config_not_found(path.as_str()).into())
}

async fn npm_packages(
    runner: &dyn CommandRunner,
    cwd: &Utf8Path,
    action: &str,
    packages: &[String],
) -> Result<()> {
    let mut args = vec![action.to_string(), "--save".to_string()];
    args.extend(packages.iter().cloned());
    args.push("--silent".to_string());
    runner.run(cwd, NPM, &args).await
}

/// `npm install` in a freshly created project
pub async fn install_dependencies(runner: &dyn CommandRunner, cwd: &Utf8Path) -> Result<()> {
    runner.run(cwd, NPM, &["install".to_string()]).await
}

/// `npm-check -u`, interactive dependency update
pub async fn check_deps(runner: &dyn CommandRunner, cwd: &Utf8Path) -> Result<()> {
    runner.run(cwd, NPM_CHECK, &["-u".to_string()]).await
}
