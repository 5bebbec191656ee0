//! Migration step abstraction

use camino::Utf8PathBuf;
use semver::Version;
use soundworks_core::package::PackageManifest;
use soundworks_core::version::parse_loose;
use soundworks_core::{ConfigStore, Error, ProjectPaths, Result, TOOL_VERSION};

/// Everything a step may touch, resolved once per run
#[derive(Debug, Clone)]
pub struct MigrationContext {
    /// Project `config/` directory
    pub config_dir: Utf8PathBuf,
    /// Project descriptor (`.soundworks`)
    pub descriptor_path: Utf8PathBuf,
    /// Legacy config loader
    pub loader_path: Utf8PathBuf,
    /// Version of the running tool, written as `createVersion`
    pub tool_version: Version,
    /// Framework version declared in `package.json`, if known
    pub framework_version: Option<Version>,
}

impl MigrationContext {
    /// Context with explicit locations and the running tool version
    pub fn new(
        config_dir: impl Into<Utf8PathBuf>,
        descriptor_path: impl Into<Utf8PathBuf>,
        loader_path: impl Into<Utf8PathBuf>,
    ) -> Result<Self> {
        Ok(Self {
            config_dir: config_dir.into(),
            descriptor_path: descriptor_path.into(),
            loader_path: loader_path.into(),
            tool_version: parse_loose(TOOL_VERSION)?,
            framework_version: None,
        })
    }

    /// Context for a project, reading the framework version from `package.json`
    pub fn for_project(paths: &ProjectPaths) -> Result<Self> {
        let framework_version = PackageManifest::load(&paths.package_manifest())?
            .and_then(|manifest| manifest.framework_version());

        Ok(Self::new(paths.config_dir(), paths.project_file(), paths.load_config())?
            .with_framework_version(framework_version))
    }

    pub fn with_tool_version(mut self, version: Version) -> Self {
        self.tool_version = version;
        self
    }

    pub fn with_framework_version(mut self, version: Option<Version>) -> Self {
        self.framework_version = version;
        self
    }

    /// Config store over the context's config directory
    pub fn store(&self) -> ConfigStore {
        ConfigStore::new(self.config_dir.clone())
    }

    /// Fail unless both the project marker and the config directory exist
    pub fn ensure_project(&self) -> Result<()> {
        if !self.descriptor_path.is_file() {
            return Err(Error::missing_project_marker(self.descriptor_path.as_str()));
        }
        if !self.config_dir.is_dir() {
            return Err(Error::missing_project_marker(self.config_dir.as_str()));
        }
        Ok(())
    }
}

/// Outcome of one step
#[derive(Debug)]
pub enum StepResult {
    /// Files were written
    Applied(Vec<Utf8PathBuf>),
    /// Nothing to do, with the reason
    Skipped(String),
    /// The step stopped on an I/O or parse error
    Failed(Error),
}

impl StepResult {
    pub fn skipped(reason: impl Into<String>) -> Self {
        StepResult::Skipped(reason.into())
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, StepResult::Applied(_))
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, StepResult::Skipped(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, StepResult::Failed(_))
    }

    /// Files written by an applied step
    pub fn written(&self) -> &[Utf8PathBuf] {
        match self {
            StepResult::Applied(paths) => paths,
            _ => &[],
        }
    }
}

/// Version from which a step is part of the migration chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Introduced {
    /// A fixed tool release
    At(&'static str),
    /// The running tool version
    Current,
}

impl Introduced {
    pub fn resolve(&self, ctx: &MigrationContext) -> Result<Version> {
        match self {
            Introduced::At(version) => parse_loose(version),
            Introduced::Current => Ok(ctx.tool_version.clone()),
        }
    }
}

/// One idempotent transformation of a project's config
pub trait MigrationStep: Send + Sync {
    /// Stable identifier, used in reports
    fn id(&self) -> &'static str;

    /// Human readable summary
    fn description(&self) -> &'static str;

    /// Tool version introducing this step
    fn introduced_in(&self) -> Introduced;

    /// Whether the recorded `createVersion` can close this step
    ///
    /// Steps gated on something else return false and run on every upgrade.
    fn follows_create_version(&self) -> bool {
        true
    }

    /// Perform the step; unmet preconditions yield `Skipped`
    fn apply(&self, ctx: &MigrationContext) -> Result<StepResult>;

    /// Perform the step, folding errors into `Failed`
    fn run(&self, ctx: &MigrationContext) -> StepResult {
        match self.apply(ctx) {
            Ok(result) => result,
            Err(err) => StepResult::Failed(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_context_for_project_reads_framework_version() {
        let temp = TempDir::new().unwrap();
        let root = Utf8PathBuf::try_from(temp.path().to_path_buf()).unwrap();
        std::fs::write(
            root.join("package.json"),
            r#"{ "dependencies": { "@soundworks/core": "^4.0.0-alpha.29" } }"#,
        )
        .unwrap();

        let ctx = MigrationContext::for_project(&ProjectPaths::new(root.clone())).unwrap();
        assert_eq!(ctx.config_dir, root.join("config"));
        assert_eq!(ctx.loader_path, root.join("src/utils/load-config.js"));
        assert_eq!(
            ctx.framework_version,
            Some(Version::parse("4.0.0-alpha.29").unwrap())
        );
    }

    #[test]
    fn test_ensure_project() {
        let temp = TempDir::new().unwrap();
        let root = Utf8PathBuf::try_from(temp.path().to_path_buf()).unwrap();
        let ctx = MigrationContext::for_project(&ProjectPaths::new(root.clone())).unwrap();

        assert!(matches!(
            ctx.ensure_project(),
            Err(Error::MissingProjectMarker { .. })
        ));

        std::fs::write(root.join(".soundworks"), "{}").unwrap();
        assert!(ctx.ensure_project().is_err());

        std::fs::create_dir(root.join("config")).unwrap();
        assert!(ctx.ensure_project().is_ok());
    }

    #[test]
    fn test_introduced_resolve() {
        let ctx = MigrationContext::new("config", ".soundworks", "load-config.js")
            .unwrap()
            .with_tool_version(Version::new(2, 1, 0));

        assert_eq!(
            Introduced::At("1.0.0-beta.0").resolve(&ctx).unwrap(),
            Version::parse("1.0.0-beta.0").unwrap()
        );
        assert_eq!(Introduced::Current.resolve(&ctx).unwrap(), Version::new(2, 1, 0));
    }
}
