use soundworks_core::assets;
use soundworks_core::config::env_filename;
use soundworks_core::{ProjectDescriptor, Result};
use std::fs;
use tracing::info;

use crate::step::{Introduced, MigrationContext, MigrationStep, StepResult};

const DEFAULT_ENV_PATTERN: &str = "env-default.{yaml,yml,json,json5}";

/// Write the bundled `env-default` config when the project has none
pub struct EnsureDefaultEnvFile;

impl MigrationStep for EnsureDefaultEnvFile {
    fn id(&self) -> &'static str {
        "ensure-default-env"
    }

    fn description(&self) -> &'static str {
        "Ensure the default environment config exists"
    }

    fn introduced_in(&self) -> Introduced {
        Introduced::At("1.0.0-beta.0")
    }

    fn apply(&self, ctx: &MigrationContext) -> Result<StepResult> {
        let store = ctx.store();

        if !store.exists() {
            return Ok(StepResult::skipped(format!(
                "config directory {} not found",
                ctx.config_dir
            )));
        }

        if let Some(existing) = store.list(DEFAULT_ENV_PATTERN)?.first() {
            return Ok(StepResult::skipped(format!(
                "{} already exists",
                existing.file_name().unwrap_or_default()
            )));
        }

        // Keep the project's current format, the YAML conversion runs next
        let format = match store.application_format()? {
            Some(format) => format,
            None => ProjectDescriptor::load(&ctx.descriptor_path)?
                .unwrap_or_default()
                .config_format(),
        };

        let path = ctx.config_dir.join(env_filename("default", format));
        fs::write(&path, assets::default_env(format)?)?;
        info!("Created default environment config {}", path);

        Ok(StepResult::Applied(vec![path]))
    }
}
