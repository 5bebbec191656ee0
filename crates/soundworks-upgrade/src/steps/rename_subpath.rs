use serde_json::Value;
use soundworks_core::config::ENV_PATTERN;
use soundworks_core::Result;
use tracing::info;

use super::{framework_too_old, rename_key};
use crate::step::{Introduced, MigrationContext, MigrationStep, StepResult};

/// Rename the legacy `subpath` env field to `baseUrl`
pub struct RenameSubpathToBaseUrl;

impl MigrationStep for RenameSubpathToBaseUrl {
    fn id(&self) -> &'static str {
        "rename-subpath-to-base-url"
    }

    fn description(&self) -> &'static str {
        "Rename ServerEnvConfig#subpath to ServerEnvConfig#baseUrl"
    }

    fn introduced_in(&self) -> Introduced {
        Introduced::At("1.0.0-beta.0")
    }

    // Gated on the framework version instead
    fn follows_create_version(&self) -> bool {
        false
    }

    fn apply(&self, ctx: &MigrationContext) -> Result<StepResult> {
        if let Some(reason) = framework_too_old(ctx)? {
            return Ok(StepResult::Skipped(reason));
        }

        let store = ctx.store();
        let mut written = Vec::new();

        for mut entry in store.read(ENV_PATTERN)? {
            let renamed = match &mut entry.record {
                Value::Object(env) => rename_key(env, "subpath", "baseUrl"),
                _ => false,
            };

            if !renamed {
                continue;
            }

            store.rewrite_with_backup(&entry.path, &entry.record)?;
            info!("Renamed subpath to baseUrl in {}", entry.path);
            written.push(entry.path);
        }

        if written.is_empty() {
            return Ok(StepResult::skipped("no env config declares a `subpath` field"));
        }

        Ok(StepResult::Applied(written))
    }
}
