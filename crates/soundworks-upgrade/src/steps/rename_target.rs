use serde_json::Value;
use soundworks_core::config::APPLICATION_PATTERN;
use soundworks_core::Result;
use tracing::info;

use super::{framework_too_old, rename_key};
use crate::step::{Introduced, MigrationContext, MigrationStep, StepResult};

/// Rename the legacy `target` client field to `runtime`
pub struct RenameTargetToRuntime;

impl MigrationStep for RenameTargetToRuntime {
    fn id(&self) -> &'static str {
        "rename-target-to-runtime"
    }

    fn description(&self) -> &'static str {
        "Rename ClientDescription#target to ClientDescription#runtime"
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

        for mut entry in store.read(APPLICATION_PATTERN)? {
            let Some(clients) = entry.record.get_mut("clients").and_then(Value::as_object_mut)
            else {
                continue;
            };

            let mut renamed = 0;
            for client in clients.values_mut() {
                if let Some(client) = client.as_object_mut() {
                    if rename_key(client, "target", "runtime") {
                        renamed += 1;
                    }
                }
            }

            if renamed == 0 {
                continue;
            }

            store.rewrite_with_backup(&entry.path, &entry.record)?;
            info!("Renamed target to runtime for {} client(s) in {}", renamed, entry.path);
            written.push(entry.path);
        }

        if written.is_empty() {
            return Ok(StepResult::skipped("no client declares a `target` field"));
        }

        Ok(StepResult::Applied(written))
    }
}
