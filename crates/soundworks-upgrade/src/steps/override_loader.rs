use soundworks_core::assets::{is_load_config_shim, load_config_shim};
use soundworks_core::config::backup;
use soundworks_core::Result;
use std::fs;
use tracing::info;

use crate::step::{Introduced, MigrationContext, MigrationStep, StepResult};

/// Replace the legacy `load-config.js` with a shim delegating to `@soundworks/helpers`
pub struct OverrideLoader;

impl MigrationStep for OverrideLoader {
    fn id(&self) -> &'static str {
        "override-loader"
    }

    fn description(&self) -> &'static str {
        "Delegate load-config.js to @soundworks/helpers"
    }

    fn introduced_in(&self) -> Introduced {
        Introduced::At("1.0.0-alpha.22")
    }

    fn apply(&self, ctx: &MigrationContext) -> Result<StepResult> {
        let path = &ctx.loader_path;

        if !path.is_file() {
            return Ok(StepResult::skipped(format!("{} not found", path)));
        }

        let source = fs::read_to_string(path)?;
        if is_load_config_shim(&source) {
            return Ok(StepResult::skipped(format!("{} already overridden", path)));
        }

        let saved = backup(path)?;
        fs::write(path, load_config_shim()?)?;
        info!("Overrode {} (backed up as {})", path, saved);

        Ok(StepResult::Applied(vec![path.clone()]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::Project;

    const LEGACY_LOADER: &str = "export function loadConfig() { return {}; }\n";

    #[test]
    fn test_overrides_legacy_loader() {
        let project = Project::new().descriptor("{}");
        project.file("src/utils/load-config.js", LEGACY_LOADER);

        let ctx = project.context();
        assert!(OverrideLoader.run(&ctx).is_applied());
        assert_eq!(project.read("src/utils/load-config.js.bak"), LEGACY_LOADER);
        assert!(is_load_config_shim(&project.read("src/utils/load-config.js")));

        assert!(OverrideLoader.run(&ctx).is_skipped());
        assert_eq!(project.read("src/utils/load-config.js.bak"), LEGACY_LOADER);
    }

    #[test]
    fn test_skips_without_loader() {
        let project = Project::new().descriptor("{}");
        let result = OverrideLoader.run(&project.context());
        assert!(result.is_skipped());
        assert!(!project.exists("src/utils/load-config.js"));
    }
}
