use soundworks_core::config::{backup, read_record, write_record, JSON_CONFIG_PATTERN};
use soundworks_core::{ConfigFormat, ProjectDescriptor, Result};
use tracing::{debug, info};

use crate::step::{Introduced, MigrationContext, MigrationStep, StepResult};

/// Convert every JSON config file to YAML, keeping the JSON as a backup
pub struct JsonToYaml;

impl MigrationStep for JsonToYaml {
    fn id(&self) -> &'static str {
        "json-to-yaml"
    }

    fn description(&self) -> &'static str {
        "Convert config files from JSON to YAML"
    }

    fn introduced_in(&self) -> Introduced {
        Introduced::At("1.0.0-alpha.22")
    }

    fn apply(&self, ctx: &MigrationContext) -> Result<StepResult> {
        let store = ctx.store();
        if !store.has_json_config()? {
            return Ok(StepResult::skipped("no JSON config file found"));
        }
        let sources = store.list(JSON_CONFIG_PATTERN)?;

        let mut written = Vec::new();

        for source in sources {
            // Parse before touching anything so a malformed file leaves it in place
            let record = read_record(&source)?;

            let stem = source.file_stem().unwrap_or_default();
            let target = ctx
                .config_dir
                .join(format!("{}.{}", stem, ConfigFormat::Yaml.extension()));

            if target.exists() {
                let saved = backup(&target)?;
                debug!("Existing {} kept as {}", target, saved);
            }

            let saved = backup(&source)?;
            write_record(&target, &record)?;
            info!("Converted {} to YAML (backed up as {})", source, saved);

            written.push(target);
        }

        ProjectDescriptor::write_field(
            &ctx.descriptor_path,
            "configFormat",
            ConfigFormat::Yaml.as_str(),
        )?;
        written.push(ctx.descriptor_path.clone());

        Ok(StepResult::Applied(written))
    }
}
