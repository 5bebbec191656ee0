//! Upgrade config files to the current format

use anyhow::Result;
use soundworks_core::config::CONFIG_PATTERN;
use soundworks_upgrade::{MigrationContext, Orchestrator, StepResult};

use super::Context;
use crate::output;

pub fn run(ctx: &Context) -> Result<()> {
    output::header("Upgrade config");

    let migration = MigrationContext::for_project(&ctx.paths)?;
    migration.ensure_project()?;

    output::info("The following files might be overridden by the update:");
    let mut files = vec![migration.descriptor_path.clone()];
    files.extend(migration.store().list(CONFIG_PATTERN)?);
    files.push(migration.loader_path.clone());
    for file in &files {
        println!("    - {}", ctx.paths.relative(file));
    }

    if !ctx.confirm("Confirm?")? {
        output::warning("Aborting...");
        return Ok(());
    }

    let report = Orchestrator::new().run(&migration)?;

    for outcome in &report.outcomes {
        match &outcome.result {
            StepResult::Applied(written) => {
                let written: Vec<_> = written
                    .iter()
                    .map(|path| ctx.paths.relative(path).to_string())
                    .collect();
                output::success(&format!("{}: {}", outcome.description, written.join(", ")));
            }
            StepResult::Skipped(reason) => {
                output::kv(outcome.description, &format!("skipped, {}", reason));
            }
            StepResult::Failed(err) => {
                output::error(&format!("{}: {}", outcome.description, err));
            }
        }
    }

    report.into_result()?;

    output::info(
        "Once you are sure your application starts as expected, you can safely delete the `.bak` files",
    );

    Ok(())
}
