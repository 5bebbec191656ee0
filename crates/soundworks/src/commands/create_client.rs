//! Create a client from the project's template

use anyhow::Result;
use soundworks_projects::client::plan_client;

use super::Context;
use crate::output;

pub fn run(ctx: &Context) -> Result<()> {
    output::header("Create client");

    let catalog = ctx.catalog()?;
    let plan = plan_client(&ctx.paths, &catalog, &ctx.prompter)?;

    output::info(&format!(
        "Creating client \"{}\" in \"{}\"",
        plan.name,
        ctx.paths.relative(&plan.destination)
    ));
    for (key, value) in plan.summary() {
        output::kv(key, &value);
    }

    if !ctx.confirm("Confirm?")? {
        output::warning("Aborting...");
        return Ok(());
    }

    let name = plan.name.clone();
    plan.apply()?;
    output::success(&format!("Client {} created and configured", name));

    Ok(())
}
