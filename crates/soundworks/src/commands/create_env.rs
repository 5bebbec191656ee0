//! Create an environment config file

use anyhow::Result;
use soundworks_projects::env::plan_env;

use super::Context;
use crate::output;

pub fn run(ctx: &Context) -> Result<()> {
    output::header("Create environment config");

    let plan = plan_env(&ctx.paths, &ctx.prompter)?;
    let filename = plan.filename();

    output::info(&format!("Creating config file \"{}\":", filename));
    println!("```");
    print!("{}", plan.rendered()?);
    println!("```");

    if !ctx.confirm("Confirm?")? {
        output::warning("Aborting...");
        return Ok(());
    }

    plan.apply()?;
    output::success(&format!("Config file \"{}\" successfully created", filename));
    output::info(&format!(
        "Run `ENV={} npm run dev` to use this environment configuration",
        plan.name
    ));

    Ok(())
}
