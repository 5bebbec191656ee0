//! Eject the `@soundworks/helpers` launcher

use anyhow::Result;
use soundworks_projects::eject::plan_eject;

use super::Context;
use crate::output;

pub fn run(ctx: &Context) -> Result<()> {
    output::header("Eject launcher");

    let plan = plan_eject(&ctx.paths, &ctx.prompter)?;

    if !ctx.confirm("Confirm?")? {
        output::warning("Aborting...");
        return Ok(());
    }

    plan.apply()?;

    output::success(&format!(
        "@soundworks/helpers launcher ejected in {}",
        ctx.paths.relative(&plan.destination)
    ));
    output::info("You can now change the default initialization views.");
    output::info("To use the ejected launcher, update the imports in your clients' `index.js` files:");
    for (old, new) in plan.import_changes() {
        output::diff(&old, &new);
    }

    Ok(())
}
