//! Check and update dependencies with npm-check

use anyhow::Result;
use soundworks_projects::packages::check_deps;

use super::Context;
use crate::output;

pub async fn run(ctx: &Context) -> Result<()> {
    output::header("Running `npm-check -u` (cf. https://www.npmjs.com/package/npm-check)");
    check_deps(&ctx.runner, ctx.paths.root()).await?;
    Ok(())
}
