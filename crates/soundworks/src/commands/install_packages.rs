//! Install / uninstall plugins and libraries

use anyhow::Result;
use soundworks_projects::packages::{load_manifest, plan_packages, PackageKind};

use super::Context;
use crate::output;

pub async fn run(ctx: &Context, kind: PackageKind) -> Result<()> {
    output::header(&format!("Install {}", kind));

    let manifest = load_manifest(&ctx.paths)?;
    let plan = plan_packages(kind, &manifest, &ctx.prompter)?;

    if plan.is_empty() {
        output::warning("Nothing to do, aborting...");
        return Ok(());
    }

    if !plan.to_install.is_empty() {
        output::kv("installing", &plan.to_install.join(", "));
    }
    if !plan.to_remove.is_empty() {
        output::kv("removing", &plan.to_remove.join(", "));
    }

    if !ctx.confirm("Confirm?")? {
        output::warning("Aborting...");
        return Ok(());
    }

    plan.apply(&ctx.runner, ctx.paths.root()).await?;

    output::success(&format!("{} successfully updated", kind));
    for entry in plan.installed_docs() {
        output::link(entry.name, entry.doc);
    }

    Ok(())
}
