//! Create a new application from a template

use anyhow::{Context as _, Result};
use console::style;
use soundworks_core::ProjectPaths;
use soundworks_projects::create::plan_project;
use soundworks_projects::packages::install_dependencies;
use soundworks_projects::templates::scaffold;
use tracing::debug;

use super::{init, Context, DOCUMENTATION_URL, ISSUES_URL};
use crate::cli::CreateArgs;
use crate::output;
use crate::version::VersionInfo;

pub async fn run(args: CreateArgs, ctx: &Context) -> Result<()> {
    println!("{}", style(VersionInfo::current().banner()).dim());
    output::header("Welcome to soundworks");
    output::kv("documentation", DOCUMENTATION_URL);
    output::kv("issues", ISSUES_URL);
    println!();

    let catalog = ctx.catalog()?;
    let cwd = ctx.paths.root();
    let plan = plan_project(
        cwd,
        args.dir.as_deref(),
        args.template.as_deref(),
        &catalog,
        &ctx.prompter,
    )?;

    output::info(&format!(
        "Scaffolding application in \"{}\" with template \"{}\"",
        plan.target_dir,
        plan.template.name()
    ));
    let (_, written) = scaffold(plan.template, &plan.name, &plan.target_dir)?;
    debug!("{} file(s) written", written.len());

    let project = ctx.for_project(ProjectPaths::new(plan.target_dir.clone()));

    if !args.skip_install {
        output::info("Installing dependencies");
        install_dependencies(&project.runner, project.paths.root())
            .await
            .context("Failed to install dependencies")?;
    }

    if !args.no_init {
        init(&project).await?;
    }

    output::success("Your project is ready!");
    output::header("Next steps");

    let mut step = 1;
    match plan.target_dir.strip_prefix(cwd) {
        Ok(relative) if relative.as_str().is_empty() => {}
        Ok(relative) => {
            println!("  {}: {}", step, style(format!("cd {}", relative)).cyan());
            step += 1;
        }
        Err(_) => {
            println!("  {}: {}", step, style(format!("cd {}", plan.target_dir)).cyan());
            step += 1;
        }
    }
    if args.skip_install {
        println!("  {}: {}", step, style("npm install").cyan());
        step += 1;
    }
    println!(
        "  {}: {} (optional)",
        step,
        style("git init && git add -A && git commit -m \"first commit\"").cyan()
    );
    println!("  {}: {}", step + 1, style("npm run dev").cyan());

    Ok(())
}
