//! Print the application and environment configs

use anyhow::Result;
use soundworks_projects::config_infos::read_config_infos;

use super::Context;
use crate::output;

pub fn run(ctx: &Context) -> Result<()> {
    let infos = read_config_infos(&ctx.paths)?;

    output::header("Application config");
    output::info(ctx.paths.relative(&infos.application_path).as_str());
    output::kv("name", &infos.application.name);
    output::kv("author", &infos.application.author);
    output::kv("clients", "");
    for line in infos.client_lines() {
        println!("    - {}", line);
    }

    if infos.envs.is_empty() {
        output::warning(&format!(
            "No environment config file found in \"{}\"",
            ctx.paths.relative(&ctx.paths.config_dir())
        ));
        return Ok(());
    }

    output::header("Environment config");
    for env in &infos.envs {
        println!();
        output::info(ctx.paths.relative(&env.path).as_str());
        println!("{}", serde_json::to_string_pretty(&env.record)?);
        if !env.hint.is_empty() {
            output::info(&format!(
                "To launch the application with this environment configuration, run: `{}`",
                env.hint
            ));
        }
    }

    Ok(())
}
