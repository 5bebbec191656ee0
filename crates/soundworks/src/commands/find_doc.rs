//! Documentation links

use anyhow::Result;
use console::style;
use soundworks_projects::packages::{find_docs, load_manifest, GENERAL_DOCUMENTATION};

use super::Context;
use crate::output;

pub fn run(ctx: &Context) -> Result<()> {
    output::header("Documentation");
    for entry in GENERAL_DOCUMENTATION {
        output::link(entry.name, entry.doc);
    }
    println!();

    let manifest = load_manifest(&ctx.paths)?;
    let sections = find_docs(&manifest, &ctx.prompter)?;

    for section in sections.iter().filter(|s| !s.is_empty()) {
        output::header(&format!("# {}", section.kind));

        if !section.installed.is_empty() {
            println!("  {}", style("[installed]").green());
            for entry in &section.installed {
                output::link(entry.name, entry.doc);
            }
        }

        if !section.not_installed.is_empty() {
            println!("  {}", style("[not installed]").dim());
            for entry in &section.not_installed {
                println!("  + {}: {}", entry.name, style(entry.doc).dim());
            }
        }
    }

    Ok(())
}
