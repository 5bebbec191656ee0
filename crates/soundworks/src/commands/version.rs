//! Version command

use crate::cli::VersionArgs;
use crate::version::VersionInfo;
use anyhow::Result;

pub fn run(args: VersionArgs) -> Result<()> {
    println!("{}", render(&VersionInfo::current(), args.json)?);
    Ok(())
}

fn render(info: &VersionInfo, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(info)?)
    } else {
        Ok(info.to_string())
    }
}
