//! Files bundled with the CLI and written into projects

use camino::Utf8Path;
use rust_embed::RustEmbed;

use crate::config::{ConfigFormat, Record};
use crate::error::{Error, Result};

#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/assets/"]
struct EmbeddedAssets;

/// Default environment config, YAML source
const ENV_DEFAULT_FILE: &str = "env-default.yaml";

/// Shim delegating config loading to `@soundworks/helpers`
const LOAD_CONFIG_FILE: &str = "load-config.js";

/// Line identifying a loader that already delegates to `@soundworks/helpers`
pub const LOAD_CONFIG_MARKER: &str =
    "import { loadConfig as helpersLoadConfig } from '@soundworks/helpers/node.js';";

fn asset(name: &str) -> Result<String> {
    let file = EmbeddedAssets::get(name)
        .ok_or_else(|| Error::config_not_found(format!("<bundled>/{}", name)))?;

    String::from_utf8(file.data.into_owned())
        .map_err(|_| Error::invalid_config(format!("Invalid UTF-8 in bundled file: {}", name)))
}

/// Default environment config as a record
pub fn default_env_record() -> Result<Record> {
    let content = asset(ENV_DEFAULT_FILE)?;
    ConfigFormat::Yaml.parse(Utf8Path::new(ENV_DEFAULT_FILE), &content)
}

/// Default environment config rendered in `format`
pub fn default_env(format: ConfigFormat) -> Result<String> {
    match format {
        ConfigFormat::Yaml => asset(ENV_DEFAULT_FILE),
        ConfigFormat::Json => format.render(&default_env_record()?),
    }
}

/// Loader shim contents
pub fn load_config_shim() -> Result<String> {
    asset(LOAD_CONFIG_FILE)
}

/// Whether a loader source already is the shim
pub fn is_load_config_shim(source: &str) -> bool {
    source.lines().any(|line| line.trim() == LOAD_CONFIG_MARKER)
}
