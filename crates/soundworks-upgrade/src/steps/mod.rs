//! The fixed migration chain, in execution order

mod bump_create_version;
mod ensure_default_env;
mod json_to_yaml;
mod override_loader;
mod rename_subpath;
mod rename_target;

pub use bump_create_version::BumpCreateVersion;
pub use ensure_default_env::EnsureDefaultEnvFile;
pub use json_to_yaml::JsonToYaml;
pub use override_loader::OverrideLoader;
pub use rename_subpath::RenameSubpathToBaseUrl;
pub use rename_target::RenameTargetToRuntime;

use serde_json::{Map, Value};
use soundworks_core::package::FRAMEWORK_PACKAGE_NAME;
use soundworks_core::version::{is_newer_than, parse_loose};
use soundworks_core::Result;

use crate::step::{MigrationContext, MigrationStep};

/// Framework release after which clients declare `runtime` and envs `baseUrl`
pub const FRAMEWORK_RENAMES_AFTER: &str = "4.0.0-alpha.29";

/// Every step, in the order they must run
pub fn default_steps() -> Vec<Box<dyn MigrationStep>> {
    vec![
        Box::new(EnsureDefaultEnvFile),
        Box::new(JsonToYaml),
        Box::new(OverrideLoader),
        Box::new(BumpCreateVersion),
        Box::new(RenameTargetToRuntime),
        Box::new(RenameSubpathToBaseUrl),
    ]
}

/// Reason to skip the field renames, `None` when the framework supports them
///
/// An unknown framework version does not block the renames.
pub(crate) fn framework_too_old(ctx: &MigrationContext) -> Result<Option<String>> {
    let Some(version) = &ctx.framework_version else {
        return Ok(None);
    };

    let threshold = parse_loose(FRAMEWORK_RENAMES_AFTER)?;
    if is_newer_than(version, &threshold) {
        Ok(None)
    } else {
        Ok(Some(format!(
            "requires {} > {}, found {}",
            FRAMEWORK_PACKAGE_NAME, FRAMEWORK_RENAMES_AFTER, version
        )))
    }
}

/// Rename `from` to `to` keeping its position; an existing `to` is replaced
///
/// Returns false when `from` is absent.
pub(crate) fn rename_key(map: &mut Map<String, Value>, from: &str, to: &str) -> bool {
    if !map.contains_key(from) {
        return false;
    }

    let entries = std::mem::take(map);
    for (key, value) in entries {
        if key == from {
            map.insert(to.to_string(), value);
        } else if key != to {
            map.insert(key, value);
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_rename_key_keeps_position() {
        let mut map = object(json!({ "type": "development", "subpath": "/app", "port": 8000 }));
        assert!(rename_key(&mut map, "subpath", "baseUrl"));
        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec!["type", "baseUrl", "port"]);
        assert_eq!(map["baseUrl"], json!("/app"));
    }

    #[test]
    fn test_rename_key_overrides_existing() {
        let mut map = object(json!({ "runtime": "node", "target": "browser", "default": true }));
        assert!(rename_key(&mut map, "target", "runtime"));
        assert_eq!(Value::Object(map), json!({ "runtime": "browser", "default": true }));
    }

    #[test]
    fn test_rename_key_absent() {
        let mut map = object(json!({ "runtime": "node" }));
        assert!(!rename_key(&mut map, "target", "runtime"));
        assert_eq!(Value::Object(map), json!({ "runtime": "node" }));
    }

    #[test]
    fn test_default_steps_order() {
        let ids: Vec<_> = default_steps().iter().map(|s| s.id()).collect();
        assert_eq!(
            ids,
            vec![
                "ensure-default-env",
                "json-to-yaml",
                "override-loader",
                "bump-create-version",
                "rename-target-to-runtime",
                "rename-subpath-to-base-url",
            ]
        );
    }
}
