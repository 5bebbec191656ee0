//! Config contents shared by migration tests

/// Legacy application config, JSON with `target` and a default client
pub const LEGACY_APPLICATION_JSON: &str = r#"{
  "name": "x",
  "clients": {
    "player": {
      "target": "browser",
      "default": true
    }
  }
}"#;

/// Legacy env config using `subpath`
pub const LEGACY_ENV_JSON: &str = r#"{
  "type": "development",
  "port": 8000,
  "subpath": "/app",
  "serverAddress": "",
  "useHttps": false,
  "httpsInfos": { "cert": null, "key": null },
  "auth": { "clients": [], "login": "", "password": "" }
}"#;

/// Legacy env config written by hand, with JSON5 comments and quoting
pub const LEGACY_ENV_JSON5: &str = "\
{
  // dev env
  type: 'development',
  port: 8000,
  subpath: '/app',
}
";

/// Loader written by early project templates
pub const LEGACY_LOADER_JS: &str = "\
import fs from 'node:fs';
import JSON5 from 'json5';

export function loadConfig(ENV = 'default') {
  return JSON5.parse(fs.readFileSync(`config/env-${ENV}.json`));
}
";

/// Descriptor of a project created before the YAML migration
pub const JSON_DESCRIPTOR: &str = r#"{"configFormat":"json"}"#;

pub const VERSION_BEFORE_YAML: &str = "1.0.0-alpha.20";
pub const VERSION_AFTER_YAML: &str = "1.0.0-alpha.25";
pub const FRAMEWORK_TOO_OLD: &str = "4.0.0-alpha.29";
pub const FRAMEWORK_RECENT: &str = "^4.0.0";
