//! Typed application and environment configuration records

use camino::Utf8Path;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::Record;
use crate::error::{Error, Result};

/// Execution target of a client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Runtime {
    Browser,
    Node,
}

impl Runtime {
    pub fn as_str(&self) -> &'static str {
        match self {
            Runtime::Browser => "browser",
            Runtime::Node => "node",
        }
    }

    pub fn all() -> [Runtime; 2] {
        [Runtime::Browser, Runtime::Node]
    }
}

impl std::fmt::Display for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Runtime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "browser" => Ok(Runtime::Browser),
            "node" => Ok(Runtime::Node),
            other => Err(Error::invalid_config(format!("Unknown runtime \"{}\"", other))),
        }
    }
}

/// Declaration of one client in the application config
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<Runtime>,

    /// Legacy name of `runtime`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Runtime>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub default: bool,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ClientDescriptor {
    pub fn new(runtime: Runtime) -> Self {
        Self {
            runtime: Some(runtime),
            ..Default::default()
        }
    }

    /// Effective runtime, falling back to the legacy `target` field
    pub fn runtime(&self) -> Option<Runtime> {
        self.runtime.or(self.target)
    }
}

/// `application.{json,yaml}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub author: String,

    #[serde(default)]
    pub clients: IndexMap<String, ClientDescriptor>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ApplicationConfig {
    /// Build from a parsed record, naming the file on failure
    pub fn from_record(path: &Utf8Path, record: Record) -> Result<Self> {
        let record = if record.is_null() {
            Value::Object(Map::new())
        } else {
            record
        };

        serde_json::from_value(record)
            .map_err(|e| Error::config_parse(path.as_str(), e.to_string()))
    }

    pub fn to_record(&self) -> Result<Record> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn has_client(&self, name: &str) -> bool {
        self.clients.contains_key(name)
    }

    /// Name of the default client, if any
    pub fn default_client(&self) -> Option<&str> {
        self.clients
            .iter()
            .find(|(_, client)| client.default)
            .map(|(name, _)| name.as_str())
    }

    /// Insert or replace a client
    ///
    /// When the new client is the default one, the previous default is
    /// cleared in the same operation.
    pub fn insert_client(&mut self, name: impl Into<String>, client: ClientDescriptor) {
        if client.default {
            self.clear_default();
        }
        self.clients.insert(name.into(), client);
    }

    /// Make `name` the only default client
    pub fn set_default_client(&mut self, name: &str) -> Result<()> {
        if !self.has_client(name) {
            return Err(Error::invalid_config(format!("Unknown client \"{}\"", name)));
        }

        self.clear_default();
        if let Some(client) = self.clients.get_mut(name) {
            client.default = true;
        }
        Ok(())
    }

    fn clear_default(&mut self) {
        for client in self.clients.values_mut() {
            client.default = false;
        }
    }

    /// Names of clients running in the browser
    pub fn browser_clients(&self) -> Vec<&str> {
        self.clients
            .iter()
            .filter(|(_, client)| client.runtime() == Some(Runtime::Browser))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// At most one client may be flagged as default
    pub fn validate(&self) -> Result<()> {
        let defaults: Vec<&str> = self
            .clients
            .iter()
            .filter(|(_, client)| client.default)
            .map(|(name, _)| name.as_str())
            .collect();

        if defaults.len() > 1 {
            return Err(Error::invalid_config(format!(
                "Several clients are flagged as default: {}",
                defaults.join(", ")
            )));
        }

        Ok(())
    }
}

/// Kind of environment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvType {
    #[default]
    Development,
    Production,
}

impl EnvType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvType::Development => "development",
            EnvType::Production => "production",
        }
    }
}

impl std::fmt::Display for EnvType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HttpsInfos {
    pub cert: Option<String>,
    pub key: Option<String>,
}

impl HttpsInfos {
    /// Both paths are recorded only when https is used and both are given
    pub fn new(use_https: bool, cert: &str, key: &str) -> Self {
        let (cert, key) = (cert.trim(), key.trim());
        if use_https && !cert.is_empty() && !key.is_empty() {
            Self {
                cert: Some(cert.to_string()),
                key: Some(key.to_string()),
            }
        } else {
            Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub clients: Vec<String>,
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub password: String,
}

/// `env-<name>.{json,yaml}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvConfig {
    #[serde(rename = "type", default)]
    pub env_type: EnvType,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default, alias = "subpath")]
    pub base_url: String,

    #[serde(default)]
    pub server_address: String,

    #[serde(default)]
    pub use_https: bool,

    #[serde(default)]
    pub https_infos: HttpsInfos,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_port() -> u16 {
    8000
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            env_type: EnvType::Development,
            port: default_port(),
            base_url: String::new(),
            server_address: String::new(),
            use_https: false,
            https_infos: HttpsInfos::default(),
            auth: AuthConfig::default(),
            extra: Map::new(),
        }
    }
}

impl EnvConfig {
    pub fn from_record(path: &Utf8Path, record: Record) -> Result<Self> {
        serde_json::from_value(record)
            .map_err(|e| Error::config_parse(path.as_str(), e.to_string()))
    }

    pub fn to_record(&self) -> Result<Record> {
        Ok(serde_json::to_value(self)?)
    }
}
