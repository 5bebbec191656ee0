//! Project descriptor (`.soundworks`)
//!
//! A flat JSON object written at scaffold time and updated field by field
//! afterwards. Unknown fields survive every rewrite.

use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use tracing::debug;

use super::ConfigFormat;
use crate::error::{Error, Result};

/// Typed view of the project descriptor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_package: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_format: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProjectDescriptor {
    /// Load the descriptor, `None` when the file does not exist
    pub fn load(path: &Utf8Path) -> Result<Option<Self>> {
        let Some(object) = read_object(path)? else {
            return Ok(None);
        };

        serde_json::from_value(Value::Object(object))
            .map(Some)
            .map_err(|e| Error::corrupt_descriptor(path.as_str(), e.to_string()))
    }

    /// Write the whole descriptor, replacing the file
    pub fn save(&self, path: &Utf8Path) -> Result<()> {
        let value = serde_json::to_value(self)?;
        write_value(path, &value)
    }

    /// Read one field, `None` when the file or the field is absent
    pub fn read_field(path: &Utf8Path, key: &str) -> Result<Option<Value>> {
        Ok(read_object(path)?.and_then(|mut object| object.remove(key)))
    }

    /// Set one field, creating the descriptor if needed
    pub fn write_field(path: &Utf8Path, key: &str, value: impl Into<Value>) -> Result<()> {
        let mut object = read_object(path)?.unwrap_or_default();
        object.insert(key.to_string(), value.into());
        write_value(path, &Value::Object(object))?;
        debug!("Set {} in {}", key, path);
        Ok(())
    }

    /// Recorded config format, JSON when absent
    ///
    /// Projects created before the YAML migration carry no `configFormat`.
    pub fn config_format(&self) -> ConfigFormat {
        self.config_format
            .as_deref()
            .and_then(ConfigFormat::from_name)
            .unwrap_or(ConfigFormat::Json)
    }
}

fn read_object(path: &Utf8Path) -> Result<Option<Map<String, Value>>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&content)
        .map_err(|e| Error::corrupt_descriptor(path.as_str(), format!("Invalid JSON file ({})", e)))?;

    match value {
        Value::Object(object) => Ok(Some(object)),
        _ => Err(Error::corrupt_descriptor(path.as_str(), "Not a JSON object")),
    }
}

fn write_value(path: &Utf8Path, value: &Value) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    fs::write(path, content)?;
    Ok(())
}
