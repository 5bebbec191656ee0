//! Supported config serialization formats

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use super::Record;
use crate::error::{Error, Result};

/// Serialization format of a config file, decided by its extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigFormat {
    /// `.json` and `.json5`
    Json,
    /// `.yaml` and `.yml`
    Yaml,
}

impl ConfigFormat {
    /// Detect the format from a file extension (case insensitive)
    pub fn from_path(path: &Utf8Path) -> Result<Self> {
        let extension = path.extension().unwrap_or_default().to_lowercase();

        match extension.as_str() {
            "json" | "json5" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(Error::unsupported_format(
                path.as_str(),
                format!(".{}", extension),
            )),
        }
    }

    /// Parse a format name as stored in the project descriptor
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "json" | "json5" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Canonical extension, without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }

    /// Name recorded in the project descriptor
    pub fn as_str(&self) -> &'static str {
        self.extension()
    }

    /// Parse file contents into a record
    pub fn parse(&self, path: &Utf8Path, content: &str) -> Result<Record> {
        let parsed = match self {
            // Strict JSON first so plain files keep exact number types
            Self::Json => serde_json::from_str(content)
                .or_else(|_| json5::from_str::<Record>(content))
                .map_err(|e| e.to_string()),
            Self::Yaml => {
                if content.trim().is_empty() {
                    Ok(Record::Null)
                } else {
                    serde_yaml_ng::from_str(content).map_err(|e| e.to_string())
                }
            }
        };

        parsed.map_err(|message| Error::config_parse(path.as_str(), message))
    }

    /// Serialize a record in this format
    pub fn render(&self, record: &Record) -> Result<String> {
        match self {
            Self::Json => {
                let mut content = serde_json::to_string_pretty(record)?;
                content.push('\n');
                Ok(content)
            }
            Self::Yaml => Ok(serde_yaml_ng::to_string(record)?),
        }
    }
}

impl std::fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
