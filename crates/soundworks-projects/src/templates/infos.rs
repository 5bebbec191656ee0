//! `template-infos.json` parsing

use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use soundworks_core::Runtime;

use crate::error::{Error, Result};

/// File describing a template, never copied into projects
pub const TEMPLATE_INFOS_FILE: &str = "template-infos.json";

/// Language recorded for templates that do not declare one
pub const DEFAULT_LANGUAGE: &str = "js";

/// Template assumed for projects whose descriptor names none
pub const DEFAULT_TEMPLATE: &str = "js";

/// Client template shipped inside an application template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientTemplate {
    pub name: String,
    pub runtime: Runtime,
    /// File or directory, relative to the template root
    pub pathname: String,
}

impl ClientTemplate {
    /// Extension of the template file, empty for directories
    pub fn extension(&self) -> &str {
        Utf8Path::new(&self.pathname).extension().unwrap_or("")
    }

    /// Directory that receives new clients built from this template
    pub fn parent_dir(&self) -> &Utf8Path {
        Utf8Path::new(&self.pathname)
            .parent()
            .unwrap_or_else(|| Utf8Path::new(""))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateInfos {
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default = "default_language")]
    pub language: String,

    pub clients: Vec<ClientTemplate>,
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

impl TemplateInfos {
    /// Parse the contents of `template-infos.json`, naming `path` on failure
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| Error::invalid_template(path, e.to_string()))
    }

    /// Client templates for `runtime`, in declaration order
    pub fn client_templates(&self, runtime: Runtime) -> Vec<&ClientTemplate> {
        self.clients
            .iter()
            .filter(|client| client.runtime == runtime)
            .collect()
    }

    /// Whether `relative` belongs to one of the client templates
    pub fn is_client_file(&self, relative: &Utf8Path) -> bool {
        self.clients
            .iter()
            .any(|client| relative.starts_with(&client.pathname))
    }
}
