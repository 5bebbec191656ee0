//! Error types for soundworks-projects

use thiserror::Error;

/// Result type alias using soundworks-projects's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Project management error types
#[derive(Error, Debug)]
pub enum Error {
    /// Target directory already holds files
    #[error("\"{path}\" directory exists and is not empty, aborting...")]
    DirectoryNotEmpty { path: String },

    /// No template matches the requested name
    #[error("Template not found: {template}. Available templates: {available}")]
    TemplateNotFound { template: String, available: String },

    /// No valid template could be discovered
    #[error("No template found in: {locations}")]
    NoTemplates { locations: String },

    /// `template-infos.json` is missing or malformed
    #[error("Invalid template infos {path}: {message}")]
    InvalidTemplate { path: String, message: String },

    /// Template declares no client for the requested runtime
    #[error("Template \"{template}\" has no client template for runtime \"{runtime}\"")]
    NoClientTemplate { template: String, runtime: String },

    /// Client name already declared in the application config
    #[error("Client \"{name}\" already exists, aborting...")]
    ClientExists { name: String },

    /// File or directory would be overwritten
    #[error("\"{path}\" already exists, aborting...")]
    DestinationExists { path: String },

    /// No `application.*` file in the config directory
    #[error("Application config file not found in \"{dir}\", aborting...")]
    MissingApplicationConfig { dir: String },

    /// Source directory of an eject does not exist
    #[error("\"{path}\" not found, make sure the project dependencies are installed")]
    MissingSource { path: String },

    /// Required command not found
    #[error("Required command not found: {command}")]
    CommandNotFound { command: String },

    /// Process exited with a failure status
    #[error("Process execution failed: {0}")]
    ProcessExecution(String),

    /// Process did not complete in time
    #[error("`{command}` timed out after {seconds}s")]
    Timeout { command: String, seconds: u64 },

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Core library error
    #[error(transparent)]
    Core(#[from] soundworks_core::Error),
}

impl Error {
    /// Create a directory not empty error
    pub fn directory_not_empty(path: impl Into<String>) -> Self {
        Self::DirectoryNotEmpty { path: path.into() }
    }

    /// Create a template not found error
    pub fn template_not_found(template: impl Into<String>, available: impl Into<String>) -> Self {
        Self::TemplateNotFound {
            template: template.into(),
            available: available.into(),
        }
    }

    /// Create a no templates error
    pub fn no_templates(locations: impl Into<String>) -> Self {
        Self::NoTemplates {
            locations: locations.into(),
        }
    }

    /// Create an invalid template error
    pub fn invalid_template(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidTemplate {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a no client template error
    pub fn no_client_template(template: impl Into<String>, runtime: impl Into<String>) -> Self {
        Self::NoClientTemplate {
            template: template.into(),
            runtime: runtime.into(),
        }
    }

    /// Create a client exists error
    pub fn client_exists(name: impl Into<String>) -> Self {
        Self::ClientExists { name: name.into() }
    }

    /// Create a destination exists error
    pub fn destination_exists(path: impl Into<String>) -> Self {
        Self::DestinationExists { path: path.into() }
    }

    /// Create a missing application config error
    pub fn missing_application_config(dir: impl Into<String>) -> Self {
        Self::MissingApplicationConfig { dir: dir.into() }
    }

    /// Create a missing source error
    pub fn missing_source(path: impl Into<String>) -> Self {
        Self::MissingSource { path: path.into() }
    }

    /// Create a command not found error
    pub fn command_not_found(command: impl Into<String>) -> Self {
        Self::CommandNotFound {
            command: command.into(),
        }
    }

    /// Create a process execution error
    pub fn process_execution(message: impl Into<String>) -> Self {
        Self::ProcessExecution(message.into())
    }

    /// Create a timeout error
    pub fn timeout(command: impl Into<String>, seconds: u64) -> Self {
        Self::Timeout {
            command: command.into(),
            seconds,
        }
    }

    /// Whether the user interrupted a prompt
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Core(err) if err.is_cancelled())
    }
}
