//! Error types for soundworks-core

use thiserror::Error;

/// Result type alias using soundworks-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for soundworks projects
#[derive(Error, Debug)]
pub enum Error {
    /// Config file extension is neither JSON nor YAML
    #[error("Unsupported config format \"{extension}\": {path}")]
    UnsupportedFormat { path: String, extension: String },

    /// Project descriptor exists but is not a JSON object
    #[error("Cannot read project descriptor {path}: {message}")]
    CorruptDescriptor { path: String, message: String },

    /// Command run outside of a soundworks project
    #[error("{path} not found. This does not seem to be a soundworks project, make sure to run the command at the root of your project")]
    MissingProjectMarker { path: String },

    /// A migration step failed, remaining steps were not executed
    #[error("Migration step \"{step}\" failed: {cause}")]
    StepFailure { step: String, cause: String },

    /// Config file could not be parsed
    #[error("Failed to parse {path}: {message}")]
    ConfigParse { path: String, message: String },

    /// Expected config file is missing
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    /// Config record does not match the expected schema
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Invalid semver version
    #[error("Invalid version format: {version}")]
    InvalidVersion { version: String },

    /// Invalid glob pattern
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] globset::Error),

    /// Prompt could not be answered
    #[error("Prompt error: {message}")]
    Prompt { message: String },

    /// User interrupted a prompt
    #[error("Aborted by user")]
    Cancelled,

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an unsupported format error
    pub fn unsupported_format(path: impl Into<String>, extension: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            path: path.into(),
            extension: extension.into(),
        }
    }

    /// Create a corrupt descriptor error
    pub fn corrupt_descriptor(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::CorruptDescriptor {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a missing project marker error
    pub fn missing_project_marker(path: impl Into<String>) -> Self {
        Self::MissingProjectMarker { path: path.into() }
    }

    /// Create a step failure error
    pub fn step_failure(step: impl Into<String>, cause: impl Into<String>) -> Self {
        Self::StepFailure {
            step: step.into(),
            cause: cause.into(),
        }
    }

    /// Create a config parse error
    pub fn config_parse(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigParse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a config not found error
    pub fn config_not_found(path: impl Into<String>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an invalid version error
    pub fn invalid_version(version: impl Into<String>) -> Self {
        Self::InvalidVersion {
            version: version.into(),
        }
    }

    /// Create a prompt error
    pub fn prompt(message: impl Into<String>) -> Self {
        Self::Prompt {
            message: message.into(),
        }
    }

    /// True when the error stems from the user interrupting a prompt
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
