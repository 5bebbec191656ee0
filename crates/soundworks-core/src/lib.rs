//! # soundworks-core
//!
//! Core library for the soundworks CLI providing:
//! - The config store for `application.*` and `env-*.*` files (JSON and YAML)
//! - Project descriptor (`.soundworks`) field access
//! - Typed application and environment configuration records
//! - Loose semantic version parsing for recorded and manifest versions
//! - Declarative prompts with a pluggable answers provider

pub mod assets;
pub mod config;
pub mod error;
pub mod package;
pub mod paths;
pub mod prompt;
pub mod types;
pub mod utils;
pub mod version;

pub use config::{ConfigFormat, ConfigStore, ProjectDescriptor, Record};
pub use error::{Error, Result};
pub use paths::ProjectPaths;
pub use prompt::{AcceptDefaults, Answer, AnswerProvider, Choice, Question, ScriptedAnswers};
pub use types::{ApplicationConfig, ClientDescriptor, EnvConfig, Runtime};

/// Version of the running tool, recorded as `createVersion` in project descriptors
pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name under which bundled templates are published
pub const TOOL_PACKAGE_NAME: &str = "@soundworks/create";
