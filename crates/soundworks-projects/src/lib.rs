//! # soundworks-projects
//!
//! Project management library for the soundworks CLI providing:
//! - Application templates (bundled and on-disk) and project scaffolding
//! - Client creation from the project's client templates
//! - Environment config creation and config summaries
//! - Plugin and library installation through npm
//! - Launcher ejection from `@soundworks/helpers`
//!
//! Interactive operations come in two halves: a `plan_*` function asking its
//! questions through an [`soundworks_core::AnswerProvider`], and an `apply`
//! method on the returned plan performing the changes. Callers confirm with
//! the user in between.
//!
//! # Examples
//!
//! ```no_run
//! use soundworks_core::{ProjectPaths, ScriptedAnswers, Answer};
//! use soundworks_projects::client::plan_client;
//! use soundworks_projects::templates::TemplateCatalog;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let paths = ProjectPaths::new("/tmp/my-project");
//! let catalog = TemplateCatalog::load(None)?;
//! let answers = ScriptedAnswers::new([Answer::from("player"), Answer::Choice("browser".into())]);
//!
//! let plan = plan_client(&paths, &catalog, &answers)?;
//! plan.apply()?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config_infos;
pub mod create;
pub mod eject;
pub mod env;
pub mod error;
pub mod packages;
pub mod templates;

pub use error::{Error, Result};
