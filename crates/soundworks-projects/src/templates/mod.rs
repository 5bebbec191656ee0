//! Application templates.
//!
//! A template is a directory tree with a `template-infos.json` file at its
//! root describing the template and the client templates it ships:
//!
//! ```json
//! {
//!   "name": "js",
//!   "description": "default soundworks application template",
//!   "clients": [
//!     { "name": "browser", "runtime": "browser", "pathname": "src/clients/browser" }
//!   ]
//! }
//! ```
//!
//! The template system is organized into focused modules:
//! - `infos`: `template-infos.json` parsing
//! - `loader`: bundled and on-disk template discovery
//! - `scaffold`: project generation with name substitution

pub mod infos;
pub mod loader;
pub mod scaffold;

pub use infos::{ClientTemplate, TemplateInfos, TEMPLATE_INFOS_FILE};
pub use loader::{project_file, Template, TemplateCatalog, TemplateFile, TemplateSource};
pub use scaffold::scaffold;
