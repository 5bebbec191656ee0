//! Config migrations for soundworks projects
//!
//! Provides:
//! - A fixed, ordered chain of idempotent migration steps
//! - A version gate selecting the steps a project still needs
//! - An orchestrator running the chain with fail-fast semantics
//!
//! Every destructive rewrite first renames the original file to `<file>.bak`.

pub mod gate;
pub mod orchestrator;
pub mod step;
pub mod steps;

#[cfg(test)]
mod test_support;

pub use gate::{applicable_steps, Gate};
pub use orchestrator::{MigrationReport, Orchestrator, StepOutcome};
pub use step::{Introduced, MigrationContext, MigrationStep, StepResult};
pub use steps::default_steps;
