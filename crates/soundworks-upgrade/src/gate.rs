//! Version gate
//!
//! A step applies to a project when the project has no recorded tool version
//! or when the recorded version sorts strictly before the step's own version.
//! Steps opting out of the gate always apply.

use camino::Utf8Path;
use semver::Version;
use serde_json::Value;
use soundworks_core::version::{is_older_than, parse_loose};
use soundworks_core::{ProjectDescriptor, Result};
use tracing::warn;

use crate::step::{MigrationContext, MigrationStep};

/// Gate decision for one step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gate {
    Open,
    Closed(String),
}

impl Gate {
    pub fn is_open(&self) -> bool {
        matches!(self, Gate::Open)
    }
}

/// Tool version recorded in the project descriptor
///
/// Missing and unparseable versions both yield `None`, which opens every gate.
pub fn recorded_version(descriptor_path: &Utf8Path) -> Result<Option<Version>> {
    let Some(value) = ProjectDescriptor::read_field(descriptor_path, "createVersion")? else {
        return Ok(None);
    };

    let Value::String(raw) = value else {
        warn!("Ignoring non-string createVersion in {}", descriptor_path);
        return Ok(None);
    };

    match parse_loose(&raw) {
        Ok(version) => Ok(Some(version)),
        Err(_) => {
            warn!(
                "Cannot parse createVersion \"{}\" in {}, running every migration",
                raw, descriptor_path
            );
            Ok(None)
        }
    }
}

/// Decide whether `step` applies to a project recorded at `recorded`
pub fn check(
    step: &dyn MigrationStep,
    recorded: Option<&Version>,
    ctx: &MigrationContext,
) -> Result<Gate> {
    let Some(recorded) = recorded else {
        return Ok(Gate::Open);
    };

    if !step.follows_create_version() {
        return Ok(Gate::Open);
    }

    let introduced = step.introduced_in().resolve(ctx)?;
    if is_older_than(recorded, &introduced) {
        Ok(Gate::Open)
    } else {
        Ok(Gate::Closed(format!(
            "project already at {} (step introduced in {})",
            recorded, introduced
        )))
    }
}

/// Applicable steps, in declaration order
pub fn applicable_steps<'a>(
    steps: &'a [Box<dyn MigrationStep>],
    recorded: Option<&Version>,
    ctx: &MigrationContext,
) -> Result<Vec<&'a dyn MigrationStep>> {
    let mut applicable = Vec::new();
    for step in steps {
        if check(step.as_ref(), recorded, ctx)?.is_open() {
            applicable.push(step.as_ref());
        }
    }
    Ok(applicable)
}
