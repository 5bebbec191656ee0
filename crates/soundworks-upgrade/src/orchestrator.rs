//! Runs the migration chain against one project

use soundworks_core::{Error, Result};
use tracing::{debug, info};

use crate::gate::{self, Gate};
use crate::step::{MigrationContext, MigrationStep, StepResult};
use crate::steps::default_steps;

/// Result of one step within a run
#[derive(Debug)]
pub struct StepOutcome {
    pub id: &'static str,
    pub description: &'static str,
    pub result: StepResult,
}

/// Per-step outcomes of a run, in execution order
#[derive(Debug, Default)]
pub struct MigrationReport {
    pub outcomes: Vec<StepOutcome>,
}

impl MigrationReport {
    pub fn applied(&self) -> impl Iterator<Item = &StepOutcome> {
        self.outcomes.iter().filter(|o| o.result.is_applied())
    }

    pub fn skipped(&self) -> impl Iterator<Item = &StepOutcome> {
        self.outcomes.iter().filter(|o| o.result.is_skipped())
    }

    /// The step that stopped the run, if any
    pub fn failure(&self) -> Option<&StepOutcome> {
        self.outcomes.iter().find(|o| o.result.is_failed())
    }

    pub fn is_success(&self) -> bool {
        self.failure().is_none()
    }

    pub fn outcome(&self, id: &str) -> Option<&StepOutcome> {
        self.outcomes.iter().find(|o| o.id == id)
    }

    /// Turn a failed run into `StepFailure`
    pub fn into_result(self) -> Result<Self> {
        let failure = self.failure().and_then(|outcome| match &outcome.result {
            StepResult::Failed(cause) => Some(Error::step_failure(outcome.id, cause.to_string())),
            _ => None,
        });

        match failure {
            Some(err) => Err(err),
            None => Ok(self),
        }
    }
}

/// Ordered migration chain
pub struct Orchestrator {
    steps: Vec<Box<dyn MigrationStep>>,
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new()
    }
}

impl Orchestrator {
    /// Orchestrator over the full chain
    pub fn new() -> Self {
        Self::with_steps(default_steps())
    }

    pub fn with_steps(steps: Vec<Box<dyn MigrationStep>>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[Box<dyn MigrationStep>] {
        &self.steps
    }

    /// Run every step in order, stopping at the first failure
    ///
    /// Fails with `MissingProjectMarker` before touching anything when the
    /// project descriptor or the config directory is missing.
    pub fn run(&self, ctx: &MigrationContext) -> Result<MigrationReport> {
        ctx.ensure_project()?;

        let recorded = gate::recorded_version(&ctx.descriptor_path)?;
        debug!(
            "Recorded tool version: {}",
            recorded
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_else(|| "none".to_string())
        );

        let mut report = MigrationReport::default();

        for step in &self.steps {
            let result = match gate::check(step.as_ref(), recorded.as_ref(), ctx) {
                Ok(Gate::Open) => step.run(ctx),
                Ok(Gate::Closed(reason)) => StepResult::Skipped(reason),
                Err(err) => StepResult::Failed(err),
            };

            match &result {
                StepResult::Applied(paths) => info!("{}: applied ({} file(s))", step.id(), paths.len()),
                StepResult::Skipped(reason) => debug!("{}: skipped, {}", step.id(), reason),
                StepResult::Failed(err) => info!("{}: failed, {}", step.id(), err),
            }

            let failed = result.is_failed();
            report.outcomes.push(StepOutcome {
                id: step.id(),
                description: step.description(),
                result,
            });

            if failed {
                break;
            }
        }

        Ok(report)
    }
}
