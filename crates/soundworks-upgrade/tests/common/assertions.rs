//! Assertion helpers for migration reports

use soundworks_upgrade::{MigrationReport, StepResult};

/// Assert that `step` ran and wrote files
pub fn assert_applied(report: &MigrationReport, step: &str) {
    let outcome = report
        .outcome(step)
        .unwrap_or_else(|| panic!("Step '{}' missing from report: {:?}", step, report));
    assert!(
        outcome.result.is_applied(),
        "Expected step '{}' to be applied but got {:?}",
        step,
        outcome.result
    );
}

/// Assert that `step` was skipped
pub fn assert_skipped(report: &MigrationReport, step: &str) {
    let outcome = report
        .outcome(step)
        .unwrap_or_else(|| panic!("Step '{}' missing from report: {:?}", step, report));
    assert!(
        matches!(outcome.result, StepResult::Skipped(_)),
        "Expected step '{}' to be skipped but got {:?}",
        step,
        outcome.result
    );
}

/// Assert that no step of the report wrote anything
pub fn assert_all_skipped_except(report: &MigrationReport, allowed: &[&str]) {
    for outcome in &report.outcomes {
        if allowed.contains(&outcome.id) {
            continue;
        }
        assert!(
            outcome.result.is_skipped(),
            "Expected step '{}' to be skipped but got {:?}",
            outcome.id,
            outcome.result
        );
    }
}
