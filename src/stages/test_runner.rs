//! Parallel test execution with coverage instrumentation.
//!
//! Runs the full test collection across a worker pool sized to the
//! available execution units at run time. Line coverage is scoped to the
//! package under test; a human-readable missing-lines summary goes to the
//! terminal and a JSON report is written for the coverage gate to consume.
//!
//! Individual test cases may execute concurrently and in any order; the
//! test tool itself barrier-synchronizes its workers and merges their
//! disjoint coverage contributions, so the stage completes only when all
//! workers finish and its outcome is the logical AND of all test outcomes.

use anyhow::Result;

use crate::config::{ProjectLayout, Toolchain};
use crate::constants;
use crate::process::ToolCommand;

/// Number of test workers: the available parallel execution units,
/// determined at run time rather than hardcoded.
pub fn worker_count() -> usize {
    std::thread::available_parallelism()
        .map(std::num::NonZero::get)
        .unwrap_or(constants::DEFAULT_TEST_WORKERS)
}

/// Runs the test suite with coverage instrumentation.
pub async fn run(toolchain: &Toolchain, layout: &ProjectLayout) -> Result<()> {
    let workers = worker_count();
    tracing::info!(
        target: "tests",
        "running test suite for {} across {workers} workers",
        layout.package
    );

    ToolCommand::new(&toolchain.python)
        .args(["-m", "pytest", "-n"])
        .arg(workers.to_string())
        .arg(format!("--cov={}", layout.package))
        .arg("--cov-report=term-missing")
        .arg(format!("--cov-report=json:{}", layout.coverage_report.display()))
        .current_dir(&layout.root)
        .inherit_stdio()
        .execute_success()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worker_count_is_at_least_one() {
        assert!(worker_count() >= 1);
    }
}
