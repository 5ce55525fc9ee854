//! Pipeline stage actions and stage names.
//!
//! Each submodule wraps one black-box tool invocation (or, for the
//! coverage gate, one pure decision) behind an async `run` function the
//! CLI commands wire into a [`crate::pipeline::Pipeline`]. Stages expose
//! only success or failure; a failing tool's diagnostics stream directly
//! to the terminal via inherited stdio.

pub mod analyzer;
pub mod coverage;
pub mod installer;
pub mod test_runner;

/// Stage name: frontend asset resolution.
pub const FRONTEND_ASSETS: &str = "frontend-assets";
/// Stage name: package installation.
pub const INSTALL: &str = "install";
/// Stage name: static type inspection.
pub const TYPECHECK: &str = "typecheck";
/// Stage name: parallel test run with coverage instrumentation.
pub const TEST: &str = "test";
/// Stage name: coverage threshold gate.
pub const COVERAGE_GATE: &str = "coverage-gate";
