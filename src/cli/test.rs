//! `relgate test`: the full verification chain.
//!
//! Sequencing: type inspection, then the parallel coverage-instrumented
//! test run, then the coverage threshold gate. Each stage only starts once
//! its predecessor succeeded; the first failure skips everything downstream
//! and becomes the process exit code.

use anyhow::Result;
use clap::Args;
use std::sync::Arc;

use super::common::typecheck_task;
use crate::config::{PipelineContext, require_tool};
use crate::pipeline::{Pipeline, Task};
use crate::stages;

/// Type-inspect, test with coverage, and enforce the coverage gate.
#[derive(Args)]
pub struct TestCommand {}

impl TestCommand {
    /// Runs the typecheck → test → coverage-gate pipeline.
    pub async fn execute(self, context: Arc<PipelineContext>) -> Result<()> {
        require_tool(&context.toolchain.python)?;

        let test_ctx = context.clone();
        let gate_ctx = context.clone();

        Pipeline::new()
            .task(typecheck_task(&context))
            .task(Task::new(stages::TEST, &[stages::TYPECHECK], move || async move {
                stages::test_runner::run(&test_ctx.toolchain, &test_ctx.layout).await
            }))
            .task(Task::new(stages::COVERAGE_GATE, &[stages::TEST], move || async move {
                stages::coverage::run(&gate_ctx.layout).await
            }))
            .run()
            .await
            .into_result()
    }
}
