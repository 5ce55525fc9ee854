//! `relgate inspect`: static type inspection only.

use anyhow::Result;
use clap::Args;
use std::sync::Arc;

use super::common::typecheck_task;
use crate::config::{PipelineContext, require_tool};
use crate::pipeline::Pipeline;

/// Run the type checker over the source tree and nothing else.
#[derive(Args)]
pub struct InspectCommand {}

impl InspectCommand {
    /// Runs the single-stage inspection pipeline.
    pub async fn execute(self, context: Arc<PipelineContext>) -> Result<()> {
        require_tool(&context.toolchain.python)?;

        Pipeline::new().task(typecheck_task(&context)).run().await.into_result()
    }
}
