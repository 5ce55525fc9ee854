//! Shared stage-graph assembly for the CLI commands.

use anyhow::Result;
use std::sync::Arc;

use crate::assets::AssetResolver;
use crate::config::{PipelineContext, require_tool};
use crate::pipeline::{Pipeline, Task};
use crate::stages;
use crate::stages::installer::{self, InstallMode};

/// Task that resolves the frontend asset directory.
pub(crate) fn frontend_assets_task(context: &Arc<PipelineContext>) -> Task {
    let context = context.clone();
    Task::new(stages::FRONTEND_ASSETS, &[], move || async move {
        AssetResolver::new(&context.layout.assets, &context.toolchain.npm)
            .resolve()
            .await
            .map(|_| ())
    })
}

/// Task that runs the type checker.
pub(crate) fn typecheck_task(context: &Arc<PipelineContext>) -> Task {
    let context = context.clone();
    Task::new(stages::TYPECHECK, &[], move || async move {
        stages::analyzer::run(&context.toolchain, &context.layout).await
    })
}

/// Shared body of `install` and `develop`: frontend assets, then the
/// installer in the requested mode.
pub(crate) async fn run_install(context: Arc<PipelineContext>, mode: InstallMode) -> Result<()> {
    require_tool(&context.toolchain.pip)?;

    let install_ctx = context.clone();
    Pipeline::new()
        .task(frontend_assets_task(&context))
        .task(Task::new(stages::INSTALL, &[stages::FRONTEND_ASSETS], move || async move {
            installer::run(&install_ctx.toolchain, &install_ctx.layout, mode).await
        }))
        .run()
        .await
        .into_result()
}
