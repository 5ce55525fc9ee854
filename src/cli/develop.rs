//! `relgate develop`: editable install with development extras.
//!
//! Identical sequencing to `install`, but the package is installed in
//! editable form together with the documentation and test-tooling extras,
//! so the live source tree is used in place.

use anyhow::Result;
use clap::Args;
use std::sync::Arc;

use super::common::run_install;
use crate::config::PipelineContext;
use crate::stages::installer::InstallMode;

/// Install the package editable with the docs and test extras.
#[derive(Args)]
pub struct DevelopCommand {}

impl DevelopCommand {
    /// Runs the asset-resolution → editable-install pipeline.
    pub async fn execute(self, context: Arc<PipelineContext>) -> Result<()> {
        run_install(context, InstallMode::Development).await
    }
}
