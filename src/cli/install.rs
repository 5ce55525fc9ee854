//! `relgate install`: resolve frontend assets, then install the package.
//!
//! The asset resolution stage runs first; the installer only starts once
//! resolution completed, either by populating the asset directory or as an
//! explicit no-op when no source exists. A resolution failure blocks the
//! installer entirely.

use anyhow::Result;
use clap::Args;
use std::sync::Arc;

use super::common::run_install;
use crate::config::PipelineContext;
use crate::stages::installer::InstallMode;

/// Install the package in standard (non-editable) mode.
#[derive(Args)]
pub struct InstallCommand {}

impl InstallCommand {
    /// Runs the asset-resolution → install pipeline.
    pub async fn execute(self, context: Arc<PipelineContext>) -> Result<()> {
        run_install(context, InstallMode::Standard).await
    }
}
