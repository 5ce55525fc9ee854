//! Package installation stage.
//!
//! Invokes the installer against the project root in one of two modes,
//! selected by which top-level command was requested. Any non-zero exit is
//! a fatal pipeline failure; there is no retry and no rollback of an
//! already-resolved asset directory.

use anyhow::Result;
use std::fmt;

use crate::config::{ProjectLayout, Toolchain};
use crate::constants;
use crate::process::ToolCommand;

/// Installation mode, selected by the top-level command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallMode {
    /// `pip install .`: non-editable install of the package as specified
    Standard,
    /// `pip install -e .[docs,test]`: editable install with the
    /// documentation and test-tooling extras
    Development,
}

impl InstallMode {
    /// Installer arguments for this mode.
    pub fn args(self) -> Vec<&'static str> {
        match self {
            Self::Standard => vec!["install", "."],
            Self::Development => vec!["install", "-e", constants::DEV_INSTALL_EXTRAS],
        }
    }
}

impl fmt::Display for InstallMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Development => write!(f, "editable"),
        }
    }
}

/// Runs the installer in the given mode.
pub async fn run(toolchain: &Toolchain, layout: &ProjectLayout, mode: InstallMode) -> Result<()> {
    tracing::info!(target: "installer", "installing {} ({mode} mode)", layout.package);
    ToolCommand::new(&toolchain.pip)
        .args(mode.args())
        .current_dir(&layout.root)
        .inherit_stdio()
        .execute_success()
        .await
}
