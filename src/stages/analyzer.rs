//! Static type inspection stage.
//!
//! Runs `python -m mypy` over the whole source tree with no parameters.
//! Success is the checker's own zero exit status; any non-zero exit is
//! fatal and blocks the test stage. No side effects beyond the checker's
//! diagnostic output.

use anyhow::Result;

use crate::config::{ProjectLayout, Toolchain};
use crate::process::ToolCommand;

/// Runs the type checker against the project root.
pub async fn run(toolchain: &Toolchain, layout: &ProjectLayout) -> Result<()> {
    ToolCommand::new(&toolchain.python)
        .args(["-m", "mypy"])
        .current_dir(&layout.root)
        .inherit_stdio()
        .execute_success()
        .await
}
