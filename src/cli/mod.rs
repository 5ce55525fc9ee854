//! Command-line interface for relgate.
//!
//! Four commands cover the pipeline's entry points:
//!
//! - `install`: resolve frontend assets, then install the package
//! - `develop`: resolve frontend assets, then install editable with extras
//! - `inspect`: static type inspection only
//! - `test`: type inspection, parallel test run, coverage gate
//!
//! Each command is implemented in its own module with an `execute()` that
//! assembles the stage graph for that command and runs it. Global options
//! configure the toolchain executables and project layout; every executable
//! option has a `RELGATE_*` environment-variable fallback so CI systems can
//! configure the pipeline without flags.

mod common;
mod develop;
mod inspect;
mod install;
mod test;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::{PipelineContext, ProjectLayout, Toolchain};
use crate::constants;

/// Top-level CLI for the build-and-verification pipeline.
#[derive(Parser)]
#[command(
    name = "relgate",
    about = "Build-and-verification pipeline with a frontend asset resolver and coverage gate",
    version,
    long_about = "relgate sequences frontend asset resolution, package installation, static \
                  type inspection, a parallel coverage-instrumented test run, and a hard \
                  coverage threshold gate. The first failing stage terminates the run and \
                  its exit code becomes the process exit code."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose (debug-level) output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Interpreter executable used for the analyzer and test stages
    #[arg(long, global = true, env = "RELGATE_PYTHON", default_value = constants::DEFAULT_PYTHON)]
    python: String,

    /// Installer executable used for package installation
    #[arg(long, global = true, env = "RELGATE_PIP", default_value = constants::DEFAULT_PIP)]
    pip: String,

    /// Frontend package manager used by the build-from-source strategy
    #[arg(long, global = true, env = "RELGATE_NPM", default_value = constants::DEFAULT_NPM)]
    npm: String,

    /// Root of the package under build
    #[arg(long, global = true, default_value = ".")]
    project_root: PathBuf,

    /// Import name of the package (defaults to the project root directory
    /// name with '-' mapped to '_')
    #[arg(long, global = true, env = "RELGATE_PACKAGE")]
    package: Option<String>,

    /// Override the well-known prebuilt frontend bundle location
    #[arg(long, global = true, env = "RELGATE_PREBUILT_ASSETS")]
    prebuilt_assets: Option<PathBuf>,

    /// Override the sibling frontend source tree location
    #[arg(long, global = true, env = "RELGATE_FRONTEND_SRC")]
    frontend_src: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Resolve frontend assets and install the package (standard mode).
    Install(install::InstallCommand),

    /// Resolve frontend assets and install the package editable with the
    /// docs and test extras.
    Develop(develop::DevelopCommand),

    /// Run static type inspection over the source tree.
    Inspect(inspect::InspectCommand),

    /// Type-inspect, run the test suite in parallel with coverage, and
    /// enforce the coverage threshold.
    Test(test::TestCommand),
}

impl Cli {
    /// Default log directive derived from the verbosity flags, used when
    /// `RUST_LOG` is not set.
    pub fn log_directive(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "info"
        }
    }

    /// Builds the pipeline context from the global options.
    fn context(&self) -> PipelineContext {
        let toolchain = Toolchain {
            python: self.python.clone(),
            pip: self.pip.clone(),
            npm: self.npm.clone(),
        };

        let mut layout = ProjectLayout::new(self.project_root.clone(), self.package.clone());
        if let Some(prebuilt) = &self.prebuilt_assets {
            layout.assets.prebuilt = prebuilt.clone();
        }
        if let Some(sibling) = &self.frontend_src {
            layout.assets.sibling_src = sibling.clone();
        }

        PipelineContext {
            toolchain,
            layout,
        }
    }

    /// Executes the selected command.
    pub async fn execute(self) -> Result<()> {
        let context = Arc::new(self.context());

        match self.command {
            Commands::Install(cmd) => cmd.execute(context).await,
            Commands::Develop(cmd) => cmd.execute(context).await,
            Commands::Inspect(cmd) => cmd.execute(context).await,
            Commands::Test(cmd) => cmd.execute(context).await,
        }
    }
}
