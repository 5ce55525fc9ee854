//! relgate: build-and-verification pipeline runner.
//!
//! relgate orchestrates the release pipeline of a package that bundles an
//! optional web frontend: it resolves the frontend asset directory, installs
//! the package, runs static type inspection, runs the test suite in parallel
//! with line-coverage instrumentation, and enforces a hard coverage
//! threshold as the final release gate.
//!
//! # Pipeline model
//!
//! Stages form an explicit dependency DAG executed in topological order on
//! a single control thread. The first failing stage terminates the run:
//! downstream stages are skipped, partially-applied side effects are left
//! as-is, and the process exits with the failing subprocess's own exit
//! code. The only internal parallelism lives inside the test stage, whose
//! worker pool is sized to the available execution units at run time.
//!
//! # Asset resolution
//!
//! The frontend bundle is materialized by the first applicable strategy in
//! strict precedence order: copy a prebuilt bundle from a well-known
//! absolute path, else build a sibling source tree (`npm install` +
//! `npm run build`) and copy its output, else do nothing at all; absence
//! of any source is success, not failure.
//!
//! # Modules
//!
//! - [`assets`] - frontend asset resolver with injectable existence checks
//! - [`cli`] - command-line interface (`install`, `develop`, `inspect`, `test`)
//! - [`config`] - toolchain executables and project layout
//! - [`constants`] - defaults, well-known paths, and the coverage threshold
//! - [`core`] - error taxonomy and user-facing error display
//! - [`pipeline`] - stage DAG and fail-fast runner
//! - [`process`] - subprocess command builder
//! - [`stages`] - installer, analyzer, test runner, and coverage gate
//! - [`utils`] - filesystem helpers
//!
//! # Usage
//!
//! ```bash
//! # Install the package (resolving frontend assets first)
//! relgate install
//!
//! # Editable install with docs and test extras
//! relgate develop
//!
//! # Type inspection only
//! relgate inspect
//!
//! # Typecheck, test in parallel with coverage, enforce the 100% gate
//! relgate test
//! ```

pub mod assets;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod pipeline;
pub mod process;
pub mod stages;
pub mod utils;
