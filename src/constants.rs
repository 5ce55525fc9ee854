//! Central constants for relgate.
//!
//! Default executable names, well-known filesystem locations, and the
//! coverage threshold live here so the rest of the codebase never hardcodes
//! them inline. The executable defaults can be overridden per-run via CLI
//! options or their matching `RELGATE_*` environment variables.

/// Default interpreter executable used for the analyzer and test stages.
///
/// Overridable with `--python` or `RELGATE_PYTHON`. The default is resolved
/// from the execution environment's `PATH`.
pub const DEFAULT_PYTHON: &str = "python3";

/// Default installer executable used for package installation.
///
/// Overridable with `--pip` or `RELGATE_PIP`.
pub const DEFAULT_PIP: &str = "pip3";

/// Default frontend package manager used by the build-from-source strategy.
///
/// Overridable with `--npm` or `RELGATE_NPM`.
pub const DEFAULT_NPM: &str = "npm";

/// Well-known absolute path checked first for a prebuilt frontend bundle.
pub const PREBUILT_ASSET_DIR: &str = "/frontend_dist";

/// Name of the sibling frontend source directory, located one level above
/// the project root.
pub const FRONTEND_SIBLING_DIR: &str = "frontend";

/// Subdirectory of the sibling source tree that holds the build output
/// after `npm run build` completes.
pub const FRONTEND_BUILD_SUBDIR: &str = "dist";

/// Name of the asset destination directory inside the package tree.
pub const ASSET_DEST_DIR: &str = "frontend";

/// File name of the JSON coverage report written by the test stage and
/// consumed by the coverage gate, relative to the project root.
pub const COVERAGE_REPORT_FILE: &str = "coverage.json";

/// Aggregate line-coverage percentage required for the coverage gate to
/// pass. Anything strictly below this fails the pipeline.
pub const COVERAGE_THRESHOLD: f64 = 100.0;

/// Optional extras installed alongside the package in development mode.
pub const DEV_INSTALL_EXTRAS: &str = ".[docs,test]";

/// Fallback test worker count.
///
/// Used when `std::thread::available_parallelism()` cannot determine the
/// number of available execution units.
pub const DEFAULT_TEST_WORKERS: usize = 4;
