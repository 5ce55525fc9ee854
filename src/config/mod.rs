//! Runtime configuration: toolchain executables and project layout.
//!
//! All runtime configuration lives here as explicit structs with named
//! fields and defaults, passed into the stages rather than read ambiently.
//! The CLI layer populates these from flags and `RELGATE_*` environment
//! variables.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::constants;
use crate::core::RelgateError;

/// Executables the pipeline shells out to.
///
/// Each field is a program name resolvable from `PATH` or an explicit path.
#[derive(Debug, Clone)]
pub struct Toolchain {
    /// Interpreter used for the analyzer and test stages
    pub python: String,
    /// Installer used for package installation
    pub pip: String,
    /// Frontend package manager used by the build-from-source strategy
    pub npm: String,
}

impl Default for Toolchain {
    fn default() -> Self {
        Self {
            python: constants::DEFAULT_PYTHON.to_string(),
            pip: constants::DEFAULT_PIP.to_string(),
            npm: constants::DEFAULT_NPM.to_string(),
        }
    }
}

/// Verifies that an executable exists before the pipeline starts.
///
/// Commands call this for the tools they will definitely invoke so a
/// missing interpreter or installer fails fast with a clear error instead
/// of midway through the run. Tools that are only conditionally needed
/// (npm, when the build-from-source branch is selected) are checked at
/// spawn time instead.
pub fn require_tool(program: &str) -> Result<()> {
    which::which(program).map(|_| ()).map_err(|_| {
        RelgateError::ToolNotFound {
            program: program.to_string(),
        }
        .into()
    })
}

/// The three filesystem locations the asset resolver contracts on, plus the
/// name of the sibling tree's build output subdirectory.
#[derive(Debug, Clone)]
pub struct AssetPaths {
    /// Well-known absolute location of a prebuilt asset bundle
    pub prebuilt: PathBuf,
    /// Sibling frontend source tree, one level above the project root
    pub sibling_src: PathBuf,
    /// Subdirectory of `sibling_src` produced by the frontend build
    pub build_subdir: String,
    /// Destination directory inside the package tree
    pub dest: PathBuf,
}

impl AssetPaths {
    /// Default locations for a project rooted at `root` whose package
    /// import name is `package`.
    pub fn for_project(root: &Path, package: &str) -> Self {
        Self {
            prebuilt: PathBuf::from(constants::PREBUILT_ASSET_DIR),
            sibling_src: root.join("..").join(constants::FRONTEND_SIBLING_DIR),
            build_subdir: constants::FRONTEND_BUILD_SUBDIR.to_string(),
            dest: root.join(package).join(constants::ASSET_DEST_DIR),
        }
    }

    /// Build output directory of the sibling source tree.
    pub fn build_output(&self) -> PathBuf {
        self.sibling_src.join(&self.build_subdir)
    }
}

/// Filesystem layout of the project under build.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    /// Root of the package under build
    pub root: PathBuf,
    /// Import name of the package, used to scope coverage and to locate
    /// the asset destination
    pub package: String,
    /// Frontend asset locations
    pub assets: AssetPaths,
    /// Location of the JSON coverage report the test stage writes and the
    /// coverage gate reads
    pub coverage_report: PathBuf,
}

impl ProjectLayout {
    /// Builds the layout for `root`, deriving the package name from the
    /// root directory when none is given.
    pub fn new(root: PathBuf, package: Option<String>) -> Self {
        let package = package.unwrap_or_else(|| default_package_name(&root));
        let assets = AssetPaths::for_project(&root, &package);
        let coverage_report = root.join(constants::COVERAGE_REPORT_FILE);
        Self {
            root,
            package,
            assets,
            coverage_report,
        }
    }
}

/// Everything a pipeline stage needs to run.
#[derive(Debug, Clone)]
pub struct PipelineContext {
    /// Executables to invoke
    pub toolchain: Toolchain,
    /// Project filesystem layout
    pub layout: ProjectLayout,
}

/// Derives a Python import name from the project root directory name,
/// mapping `-` to `_`. Canonicalizes first so `.` resolves to a real name.
fn default_package_name(root: &Path) -> String {
    let resolved = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
    resolved
        .file_name()
        .map(|name| name.to_string_lossy().replace('-', "_"))
        .unwrap_or_else(|| "package".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn toolchain_defaults_match_constants() {
        let toolchain = Toolchain::default();
        assert_eq!(toolchain.python, "python3");
        assert_eq!(toolchain.pip, "pip3");
        assert_eq!(toolchain.npm, "npm");
    }

    #[test]
    fn asset_paths_follow_the_wire_contract() {
        let root = Path::new("/work/my-proj");
        let paths = AssetPaths::for_project(root, "my_proj");

        assert!(paths.prebuilt.is_absolute());
        assert_eq!(paths.sibling_src, root.join("..").join("frontend"));
        assert_eq!(paths.build_output(), root.join("..").join("frontend").join("dist"));
        assert_eq!(paths.dest, root.join("my_proj").join("frontend"));
    }

    #[test]
    fn package_name_derived_from_directory() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("web-gadget");
        std::fs::create_dir(&root).unwrap();

        let layout = ProjectLayout::new(root.clone(), None);
        assert_eq!(layout.package, "web_gadget");
        assert_eq!(layout.coverage_report, root.join("coverage.json"));
    }

    #[test]
    fn explicit_package_name_wins() {
        let layout = ProjectLayout::new(PathBuf::from("/work/proj"), Some("custom".to_string()));
        assert_eq!(layout.package, "custom");
        assert_eq!(layout.assets.dest, Path::new("/work/proj/custom/frontend"));
    }

    #[test]
    fn require_tool_rejects_missing_program() {
        let err = require_tool("relgate-definitely-not-installed").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RelgateError>(),
            Some(RelgateError::ToolNotFound { .. })
        ));
    }
}
