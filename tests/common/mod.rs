//! Shared test harness for integration tests.
//!
//! Builds an isolated project directory plus stub `python3`/`pip3`/`npm`
//! executables that record every invocation to a shared log and whose exit
//! codes are controlled per-test through `RELGATE_STUB_*` environment
//! variables. The real binary is driven against these stubs, so the tests
//! exercise the full stage sequencing without any real toolchain.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use tempfile::TempDir;

/// Stub interpreter: handles both `-m mypy` and `-m pytest` invocations.
/// The pytest branch honors `--cov-report=json:<path>` by writing a report
/// with the percentage from `RELGATE_STUB_COV`.
const PYTHON_STUB: &str = r#"echo "python $*" >> "$RELGATE_STUB_LOG"
case "$*" in
  *mypy*) exit ${RELGATE_STUB_MYPY_EXIT:-0} ;;
  *pytest*)
    for arg in "$@"; do
      case "$arg" in
        --cov-report=json:*)
          printf '{"totals": {"percent_covered": %s}}' "${RELGATE_STUB_COV:-100.0}" > "${arg#--cov-report=json:}"
          ;;
      esac
    done
    exit ${RELGATE_STUB_PYTEST_EXIT:-0} ;;
esac
exit 0"#;

const PIP_STUB: &str = r#"echo "pip $*" >> "$RELGATE_STUB_LOG"
exit ${RELGATE_STUB_PIP_EXIT:-0}"#;

/// Stub frontend package manager: `npm run build` emits a dist/ tree in
/// its working directory, as the real build would.
const NPM_STUB: &str = r#"echo "npm $*" >> "$RELGATE_STUB_LOG"
if [ "$1" = "run" ]; then mkdir -p dist; echo bundle > dist/app.js; fi
exit ${RELGATE_STUB_NPM_EXIT:-0}"#;

pub struct TestProject {
    temp: TempDir,
    pub root: PathBuf,
    bin: PathBuf,
    log: PathBuf,
}

impl TestProject {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("project");
        let bin = temp.path().join("bin");
        fs::create_dir(&root).unwrap();
        fs::create_dir(&bin).unwrap();
        let log = temp.path().join("calls.log");

        let project = Self {
            temp,
            root,
            bin,
            log,
        };
        project.write_tool("python3", PYTHON_STUB);
        project.write_tool("pip3", PIP_STUB);
        project.write_tool("npm", NPM_STUB);
        project
    }

    /// Writes an executable stub shell script into the harness bin dir.
    pub fn write_tool(&self, name: &str, body: &str) {
        let path = self.bin.join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    /// Location the prebuilt-bundle strategy probes.
    pub fn prebuilt_dir(&self) -> PathBuf {
        self.temp.path().join("prebuilt")
    }

    /// Location the sibling-build strategy probes.
    pub fn frontend_dir(&self) -> PathBuf {
        self.temp.path().join("frontend")
    }

    /// The fixed asset destination inside the package tree.
    pub fn asset_dest(&self) -> PathBuf {
        self.root.join("demo_pkg").join("frontend")
    }

    /// Creates the prebuilt bundle directory with one marker file.
    pub fn create_prebuilt(&self, content: &str) {
        fs::create_dir_all(self.prebuilt_dir()).unwrap();
        fs::write(self.prebuilt_dir().join("index.html"), content).unwrap();
    }

    /// Creates the sibling frontend source tree.
    pub fn create_frontend_src(&self) {
        fs::create_dir_all(self.frontend_dir()).unwrap();
        fs::write(self.frontend_dir().join("package.json"), "{}").unwrap();
    }

    /// A `relgate` command wired to the stub toolchain and this project.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("relgate").unwrap();
        cmd.current_dir(&self.root)
            .env("RELGATE_STUB_LOG", &self.log)
            .env("RELGATE_PYTHON", self.bin.join("python3"))
            .env("RELGATE_PIP", self.bin.join("pip3"))
            .env("RELGATE_NPM", self.bin.join("npm"))
            .env("RELGATE_PACKAGE", "demo_pkg")
            .env("RELGATE_PREBUILT_ASSETS", self.prebuilt_dir())
            .env("RELGATE_FRONTEND_SRC", self.frontend_dir());
        cmd
    }

    /// Every stub invocation so far, in order.
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(&self.log)
            .unwrap_or_default()
            .lines()
            .map(String::from)
            .collect()
    }
}
