//! Type-safe subprocess builder for consistent command execution.
//!
//! Every external tool the pipeline touches (interpreter, installer,
//! frontend package manager) is invoked through
//! [`ToolCommand`], which gives one place for working-directory handling,
//! output capture versus inherited stdio, tracing, and exit-code
//! propagation.
//!
//! The pipeline imposes no timeouts and performs no retries: each process
//! runs to its own natural completion or failure, and a non-zero exit is
//! terminal for the run.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

use crate::core::RelgateError;

/// Fluent builder for constructing and executing external tool commands.
///
/// # Examples
///
/// ```rust,ignore
/// use relgate::process::ToolCommand;
///
/// # async fn example() -> anyhow::Result<()> {
/// // Capture output
/// let output = ToolCommand::new("python3")
///     .args(["--version"])
///     .execute()
///     .await?;
///
/// // Stream a long-running tool's output straight to the terminal
/// ToolCommand::new("pip3")
///     .args(["install", "."])
///     .current_dir("/path/to/project")
///     .inherit_stdio()
///     .execute_success()
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct ToolCommand {
    /// Executable to run, as a name resolvable from `PATH` or a path
    program: String,

    /// Arguments passed to the executable
    args: Vec<String>,

    /// Working directory for command execution (defaults to current directory)
    current_dir: Option<std::path::PathBuf>,

    /// Whether to capture command output (true) or inherit stdio (false)
    capture_output: bool,

    /// Environment variables to set for the process
    env_vars: Vec<(String, String)>,
}

impl ToolCommand {
    /// Creates a new command builder for the given executable.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
            capture_output: true,
            env_vars: Vec::new(),
        }
    }

    /// Sets the working directory for command execution.
    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.current_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Adds a single argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Adds multiple arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Adds an environment variable for the process.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.push((key.into(), value.into()));
        self
    }

    /// Disables output capture, letting the process inherit parent stdio.
    ///
    /// Pipeline stages run this way so each tool's own diagnostics, such
    /// as mypy findings or the pytest missing-lines summary, reach the
    /// invoker without any rewrapping.
    pub const fn inherit_stdio(mut self) -> Self {
        self.capture_output = false;
        self
    }

    /// Short name of the operation this command performs, for error
    /// messages. `python -m mypy` reports as "mypy", `pip install` as
    /// "install".
    fn operation(&self) -> String {
        match self.args.first().map(String::as_str) {
            Some("-m") => self.args.get(1).cloned().unwrap_or_else(|| "-m".to_string()),
            Some(first) => first.to_string(),
            None => self.program.clone(),
        }
    }

    /// Execute the command and return its captured output.
    ///
    /// A non-zero exit status maps to [`RelgateError::ToolFailed`] carrying
    /// the process's own exit code; a spawn failure because the executable
    /// does not exist maps to [`RelgateError::ToolNotFound`].
    pub async fn execute(self) -> Result<ToolOutput> {
        let start = std::time::Instant::now();
        let operation = self.operation();

        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        if let Some(ref dir) = self.current_dir {
            cmd.current_dir(dir);
        }
        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        tracing::debug!(
            target: "proc",
            "Executing command: {} {}",
            self.program,
            self.args.join(" ")
        );

        if self.capture_output {
            cmd.stdout(Stdio::piped());
            cmd.stderr(Stdio::piped());
        } else {
            cmd.stdout(Stdio::inherit());
            cmd.stderr(Stdio::inherit());
        }

        let output = match cmd.output().await {
            Ok(output) => output,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(RelgateError::ToolNotFound {
                    program: self.program,
                }
                .into());
            }
            Err(e) => {
                return Err(e)
                    .context(format!("Failed to execute {} {}", self.program, self.args.join(" ")));
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            // Processes killed by a signal have no exit code; report 1.
            let code = output.status.code().unwrap_or(1);

            tracing::debug!(
                target: "proc",
                "Command failed with exit code {}: {} {}",
                code,
                self.program,
                self.args.join(" ")
            );

            return Err(RelgateError::ToolFailed {
                program: self.program,
                operation,
                code,
                stderr,
            }
            .into());
        }

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        let elapsed = start.elapsed();
        if elapsed.as_secs() > 1 {
            tracing::info!(
                target: "proc::perf",
                "{} {} took {:.2}s",
                self.program,
                operation,
                elapsed.as_secs_f64()
            );
        } else if elapsed.as_millis() > 100 {
            tracing::debug!(
                target: "proc::perf",
                "{} {} took {}ms",
                self.program,
                operation,
                elapsed.as_millis()
            );
        }

        Ok(ToolOutput {
            stdout,
            stderr,
        })
    }

    /// Execute the command and check for success, discarding output.
    pub async fn execute_success(self) -> Result<()> {
        self.execute().await?;
        Ok(())
    }
}

/// Output captured from a completed tool command.
#[derive(Debug)]
pub struct ToolOutput {
    /// Standard output from the command
    pub stdout: String,
    /// Standard error output from the command
    pub stderr: String,
}
