//! Frontend asset resolution with strict-precedence strategies.
//!
//! The resolver materializes the frontend bundle at a fixed destination
//! inside the package tree by trying an ordered list of source candidates
//! and executing the first whose predicate holds:
//!
//! 1. a prebuilt bundle at a well-known absolute path, recursively copied,
//! 2. a sibling frontend source tree one level above the project root:
//!    `npm install`, `npm run build`, then its `dist/` output copied,
//! 3. neither: a silent no-op, the destination stays absent.
//!
//! Exactly one branch executes per invocation, candidate 1 beats candidate
//! 2 even when both exist, and absence of any source is success, not
//! failure. Existence checks go through the injectable [`DirProbe`] so the
//! precedence logic is testable without real filesystem state.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::config::AssetPaths;
use crate::process::ToolCommand;
use crate::utils::fs::{copy_dir, remove_dir_all};

/// Injectable directory-existence check.
pub trait DirProbe: Send + Sync {
    /// Whether `path` exists and is a directory.
    fn dir_exists(&self, path: &Path) -> bool;
}

/// Production probe backed by the real filesystem.
pub struct FsProbe;

impl DirProbe for FsProbe {
    fn dir_exists(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

/// How the destination was populated, if at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The prebuilt bundle was copied into place
    CopiedPrebuilt,
    /// The sibling source tree was built and its output copied into place
    BuiltFromSource,
    /// No source existed; the destination was left absent
    Absent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StrategyKind {
    CopyPrebuilt,
    BuildSibling,
}

/// One (source path, strategy) pair from the ordered candidate list.
#[derive(Debug)]
pub struct Candidate {
    /// Strategy name, for logs and tests
    pub name: &'static str,
    /// Source directory whose existence selects this strategy
    pub source: PathBuf,
    kind: StrategyKind,
}

/// Resolves the frontend asset directory for one pipeline run.
pub struct AssetResolver<'a> {
    paths: &'a AssetPaths,
    npm: &'a str,
    probe: Box<dyn DirProbe>,
}

impl<'a> AssetResolver<'a> {
    /// Creates a resolver probing the real filesystem.
    pub fn new(paths: &'a AssetPaths, npm: &'a str) -> Self {
        Self::with_probe(paths, npm, Box::new(FsProbe))
    }

    /// Creates a resolver with a custom existence probe.
    pub fn with_probe(paths: &'a AssetPaths, npm: &'a str, probe: Box<dyn DirProbe>) -> Self {
        Self {
            paths,
            npm,
            probe,
        }
    }

    /// The ordered candidate list, highest precedence first.
    fn candidates(&self) -> Vec<Candidate> {
        vec![
            Candidate {
                name: "prebuilt-copy",
                source: self.paths.prebuilt.clone(),
                kind: StrategyKind::CopyPrebuilt,
            },
            Candidate {
                name: "sibling-build",
                source: self.paths.sibling_src.clone(),
                kind: StrategyKind::BuildSibling,
            },
        ]
    }

    /// Selects the first candidate whose source directory exists.
    ///
    /// Pure decision step; executing the selected strategy is
    /// [`resolve`](Self::resolve)'s job.
    pub fn plan(&self) -> Option<Candidate> {
        self.candidates().into_iter().find(|candidate| self.probe.dir_exists(&candidate.source))
    }

    /// Executes the selected strategy, populating the destination.
    ///
    /// Safe to repeat: a stale destination from a previous run is replaced
    /// before copying, and the no-op branch never touches an existing one.
    pub async fn resolve(&self) -> Result<Resolution> {
        let Some(candidate) = self.plan() else {
            tracing::debug!(
                target: "assets",
                "no frontend asset source found, leaving {} absent",
                self.paths.dest.display()
            );
            return Ok(Resolution::Absent);
        };

        tracing::info!(
            target: "assets",
            "resolving frontend assets via '{}' from {}",
            candidate.name,
            candidate.source.display()
        );

        match candidate.kind {
            StrategyKind::CopyPrebuilt => {
                self.refresh_dest(&candidate.source)?;
                Ok(Resolution::CopiedPrebuilt)
            }
            StrategyKind::BuildSibling => {
                ToolCommand::new(self.npm)
                    .arg("install")
                    .current_dir(&candidate.source)
                    .inherit_stdio()
                    .execute_success()
                    .await?;
                ToolCommand::new(self.npm)
                    .args(["run", "build"])
                    .current_dir(&candidate.source)
                    .inherit_stdio()
                    .execute_success()
                    .await?;
                self.refresh_dest(&self.paths.build_output())?;
                Ok(Resolution::BuiltFromSource)
            }
        }
    }

    fn refresh_dest(&self, src: &Path) -> Result<()> {
        remove_dir_all(&self.paths.dest)?;
        copy_dir(src, &self.paths.dest)
    }
}
