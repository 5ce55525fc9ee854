//! Stage dependency graph and fail-fast runner.
//!
//! A [`Pipeline`] is an explicit directed acyclic graph of named [`Task`]s
//! with declared predecessor sets. The runner executes tasks in topological
//! order on the single control thread, one at a time, blocking on each
//! task's subprocesses. The first failure terminates the run: every
//! downstream task is skipped, nothing is rolled back, nothing is retried,
//! and the failing task's error propagates unwrapped so the invoker sees
//! the underlying tool's own diagnostics and exit code.

use anyhow::Result;
use futures::future::BoxFuture;
use petgraph::algo::toposort;
use petgraph::graph::DiGraph;
use std::collections::HashMap;
use std::future::Future;

use crate::core::RelgateError;

/// Boxed async action a task executes when its turn comes.
pub type TaskAction = Box<dyn FnOnce() -> BoxFuture<'static, Result<()>> + Send>;

/// A named unit of pipeline work with declared predecessors.
///
/// A task owns its own side effects (filesystem writes, subprocess
/// invocation) and exposes only a success/failure result to the runner.
pub struct Task {
    name: &'static str,
    deps: Vec<&'static str>,
    action: TaskAction,
}

impl Task {
    /// Creates a task named `name` that runs after every stage in `deps`.
    pub fn new<F, Fut>(name: &'static str, deps: &[&'static str], action: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<()>> + Send + 'static,
    {
        Self {
            name,
            deps: deps.to_vec(),
            action: Box::new(move || -> BoxFuture<'static, Result<()>> { Box::pin(action()) }),
        }
    }

    /// The stage name.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// Terminal state of a full pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// Every stage completed successfully
    Success,
    /// The named stage failed; downstream stages were skipped
    FailedAt {
        /// Name of the failing stage
        stage: String,
    },
}

/// Result of executing a pipeline: the terminal outcome plus the error of
/// the failing stage, if any.
pub struct PipelineRun {
    /// Terminal state of the run
    pub outcome: PipelineOutcome,
    error: Option<anyhow::Error>,
}

impl PipelineRun {
    /// True when every stage completed.
    pub fn succeeded(&self) -> bool {
        matches!(self.outcome, PipelineOutcome::Success)
    }

    /// Converts the run into a plain result, yielding the failing stage's
    /// error untouched.
    pub fn into_result(self) -> Result<()> {
        match self.error {
            None => Ok(()),
            Some(error) => Err(error),
        }
    }
}

/// An ordered collection of tasks forming a dependency DAG.
#[derive(Default)]
pub struct Pipeline {
    tasks: Vec<Task>,
}

impl Pipeline {
    /// Creates an empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a task to the pipeline.
    #[must_use]
    pub fn task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    /// Computes a topological execution order over the declared
    /// dependencies, rejecting unknown predecessors and cycles.
    fn execution_order(&self) -> Result<Vec<usize>> {
        let mut graph = DiGraph::<usize, ()>::new();
        let mut nodes = Vec::with_capacity(self.tasks.len());
        let mut by_name = HashMap::new();

        for (index, task) in self.tasks.iter().enumerate() {
            let node = graph.add_node(index);
            nodes.push(node);
            by_name.insert(task.name, node);
        }

        for (index, task) in self.tasks.iter().enumerate() {
            for dep in &task.deps {
                let Some(&dep_node) = by_name.get(dep) else {
                    return Err(RelgateError::UnknownDependency {
                        stage: task.name.to_string(),
                        dependency: (*dep).to_string(),
                    }
                    .into());
                };
                graph.add_edge(dep_node, nodes[index], ());
            }
        }

        let order = toposort(&graph, None).map_err(|cycle| {
            let stage = graph
                .node_weight(cycle.node_id())
                .map(|&i| self.tasks[i].name)
                .unwrap_or("unknown");
            RelgateError::DependencyCycle {
                stage: stage.to_string(),
            }
        })?;

        Ok(order.into_iter().filter_map(|node| graph.node_weight(node).copied()).collect())
    }

    /// Executes the pipeline to completion or first failure.
    pub async fn run(self) -> PipelineRun {
        let order = match self.execution_order() {
            Ok(order) => order,
            Err(error) => {
                // Graph construction failed before any stage ran; attribute
                // the outcome to the offending stage named in the error.
                let stage = match error.downcast_ref::<RelgateError>() {
                    Some(
                        RelgateError::UnknownDependency { stage, .. }
                        | RelgateError::DependencyCycle { stage },
                    ) => stage.clone(),
                    _ => "graph".to_string(),
                };
                return PipelineRun {
                    outcome: PipelineOutcome::FailedAt { stage },
                    error: Some(error),
                };
            }
        };

        let mut slots: Vec<Option<Task>> = self.tasks.into_iter().map(Some).collect();

        for index in order {
            let Some(task) = slots[index].take() else {
                continue;
            };
            let name = task.name;

            tracing::info!(target: "pipeline", "stage '{}' started", name);
            let start = std::time::Instant::now();

            match (task.action)().await {
                Ok(()) => {
                    tracing::info!(
                        target: "pipeline",
                        "stage '{}' completed in {:.2}s",
                        name,
                        start.elapsed().as_secs_f64()
                    );
                }
                Err(error) => {
                    tracing::error!(target: "pipeline", "stage '{}' failed", name);
                    for skipped in slots.iter().flatten() {
                        tracing::warn!(
                            target: "pipeline",
                            "skipping stage '{}' after failure of '{}'",
                            skipped.name,
                            name
                        );
                    }
                    return PipelineRun {
                        outcome: PipelineOutcome::FailedAt {
                            stage: name.to_string(),
                        },
                        error: Some(error),
                    };
                }
            }
        }

        PipelineRun {
            outcome: PipelineOutcome::Success,
            error: None,
        }
    }
}
