//! Dependency graph for schedule requests
//!
//! Maps validated tasks onto a petgraph directed graph. Edges run from a
//! dependency to its dependent: the dependency must be scheduled first.
//! Building the graph resolves every dependency reference; it does not
//! check for cycles, which are diagnosed by the scheduler once the
//! frontier runs dry.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use std::collections::HashMap;

use super::schedule::ScheduleError;
use super::task::{title_key, TaskSpec};

/// A dependency graph over the tasks of one request
///
/// Node weights borrow the request's tasks, so the graph lives no longer
/// than the scheduling call that built it.
#[derive(Debug)]
pub struct DependencyGraph<'a> {
    /// The underlying directed graph
    graph: DiGraph<&'a TaskSpec, ()>,

    /// Map from normalized title key to node index
    node_map: HashMap<String, NodeIndex>,
}

impl<'a> DependencyGraph<'a> {
    /// Builds a graph from validated tasks (titles unique under case folding)
    pub fn from_tasks(tasks: &'a [TaskSpec]) -> Result<Self, ScheduleError> {
        let mut graph = Self {
            graph: DiGraph::with_capacity(tasks.len(), tasks.len()),
            node_map: HashMap::with_capacity(tasks.len()),
        };

        // First pass: add all nodes
        for task in tasks {
            let idx = graph.graph.add_node(task);
            graph.node_map.insert(task.key(), idx);
        }

        // Second pass: add all edges
        for task in tasks {
            for dep in &task.dependencies {
                graph.add_dependency(task, dep)?;
            }
        }

        Ok(graph)
    }

    /// Adds an edge from `dep` to the task that depends on it
    ///
    /// A task depending on itself is accepted here: it forms a one-node
    /// cycle that the scheduler reports along with every other cycle.
    fn add_dependency(&mut self, task: &TaskSpec, dep: &str) -> Result<(), ScheduleError> {
        let task_idx = self.index_of(&task.title).ok_or_else(|| {
            ScheduleError::UnknownDependency {
                task: task.title.clone(),
                dependency: dep.to_string(),
            }
        })?;

        let dep_idx =
            self.index_of(dep)
                .ok_or_else(|| ScheduleError::UnknownDependency {
                    task: task.title.clone(),
                    dependency: dep.to_string(),
                })?;

        self.graph.add_edge(dep_idx, task_idx, ());
        Ok(())
    }

    /// Looks up a node by title, case-insensitively
    fn index_of(&self, title: &str) -> Option<NodeIndex> {
        self.node_map.get(&title_key(title)).copied()
    }

    /// Returns the task at a node
    pub fn task(&self, idx: NodeIndex) -> &'a TaskSpec {
        self.graph[idx]
    }

    /// Iterates over all node indices
    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    /// Returns the number of unresolved dependencies feeding into a node
    pub fn in_degree(&self, idx: NodeIndex) -> usize {
        self.graph
            .neighbors_directed(idx, Direction::Incoming)
            .count()
    }

    /// Iterates over the tasks that depend on a node
    pub fn dependents(&self, idx: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors_directed(idx, Direction::Outgoing)
    }

    /// Returns the titles this task depends on, in original casing
    pub fn dependencies_of(&self, title: &str) -> Vec<&'a str> {
        let idx = match self.index_of(title) {
            Some(idx) => idx,
            None => return vec![],
        };

        self.graph
            .neighbors_directed(idx, Direction::Incoming)
            .map(|dep| self.graph[dep].title.as_str())
            .collect()
    }

    /// Returns true if the graph contains a task with this title
    pub fn contains(&self, title: &str) -> bool {
        self.index_of(title).is_some()
    }

    /// Returns the number of tasks in the graph
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns true if the graph has no tasks
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Returns the number of dependency edges in the graph
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
