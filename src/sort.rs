//! Deterministic topological sort with lexicographic tie-break
//!
//! Repeatedly emits the smallest ready task, then releases every task whose
//! last outstanding dependency it was. When nothing is ready but some task
//! is still blocked, the remaining tasks form a cycle and the partial order
//! is discarded.

use std::collections::BTreeSet;
use std::fmt;

use tracing::{debug, instrument, trace, warn};

use crate::graph::{DependencyMap, Task};

/// Output token printed instead of an order when a cycle is found
pub const CYCLE_MARKER: &str = "cycle";

/// Result of sorting a dependency map
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortOutcome {
    /// Every dependency precedes its dependents
    Ordered(Vec<Task>),
    /// Some tasks could never become ready
    Cycle,
}

impl SortOutcome {
    pub fn is_cycle(&self) -> bool {
        matches!(self, SortOutcome::Cycle)
    }

    /// The emitted order, if the graph was acyclic
    pub fn order(&self) -> Option<&[Task]> {
        match self {
            SortOutcome::Ordered(order) => Some(order.as_slice()),
            SortOutcome::Cycle => None,
        }
    }

    /// Lines to print: the order, or the single cycle marker
    pub fn lines(&self) -> Vec<&str> {
        match self {
            SortOutcome::Ordered(order) => order.iter().map(String::as_str).collect(),
            SortOutcome::Cycle => vec![CYCLE_MARKER],
        }
    }
}

impl fmt::Display for SortOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}

/// Tasks with no unresolved dependency left, not yet emitted
///
/// Kept ordered so popping always yields the smallest ready task.
#[derive(Debug, Default)]
struct ReadySet {
    tasks: BTreeSet<Task>,
}

impl ReadySet {
    fn pop_smallest(&mut self) -> Option<Task> {
        self.tasks.pop_first()
    }

    fn insert(&mut self, task: Task) {
        self.tasks.insert(task);
    }
}

impl FromIterator<Task> for ReadySet {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        Self {
            tasks: iter.into_iter().collect(),
        }
    }
}

/// Sort `map` into a topological order, consuming it
#[instrument(skip(map), fields(tasks = map.len()))]
pub fn topo_sort(mut map: DependencyMap) -> SortOutcome {
    let mut ready: ReadySet = map.independent_tasks().into_iter().collect();
    let mut order = Vec::new();

    while let Some(task) = ready.pop_smallest() {
        let unblocked = map.resolve(&task);
        trace!(task = %task, unblocked = unblocked.len(), "emit");
        order.push(task);
        for dependent in unblocked {
            ready.insert(dependent);
        }
    }

    if map.has_unresolved() {
        warn!(blocked = ?map.unresolved_tasks(), "dependency cycle detected");
        return SortOutcome::Cycle;
    }

    debug!(emitted = order.len(), "sort complete");
    SortOutcome::Ordered(order)
}

/// Build the dependency map from paired lines and sort it
pub fn sort_lines<I, S>(lines: I) -> SortOutcome
where
    I: IntoIterator<Item = S>,
    S: Into<Task>,
{
    topo_sort(DependencyMap::from_lines(lines))
}
