//! tasksort - deterministic topological ordering of task/dependency pairs

pub mod error;
pub mod graph;
pub mod input;
pub mod sort;

pub use error::{FixSuggestion, TaskSortError};
pub use graph::{DependencyMap, Task};
pub use sort::{sort_lines, topo_sort, SortOutcome, CYCLE_MARKER};
