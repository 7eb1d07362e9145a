//! Dependency map built from task/dependency line pairs
//!
//! Keys are tasks with at least one recorded dependency. A task that only
//! ever appears as a dependency has no prerequisites and is never a key.

use std::collections::{BTreeMap, BTreeSet};

/// Opaque task identifier
pub type Task = String;

/// Task -> tasks that must run before it
///
/// Ordered by key so every scan over the map is already ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyMap {
    dependencies: BTreeMap<Task, Vec<Task>>,
}

impl DependencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pair consecutive lines as `(task, dependency)`.
    ///
    /// A trailing unpaired line is dropped. Repeated pairs are kept as
    /// repeated entries; self-dependencies are accepted as-is.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Task>,
    {
        let mut map = Self::new();
        let mut lines = lines.into_iter();
        while let (Some(task), Some(dependency)) = (lines.next(), lines.next()) {
            map.add(task.into(), dependency.into());
        }
        map
    }

    /// Record that `task` depends on `dependency`
    pub fn add(&mut self, task: Task, dependency: Task) {
        self.dependencies.entry(task).or_default().push(dependency);
    }

    /// Tasks referenced as a dependency but never declared with their own.
    ///
    /// Sorted ascending and duplicate-free; the map is left untouched.
    pub fn independent_tasks(&self) -> Vec<Task> {
        let independent: BTreeSet<&Task> = self
            .dependencies
            .values()
            .flatten()
            .filter(|dep| !self.dependencies.contains_key(dep.as_str()))
            .collect();
        independent.into_iter().cloned().collect()
    }

    #[inline]
    pub fn dependencies_of(&self, task: &str) -> &[Task] {
        static EMPTY: &[Task] = &[];
        self.dependencies
            .get(task)
            .map(|v| v.as_slice())
            .unwrap_or(EMPTY)
    }

    /// Tasks that have (or had) declared dependencies, ascending
    pub fn tasks(&self) -> impl Iterator<Item = &str> {
        self.dependencies.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.dependencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }

    /// True while any task still waits on a dependency
    pub fn has_unresolved(&self) -> bool {
        self.dependencies.values().any(|deps| !deps.is_empty())
    }

    /// Tasks whose dependency list is still non-empty, ascending
    pub fn unresolved_tasks(&self) -> Vec<&str> {
        self.dependencies
            .iter()
            .filter(|(_, deps)| !deps.is_empty())
            .map(|(task, _)| task.as_str())
            .collect()
    }

    /// Drop one occurrence of `resolved` from every list containing it.
    ///
    /// Returns the tasks whose list became empty as a result, ascending.
    pub(crate) fn resolve(&mut self, resolved: &str) -> Vec<Task> {
        let mut unblocked = Vec::new();
        for (task, deps) in self.dependencies.iter_mut() {
            let Some(pos) = deps.iter().position(|d| d == resolved) else {
                continue;
            };
            deps.remove(pos);
            if deps.is_empty() {
                unblocked.push(task.clone());
            }
        }
        unblocked
    }
}

impl<S: Into<Task>> FromIterator<S> for DependencyMap {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_lines(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> DependencyMap {
        DependencyMap::from_lines(["B", "A", "C", "D", "C", "E"])
    }

    // ─────────────────────────────────────────────────────────────
    // Builder
    // ─────────────────────────────────────────────────────────────

    #[test]
    fn pairs_accumulate_per_task() {
        let map = sample();
        assert_eq!(map.len(), 2);
        assert_eq!(map.dependencies_of("B"), ["A"]);
        assert_eq!(map.dependencies_of("C"), ["D", "E"]);
        assert!(map.dependencies_of("A").is_empty());
    }

    #[test]
    fn trailing_unpaired_line_is_dropped() {
        let map = DependencyMap::from_lines(["B", "A", "Z"]);
        assert_eq!(map.tasks().collect::<Vec<_>>(), ["B"]);
        assert!(map.dependencies_of("Z").is_empty());
    }

    #[test]
    fn empty_input_builds_empty_map() {
        let map = DependencyMap::from_lines(Vec::<String>::new());
        assert!(map.is_empty());
        assert!(map.independent_tasks().is_empty());
    }

    #[test]
    fn duplicate_pairs_are_kept() {
        let map = DependencyMap::from_lines(["B", "A", "B", "A"]);
        assert_eq!(map.dependencies_of("B"), ["A", "A"]);
    }

    #[test]
    fn self_dependency_is_accepted() {
        let map: DependencyMap = ["A", "A"].into_iter().collect();
        assert_eq!(map.dependencies_of("A"), ["A"]);
        assert!(map.independent_tasks().is_empty());
    }

    // ─────────────────────────────────────────────────────────────
    // Independent-task finder
    // ─────────────────────────────────────────────────────────────

    #[test]
    fn independent_tasks_are_sorted_and_unique() {
        let map = DependencyMap::from_lines(["X", "E", "Y", "A", "Z", "E", "W", "Y"]);
        assert_eq!(map.independent_tasks(), ["A", "E"]);
    }

    #[test]
    fn independent_tasks_exclude_keys() {
        assert_eq!(sample().independent_tasks(), ["A", "D", "E"]);
    }

    #[test]
    fn independent_tasks_is_idempotent() {
        let map = sample();
        assert_eq!(map.independent_tasks(), map.independent_tasks());
        assert_eq!(map, sample());
    }

    // ─────────────────────────────────────────────────────────────
    // Resolution
    // ─────────────────────────────────────────────────────────────

    #[test]
    fn resolve_reports_unblocked_tasks() {
        let mut map = sample();
        assert_eq!(map.resolve("D"), Vec::<Task>::new());
        assert_eq!(map.dependencies_of("C"), ["E"]);
        assert_eq!(map.resolve("E"), ["C"]);
        assert!(map.has_unresolved());
        assert_eq!(map.unresolved_tasks(), ["B"]);
    }

    #[test]
    fn resolve_removes_one_occurrence() {
        let mut map = DependencyMap::from_lines(["B", "A", "B", "A"]);
        assert!(map.resolve("A").is_empty());
        assert_eq!(map.dependencies_of("B"), ["A"]);
    }
}
