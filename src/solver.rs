//! Breadth-first search over a puzzle's transition graph.
//!
//! The solver explores configurations level by level from a start
//! configuration, recording for each newly discovered configuration the
//! one it was first reached from. Because every move has the same cost
//! and the frontier is strictly FIFO, the first time the target (or any
//! goal configuration) is dequeued it lies at minimum distance from the
//! start, and walking the predecessor map backward yields a shortest
//! solution.

use std::collections::{HashMap, VecDeque};

use thiserror::Error;

use crate::config::Configuration;

/// Parent pointers of the search tree: each discovered configuration
/// maps to the configuration it was first reached from. The start
/// configuration maps to itself.
pub type Predecessors<C> = HashMap<C, C>;

/// The search exhausted every reachable configuration without meeting
/// its termination condition. An expected outcome, not a defect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no path to the requested configuration")]
pub struct NotFound;

/// One search run: owns the frontier, the predecessor map under
/// construction, and the run's statistics.
///
/// Counters reset at the start of every search, so a reused solver
/// reports statistics for its most recent run only. Concurrent searches
/// should each use their own `Solver`.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    total_configs: usize,
    unique_configs: usize,
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configurations materialized during the last run, duplicates
    /// included: the start plus every neighbor generated, whether or
    /// not it was already known.
    pub fn total_configs(&self) -> usize {
        self.total_configs
    }

    /// Distinct configurations admitted to the predecessor map during
    /// the last run.
    pub fn unique_configs(&self) -> usize {
        self.unique_configs
    }

    /// Search for a path from `start` to an explicit `target`.
    ///
    /// Returns the predecessor map on success; pass it to [`build_path`]
    /// with the same endpoints to extract the solution. `NotFound` means
    /// `target` is unreachable from `start`.
    pub fn find_path<C: Configuration>(
        &mut self,
        start: &C,
        target: &C,
    ) -> Result<Predecessors<C>, NotFound> {
        self.search(start, |c| c == target).map(|(preds, _)| preds)
    }

    /// Search for a path from `start` to any configuration satisfying
    /// [`Configuration::is_goal`].
    ///
    /// Returns the predecessor map together with the goal configuration
    /// that was reached; of all goal configurations it is one at minimum
    /// distance from `start`.
    pub fn find_any<C: Configuration>(
        &mut self,
        start: &C,
    ) -> Result<(Predecessors<C>, C), NotFound> {
        self.search(start, |c| c.is_goal())
    }

    fn search<C, F>(&mut self, start: &C, mut is_target: F) -> Result<(Predecessors<C>, C), NotFound>
    where
        C: Configuration,
        F: FnMut(&C) -> bool,
    {
        self.total_configs = 1;
        self.unique_configs = 1;

        let mut frontier: VecDeque<C> = VecDeque::new();
        let mut predecessors: Predecessors<C> = HashMap::new();
        predecessors.insert(start.clone(), start.clone());
        frontier.push_back(start.clone());

        while let Some(current) = frontier.pop_front() {
            if is_target(&current) {
                return Ok((predecessors, current));
            }
            for neighbor in current.neighbors() {
                self.total_configs += 1;
                if !predecessors.contains_key(&neighbor) {
                    predecessors.insert(neighbor.clone(), current.clone());
                    frontier.push_back(neighbor);
                    self.unique_configs += 1;
                }
            }
        }
        Err(NotFound)
    }
}

/// Rebuild the solution path from a successful search.
///
/// Walks the predecessor map backward from `end` to `start` and returns
/// the configurations in order, both endpoints included. When
/// `start == end` the path is the single start configuration.
///
/// `end` must have been discovered by the search that produced
/// `predecessors`; calling this after a `NotFound` result, or with a
/// configuration the search never reached, is a caller bug and panics.
pub fn build_path<C: Configuration>(
    predecessors: &Predecessors<C>,
    start: &C,
    end: &C,
) -> Vec<C> {
    let mut path = vec![end.clone()];
    let mut current = end;
    while current != start {
        current = predecessors
            .get(current)
            .expect("configuration missing from predecessor map");
        path.push(current.clone());
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Neighbors;
    use std::fmt;

    /// A -> B -> C -> D, each state's only neighbor the next letter.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    struct Chain(char);

    impl Configuration for Chain {
        fn neighbors(&self) -> Neighbors<Self> {
            match self.0 {
                'A' => [Chain('B')].into_iter().collect(),
                'B' => [Chain('C')].into_iter().collect(),
                'C' => [Chain('D')].into_iter().collect(),
                _ => Neighbors::new(),
            }
        }
    }

    impl fmt::Display for Chain {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    /// A -> {B, C} -> D, with D the only goal state.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    struct Diamond(char);

    impl Configuration for Diamond {
        fn neighbors(&self) -> Neighbors<Self> {
            match self.0 {
                'A' => [Diamond('B'), Diamond('C')].into_iter().collect(),
                'B' | 'C' => [Diamond('D')].into_iter().collect(),
                _ => Neighbors::new(),
            }
        }

        fn is_goal(&self) -> bool {
            self.0 == 'D'
        }
    }

    impl fmt::Display for Diamond {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    /// A <-> B, nothing else reachable.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    struct Loop(char);

    impl Configuration for Loop {
        fn neighbors(&self) -> Neighbors<Self> {
            match self.0 {
                'A' => [Loop('B')].into_iter().collect(),
                'B' => [Loop('A')].into_iter().collect(),
                _ => Neighbors::new(),
            }
        }
    }

    impl fmt::Display for Loop {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    #[test]
    fn test_linear_chain_path() {
        let mut solver = Solver::new();
        let predecessors = solver.find_path(&Chain('A'), &Chain('D')).unwrap();
        let path = build_path(&predecessors, &Chain('A'), &Chain('D'));
        assert_eq!(path, vec![Chain('A'), Chain('B'), Chain('C'), Chain('D')]);
    }

    #[test]
    fn test_unreachable_target() {
        let mut solver = Solver::new();
        assert_eq!(solver.find_path(&Chain('A'), &Chain('Z')), Err(NotFound));
    }

    #[test]
    fn test_start_equals_target() {
        let mut solver = Solver::new();
        let predecessors = solver.find_path(&Chain('A'), &Chain('A')).unwrap();
        let path = build_path(&predecessors, &Chain('A'), &Chain('A'));
        assert_eq!(path, vec![Chain('A')]);
    }

    #[test]
    fn test_goal_predicate_finds_shortest() {
        let mut solver = Solver::new();
        let (predecessors, goal) = solver.find_any(&Diamond('A')).unwrap();
        assert_eq!(goal, Diamond('D'));
        let path = build_path(&predecessors, &Diamond('A'), &goal);
        assert_eq!(path.len(), 3);
        // B is enumerated before C, so it wins the tie for D's parent.
        assert_eq!(path[1], Diamond('B'));
    }

    #[test]
    fn test_goal_predicate_no_goal() {
        let mut solver = Solver::new();
        assert_eq!(solver.find_any(&Chain('A')), Err(NotFound));
    }

    #[test]
    fn test_cycle_terminates() {
        let mut solver = Solver::new();
        assert_eq!(solver.find_path(&Loop('A'), &Loop('X')), Err(NotFound));
        // Start, then one neighbor per expansion; B regenerates A once.
        assert_eq!(solver.total_configs(), 3);
        assert_eq!(solver.unique_configs(), 2);
    }

    #[test]
    fn test_chain_statistics() {
        let mut solver = Solver::new();
        solver.find_path(&Chain('A'), &Chain('D')).unwrap();
        // Start plus one generated neighbor for each of A, B, C; D is
        // dequeued as the target without being expanded.
        assert_eq!(solver.total_configs(), 4);
        assert_eq!(solver.unique_configs(), 4);
    }

    #[test]
    fn test_duplicate_generation_counted_once() {
        let mut solver = Solver::new();
        let (predecessors, _) = solver.find_any(&Diamond('A')).unwrap();
        // D is generated by both B and C but admitted only once.
        assert_eq!(solver.total_configs(), 5);
        assert_eq!(solver.unique_configs(), 4);
        assert_eq!(predecessors.len(), 4);
    }

    #[test]
    fn test_statistics_reset_between_runs() {
        let mut solver = Solver::new();
        solver.find_path(&Chain('A'), &Chain('D')).unwrap();
        solver.find_path(&Chain('A'), &Chain('B')).unwrap();
        // Second run: start plus A's single neighbor.
        assert_eq!(solver.total_configs(), 2);
        assert_eq!(solver.unique_configs(), 2);
    }

    #[test]
    fn test_deterministic_runs() {
        let mut first = Solver::new();
        let first_preds = first.find_path(&Chain('A'), &Chain('D')).unwrap();
        let mut second = Solver::new();
        let second_preds = second.find_path(&Chain('A'), &Chain('D')).unwrap();
        assert_eq!(first_preds, second_preds);
        assert_eq!(first.total_configs(), second.total_configs());
        assert_eq!(first.unique_configs(), second.unique_configs());
    }

    #[test]
    fn test_path_endpoints() {
        let mut solver = Solver::new();
        let predecessors = solver.find_path(&Chain('B'), &Chain('D')).unwrap();
        let path = build_path(&predecessors, &Chain('B'), &Chain('D'));
        assert_eq!(path.first(), Some(&Chain('B')));
        assert_eq!(path.last(), Some(&Chain('D')));
    }

    #[test]
    #[should_panic(expected = "missing from predecessor map")]
    fn test_build_path_undiscovered_end_panics() {
        let mut solver = Solver::new();
        let predecessors = solver.find_path(&Chain('A'), &Chain('B')).unwrap();
        build_path(&predecessors, &Chain('A'), &Chain('Z'));
    }
}
