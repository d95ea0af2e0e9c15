//! The configuration contract every puzzle state type implements.
//!
//! A configuration is one point in a puzzle's state space. The solver
//! only ever talks to puzzles through this trait: it compares and hashes
//! configurations to deduplicate them, asks for their neighbors to grow
//! the search, and checks the goal predicate when no explicit target
//! configuration exists.

use std::fmt::Display;
use std::hash::Hash;

use smallvec::SmallVec;

/// Neighbor configurations produced by one expansion step.
///
/// Most puzzle states have only a handful of legal moves, so the inline
/// capacity keeps typical expansions off the heap.
pub type Neighbors<C> = SmallVec<[C; 8]>;

/// One state in a puzzle's transition graph.
///
/// Equality and hashing must agree on the puzzle-relevant content only:
/// two configurations reached by different move sequences are the same
/// configuration if their boards match. `Display` is used solely for
/// printing solution steps and never participates in deduplication.
pub trait Configuration: Clone + Eq + Hash + Display {
    /// Every configuration reachable by one legal move.
    ///
    /// May be empty for a dead-end state. The order is not required for
    /// correctness, but a stable order gives reproducible solutions when
    /// several shortest paths exist.
    fn neighbors(&self) -> Neighbors<Self>;

    /// Whether this configuration satisfies the puzzle's win condition.
    ///
    /// Only consulted by goal-predicate search. Puzzles that are solved
    /// toward a single explicit target configuration can keep this
    /// default.
    fn is_goal(&self) -> bool {
        false
    }
}
