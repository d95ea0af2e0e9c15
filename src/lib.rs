//! Breadth-first search solver for transition-graph puzzles.
//!
//! The core of this crate is a generic shortest-path engine: puzzles
//! describe their state space through the [`Configuration`] trait, and
//! the [`Solver`] explores it breadth-first toward an explicit target or
//! any goal state, guaranteeing a minimum-length solution. Three puzzle
//! implementations ship with the crate: a river crossing, a string
//! ladder, and the hoppers frog-jumping board.

pub mod config;
pub mod crossing;
pub mod hoppers;
pub mod solver;
pub mod strings;

// Re-export main types
pub use config::{Configuration, Neighbors};
pub use crossing::{BoatSide, CrossingConfig};
pub use hoppers::{Cell, HoppersConfig, HoppersError};
pub use solver::{build_path, NotFound, Predecessors, Solver};
pub use strings::StringsConfig;
