//! The river-crossing puzzle: ferry a pack of pups and wolves across.
//!
//! The boat holds either one or two pups, or exactly one wolf, and always
//! carries at least one animal. Every configuration is the animal counts
//! on each bank plus the side the boat is on; the puzzle is solved toward
//! the explicit target configuration with everyone on the right bank.

use std::fmt;

use crate::config::{Configuration, Neighbors};

/// Which bank the boat is currently on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoatSide {
    Left,
    Right,
}

/// One arrangement of the animals and the boat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CrossingConfig {
    pups_left: u32,
    wolves_left: u32,
    pups_right: u32,
    wolves_right: u32,
    boat: BoatSide,
}

impl CrossingConfig {
    /// The starting arrangement: everyone on the left bank.
    pub fn start(pups: u32, wolves: u32) -> Self {
        Self {
            pups_left: pups,
            wolves_left: wolves,
            pups_right: 0,
            wolves_right: 0,
            boat: BoatSide::Left,
        }
    }

    /// The target arrangement: everyone on the right bank.
    pub fn goal(pups: u32, wolves: u32) -> Self {
        Self {
            pups_left: 0,
            wolves_left: 0,
            pups_right: pups,
            wolves_right: wolves,
            boat: BoatSide::Right,
        }
    }

    /// The configuration after ferrying `pups` pups and `wolves` wolves
    /// from the boat's bank to the opposite one.
    fn ferry(&self, pups: u32, wolves: u32) -> Self {
        match self.boat {
            BoatSide::Left => Self {
                pups_left: self.pups_left - pups,
                wolves_left: self.wolves_left - wolves,
                pups_right: self.pups_right + pups,
                wolves_right: self.wolves_right + wolves,
                boat: BoatSide::Right,
            },
            BoatSide::Right => Self {
                pups_left: self.pups_left + pups,
                wolves_left: self.wolves_left + wolves,
                pups_right: self.pups_right - pups,
                wolves_right: self.wolves_right - wolves,
                boat: BoatSide::Left,
            },
        }
    }
}

impl Configuration for CrossingConfig {
    fn neighbors(&self) -> Neighbors<Self> {
        let mut neighbors = Neighbors::new();
        let (pups_here, wolves_here) = match self.boat {
            BoatSide::Left => (self.pups_left, self.wolves_left),
            BoatSide::Right => (self.pups_right, self.wolves_right),
        };
        if pups_here >= 2 {
            neighbors.push(self.ferry(2, 0));
        }
        if pups_here >= 1 {
            neighbors.push(self.ferry(1, 0));
        }
        if wolves_here >= 1 {
            neighbors.push(self.ferry(0, 1));
        }
        neighbors
    }
}

impl fmt::Display for CrossingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let banks = format!(
            "left=[{}, {}], right=[{}, {}]",
            self.pups_left, self.wolves_left, self.pups_right, self.wolves_right
        );
        match self.boat {
            BoatSide::Left => write!(f, "(BOAT) {}       ", banks),
            BoatSide::Right => write!(f, "       {}  (BOAT)", banks),
        }
    }
}
