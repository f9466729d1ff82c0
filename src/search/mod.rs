//! The three search strategies and the result types they share.
//!
//! Every call builds its own frontier and visited structures and drops them on
//! return. Nothing is shared or cached between calls.

mod bfs;
mod gbfs;
mod ucs;

use std::cmp::Ordering;

use crate::board::State;

pub use bfs::bfs;
pub use gbfs::{gbfs, gbfs_with};
pub use ucs::ucs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// `length` is the number of moves for BFS and GBFS, and the accumulated
    /// weighted cost for UCS.
    Found { length: u32, goal: State },
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub outcome: Outcome,
    /// States whose successors were generated.
    pub expanded: usize,
    /// Successor states produced, duplicates included.
    pub generated: usize,
}

impl Report {
    fn found(length: u32, goal: State, expanded: usize, generated: usize) -> Report {
        Report {
            outcome: Outcome::Found { length, goal },
            expanded,
            generated,
        }
    }

    fn not_found(expanded: usize, generated: usize) -> Report {
        Report {
            outcome: Outcome::NotFound,
            expanded,
            generated,
        }
    }

    pub fn length(&self) -> Option<u32> {
        match self.outcome {
            Outcome::Found { length, .. } => Some(length),
            Outcome::NotFound => None,
        }
    }

    pub fn goal(&self) -> Option<State> {
        match self.outcome {
            Outcome::Found { goal, .. } => Some(goal),
            Outcome::NotFound => None,
        }
    }
}

/// Priority-queue node for the informed strategies.
///
/// `BinaryHeap` pops the greatest entry, so the ordering is reversed: the
/// lowest priority wins, and among equal priorities the lowest state
/// identifier wins. `depth` never takes part in the ordering.
#[derive(Debug, Clone, Copy)]
struct Entry {
    priority: u32,
    state: State,
    depth: u32,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.state.cmp(&self.state))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}
