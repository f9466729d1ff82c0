//! Solver for the 3×3 sliding-tile puzzle.
//!
//! Boards are written as nine symbols in row-major order, with `#` for the
//! blank, e.g. `12345678#`. Three strategies search for the goal:
//! breadth-first ([`search::bfs`]), greedy best-first ([`search::gbfs`]) and
//! uniform-cost ([`search::ucs`]) under a configurable [`cost::CostTable`].

pub mod board;
pub mod cli;
pub mod cost;
pub mod error;
pub mod heuristic;
pub mod moves;
pub mod search;

pub use board::{decode, encode, Grid, State};
pub use error::{Error, Result};
pub use moves::{available_moves, apply_move, Move, MOVES};
