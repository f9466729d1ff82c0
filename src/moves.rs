use std::fmt::Display;

use smallvec::SmallVec;

use crate::{
    board::{encode, Grid, State, SIDE},
    error::{Error, Result},
};

/// Direction in which the blank travels, exchanging place with the tile it
/// moves onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

/// Canonical successor order. Breadth-first discovery and the insertion
/// order into the priority queues both follow this list.
pub const MOVES: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

impl Move {
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }

    pub const fn opposite(self) -> Move {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }

    /// Cell the blank lands on when moving from `from`, if it stays on the board.
    pub fn target(self, from: (usize, usize)) -> Option<(usize, usize)> {
        let (di, dj) = self.delta();
        let i = from.0.checked_add_signed(di)?;
        let j = from.1.checked_add_signed(dj)?;
        (i < SIDE && j < SIDE).then_some((i, j))
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Move::Up => "UP",
            Move::Down => "DOWN",
            Move::Left => "LEFT",
            Move::Right => "RIGHT",
        })
    }
}

fn legal_from(blank: (usize, usize)) -> impl Iterator<Item = (Move, (usize, usize))> {
    MOVES
        .into_iter()
        .filter_map(move |mv| mv.target(blank).map(|target| (mv, target)))
}

/// Moves available to the single blank of `grid`, in canonical order.
pub fn available_moves(grid: &Grid) -> Result<SmallVec<[Move; 4]>> {
    let blank = grid.blank()?;
    Ok(legal_from(blank).map(|(mv, _)| mv).collect())
}

/// Applies `mv` to a copy of `grid`, returning the new grid and its identifier.
pub fn apply_move(grid: &Grid, mv: Move) -> Result<(Grid, String)> {
    let blank = grid.blank()?;
    let target = mv.target(blank).ok_or(Error::IllegalMove {
        mv,
        row: blank.0,
        col: blank.1,
    })?;

    let mut next = *grid;
    next[blank] = grid[target];
    next[target] = grid[blank];

    let identifier = encode(&next);
    Ok((next, identifier))
}

/// Every state one move away from `state`, paired with the move that leads
/// there, in canonical order.
pub fn successors(state: &State) -> SmallVec<[(Move, State); 4]> {
    legal_from(state.blank_position())
        .map(|(mv, (i, j))| (mv, state.with_blank_at(i * SIDE + j)))
        .collect()
}
