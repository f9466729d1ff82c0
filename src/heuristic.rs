use itertools::Itertools;

use crate::{
    board::{State, BLANK, SIDE},
    error::{Error, Result},
};

/// Estimate of the number of moves separating two states.
pub trait Heuristic {
    fn estimate(&self, from: &State, to: &State) -> Result<u32>;
}

/// Sum over all tiles of the row and column displacement between `from` and `to`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Manhattan;

/// Number of tiles of `from` that are not on their cell in `to`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MisplacedTiles;

impl Heuristic for Manhattan {
    fn estimate(&self, from: &State, to: &State) -> Result<u32> {
        manhattan(from, to)
    }
}

impl Heuristic for MisplacedTiles {
    fn estimate(&self, from: &State, to: &State) -> Result<u32> {
        // surfaces a mismatched tile alphabet the same way manhattan does
        locate(to)
            .check_alphabet(from, to)
            .map(|()| misplaced(from, to))
    }
}

// index of each symbol of a state, keyed by the symbol itself
struct Positions([Option<u8>; 256]);

fn locate(state: &State) -> Positions {
    let mut lookup = [None; 256];
    for (ix, &c) in state.cells().iter().enumerate() {
        lookup[c as usize] = Some(ix as u8);
    }
    Positions(lookup)
}

impl Positions {
    fn of(&self, tile: u8, from: &State, to: &State) -> Result<usize> {
        self.0[tile as usize]
            .map(usize::from)
            .ok_or_else(|| Error::TileNotFound {
                tile: tile as char,
                from: from.to_string(),
                to: to.to_string(),
            })
    }

    fn check_alphabet(&self, from: &State, to: &State) -> Result<()> {
        for &tile in from.cells().iter().filter(|&&c| c != BLANK) {
            self.of(tile, from, to)?;
        }
        Ok(())
    }
}

pub fn manhattan(from: &State, to: &State) -> Result<u32> {
    let goal = locate(to);
    let mut distance = 0;

    for (ix, &tile) in from.cells().iter().enumerate() {
        if tile == BLANK {
            continue;
        }

        let target = goal.of(tile, from, to)?;
        distance += (ix / SIDE).abs_diff(target / SIDE) + (ix % SIDE).abs_diff(target % SIDE);
    }

    Ok(distance as u32)
}

fn misplaced(from: &State, to: &State) -> u32 {
    from.cells()
        .iter()
        .zip_eq(to.cells())
        .filter(|(f, t)| **f != BLANK && f != t)
        .count() as u32
}
