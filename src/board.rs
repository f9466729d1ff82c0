use std::{
    fmt::{Debug, Display, Write},
    ops::{Index, IndexMut},
    str::FromStr,
};

use itertools::Itertools;
use smallvec::SmallVec;

use crate::error::{Error, Result};

pub const SIDE: usize = 3;
pub const CELLS: usize = SIDE * SIDE;
pub const BLANK: u8 = b'#';

/// The 3×3 matrix form of a board, used while generating and applying moves.
///
/// A `Grid` only guarantees its shape. Whether it holds exactly one blank is
/// checked by the operations that need it.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct Grid([[u8; SIDE]; SIDE]);

impl Grid {
    pub fn from_rows(rows: [[u8; SIDE]; SIDE]) -> Grid {
        Grid(rows)
    }

    pub fn rows(&self) -> &[[u8; SIDE]; SIDE] {
        &self.0
    }

    pub fn blanks(&self) -> SmallVec<[(usize, usize); CELLS]> {
        self.0
            .iter()
            .flatten()
            .positions(|&c| c == BLANK)
            .map(|ix| (ix / SIDE, ix % SIDE))
            .collect()
    }

    /// Position of the single blank, or `NoBlankFound` when there is not
    /// exactly one.
    pub fn blank(&self) -> Result<(usize, usize)> {
        match self.blanks().as_slice() {
            [only] => Ok(*only),
            others => Err(Error::NoBlankFound {
                found: others.len(),
            }),
        }
    }

    fn cells(&self) -> [u8; CELLS] {
        let mut cells = [0; CELLS];
        for (ix, c) in self.0.iter().flatten().enumerate() {
            cells[ix] = *c;
        }
        cells
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = u8;
    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.0[index.0][index.1]
    }
}

impl IndexMut<(usize, usize)> for Grid {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        &mut self.0[index.0][index.1]
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rows = self
            .0
            .iter()
            .map(|row| row.iter().map(|&c| c as char).collect::<String>())
            .join("/");
        f.write_str(&rows)
    }
}

/// Splits a 9-symbol identifier into three rows of three.
pub fn decode(identifier: &str) -> Result<Grid> {
    let len = identifier.chars().count();
    if len != CELLS {
        return Err(Error::malformed(
            identifier,
            format!("expected {} symbols, found {}", CELLS, len),
        ));
    }

    if !identifier.is_ascii() {
        return Err(Error::malformed(identifier, "symbols must be ASCII"));
    }

    let mut grid = Grid([[0; SIDE]; SIDE]);
    for (ix, c) in identifier.bytes().enumerate() {
        grid.0[ix / SIDE][ix % SIDE] = c;
    }

    Ok(grid)
}

/// Concatenates the rows of `grid` in row-major order.
pub fn encode(grid: &Grid) -> String {
    grid.0.iter().flatten().map(|&c| c as char).collect()
}

/// A validated board identifier: nine ASCII symbols, exactly one of which is
/// the blank, with all tiles distinct.
///
/// Equality, hashing and ordering are those of the identifier itself, which
/// makes `State` usable both as a visited-set key and as a heap tie-break.
#[derive(Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct State {
    cells: [u8; CELLS],
    blank: u8,
}

impl State {
    pub fn new(identifier: &str) -> Result<State> {
        State::try_from(&decode(identifier)?)
    }

    pub fn cells(&self) -> &[u8; CELLS] {
        &self.cells
    }

    pub fn blank_index(&self) -> usize {
        self.blank as usize
    }

    pub fn blank_position(&self) -> (usize, usize) {
        (self.blank_index() / SIDE, self.blank_index() % SIDE)
    }

    pub fn grid(&self) -> Grid {
        let mut grid = Grid([[0; SIDE]; SIDE]);
        for (ix, &c) in self.cells.iter().enumerate() {
            grid.0[ix / SIDE][ix % SIDE] = c;
        }
        grid
    }

    // caller guarantees `target` is a cell index adjacent to the blank
    pub(crate) fn with_blank_at(&self, target: usize) -> State {
        let mut cells = self.cells;
        cells.swap(self.blank_index(), target);
        State {
            cells,
            blank: target as u8,
        }
    }
}

impl TryFrom<&Grid> for State {
    type Error = Error;

    fn try_from(grid: &Grid) -> Result<State> {
        let cells = grid.cells();
        let mut seen = [false; 256];
        let mut blank = None;

        for (ix, &c) in cells.iter().enumerate() {
            if c == BLANK {
                if blank.replace(ix).is_some() {
                    return Err(Error::malformed(&encode(grid), "more than one blank"));
                }
                continue;
            }

            if std::mem::replace(&mut seen[c as usize], true) {
                return Err(Error::malformed(
                    &encode(grid),
                    format!("tile '{}' appears more than once", c as char),
                ));
            }
        }

        match blank {
            Some(ix) => Ok(State {
                cells,
                blank: ix as u8,
            }),
            None => Err(Error::malformed(&encode(grid), "no blank")),
        }
    }
}

impl FromStr for State {
    type Err = Error;

    fn from_str(s: &str) -> Result<State> {
        State::new(s)
    }
}

impl Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for &c in &self.cells {
            f.write_char(c as char)?;
        }
        Ok(())
    }
}

impl Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "State(\"{}\")", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_splits_rows() {
        let grid = decode("12345678#").unwrap();
        assert_eq!(grid.rows(), &[*b"123", *b"456", *b"78#"]);
        assert_eq!(grid[(2, 2)], BLANK);
        assert_eq!(grid[(0, 1)], b'2');
    }

    #[test]
    fn encode_decode_round_trip() {
        for s in ["12345678#", "#12345678", "8672543#1", "abcd#efgh", "99999999#"] {
            assert_eq!(encode(&decode(s).unwrap()), s);
        }

        let grid = Grid::from_rows([*b"x#z", *b"##q", *b"123"]);
        assert_eq!(decode(&encode(&grid)).unwrap(), grid);
    }

    #[test]
    fn decode_rejects_wrong_length() {
        for s in ["", "1234", "12345678", "12345678#9"] {
            assert!(matches!(decode(s), Err(Error::MalformedState { .. })), "{:?}", s);
        }
    }

    #[test]
    fn decode_rejects_non_ascii() {
        let err = decode("1234567é#").unwrap_err();
        assert!(err.to_string().contains("ASCII"));
    }

    #[test]
    fn state_requires_exactly_one_blank() {
        let none = State::new("123456789").unwrap_err();
        assert!(none.to_string().contains("no blank"));

        let two = State::new("1234567##").unwrap_err();
        assert!(two.to_string().contains("more than one blank"));
    }

    #[test]
    fn state_rejects_duplicate_tiles() {
        let err = State::new("11345678#").unwrap_err();
        assert!(matches!(err, Error::MalformedState { .. }));
        assert!(err.to_string().contains("tile '1' appears more than once"));
    }

    #[test]
    fn state_tracks_blank() {
        let state: State = "1234#5678".parse().unwrap();
        assert_eq!(state.blank_index(), 4);
        assert_eq!(state.blank_position(), (1, 1));
        assert_eq!(state.grid().blank().unwrap(), (1, 1));
    }

    #[test]
    fn state_grid_round_trip() {
        let state = State::new("8672543#1").unwrap();
        assert_eq!(State::try_from(&state.grid()).unwrap(), state);
    }

    #[test]
    fn grid_blank_counts() {
        let grid = decode("123456789").unwrap();
        assert!(matches!(grid.blank(), Err(Error::NoBlankFound { found: 0 })));

        let grid = decode("#23456#89").unwrap();
        assert_eq!(grid.blanks().as_slice(), &[(0, 0), (2, 0)]);
        assert!(matches!(grid.blank(), Err(Error::NoBlankFound { found: 2 })));
    }

    #[test]
    fn display_forms() {
        let state = State::new("12345678#").unwrap();
        assert_eq!(state.to_string(), "12345678#");
        assert_eq!(format!("{:?}", state), "State(\"12345678#\")");
        assert_eq!(state.grid().to_string(), "123/456/78#");
    }

    #[test]
    fn ordering_follows_identifier() {
        let a = State::new("#12345678").unwrap();
        let b = State::new("1#2345678").unwrap();
        let c = State::new("12345678#").unwrap();
        assert!(a < b && b < c);
    }
}
