use crate::disc::{Disc, Player};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const BOARD_SIZE: usize = 8;

/// The eight compass offsets as (row, col) deltas.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    pub fn in_bounds(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// The neighbouring position one step along `(dr, dc)`, if it is on the board.
    pub fn step(&self, (dr, dc): (i32, i32)) -> Option<Position> {
        let r = self.row as i32 + dr;
        let c = self.col as i32 + dc;
        if r < 0 || r >= BOARD_SIZE as i32 || c < 0 || c >= BOARD_SIZE as i32 {
            return None;
        }
        Some(Position::new(r as usize, c as usize))
    }

    /// All on-board positions in the 8-neighbourhood.
    pub fn neighbors(&self) -> impl Iterator<Item = Position> + '_ {
        DIRECTIONS.iter().filter_map(move |&d| self.step(d))
    }

    pub fn is_edge(&self) -> bool {
        self.row == 0 || self.col == 0 || self.row == BOARD_SIZE - 1 || self.col == BOARD_SIZE - 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// An N×N grid of optional discs. Only the engine writes to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Disc>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn empty() -> Self {
        Board {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Four Standard discs in the centre, diagonally paired per player.
    pub fn starting() -> Self {
        let mut board = Self::empty();
        let lo = BOARD_SIZE / 2 - 1;
        let hi = BOARD_SIZE / 2;
        board.set(Position::new(lo, lo), Some(Disc::standard(Player::First)));
        board.set(Position::new(hi, hi), Some(Disc::standard(Player::First)));
        board.set(Position::new(lo, hi), Some(Disc::standard(Player::Second)));
        board.set(Position::new(hi, lo), Some(Disc::standard(Player::Second)));
        board
    }

    /// A board holding exactly `discs`; off-board entries are ignored.
    pub fn from_discs<I>(discs: I) -> Self
    where
        I: IntoIterator<Item = (Position, Disc)>,
    {
        let mut board = Self::empty();
        for (pos, disc) in discs {
            if pos.in_bounds() {
                board.set(pos, Some(disc));
            }
        }
        board
    }

    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Occupant of `pos`. Off-board positions read as empty.
    pub fn cell_at(&self, pos: Position) -> Option<Disc> {
        if pos.in_bounds() {
            self.cells[pos.row][pos.col]
        } else {
            None
        }
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.cell_at(pos).is_none()
    }

    pub(crate) fn set(&mut self, pos: Position, disc: Option<Disc>) {
        self.cells[pos.row][pos.col] = disc;
    }

    pub(crate) fn disc_mut(&mut self, pos: Position) -> Option<&mut Disc> {
        self.cells[pos.row][pos.col].as_mut()
    }

    /// Row-major iterator over every position.
    pub fn positions() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new(row, col)))
    }

    pub fn count(&self, player: Player) -> usize {
        Self::positions()
            .filter_map(|p| self.cell_at(p))
            .filter(|d| d.owner() == player)
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

/// Per-position flag set used to bound traversals.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Mask {
    bits: [[bool; BOARD_SIZE]; BOARD_SIZE],
}

impl Mask {
    pub(crate) fn new() -> Self {
        Mask {
            bits: [[false; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub(crate) fn contains(&self, pos: Position) -> bool {
        self.bits[pos.row][pos.col]
    }

    /// Marks `pos`; returns false if it was already marked.
    pub(crate) fn insert(&mut self, pos: Position) -> bool {
        let fresh = !self.bits[pos.row][pos.col];
        self.bits[pos.row][pos.col] = true;
        fresh
    }
}
