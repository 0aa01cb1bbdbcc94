//! Capture computation.
//!
//! Everything here is a pure function of a board and the side to move: no
//! state survives between calls, so validating a placement and applying it
//! always agree on what flips.

use crate::board::{Board, DIRECTIONS, Mask, Position};
use crate::disc::Player;

/// The set of opponent positions that change owner for one placement.
///
/// Positions are unique and kept in discovery order: line captures first,
/// then whatever chain reactions add.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Captures {
    positions: Vec<Position>,
}

impl Captures {
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Number of discs that flip.
    pub fn count(&self) -> usize {
        self.positions.len()
    }

    /// An empty capture set means the placement is illegal.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Position> {
        self.positions.iter()
    }
}

impl<'a> IntoIterator for &'a Captures {
    type Item = &'a Position;
    type IntoIter = std::slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.positions.iter()
    }
}

/// Full capture set for `mover` placing at `origin`.
///
/// Returns an empty set when `origin` is off the board or occupied.
pub fn evaluate_captures(board: &Board, origin: Position, mover: Player) -> Captures {
    if !origin.in_bounds() || !board.is_empty_at(origin) {
        return Captures::default();
    }

    let line = line_captures(board, origin, mover);

    let mut seen = Mask::new();
    let mut positions = Vec::with_capacity(line.len());
    for &pos in &line {
        if seen.insert(pos) {
            positions.push(pos);
        }
    }

    for &pos in &line {
        let explodes = board
            .cell_at(pos)
            .is_some_and(|disc| disc.kind().propagates());
        if !explodes {
            continue;
        }
        for hit in chain_reaction(board, pos, mover) {
            if seen.insert(hit) {
                positions.push(hit);
            }
        }
    }

    Captures { positions }
}

/// Opponent discs bracketed along the eight rays from `origin`.
///
/// Fortified opponent discs are stepped over: they neither end a ray nor join
/// the run, and a ray holding only Fortified discs captures nothing.
fn line_captures(board: &Board, origin: Position, mover: Player) -> Vec<Position> {
    let mut captured = Vec::new();

    for &dir in &DIRECTIONS {
        let mut run = Vec::new();
        let mut found_opponent = false;
        let mut cursor = origin.step(dir);

        while let Some(pos) = cursor {
            match board.cell_at(pos) {
                None => break,
                Some(disc) if disc.owner() != mover => {
                    if disc.kind().flips() {
                        run.push(pos);
                        found_opponent = true;
                    }
                }
                Some(_) => {
                    if found_opponent {
                        captured.extend(run);
                    }
                    break;
                }
            }
            cursor = pos.step(dir);
        }
    }

    captured
}

/// Positions swept up when the opponent Explosive disc at `origin` is captured.
///
/// Depth-first over the 8-neighbourhood. Every opponent-owned, flippable
/// neighbour is collected; opponent Explosive neighbours are expanded in turn.
/// The visited set lives for this one call only, so cycles terminate.
/// The result has no duplicates and may include `origin` itself when another
/// Explosive disc points back at it.
pub fn chain_reaction(board: &Board, origin: Position, mover: Player) -> Vec<Position> {
    let mut visited = Mask::new();
    let mut collected = Mask::new();
    let mut out = Vec::new();
    explode(board, origin, mover, &mut visited, &mut collected, &mut out);
    out
}

fn explode(
    board: &Board,
    at: Position,
    mover: Player,
    visited: &mut Mask,
    collected: &mut Mask,
    out: &mut Vec<Position>,
) {
    visited.insert(at);

    for neighbor in at.neighbors() {
        let Some(disc) = board.cell_at(neighbor) else {
            continue;
        };
        if disc.owner() == mover || !disc.kind().flips() {
            continue;
        }
        if collected.insert(neighbor) {
            out.push(neighbor);
        }
        if disc.kind().propagates() && !visited.contains(neighbor) {
            explode(board, neighbor, mover, visited, collected, out);
        }
    }
}
