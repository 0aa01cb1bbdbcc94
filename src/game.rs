use crate::board::{BOARD_SIZE, Board, Position};
use crate::capture::{self, Captures};
use crate::disc::{Disc, DiscKind, Player};
use crate::player::{Inventory, PlayerState};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Per-player starting allotments of the limited disc kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub explosive_discs: u32,
    pub fortified_discs: u32,
}

impl GameConfig {
    pub fn inventory(&self) -> Inventory {
        Inventory::new(self.explosive_discs, self.fortified_discs)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            explosive_discs: 3,
            fortified_discs: 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub position: Position,
    pub disc: Disc,
}

impl Move {
    pub fn new(position: Position, disc: Disc) -> Self {
        Move { position, disc }
    }

    pub fn standard(position: Position, owner: Player) -> Self {
        Self::new(position, Disc::standard(owner))
    }

    pub fn kind(&self) -> DiscKind {
        self.disc.kind()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.disc.kind(), self.position)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Position {0} is off the board")]
    OutOfBounds(Position),
    #[error("Position {0} is already occupied")]
    Occupied(Position),
    #[error("Placing at {0} captures nothing")]
    NoCaptures(Position),
    #[error("No {0} discs left")]
    OutOfStock(DiscKind),
    #[error("Not your turn")]
    NotYourTurn,
    #[error("{0} player bound to the wrong seat")]
    WrongSeat(Player),
}

/// The rules engine: board, seats, side to move and move history.
///
/// The board only changes through [`GameState::locate_disc`],
/// [`GameState::undo_last_move`] and [`GameState::reset`]. Replaying
/// `history()` from the origin position reproduces the current board and turn.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    origin: Board,
    origin_player: Player,
    players: [PlayerState; 2],
    current_player: Player,
    history: Vec<Move>,
    config: GameConfig,
    winner: Option<Player>,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        GameState {
            board: Board::starting(),
            origin: Board::starting(),
            origin_player: Player::First,
            players: [
                PlayerState::new(Player::First, config.inventory()),
                PlayerState::new(Player::Second, config.inventory()),
            ],
            current_player: Player::First,
            history: Vec::new(),
            config,
            winner: None,
        }
    }

    /// A game that starts from an arbitrary position instead of the standard
    /// opening. Undo replays from here; `reset` still returns to the opening.
    pub fn from_position(config: GameConfig, board: Board, to_move: Player) -> Self {
        let mut state = Self::new(config);
        state.origin = board.clone();
        state.origin_player = to_move;
        state.board = board;
        state.current_player = to_move;
        state
    }

    /// Binds both seats and starts a fresh game. Win tallies carried by the
    /// given states are kept; inventories are refilled from the config.
    pub fn set_players(
        &mut self,
        first: PlayerState,
        second: PlayerState,
    ) -> Result<(), GameError> {
        if first.player() != Player::First {
            return Err(GameError::WrongSeat(first.player()));
        }
        if second.player() != Player::Second {
            return Err(GameError::WrongSeat(second.player()));
        }
        self.players = [first, second];
        self.reset();
        Ok(())
    }

    /// Back to the starting configuration. Wins survive.
    pub fn reset(&mut self) {
        self.origin = Board::starting();
        self.origin_player = Player::First;
        self.board = Board::starting();
        self.current_player = Player::First;
        self.history.clear();
        self.winner = None;
        let inventory = self.config.inventory();
        for seat in &mut self.players {
            seat.refill(inventory);
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_size(&self) -> usize {
        BOARD_SIZE
    }

    pub fn cell_at(&self, pos: Position) -> Option<Disc> {
        self.board.cell_at(pos)
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn is_first_player_turn(&self) -> bool {
        self.current_player == Player::First
    }

    pub fn player(&self, player: Player) -> &PlayerState {
        &self.players[player.index()]
    }

    pub fn player_mut(&mut self, player: Player) -> &mut PlayerState {
        &mut self.players[player.index()]
    }

    /// Seat of the side to move.
    pub fn current(&self) -> &PlayerState {
        self.player(self.current_player)
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Player credited with the finished game, once `is_game_over` has reported it.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Disc counts as (first, second).
    pub fn score(&self) -> (usize, usize) {
        (
            self.board.count(Player::First),
            self.board.count(Player::Second),
        )
    }

    /// What placing any disc at `pos` would flip for the side to move.
    pub fn evaluate_captures(&self, pos: Position) -> Captures {
        capture::evaluate_captures(&self.board, pos, self.current_player)
    }

    pub fn count_flips(&self, pos: Position) -> usize {
        self.evaluate_captures(pos).count()
    }

    pub fn is_legal(&self, pos: Position) -> bool {
        !self.evaluate_captures(pos).is_empty()
    }

    /// Empty cells where the side to move captures something, row-major.
    pub fn legal_moves(&self) -> Vec<Position> {
        Board::positions()
            .filter(|&pos| self.board.is_empty_at(pos) && self.is_legal(pos))
            .collect()
    }

    fn has_legal_move(&self) -> bool {
        Board::positions().any(|pos| self.board.is_empty_at(pos) && self.is_legal(pos))
    }

    /// Places `mv.disc` for the side to move and flips the capture set.
    ///
    /// On any error the engine is left exactly as it was.
    pub fn locate_disc(&mut self, mv: Move) -> Result<Captures, GameError> {
        let pos = mv.position;
        let kind = mv.kind();

        if !pos.in_bounds() {
            return Err(self.reject(mv, GameError::OutOfBounds(pos)));
        }
        if mv.disc.owner() != self.current_player {
            return Err(self.reject(mv, GameError::NotYourTurn));
        }
        if !self.board.is_empty_at(pos) {
            return Err(self.reject(mv, GameError::Occupied(pos)));
        }
        let captures = self.evaluate_captures(pos);
        if captures.is_empty() {
            return Err(self.reject(mv, GameError::NoCaptures(pos)));
        }
        let mover = self.current_player;
        if !self.player_mut(mover).inventory_mut().take(kind) {
            return Err(self.reject(mv, GameError::OutOfStock(kind)));
        }

        self.apply(mv, &captures);
        Ok(captures)
    }

    fn reject(&self, mv: Move, err: GameError) -> GameError {
        debug!(player = %self.current_player, %mv, error = %err, "placement rejected");
        err
    }

    fn apply(&mut self, mv: Move, captures: &Captures) {
        let mover = self.current_player;
        self.board.set(mv.position, Some(mv.disc));
        for &pos in captures {
            if let Some(disc) = self.board.disc_mut(pos) {
                disc.set_owner(mover);
            }
        }
        self.history.push(mv);
        self.current_player = mover.opponent();
    }

    /// Takes back the last move. Returns `None` when there is nothing to undo.
    ///
    /// Undoing out of a finished game also takes back the win it credited.
    ///
    /// The board is rebuilt from the origin position and the remaining
    /// history replayed, recomputing every capture set along the way.
    pub fn undo_last_move(&mut self) -> Option<Move> {
        let undone = self.history.pop()?;
        self.player_mut(undone.disc.owner())
            .inventory_mut()
            .give_back(undone.kind());
        self.replay();
        if let Some(winner) = self.winner.take() {
            self.player_mut(winner).revoke_win();
        }
        debug!(%undone, remaining = self.history.len(), "move undone");
        Some(undone)
    }

    fn replay(&mut self) {
        let moves = std::mem::take(&mut self.history);
        self.board = self.origin.clone();
        self.current_player = self.origin_player;
        for mv in moves {
            let captures = self.evaluate_captures(mv.position);
            self.apply(mv, &captures);
        }
    }

    /// True when the side to move has no legal placement.
    ///
    /// The first call that observes this credits a win to the other player;
    /// later calls report the same result without crediting again.
    pub fn is_game_over(&mut self) -> bool {
        if self.winner.is_some() {
            return true;
        }
        if self.has_legal_move() {
            return false;
        }
        let winner = self.current_player.opponent();
        self.player_mut(winner).record_win();
        self.winner = Some(winner);
        debug!(%winner, moves = self.history.len(), "game over");
        true
    }

    /// Get a string representation of the board
    pub fn display_board(&self) -> String {
        let mut result = String::new();
        result.push_str("   ");
        for col in 0..BOARD_SIZE {
            result.push_str(&format!("{:2} ", col));
        }
        result.push('\n');

        for row in 0..BOARD_SIZE {
            result.push_str(&format!("{:2} ", row));
            for col in 0..BOARD_SIZE {
                let c = self
                    .board
                    .cell_at(Position::new(row, col))
                    .map_or('.', |disc| disc.glyph());
                result.push_str(&format!(" {} ", c));
            }
            result.push('\n');
        }

        let (first, second) = self.score();
        result.push_str(&format!(
            "First {} - {} Second, {} to move\n",
            first, second, self.current_player
        ));
        result
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
