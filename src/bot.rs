use crate::board::Position;
use crate::disc::{Disc, DiscKind, Player};
use crate::game::{GameState, Move};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Trait that all bots must implement
pub trait Bot: Send {
    /// Get the name of the bot
    fn name(&self) -> &str;

    /// Choose a move for the side to move, or `None` if it has no legal move.
    ///
    /// A bot may simulate on `state` through `locate_disc`/`undo_last_move`
    /// but must hand it back exactly as it received it.
    fn get_move(&mut self, state: &mut GameState) -> Option<Move>;

    /// Notified when the game starts
    fn game_start(&mut self, _player: Player) {}

    /// Notified when a move is made (by either player)
    fn notify_move(&mut self, _mv: Move) {}

    /// Notified when the game ends
    fn game_end(&mut self) {}
}

/// Builds one of the stock bots by name: `random`, `greedy` or `minmax`.
pub fn bot_from_name(kind: &str, seed: Option<u64>) -> Option<Box<dyn Bot>> {
    match kind.to_lowercase().as_str() {
        "random" => Some(Box::new(match seed {
            Some(seed) => RandomBot::with_seed("RandomBot".to_string(), seed),
            None => RandomBot::new("RandomBot".to_string()),
        })),
        "greedy" => Some(Box::new(GreedyBot::new("GreedyBot".to_string()))),
        "minmax" | "lookahead" => Some(Box::new(LookaheadBot::new("MinMaxBot".to_string()))),
        _ => None,
    }
}

/// Uniformly random position and uniformly random available disc kind.
pub struct RandomBot {
    name: String,
    rng: StdRng,
}

impl RandomBot {
    pub fn new(name: String) -> Self {
        RandomBot {
            name,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(name: String, seed: u64) -> Self {
        RandomBot {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Bot for RandomBot {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_move(&mut self, state: &mut GameState) -> Option<Move> {
        let moves = state.legal_moves();
        let pos = *moves.choose(&mut self.rng)?;
        let kinds = state.current().available_kinds();
        let kind = kinds
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(DiscKind::Standard);
        Some(Move::new(pos, Disc::new(kind, state.current_player())))
    }
}

/// Takes the placement that flips the most discs.
///
/// Ties go to the highest column, then the highest row.
pub struct GreedyBot {
    name: String,
}

impl GreedyBot {
    pub fn new(name: String) -> Self {
        GreedyBot { name }
    }
}

impl Bot for GreedyBot {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_move(&mut self, state: &mut GameState) -> Option<Move> {
        let best = state
            .legal_moves()
            .into_iter()
            .max_by_key(|&pos| (state.count_flips(pos), pos.col, pos.row))?;
        Some(Move::standard(best, state.current_player()))
    }
}

/// One-ply lookahead.
///
/// Each candidate scores its own flips minus the best and the average flips
/// the opponent could answer with. The reply is measured by actually playing
/// the candidate on the engine and undoing it afterwards. Ties keep the
/// earlier candidate.
pub struct LookaheadBot {
    name: String,
}

impl LookaheadBot {
    pub fn new(name: String) -> Self {
        LookaheadBot { name }
    }

    /// Fortified on the edge while stock lasts, Standard otherwise.
    fn disc_for(&self, state: &GameState, pos: Position) -> Disc {
        let owner = state.current_player();
        if pos.is_edge() && state.current().remaining_fortified() > 0 {
            Disc::fortified(owner)
        } else {
            Disc::standard(owner)
        }
    }

    fn evaluate(&self, state: &mut GameState, pos: Position) -> Option<f64> {
        let gain = state.count_flips(pos) as f64;
        let disc = self.disc_for(state, pos);
        state.locate_disc(Move::new(pos, disc)).ok()?;

        let replies: Vec<usize> = state
            .legal_moves()
            .into_iter()
            .map(|reply| state.count_flips(reply))
            .collect();
        state.undo_last_move();

        let (max, avg) = match replies.iter().max() {
            Some(&max) => (
                max as f64,
                replies.iter().sum::<usize>() as f64 / replies.len() as f64,
            ),
            None => (0.0, 0.0),
        };
        Some(gain - max - avg)
    }
}

impl Bot for LookaheadBot {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_move(&mut self, state: &mut GameState) -> Option<Move> {
        let mut best: Option<(Position, f64)> = None;
        for pos in state.legal_moves() {
            let Some(score) = self.evaluate(state, pos) else {
                continue;
            };
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((pos, score));
            }
        }
        let (pos, _) = best?;
        Some(Move::new(pos, self.disc_for(state, pos)))
    }
}
