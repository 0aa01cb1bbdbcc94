//! Example of how to write your own bot

use reversi_arena::*;

/// Corners cannot be recaptured, so take one whenever possible; otherwise
/// play the move that flips the fewest discs to keep the opponent short of options.
pub struct CornerBot {
    name: String,
}

impl CornerBot {
    pub fn new(name: String) -> Self {
        CornerBot { name }
    }

    fn is_corner(pos: Position, board_size: usize) -> bool {
        (pos.row == 0 || pos.row == board_size - 1) && (pos.col == 0 || pos.col == board_size - 1)
    }
}

impl Bot for CornerBot {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_move(&mut self, state: &mut GameState) -> Option<Move> {
        let size = state.board_size();
        let moves = state.legal_moves();
        let pos = moves
            .iter()
            .copied()
            .find(|&p| Self::is_corner(p, size))
            .or_else(|| moves.iter().copied().min_by_key(|&p| state.count_flips(p)))?;

        // Corner discs are never captured, so a bomb there never goes off.
        let kind = if !Self::is_corner(pos, size) && state.current().remaining_explosive() > 0 {
            DiscKind::Explosive
        } else {
            DiscKind::Standard
        };
        Some(Move::new(pos, Disc::new(kind, state.current_player())))
    }

    fn game_start(&mut self, player: Player) {
        println!("{} starting as {}", self.name, player);
    }
}

fn main() {
    println!("Custom Bot Example\n");

    let bot1 = Box::new(CornerBot::new("CornerBot".to_string()));
    let bot2 = Box::new(GreedyBot::new("GreedyBot".to_string()));

    let mut match_game = Match::new(bot1, bot2, MatchConfig::default());
    let (corner_wins, greedy_wins) = match_game.play_series(10);

    println!("\nSeries completed!");
    println!("CornerBot {} - {} GreedyBot", corner_wins, greedy_wins);
}
