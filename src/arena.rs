use crate::bot::Bot;
use crate::disc::Player;
use crate::game::{GameConfig, GameState, Move};
use tracing::info;

pub struct MatchConfig {
    pub max_moves: usize,
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            // One placement fills one cell; 60 empty cells at the start.
            max_moves: 64,
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    FirstWins { winner_name: String, moves: usize },
    SecondWins { winner_name: String, moves: usize },
    Draw { moves: usize },
    IllegalMove { violator: String, winner: String },
}

impl MatchResult {
    pub fn winner(&self) -> Option<&str> {
        match self {
            MatchResult::FirstWins { winner_name, .. } => Some(winner_name),
            MatchResult::SecondWins { winner_name, .. } => Some(winner_name),
            MatchResult::IllegalMove { winner, .. } => Some(winner),
            MatchResult::Draw { .. } => None,
        }
    }
}

/// Two bots sharing one engine. Each `play` is a fresh game; the engine's
/// win tallies accumulate across calls.
pub struct Match {
    config: MatchConfig,
    state: GameState,
    first_bot: Box<dyn Bot>,
    second_bot: Box<dyn Bot>,
}

impl Match {
    pub fn new(first_bot: Box<dyn Bot>, second_bot: Box<dyn Bot>, config: MatchConfig) -> Self {
        Self::with_game_config(first_bot, second_bot, config, GameConfig::default())
    }

    pub fn with_game_config(
        first_bot: Box<dyn Bot>,
        second_bot: Box<dyn Bot>,
        config: MatchConfig,
        game_config: GameConfig,
    ) -> Self {
        Match {
            config,
            state: GameState::new(game_config),
            first_bot,
            second_bot,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn bot_name(&self, player: Player) -> &str {
        match player {
            Player::First => self.first_bot.name(),
            Player::Second => self.second_bot.name(),
        }
    }

    /// Wins recorded so far as (first, second).
    pub fn tally(&self) -> (u32, u32) {
        (
            self.state.player(Player::First).wins(),
            self.state.player(Player::Second).wins(),
        )
    }

    pub fn play(&mut self) -> MatchResult {
        self.state.reset();
        self.first_bot.game_start(Player::First);
        self.second_bot.game_start(Player::Second);

        if self.config.verbose {
            println!("Match starting:");
            println!("  First:  {}", self.first_bot.name());
            println!("  Second: {}", self.second_bot.name());
            println!("\nInitial board:");
            println!("{}", self.state.display_board());
        }

        while !self.state.is_game_over() {
            if self.state.move_count() >= self.config.max_moves {
                let moves = self.state.move_count();
                if self.config.verbose {
                    println!("\nMax moves ({}) reached - Draw!", self.config.max_moves);
                }
                return self.finish(MatchResult::Draw { moves });
            }
            if let Some(result) = self.play_move() {
                return self.finish(result);
            }
        }

        let moves = self.state.move_count();
        let result = match self.state.winner() {
            Some(Player::First) => MatchResult::FirstWins {
                winner_name: self.first_bot.name().to_string(),
                moves,
            },
            Some(Player::Second) => MatchResult::SecondWins {
                winner_name: self.second_bot.name().to_string(),
                moves,
            },
            None => MatchResult::Draw { moves },
        };
        if self.config.verbose {
            if let Some(name) = result.winner() {
                println!("\n{} wins!", name);
            }
        }
        self.finish(result)
    }

    /// Plays `games` games back to back and returns the tally afterwards.
    pub fn play_series(&mut self, games: usize) -> (u32, u32) {
        for _ in 0..games {
            self.play();
        }
        self.tally()
    }

    fn finish(&mut self, result: MatchResult) -> MatchResult {
        self.first_bot.game_end();
        self.second_bot.game_end();
        info!(
            first = self.first_bot.name(),
            second = self.second_bot.name(),
            result = ?result,
            "match finished"
        );
        result
    }

    fn play_move(&mut self) -> Option<MatchResult> {
        let current_player = self.state.current_player();
        let bot = match current_player {
            Player::First => &mut self.first_bot,
            Player::Second => &mut self.second_bot,
        };

        if self.config.verbose {
            println!(
                "\nMove {}: {} to play",
                self.state.move_count() + 1,
                bot.name()
            );
            println!("Legal moves: {}", self.state.legal_moves().len());
        }

        let mv = bot.get_move(&mut self.state);
        self.handle_move_result(mv, current_player)
    }

    fn handle_move_result(
        &mut self,
        mv: Option<Move>,
        current_player: Player,
    ) -> Option<MatchResult> {
        let bot_name = self.bot_name(current_player).to_string();
        let opponent_name = self.bot_name(current_player.opponent()).to_string();

        // The engine reported legal moves, so a pass is a forfeit.
        let Some(mv) = mv else {
            if self.config.verbose {
                println!("{} returned no move", bot_name);
            }
            return Some(MatchResult::IllegalMove {
                violator: bot_name,
                winner: opponent_name,
            });
        };

        if self.config.verbose {
            println!("{} plays: {}", bot_name, mv);
        }

        if let Err(e) = self.state.locate_disc(mv) {
            if self.config.verbose {
                println!("ILLEGAL MOVE: {} - {}", bot_name, e);
            }
            return Some(MatchResult::IllegalMove {
                violator: bot_name,
                winner: opponent_name,
            });
        }

        self.first_bot.notify_move(mv);
        self.second_bot.notify_move(mv);

        if self.config.verbose {
            println!("{}", self.state.display_board());
        }

        None
    }
}
