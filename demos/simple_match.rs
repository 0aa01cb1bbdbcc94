use reversi_arena::*;

fn main() {
    println!("Simple Reversi Match Demo\n");

    let bot1 = Box::new(RandomBot::new("Random Alice".to_string()));
    let bot2 = Box::new(GreedyBot::new("Greedy Bob".to_string()));

    let config = MatchConfig {
        verbose: true,
        ..MatchConfig::default()
    };

    let mut match_game = Match::new(bot1, bot2, config);
    let result = match_game.play();

    println!("\n{}", "=".repeat(60));
    match &result {
        MatchResult::FirstWins { winner_name, moves } => {
            println!("{} won as First in {} moves!", winner_name, moves);
        }
        MatchResult::SecondWins { winner_name, moves } => {
            println!("{} won as Second in {} moves!", winner_name, moves);
        }
        MatchResult::Draw { moves } => {
            println!("Draw after {} moves", moves);
        }
        MatchResult::IllegalMove { violator, winner } => {
            println!("{} wins! {} made an illegal move", winner, violator);
        }
    }
    println!("{}", "=".repeat(60));
}
