use reversi_arena::*;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: reversi-arena [web] | [FIRST_BOT SECOND_BOT [GAMES]]
bots: random, greedy, minmax";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.first().map(String::as_str) == Some("web") {
        let addr = std::env::var("REVERSI_ADDR").unwrap_or_else(|_| web::DEFAULT_ADDR.to_string());
        return web::run_server(&addr).await;
    }

    let first = args.first().map_or("greedy", String::as_str);
    let second = args.get(1).map_or("minmax", String::as_str);
    let games: usize = match args.get(2) {
        Some(n) => n.parse()?,
        None => 1,
    };

    let (Some(bot1), Some(bot2)) = (bot_from_name(first, None), bot_from_name(second, None)) else {
        eprintln!("{}", USAGE);
        std::process::exit(2);
    };

    println!("Reversi Arena - Bot Match");
    println!("========================================\n");

    let config = MatchConfig {
        verbose: games == 1,
        ..MatchConfig::default()
    };
    let mut match_game = Match::new(bot1, bot2, config);

    for game in 1..=games {
        let result = match_game.play();
        let (first_discs, second_discs) = match_game.state().score();
        print!("Game {}: ", game);
        match result {
            MatchResult::FirstWins { winner_name, moves } => {
                println!("{} wins as First in {} moves", winner_name, moves);
            }
            MatchResult::SecondWins { winner_name, moves } => {
                println!("{} wins as Second in {} moves", winner_name, moves);
            }
            MatchResult::Draw { moves } => {
                println!("Draw after {} moves", moves);
            }
            MatchResult::IllegalMove { violator, winner } => {
                println!("{} wins by illegal move (opponent: {})", winner, violator);
            }
        }
        println!("  discs: First {} - {} Second", first_discs, second_discs);
    }

    let (first_wins, second_wins) = match_game.tally();
    println!("\n========================================");
    println!(
        "Tally: {} {} - {} {}",
        match_game.bot_name(Player::First),
        first_wins,
        second_wins,
        match_game.bot_name(Player::Second)
    );
    Ok(())
}
