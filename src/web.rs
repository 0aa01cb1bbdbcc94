use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::board::{Board, Position};
use crate::bot::{Bot, GreedyBot, LookaheadBot, RandomBot};
use crate::disc::{Disc, DiscKind, Player};
use crate::game::{GameState, Move};

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BotType {
    Greedy,
    Random,
    MinMax,
}

#[derive(Clone)]
pub struct AppState {
    game: Arc<Mutex<WebGame>>,
}

struct WebGame {
    state: GameState,
    player_side: Player,
    bot_type: BotType,
    game_over: bool,
}

#[derive(Serialize, Deserialize)]
pub struct NewGameRequest {
    pub player_side: String,
    pub bot_type: String,
}

#[derive(Serialize, Deserialize)]
pub struct MoveRequest {
    pub row: usize,
    pub col: usize,
    #[serde(default)]
    pub kind: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct GameResponse {
    pub board: Vec<Vec<String>>,
    pub current_player: String,
    pub legal_moves: Vec<Position>,
    pub explosive_left: u32,
    pub fortified_left: u32,
    pub score: (usize, usize),
    pub game_over: bool,
    pub winner: Option<String>,
    pub message: String,
}

impl AppState {
    pub fn new() -> Self {
        let game = WebGame {
            state: GameState::default(),
            player_side: Player::First,
            bot_type: BotType::Greedy,
            game_over: false,
        };
        AppState {
            game: Arc::new(Mutex::new(game)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, WebGame> {
        // A panicked handler leaves the engine intact; keep serving it.
        self.game.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl WebGame {
    /// Lets the bot play while it is on move. Returns what it did.
    fn bot_turn(&mut self) -> String {
        if self.game_over || self.state.current_player() == self.player_side {
            return String::new();
        }
        let mut bot = get_bot_instance(self.bot_type);
        let message = match bot.get_move(&mut self.state) {
            Some(mv) => match self.state.locate_disc(mv) {
                Ok(_) => format!("Bot played: {}", mv),
                Err(e) => format!("Bot failed to move: {}", e),
            },
            None => "Bot has no move".to_string(),
        };
        self.game_over = self.state.is_game_over();
        message
    }

    fn snapshot(&self, message: String) -> GameResponse {
        let size = self.state.board_size();
        let mut board = vec![vec![String::new(); size]; size];
        for pos in Board::positions() {
            board[pos.row][pos.col] = disc_to_string(self.state.cell_at(pos));
        }

        let human = self.state.player(self.player_side);
        let legal_moves = if !self.game_over && self.state.current_player() == self.player_side {
            self.state.legal_moves()
        } else {
            Vec::new()
        };

        GameResponse {
            board,
            current_player: player_to_string(self.state.current_player()),
            legal_moves,
            explosive_left: human.remaining_explosive(),
            fortified_left: human.remaining_fortified(),
            score: self.state.score(),
            game_over: self.game_over,
            winner: self.state.winner().map(player_to_string),
            message,
        }
    }
}

fn disc_to_string(disc: Option<Disc>) -> String {
    disc.map_or(".".to_string(), |d| d.glyph().to_string())
}

fn player_to_string(player: Player) -> String {
    match player {
        Player::First => "First".to_string(),
        Player::Second => "Second".to_string(),
    }
}

fn string_to_player(s: &str) -> Player {
    match s.to_lowercase().as_str() {
        "second" => Player::Second,
        _ => Player::First,
    }
}

fn create_bot(bot_type: &str) -> BotType {
    match bot_type.to_lowercase().as_str() {
        "random" => BotType::Random,
        "minmax" => BotType::MinMax,
        _ => BotType::Greedy,
    }
}

fn get_bot_instance(bot_type: BotType) -> Box<dyn Bot> {
    match bot_type {
        BotType::Greedy => Box::new(GreedyBot::new("Greedy Bot".to_string())),
        BotType::Random => Box::new(RandomBot::new("Random Bot".to_string())),
        BotType::MinMax => Box::new(LookaheadBot::new("MinMax Bot".to_string())),
    }
}

fn bad_request(error: String) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({ "error": error })),
    )
        .into_response()
}

async fn new_game(State(app_state): State<AppState>, Json(req): Json<NewGameRequest>) -> Response {
    let mut game = app_state.lock();
    game.state.reset();
    game.player_side = string_to_player(&req.player_side);
    game.bot_type = create_bot(&req.bot_type);
    game.game_over = false;

    let message = match game.bot_turn() {
        m if m.is_empty() => "Your turn!".to_string(),
        m => m,
    };
    Json(game.snapshot(message)).into_response()
}

async fn make_move(State(app_state): State<AppState>, Json(req): Json<MoveRequest>) -> Response {
    let mut game = app_state.lock();

    if game.game_over {
        return bad_request("Game is over".to_string());
    }
    if game.state.current_player() != game.player_side {
        return bad_request("Not your turn".to_string());
    }

    let kind = match req.kind.as_deref() {
        None => DiscKind::Standard,
        Some(name) => match DiscKind::from_name(name) {
            Some(kind) => kind,
            None => return bad_request(format!("Unknown disc kind: {}", name)),
        },
    };
    let mv = Move::new(
        Position::new(req.row, req.col),
        Disc::new(kind, game.player_side),
    );
    if let Err(e) = game.state.locate_disc(mv) {
        return bad_request(format!("Invalid move: {}", e));
    }

    game.game_over = game.state.is_game_over();
    let message = game.bot_turn();
    Json(game.snapshot(message)).into_response()
}

/// Takes back the bot's reply and the player's last move.
async fn undo(State(app_state): State<AppState>) -> Response {
    let mut game = app_state.lock();
    let mut undone = 0;
    while let Some(mv) = game.state.undo_last_move() {
        undone += 1;
        if mv.disc.owner() == game.player_side {
            break;
        }
    }
    game.game_over = false;
    let message = game.bot_turn();
    let message = if message.is_empty() {
        format!("Undid {} move(s)", undone)
    } else {
        message
    };
    Json(game.snapshot(message)).into_response()
}

async fn get_game_state(State(app_state): State<AppState>) -> Json<GameResponse> {
    let game = app_state.lock();
    Json(game.snapshot(String::new()))
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/new-game", post(new_game))
        .route("/api/move", post(make_move))
        .route("/api/undo", post(undo))
        .route("/api/game-state", get(get_game_state))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

pub async fn run_server(addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let app = router(AppState::new());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "web server listening");
    println!("Web server running at http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
