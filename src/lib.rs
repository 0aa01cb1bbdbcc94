pub mod arena;
pub mod board;
pub mod bot;
pub mod capture;
pub mod disc;
pub mod game;
pub mod player;
pub mod web;

pub use arena::*;
pub use board::*;
pub use bot::*;
pub use capture::*;
pub use disc::*;
pub use game::*;
pub use player::*;
