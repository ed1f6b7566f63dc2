pub mod board;
pub mod game_state;
pub mod perft;
pub mod types;

pub use board::*;
pub use game_state::GameState;
pub use perft::{perft, perft_divide};
pub use types::*;
