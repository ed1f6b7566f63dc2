pub mod alphabeta;
pub mod config;
pub mod evaluation;
pub mod greedy;
pub mod minimax;
pub mod opening;
pub mod random;
pub mod reflection;
pub mod search;
pub mod search_agent;
pub mod timer;

use isolation_core::{GameState, Move};

/// Core trait for isolation agents
pub trait Agent<G: GameState> {
    /// Choose a move for the side to move in `state`.
    ///
    /// `legal_moves` are the moves available to the side to move and
    /// `time_left` reports the milliseconds left in this turn. Returns
    /// `Move::NONE` when there is nothing to play.
    fn get_move(&mut self, state: &G, legal_moves: &[Move], time_left: &dyn Fn() -> f64) -> Move;

    /// Get the agent's name
    fn name(&self) -> &str;
}

pub use alphabeta::alphabeta;
pub use config::{ConfigError, Method, SearchConfig};
pub use evaluation::*;
pub use greedy::GreedyAgent;
pub use minimax::minimax;
pub use opening::OpeningBook;
pub use random::RandomAgent;
pub use reflection::ReflectionAgent;
pub use search::*;
pub use search_agent::{Decision, MoveSource, SearchAgent};
pub use timer::{countdown, TimeGovernor};
