use crate::Agent;
use isolation_core::{GameState, Move};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Plays a uniformly random legal move.
pub struct RandomAgent<R = StdRng> {
    name: String,
    rng: R,
}

impl RandomAgent<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Default for RandomAgent<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomAgent<R> {
    pub fn with_rng(rng: R) -> Self {
        RandomAgent {
            name: "Random".to_string(),
            rng,
        }
    }
}

impl<G: GameState, R: Rng> Agent<G> for RandomAgent<R> {
    fn get_move(&mut self, _state: &G, legal_moves: &[Move], _time_left: &dyn Fn() -> f64) -> Move {
        legal_moves
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(Move::NONE)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
