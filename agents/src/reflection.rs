use crate::Agent;
use isolation_core::{GameState, Move};

/// Answers the opponent's placement with its reflection across the main
/// diagonal, (r, c) -> (c, r). Any other turn plays the first legal move.
#[derive(Debug, Clone, Default)]
pub struct ReflectionAgent;

impl ReflectionAgent {
    pub fn new() -> Self {
        ReflectionAgent
    }
}

impl<G: GameState> Agent<G> for ReflectionAgent {
    fn get_move(&mut self, state: &G, legal_moves: &[Move], _time_left: &dyn Fn() -> f64) -> Move {
        if state.ply_count() == 1 {
            let Some(theirs) = state.player_location(state.inactive_player()) else {
                return Move::NONE;
            };
            let mirrored = Move::new(theirs.col, theirs.row);
            return if legal_moves.contains(&mirrored) {
                mirrored
            } else {
                Move::NONE
            };
        }
        legal_moves.first().copied().unwrap_or(Move::NONE)
    }

    fn name(&self) -> &str {
        "Reflection"
    }
}
