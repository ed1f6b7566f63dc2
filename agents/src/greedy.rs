use crate::evaluation::Evaluator;
use crate::minimax::minimax;
use crate::search::SearchContext;
use crate::timer::TimeGovernor;
use crate::Agent;
use isolation_core::{GameState, Move};

/// Plays the move whose successor scores best, looking one ply ahead.
///
/// This is a depth-1 minimax without a time check, so ties go to the
/// smallest move.
pub struct GreedyAgent<E> {
    name: String,
    evaluator: E,
}

impl<E> GreedyAgent<E> {
    pub fn new(evaluator: E) -> Self {
        GreedyAgent {
            name: "Greedy".to_string(),
            evaluator,
        }
    }
}

impl<G, E> Agent<G> for GreedyAgent<E>
where
    G: GameState,
    E: Evaluator<G>,
{
    fn get_move(&mut self, state: &G, legal_moves: &[Move], _time_left: &dyn Fn() -> f64) -> Move {
        if legal_moves.is_empty() {
            return Move::NONE;
        }
        let mut ctx = SearchContext::new(
            TimeGovernor::unlimited(),
            &self.evaluator,
            state.active_player(),
        );
        match minimax(&mut ctx, state, 1, true) {
            Ok(result) if !result.best_move.is_none() => result.best_move,
            _ => legal_moves[0],
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
