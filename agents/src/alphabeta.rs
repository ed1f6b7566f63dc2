use crate::evaluation::Evaluator;
use crate::search::{Cutoff, SearchContext, SearchOutcome, SearchResult};
use isolation_core::{GameState, Move};

/// Alpha-beta scores the node itself once depth reaches 0.
pub const CUTOFF: Cutoff = Cutoff::Node;

/// Minimax with alpha-beta pruning from the point of view of `ctx.player()`.
///
/// Children are visited in generation order and a score only replaces the
/// running best when it is strictly better, so the first move to reach the
/// best score is kept. A stuck node is scored before the depth check.
///
/// When no child beats the incoming bound the result carries the bound and
/// the first legal move.
pub fn alphabeta<G, E>(
    ctx: &mut SearchContext<'_, E>,
    state: &G,
    depth: u32,
    alpha: f64,
    beta: f64,
    maximizing: bool,
) -> SearchOutcome
where
    G: GameState,
    E: Evaluator<G> + ?Sized,
{
    ctx.enter()?;

    let moves = state.legal_moves();
    let Some(&first) = moves.first() else {
        return Ok(SearchResult::no_moves(maximizing));
    };

    if CUTOFF.reached(depth) {
        return Ok(SearchResult::new(ctx.evaluate(state), Move::NONE));
    }

    if maximizing {
        let mut best = SearchResult::new(alpha, first);
        for mv in moves {
            let child = state.forecast(mv);
            let score = alphabeta(ctx, &child, depth - 1, best.score, beta, false)?.score;
            if score > best.score {
                best = SearchResult::new(score, mv);
            }
            if beta <= best.score {
                break;
            }
        }
        Ok(best)
    } else {
        let mut best = SearchResult::new(beta, first);
        for mv in moves {
            let child = state.forecast(mv);
            let score = alphabeta(ctx, &child, depth - 1, alpha, best.score, true)?.score;
            if score < best.score {
                best = SearchResult::new(score, mv);
            }
            if best.score <= alpha {
                break;
            }
        }
        Ok(best)
    }
}
