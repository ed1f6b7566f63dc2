use isolation_agents::{countdown, Agent};
use isolation_core::{Board, GameState, Move, Player};
use log::{info, warn};
use std::time::Duration;

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// The loser had no legal move on its turn.
    NoMoves,
    /// The loser returned after its time ran out.
    Timeout,
    /// The loser returned a move that is not legal.
    IllegalMove(Move),
}

#[derive(Debug, Clone)]
pub struct GameRecord {
    pub winner: Player,
    pub reason: EndReason,
    pub history: Vec<Move>,
    pub board: Board,
}

/// Plays one game to the end. `agents[0]` moves for the first player.
///
/// Each turn gets `time_limit`; answering late or with an illegal move
/// forfeits. `on_move` sees the board after every applied move.
pub fn play_game(
    mut board: Board,
    agents: &mut [Box<dyn Agent<Board>>; 2],
    time_limit: Duration,
    mut on_move: impl FnMut(&Board, Player, Move),
) -> GameRecord {
    let mut history = Vec::new();

    loop {
        let player = board.active_player();
        let legal = board.legal_moves();
        if legal.is_empty() {
            return finish(board, history, player.opponent(), EndReason::NoMoves);
        }

        let agent = &mut agents[player.index()];
        let clock = countdown(time_limit);
        let mv = agent.get_move(&board, &legal, &clock);
        let left = clock();

        if left < 0.0 {
            warn!("{} ({}) ran out of time by {:.1} ms", player, agent.name(), -left);
            return finish(board, history, player.opponent(), EndReason::Timeout);
        }
        if board.apply_move(mv).is_err() {
            warn!("{} ({}) played illegal move {}", player, agent.name(), mv);
            return finish(board, history, player.opponent(), EndReason::IllegalMove(mv));
        }

        info!("{} plays {} ({:.1} ms left)", player, mv, left);
        history.push(mv);
        on_move(&board, player, mv);
    }
}

fn finish(board: Board, history: Vec<Move>, winner: Player, reason: EndReason) -> GameRecord {
    info!("{} wins after {} moves: {:?}", winner, history.len(), reason);
    GameRecord {
        winner,
        reason,
        history,
        board,
    }
}
