//! A hand-built game tree for exercising the engines.
//!
//! Every node carries a score read by `NodeScore`. Inner nodes offer one move
//! per child, leaves offer a single `PASS` move back to themselves, and stuck
//! nodes offer nothing.

#![allow(dead_code)]

use isolation_agents::Evaluator;
use isolation_core::{GameState, Move, Player};
use std::rc::Rc;

pub const PASS: Move = Move::new(99, 99);

#[derive(Debug, Clone, PartialEq)]
struct Node {
    score: f64,
    moves: Vec<(Move, usize)>,
    stuck: bool,
}

#[derive(Debug, Clone)]
pub struct TreeBuilder {
    nodes: Vec<Node>,
}

impl TreeBuilder {
    pub const ROOT: usize = 0;

    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                score: 0.0,
                moves: Vec::new(),
                stuck: false,
            }],
        }
    }

    /// Adds a child reached by `mv`, returning its id.
    pub fn child_at(&mut self, parent: usize, mv: Move, score: f64) -> usize {
        let id = self.nodes.len();
        self.nodes.push(Node {
            score,
            moves: Vec::new(),
            stuck: false,
        });
        self.nodes[parent].moves.push((mv, id));
        id
    }

    /// Adds a child reached by `(0, i)` where `i` is the child's position.
    pub fn child(&mut self, parent: usize, score: f64) -> usize {
        let mv = Move::new(0, self.nodes[parent].moves.len() as i32);
        self.child_at(parent, mv, score)
    }

    /// Adds a child whose side to move has no moves.
    pub fn stuck_child(&mut self, parent: usize, score: f64) -> usize {
        let id = self.child(parent, score);
        self.nodes[id].stuck = true;
        id
    }

    pub fn set_stuck(&mut self, node: usize) {
        self.nodes[node].stuck = true;
    }

    /// Children scored by `scores`, in order.
    pub fn leaves(&mut self, parent: usize, scores: &[f64]) -> Vec<usize> {
        scores.iter().map(|&s| self.child(parent, s)).collect()
    }

    pub fn build(self) -> TreeState {
        self.build_at_ply(2)
    }

    /// Root state at `ply`; the first player is to move.
    pub fn build_at_ply(self, ply: u32) -> TreeState {
        TreeState {
            tree: Rc::new(self.nodes),
            node: Self::ROOT,
            ply,
            active: Player::First,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TreeState {
    tree: Rc<Vec<Node>>,
    node: usize,
    ply: u32,
    active: Player,
}

impl TreeState {
    pub fn node(&self) -> usize {
        self.node
    }

    pub fn score(&self) -> f64 {
        self.tree[self.node].score
    }
}

impl GameState for TreeState {
    fn legal_moves_for(&self, _player: Player) -> Vec<Move> {
        let node = &self.tree[self.node];
        if node.stuck {
            Vec::new()
        } else if node.moves.is_empty() {
            vec![PASS]
        } else {
            node.moves.iter().map(|&(mv, _)| mv).collect()
        }
    }

    fn forecast(&self, mv: Move) -> Self {
        let next = if mv == PASS {
            self.node
        } else {
            self.tree[self.node]
                .moves
                .iter()
                .find(|&&(m, _)| m == mv)
                .map(|&(_, id)| id)
                .unwrap_or_else(|| panic!("{mv} is not a move of node {}", self.node))
        };
        Self {
            tree: Rc::clone(&self.tree),
            node: next,
            ply: self.ply + 1,
            active: self.active.opponent(),
        }
    }

    fn active_player(&self) -> Player {
        self.active
    }

    fn player_location(&self, _player: Player) -> Option<Move> {
        None
    }

    fn ply_count(&self) -> u32 {
        self.ply
    }
}

/// Reads the node's stored score.
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeScore;

impl Evaluator<TreeState> for NodeScore {
    fn evaluate(&self, state: &TreeState, _player: Player) -> f64 {
        state.score()
    }
}
