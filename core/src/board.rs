use crate::game_state::GameState;
use crate::types::{Move, Player};
use std::fmt;

pub const DEFAULT_WIDTH: u8 = 7;
pub const DEFAULT_HEIGHT: u8 = 7;

/// Knight jumps, in the order moves are generated.
const DIRECTIONS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    InvalidDimensions { width: u8, height: u8 },
    IllegalMove(Move),
    InvalidMove(String),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidDimensions { width, height } => {
                write!(f, "Invalid board size {width}x{height} (at most 64 cells)")
            }
            BoardError::IllegalMove(mv) => write!(f, "Illegal move: {mv}"),
            BoardError::InvalidMove(s) => write!(f, "Invalid move notation: {s}"),
        }
    }
}

impl std::error::Error for BoardError {}

/// An isolation board.
///
/// Blocked cells are kept in a 64-bit mask, so boards hold at most 64 cells.
/// Each player's first move may land on any blank cell; afterwards players
/// jump like knights. Every cell a player has occupied stays blocked.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    width: u8,
    height: u8,
    blocked: u64,
    locations: [Option<Move>; 2],
    active: Player,
    ply: u32,
}

impl Board {
    /// Creates an empty 7x7 board with the first player to move.
    pub fn new() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            blocked: 0,
            locations: [None, None],
            active: Player::First,
            ply: 0,
        }
    }

    /// Creates an empty board of the given size.
    pub fn with_size(width: u8, height: u8) -> Result<Self, BoardError> {
        let cells = u32::from(width) * u32::from(height);
        if cells == 0 || cells > 64 {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            ..Self::new()
        })
    }

    /// Replays a move history onto an empty board, checking every move.
    pub fn from_moves(width: u8, height: u8, moves: &[Move]) -> Result<Self, BoardError> {
        let mut board = Self::with_size(width, height)?;
        for &mv in moves {
            board.apply_move(mv)?;
        }
        Ok(board)
    }

    /// Parses a whitespace or ';' separated move list such as "2,3 0,0 4,4".
    pub fn parse_moves(s: &str) -> Result<Vec<Move>, BoardError> {
        s.split(|c: char| c.is_whitespace() || c == ';')
            .filter(|tok| !tok.is_empty())
            .map(|tok| tok.parse::<Move>().map_err(BoardError::InvalidMove))
            .collect()
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Bit index of a cell, or `None` when off the board.
    fn index(&self, mv: Move) -> Option<u32> {
        let in_rows = mv.row >= 0 && mv.row < i32::from(self.height);
        let in_cols = mv.col >= 0 && mv.col < i32::from(self.width);
        if in_rows && in_cols {
            Some((mv.row * i32::from(self.width) + mv.col) as u32)
        } else {
            None
        }
    }

    /// Returns true if the cell is on the board and has never been occupied.
    pub fn is_blank(&self, mv: Move) -> bool {
        self.index(mv)
            .map(|i| self.blocked & (1u64 << i) == 0)
            .unwrap_or(false)
    }

    /// All blank cells in row-major order.
    pub fn blank_cells(&self) -> Vec<Move> {
        let mut cells = Vec::new();
        for row in 0..i32::from(self.height) {
            for col in 0..i32::from(self.width) {
                let mv = Move::new(row, col);
                if self.is_blank(mv) {
                    cells.push(mv);
                }
            }
        }
        cells
    }

    /// Plays a move in place. This is for the game loop; search uses `forecast`.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), BoardError> {
        if !self.legal_moves().contains(&mv) {
            return Err(BoardError::IllegalMove(mv));
        }
        self.place(mv);
        Ok(())
    }

    fn place(&mut self, mv: Move) {
        if let Some(i) = self.index(mv) {
            self.blocked |= 1u64 << i;
        }
        self.locations[self.active.index()] = Some(mv);
        self.active = self.active.opponent();
        self.ply += 1;
    }

    /// The winner, once the side to move is stuck.
    pub fn winner(&self) -> Option<Player> {
        if self.legal_moves().is_empty() {
            Some(self.inactive_player())
        } else {
            None
        }
    }

    /// The loser, once the side to move is stuck.
    pub fn loser(&self) -> Option<Player> {
        self.winner().map(Player::opponent)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState for Board {
    fn legal_moves_for(&self, player: Player) -> Vec<Move> {
        let Some(from) = self.locations[player.index()] else {
            return self.blank_cells();
        };

        DIRECTIONS
            .iter()
            .map(|&(dr, dc)| from.offset(dr, dc))
            .filter(|&to| self.is_blank(to))
            .collect()
    }

    fn forecast(&self, mv: Move) -> Self {
        let mut next = self.clone();
        next.place(mv);
        next
    }

    fn active_player(&self) -> Player {
        self.active
    }

    fn player_location(&self, player: Player) -> Option<Move> {
        self.locations[player.index()]
    }

    fn ply_count(&self) -> u32 {
        self.ply
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.width {
            write!(f, " {col}")?;
        }
        writeln!(f)?;

        for row in 0..i32::from(self.height) {
            write!(f, "{row:>2} ")?;
            for col in 0..i32::from(self.width) {
                let cell = Move::new(row, col);
                let symbol = if self.locations[0] == Some(cell) {
                    '1'
                } else if self.locations[1] == Some(cell) {
                    '2'
                } else if self.is_blank(cell) {
                    '.'
                } else {
                    '#'
                };
                write!(f, " {symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
