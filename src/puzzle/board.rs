//! Board representation and move rules.
//!
//! ## Position
//!
//! Cell index 0..9 on the 3×3 grid, row-major. Adjacency comes from the
//! grid (row/column), never from index arithmetic alone, so index 2 and
//! index 3 are not neighbours.
//!
//! ## Board
//!
//! Nine cells holding tiles 1..=8 and exactly one empty cell. Boards are
//! `Copy` values: applying a move returns a new board and leaves the
//! original untouched.

use smallvec::SmallVec;

use crate::error::{BoardError, IllegalMove};

/// Grid width and height.
pub const SIDE: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = SIDE * SIDE;

/// Highest tile value.
pub const MAX_TILE: u8 = (CELL_COUNT - 1) as u8;

/// A cell: a tile value or `None` for the empty cell.
pub type Cell = Option<u8>;

/// Neighbour list; a cell has at most 4 neighbours.
pub type Neighbors = SmallVec<[Position; 4]>;

/// A cell index on the 3×3 grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position(u8);

impl Position {
    /// Create a position from a cell index. Returns `None` outside 0..9.
    #[must_use]
    pub const fn new(index: usize) -> Option<Self> {
        if index < CELL_COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Create a position from grid coordinates.
    #[must_use]
    pub const fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < SIDE && col < SIDE {
            Some(Self((row * SIDE + col) as u8))
        } else {
            None
        }
    }

    /// Raw cell index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.index() / SIDE
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.index() % SIDE
    }

    /// Iterate over all positions in index order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..CELL_COUNT as u8).map(Position)
    }

    /// Whether `other` shares an edge with this cell.
    #[must_use]
    pub fn is_adjacent(self, other: Position) -> bool {
        self.row().abs_diff(other.row()) + self.col().abs_diff(other.col()) == 1
    }

    /// Grid neighbours in up, down, left, right order.
    #[must_use]
    pub fn neighbors(self) -> Neighbors {
        let (row, col) = (self.row(), self.col());
        let mut out = Neighbors::new();

        if row > 0 {
            out.push(Position(self.0 - SIDE as u8));
        }
        if row < SIDE - 1 {
            out.push(Position(self.0 + SIDE as u8));
        }
        if col > 0 {
            out.push(Position(self.0 - 1));
        }
        if col < SIDE - 1 {
            out.push(Position(self.0 + 1));
        }

        out
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cell {}", self.0)
    }
}

/// Cells the empty cell at `empty` can swap with.
///
/// Between 2 (corners) and 4 (centre) positions, never `empty` itself.
#[must_use]
pub fn legal_moves(empty: Position) -> Neighbors {
    empty.neighbors()
}

const SOLVED_CELLS: [Cell; CELL_COUNT] = [
    Some(1),
    Some(2),
    Some(3),
    Some(4),
    Some(5),
    Some(6),
    Some(7),
    Some(8),
    None,
];

/// Sliding puzzle board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
    empty: Position,
}

impl Board {
    /// The solved board: tiles 1..=8 in order, empty cell last.
    #[must_use]
    pub const fn solved() -> Self {
        Self {
            cells: SOLVED_CELLS,
            empty: Position((CELL_COUNT - 1) as u8),
        }
    }

    /// Build a board from raw cells, checking every tile appears once.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Result<Self, BoardError> {
        let mut seen = [false; CELL_COUNT];
        let mut empty = None;
        let mut empty_count = 0;

        for (index, cell) in cells.iter().enumerate() {
            match *cell {
                None => {
                    empty_count += 1;
                    empty = Position::new(index);
                }
                Some(tile) if tile == 0 || tile > MAX_TILE => {
                    return Err(BoardError::TileOutOfRange(tile));
                }
                Some(tile) => {
                    if seen[tile as usize] {
                        return Err(BoardError::DuplicateTile(tile));
                    }
                    seen[tile as usize] = true;
                }
            }
        }

        match (empty_count, empty) {
            (1, Some(empty)) => Ok(Self { cells, empty }),
            _ => Err(BoardError::EmptyCount(empty_count)),
        }
    }

    /// All cells in index order.
    #[must_use]
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Contents of one cell.
    #[must_use]
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Position of the empty cell.
    #[must_use]
    pub fn empty(&self) -> Position {
        self.empty
    }

    /// Cells that can slide into the empty cell.
    #[must_use]
    pub fn legal_moves(&self) -> Neighbors {
        legal_moves(self.empty)
    }

    /// Whether sliding the tile at `target` is legal.
    #[must_use]
    pub fn can_move(&self, target: Position) -> bool {
        self.empty.is_adjacent(target)
    }

    /// Swap the empty cell with `target`.
    ///
    /// Returns a new board; `self` is unchanged either way.
    pub fn apply_move(&self, target: Position) -> Result<Board, IllegalMove> {
        if !self.can_move(target) {
            return Err(IllegalMove {
                target,
                empty: self.empty,
            });
        }

        let mut next = *self;
        next.cells.swap(self.empty.index(), target.index());
        next.empty = target;
        Ok(next)
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cells == SOLVED_CELLS
    }

    /// Number of tile pairs that appear in the wrong relative order.
    #[must_use]
    pub fn inversions(&self) -> usize {
        let tiles: SmallVec<[u8; CELL_COUNT]> = self.cells.iter().flatten().copied().collect();
        tiles
            .iter()
            .enumerate()
            .map(|(i, a)| tiles[i + 1..].iter().filter(|b| *b < a).count())
            .sum()
    }

    /// Whether the board can reach the solved board by legal moves.
    ///
    /// On an odd-width grid this holds exactly when the inversion count is
    /// even.
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        self.inversions() % 2 == 0
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::solved()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.chunks(SIDE).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, cell) in cells.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                match cell {
                    Some(tile) => write!(f, "{}", tile)?,
                    None => write!(f, ".")?,
                }
            }
        }
        Ok(())
    }
}

/// The canonical solved board.
#[must_use]
pub fn solved_board() -> Board {
    Board::solved()
}

/// Whether `board` equals the solved board.
#[must_use]
pub fn is_solved(board: &Board) -> bool {
    board.is_solved()
}

/// Slide the tile at `target` into the empty cell. See [`Board::apply_move`].
pub fn apply_move(board: &Board, target: Position) -> Result<Board, IllegalMove> {
    board.apply_move(target)
}
