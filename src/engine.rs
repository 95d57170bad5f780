//! Core board model and search-state plumbing for the 8-puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Board`: the 3x3 tile grid, with blank lookup, successor generation,
//!   and a canonical hash used as the visited-set key.
//! - `Move`: the four blank motions, labeled from the blank's point of view.
//! - `State`, `StateId`, `StateArena`: search nodes carrying cost bookkeeping
//!   and parent links, stored in an append-only arena.
//! - `PuzzleError`: board-invariant and board-parsing failures.
use std::fmt;
use std::ops::Index;
use thiserror::Error;

/// Errors produced by board construction and board parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// A board broke the exactly-one-blank contract.
    #[error("board has {blanks} blank cells, expected exactly one")]
    InvariantViolation { blanks: usize },

    /// Text input had the wrong number of rows.
    #[error("expected {expected} rows, found {found}")]
    WrongRowCount { expected: usize, found: usize },

    /// A text row had the wrong number of cells.
    #[error("row {row} has {found} cells, expected {expected}")]
    WrongRowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A character outside `0..=8` appeared in a board row.
    #[error("unrecognized character '{ch}' at row {row}, column {col}")]
    UnrecognizedCharacter { ch: char, row: usize, col: usize },

    /// A tile value appeared more than once in the input.
    #[error("tile {value} appears more than once")]
    DuplicateTile { value: u8 },
}

/// Defines the side length of the puzzle board.
/// The board is always square; a `BOARD_SIZE` of 3 means the classic 3x3
/// 8-puzzle with tiles 1-8 and one blank.
pub const BOARD_SIZE: usize = 3;

/// A single blank motion, named from the blank's point of view.
///
/// `Up` means the blank swaps with the tile directly above it, and so on.
/// Emission order everywhere in the crate is `Up`, `Down`, `Left`, `Right`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Returns the motion that undoes this one.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::engine::Move;
    /// assert_eq!(Move::Up.opposite(), Move::Down);
    /// assert_eq!(Move::Left.opposite(), Move::Right);
    /// ```
    pub fn opposite(&self) -> Move {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Move::Up => "up",
            Move::Down => "down",
            Move::Left => "left",
            Move::Right => "right",
        };
        write!(f, "{}", label)
    }
}

/// Represents the puzzle board as a 2D grid of tile values.
///
/// Cells hold the values `0..=8`, each exactly once, where `0` denotes the
/// blank. Boards are plain values: equality is element-wise, copying is
/// cheap, and nothing mutates a board after construction. Successors are
/// always fresh copies produced by [`Board::possible_moves`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[u8; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a board from a predefined grid configuration.
    ///
    /// This is the only constructor; text input goes through
    /// `utils::board_from_str_array`, which validates before calling this.
    ///
    /// # Arguments
    /// * `cells`: A 2D array of tile values; `0` is the blank.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::engine::Board;
    /// let board = Board::from_grid([[1, 2, 3], [4, 5, 6], [7, 8, 0]]);
    /// assert_eq!(board.get_tile(0, 0), 1);
    /// ```
    pub fn from_grid(cells: [[u8; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Board { cells }
    }

    /// Returns the tile value at the specified row (`r`) and column (`c`).
    ///
    /// # Panics
    /// Panics if `r` or `c` are outside the board dimensions
    /// (`0 <= r < BOARD_SIZE`, `0 <= c < BOARD_SIZE`).
    pub fn get_tile(&self, r: usize, c: usize) -> u8 {
        self.cells[r][c]
    }

    /// Locates the blank cell.
    ///
    /// Scans the grid for the single `0` cell. A well-formed board always has
    /// exactly one; anything else is a caller contract violation reported as
    /// [`PuzzleError::InvariantViolation`] rather than silently picking a
    /// cell.
    ///
    /// # Returns
    /// The `(row, col)` of the blank.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::engine::Board;
    /// let board = Board::from_grid([[1, 2, 3], [4, 5, 6], [7, 8, 0]]);
    /// assert_eq!(board.blank_position().unwrap(), (2, 2));
    /// ```
    pub fn blank_position(&self) -> Result<(usize, usize), PuzzleError> {
        let mut found = None;
        let mut blanks = 0;
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                if self.cells[r][c] == 0 {
                    found = Some((r, c));
                    blanks += 1;
                }
            }
        }
        match found {
            Some(pos) if blanks == 1 => Ok(pos),
            _ => Err(PuzzleError::InvariantViolation { blanks }),
        }
    }

    /// Derives the canonical 64-bit key for this board.
    ///
    /// The key is a base-31 positional encoding of the flattened grid. Nine
    /// cells with values below 31 keep the encoding injective (31^9 < 2^64),
    /// so distinct boards never collide, and the key depends only on cell
    /// contents: it is identical however the board was reached and stable
    /// across process runs.
    pub fn canonical_hash(&self) -> u64 {
        let mut key: u64 = 0;
        for row in &self.cells {
            for &cell in row {
                key = key * 31 + u64::from(cell);
            }
        }
        key
    }

    /// Generates every legal successor of this board, in fixed order.
    ///
    /// For the blank at `(i, j)` the successors are emitted as `Up` (if
    /// `i > 0`), `Down` (if `i < 2`), `Left` (if `j > 0`), `Right` (if
    /// `j < 2`). Each successor is a fresh copy with the blank swapped into
    /// the neighboring cell; the receiver is never modified. The emission
    /// order is a contract: depth-first search reverses it before pushing so
    /// that traversal pops in this original order.
    ///
    /// # Returns
    /// A `Vec` of `(Move, Board)` pairs, between 2 and 4 entries.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::engine::{Board, Move};
    /// let board = Board::from_grid([[1, 2, 3], [4, 0, 5], [6, 7, 8]]);
    /// let moves = board.possible_moves().unwrap();
    /// let labels: Vec<Move> = moves.iter().map(|(m, _)| *m).collect();
    /// assert_eq!(labels, vec![Move::Up, Move::Down, Move::Left, Move::Right]);
    /// ```
    pub fn possible_moves(&self) -> Result<Vec<(Move, Board)>, PuzzleError> {
        let (r, c) = self.blank_position()?;
        let mut moves = Vec::new();

        if r > 0 {
            moves.push((Move::Up, self.swapped((r, c), (r - 1, c))));
        }
        if r < BOARD_SIZE - 1 {
            moves.push((Move::Down, self.swapped((r, c), (r + 1, c))));
        }
        if c > 0 {
            moves.push((Move::Left, self.swapped((r, c), (r, c - 1))));
        }
        if c < BOARD_SIZE - 1 {
            moves.push((Move::Right, self.swapped((r, c), (r, c + 1))));
        }

        Ok(moves)
    }

    /// Returns a copy of this board with the cells at `a` and `b` exchanged.
    fn swapped(&self, a: (usize, usize), b: (usize, usize)) -> Board {
        let mut next = *self;
        next.cells[a.0][a.1] = self.cells[b.0][b.1];
        next.cells[b.0][b.1] = self.cells[a.0][a.1];
        next
    }
}

impl fmt::Display for Board {
    /// Formats the board as three space-separated rows, blank shown as `0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell)?;
            }
            if r < BOARD_SIZE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Identifies a `State` inside its owning [`StateArena`].
///
/// Ids are plain indices into the arena's append-only pool, so they stay
/// valid for the whole search. They carry no ordering: two states with equal
/// priority keys are interchangeable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StateId(usize);

/// A search node: a board plus the bookkeeping the strategies need.
///
/// `f` is always derived as `g + h` at construction time; nothing mutates a
/// state after it enters the arena. The root carries `parent: None` and
/// `mov: None`; every other state records the move that produced it, which is
/// all path reconstruction needs.
#[derive(Clone, Debug)]
pub struct State {
    /// The tile arrangement this node represents.
    pub board: Board,
    /// Arena index of the predecessor, `None` for the root.
    pub parent: Option<StateId>,
    /// The blank motion that produced this board from its parent.
    pub mov: Option<Move>,
    /// Cost from the start, in moves.
    pub g: u32,
    /// Heuristic estimate to the goal; `0` for uninformed strategies.
    pub h: u32,
    /// Total estimated cost, `g + h`.
    pub f: u32,
}

/// Append-only storage for the states of a single search.
///
/// Many children may share one parent, so parents are addressed by
/// [`StateId`] into this pool instead of being owned by their children. The
/// pool is never compacted while a search runs; the whole arena is dropped
/// when the search call returns.
#[derive(Debug, Default)]
pub struct StateArena {
    states: Vec<State>,
}

impl StateArena {
    /// Creates an empty arena.
    pub fn new() -> Self {
        StateArena { states: Vec::new() }
    }

    /// Appends a new state and returns its id.
    ///
    /// # Arguments
    /// * `board`: the tile arrangement of the new state.
    /// * `parent`: id of the predecessor state, `None` for the root.
    /// * `mov`: the move that produced this state, `None` for the root.
    /// * `g`: cost from the start.
    /// * `h`: heuristic estimate to the goal.
    ///
    /// `f` is derived here as `g + h`; callers never supply it.
    pub fn push(
        &mut self,
        board: Board,
        parent: Option<StateId>,
        mov: Option<Move>,
        g: u32,
        h: u32,
    ) -> StateId {
        let id = StateId(self.states.len());
        self.states.push(State {
            board,
            parent,
            mov,
            g,
            h,
            f: g + h,
        });
        id
    }

    /// Returns the number of states created so far.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns `true` if no state has been created yet.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl Index<StateId> for StateArena {
    type Output = State;

    fn index(&self, id: StateId) -> &State {
        &self.states[id.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic_goal() -> Board {
        Board::from_grid([[1, 2, 3], [4, 5, 6], [7, 8, 0]])
    }

    fn center_blank() -> Board {
        Board::from_grid([[1, 2, 3], [4, 0, 5], [6, 7, 8]])
    }

    #[test]
    fn test_get_tile() {
        let board = classic_goal();
        assert_eq!(board.get_tile(0, 0), 1);
        assert_eq!(board.get_tile(1, 2), 6);
        assert_eq!(board.get_tile(2, 2), 0);
    }

    #[test]
    fn test_blank_position_corner_and_center() {
        assert_eq!(classic_goal().blank_position().unwrap(), (2, 2));
        assert_eq!(center_blank().blank_position().unwrap(), (1, 1));
    }

    #[test]
    fn test_blank_position_missing_blank() {
        let board = Board::from_grid([[1, 2, 3], [4, 5, 6], [7, 8, 1]]);
        assert_eq!(
            board.blank_position(),
            Err(PuzzleError::InvariantViolation { blanks: 0 })
        );
    }

    #[test]
    fn test_blank_position_duplicated_blank() {
        let board = Board::from_grid([[0, 2, 3], [4, 5, 6], [7, 8, 0]]);
        assert_eq!(
            board.blank_position(),
            Err(PuzzleError::InvariantViolation { blanks: 2 })
        );
    }

    #[test]
    fn test_possible_moves_center_emits_all_four_in_order() {
        let moves = center_blank().possible_moves().unwrap();
        let labels: Vec<Move> = moves.iter().map(|(m, _)| *m).collect();
        assert_eq!(
            labels,
            vec![Move::Up, Move::Down, Move::Left, Move::Right],
            "emission order is a traversal contract"
        );
    }

    #[test]
    fn test_possible_moves_corners() {
        let top_left = Board::from_grid([[0, 1, 2], [3, 4, 5], [6, 7, 8]]);
        let labels: Vec<Move> = top_left
            .possible_moves()
            .unwrap()
            .iter()
            .map(|(m, _)| *m)
            .collect();
        assert_eq!(labels, vec![Move::Down, Move::Right]);

        let bottom_right = classic_goal();
        let labels: Vec<Move> = bottom_right
            .possible_moves()
            .unwrap()
            .iter()
            .map(|(m, _)| *m)
            .collect();
        assert_eq!(labels, vec![Move::Up, Move::Left]);
    }

    #[test]
    fn test_possible_moves_edge() {
        let top_edge = Board::from_grid([[1, 0, 2], [3, 4, 5], [6, 7, 8]]);
        let labels: Vec<Move> = top_edge
            .possible_moves()
            .unwrap()
            .iter()
            .map(|(m, _)| *m)
            .collect();
        assert_eq!(labels, vec![Move::Down, Move::Left, Move::Right]);
    }

    #[test]
    fn test_possible_moves_swaps_blank_with_neighbor() {
        let moves = center_blank().possible_moves().unwrap();
        let (mov, up_board) = moves[0];
        assert_eq!(mov, Move::Up);
        // Blank swapped with the 2 above it; everything else untouched.
        assert_eq!(
            up_board,
            Board::from_grid([[1, 0, 3], [4, 2, 5], [6, 7, 8]])
        );
    }

    #[test]
    fn test_possible_moves_does_not_touch_receiver() {
        let board = center_blank();
        let _ = board.possible_moves().unwrap();
        assert_eq!(board, center_blank());
    }

    #[test]
    fn test_possible_moves_propagates_invariant_violation() {
        let board = Board::from_grid([[1, 2, 3], [4, 5, 6], [7, 8, 1]]);
        assert!(board.possible_moves().is_err());
    }

    #[test]
    fn test_move_reversibility() {
        for board in [classic_goal(), center_blank()] {
            for (mov, successor) in board.possible_moves().unwrap() {
                let back = successor.possible_moves().unwrap();
                assert!(
                    back.contains(&(mov.opposite(), board)),
                    "applying {} then {} must restore the board",
                    mov,
                    mov.opposite()
                );
            }
        }
    }

    #[test]
    fn test_move_opposite_is_involution() {
        for mov in [Move::Up, Move::Down, Move::Left, Move::Right] {
            assert_eq!(mov.opposite().opposite(), mov);
        }
    }

    #[test]
    fn test_move_display_labels() {
        assert_eq!(Move::Up.to_string(), "up");
        assert_eq!(Move::Down.to_string(), "down");
        assert_eq!(Move::Left.to_string(), "left");
        assert_eq!(Move::Right.to_string(), "right");
    }

    #[test]
    fn test_canonical_hash_is_content_only_and_stable() {
        let a = classic_goal();
        let b = Board::from_grid([[1, 2, 3], [4, 5, 6], [7, 8, 0]]);
        assert_eq!(a.canonical_hash(), b.canonical_hash());
        assert_eq!(a.canonical_hash(), a.canonical_hash());
    }

    #[test]
    fn test_canonical_hash_distinguishes_successors() {
        let board = center_blank();
        let mut keys = vec![board.canonical_hash()];
        for (_, successor) in board.possible_moves().unwrap() {
            keys.push(successor.canonical_hash());
        }
        let before = keys.len();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), before, "distinct boards must not collide");
    }

    #[test]
    fn test_display_formatting() {
        let board = Board::from_grid([[3, 2, 1], [4, 0, 8], [7, 5, 6]]);
        assert_eq!(board.to_string(), "3 2 1\n4 0 8\n7 5 6");
    }

    #[test]
    fn test_arena_push_derives_f_and_links_parent() {
        let mut arena = StateArena::new();
        assert!(arena.is_empty());

        let root = arena.push(classic_goal(), None, None, 0, 7);
        let child = arena.push(center_blank(), Some(root), Some(Move::Up), 1, 6);

        assert_eq!(arena.len(), 2);
        assert_eq!(arena[root].f, 7);
        assert!(arena[root].parent.is_none());
        assert!(arena[root].mov.is_none());
        assert_eq!(arena[child].f, 7);
        assert_eq!(arena[child].g, 1);
        assert_eq!(arena[child].parent, Some(root));
        assert_eq!(arena[child].mov, Some(Move::Up));
    }
}
