//! # 8-Puzzle Solver Library
//!
//! This library models the classic 3x3 sliding-tile puzzle and provides
//! three search strategies for solving arbitrary instances of it: breadth-
//! first search, depth-limited depth-first search, and A* under a pluggable
//! heuristic.
//!
//! It is used by two binaries:
//! - `puzzle_search`: Solves a board read from a file with a chosen strategy
//!   and prints the move sequence.
//! - `strategy_benchmark`: Runs every strategy against canned boards and
//!   compares path lengths, node counts, and timings.
//!
//! ## Modules
//! - `engine`: Contains the board representation (`Board`), the move
//!   vocabulary (`Move`), search-state storage (`State`, `StateArena`), and
//!   the error type (`PuzzleError`).
//! - `solver`: Provides `breadth_first_search`, `depth_first_search`, and
//!   `a_star_search`, all returning a uniform `SearchResult`.
//! - `heuristics`: Defines the admissible estimators `manhattan_distance`
//!   and `misplaced_tiles` used to guide A*.
//! - `utils`: Provides utility functions, such as parsing board
//!   configurations from strings.

pub mod engine;
pub mod heuristics;
pub mod solver;
pub mod utils;
