//! Distance heuristics for guiding A* toward the goal board.
//!
//! Both estimators are pure functions `(board, goal) -> u32` with no state
//! and no side effects. Each move changes one tile's position by one cell,
//! so both are admissible (never overestimate the remaining move count) and
//! monotone, which is what A* needs for its optimality guarantee.
use crate::engine::{Board, BOARD_SIZE};

/// Sums each tile's Manhattan distance to its goal cell.
///
/// For every non-blank tile the estimate adds
/// `|row - goal_row| + |col - goal_col|`. The goal board's tile positions are
/// precomputed into a value-indexed table so the scan stays a single pass
/// over each board. The blank contributes nothing; counting it would break
/// admissibility.
///
/// # Arguments
/// * `board`: The board to score.
/// * `goal`: The board being searched for.
///
/// # Returns
/// The summed distance as `u32`; `0` iff every tile already sits on its goal
/// cell.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::engine::Board;
/// use eight_puzzle_solver::heuristics::manhattan_distance;
/// let goal = Board::from_grid([[1, 2, 3], [4, 5, 6], [7, 8, 0]]);
/// assert_eq!(manhattan_distance(&goal, &goal), 0);
/// ```
pub fn manhattan_distance(board: &Board, goal: &Board) -> u32 {
    // Where each tile value sits in the goal, indexed by value.
    let mut goal_positions = [(0usize, 0usize); BOARD_SIZE * BOARD_SIZE];
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            goal_positions[goal.get_tile(r, c) as usize] = (r, c);
        }
    }

    let mut distance = 0u32;
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            let tile = board.get_tile(r, c);
            if tile != 0 {
                let (goal_r, goal_c) = goal_positions[tile as usize];
                distance += (r.abs_diff(goal_r) + c.abs_diff(goal_c)) as u32;
            }
        }
    }
    distance
}

/// Counts the non-blank tiles that are not on their goal cell.
///
/// A coarser estimate than [`manhattan_distance`]: every misplaced tile needs
/// at least one move, so the count never overestimates, but it ignores how
/// far each tile has to travel.
///
/// # Arguments
/// * `board`: The board to score.
/// * `goal`: The board being searched for.
///
/// # Returns
/// The number of misplaced non-blank tiles as `u32`.
pub fn misplaced_tiles(board: &Board, goal: &Board) -> u32 {
    let mut count = 0u32;
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            let tile = board.get_tile(r, c);
            if tile != 0 && tile != goal.get_tile(r, c) {
                count += 1;
            }
        }
    }
    count
}
