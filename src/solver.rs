//! Search strategies for solving the 8-puzzle.
//!
//! Three interchangeable algorithms share one contract: take an initial and a
//! goal board, produce a [`SearchResult`].
//! - [`breadth_first_search`]: FIFO frontier; shortest path in move count.
//! - [`depth_first_search`]: LIFO frontier bounded by a depth limit;
//!   first-found path, not necessarily shortest.
//! - [`a_star_search`]: best-first frontier ordered by `f = g + h` under a
//!   caller-supplied heuristic; shortest path when the heuristic is
//!   admissible.
//!
//! All strategies deduplicate boards by canonical hash at generation time,
//! count expanded nodes, and measure wall-clock time around the whole search.
use crate::engine::{Board, Move, PuzzleError, StateArena, StateId};
use fnv::{FnvHashMap, FnvHashSet};
use log::debug;
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};
use std::time::{Duration, Instant};

/// Depth limit applied to [`depth_first_search`] when callers have no reason
/// to pick their own.
pub const DEFAULT_DEPTH_LIMIT: u32 = 100;

/// The outcome of one search invocation.
///
/// Built once when the search returns and never mutated afterwards. A failed
/// search still carries its instrumentation; only the path is empty. Callers
/// must check [`success`](SearchResult::success) rather than assume a path
/// exists, because an empty path also represents the trivial case where the
/// initial board already equaled the goal.
#[derive(Clone, Debug)]
pub struct SearchResult {
    /// Moves from the initial board to the goal, each paired with the board
    /// it produces. Empty on failure and on the trivial initial-equals-goal
    /// case.
    pub path: Vec<(Move, Board)>,
    /// Number of entries in `path`, which equals the move count.
    pub steps: usize,
    /// How many states were taken off the frontier, including (for A*) stale
    /// duplicates discarded by lazy deletion.
    pub nodes_expanded: usize,
    /// Wall-clock duration of the whole search call.
    pub time_taken: Duration,
    /// Whether the goal was reached.
    pub success: bool,
}

impl SearchResult {
    /// Builds the success record; `steps` is derived from the path length.
    fn found(path: Vec<(Move, Board)>, nodes_expanded: usize, time_taken: Duration) -> Self {
        let steps = path.len();
        SearchResult {
            path,
            steps,
            nodes_expanded,
            time_taken,
            success: true,
        }
    }

    /// Builds the failure record: empty path, instrumentation still filled.
    fn not_found(nodes_expanded: usize, time_taken: Duration) -> Self {
        SearchResult {
            path: Vec::new(),
            steps: 0,
            nodes_expanded,
            time_taken,
            success: false,
        }
    }
}

/// Frontier key for A*: `f` ascending, then `h` ascending.
///
/// The ordering deliberately ignores the state id: two entries with equal
/// `f` and `h` are interchangeable, so which of several optimal paths comes
/// out is an accepted nondeterminism of the frontier, not a contract.
#[derive(Clone, Copy, Debug)]
struct QueueEntry {
    f: u32,
    h: u32,
    id: StateId,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.h == other.h
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f.cmp(&other.f).then(self.h.cmp(&other.h))
    }
}

/// Reconstructs the start-to-goal move sequence ending at `state`.
///
/// Walks the parent links back to the root, collecting `(move, board)` at
/// every node that records a move (the root records none), then reverses
/// into forward order. Read-only over the arena; O(depth) with no
/// allocation beyond the returned vector.
pub fn solution_path(arena: &StateArena, state: StateId) -> Vec<(Move, Board)> {
    let mut path = Vec::new();
    let mut current = Some(state);
    while let Some(id) = current {
        let node = &arena[id];
        if let Some(mov) = node.mov {
            path.push((mov, node.board));
        }
        current = node.parent;
    }
    path.reverse();
    path
}

/// Solves the puzzle by breadth-first search.
///
/// The frontier is a FIFO queue and every move costs one, so the first path
/// that reaches the goal is shortest in move count. Boards are marked
/// visited when generated, never when dequeued, so each board enters the
/// frontier at most once; successors are checked against the goal
/// immediately at generation rather than waiting for their turn in the
/// queue. The reachable component of any board holds at most 9!/2 states,
/// so the search always terminates, returning a failure record if the
/// frontier empties first.
///
/// # Errors
/// Returns [`PuzzleError::InvariantViolation`] if an expanded board does not
/// contain exactly one blank, which can only happen when the caller supplies
/// a malformed initial board.
pub fn breadth_first_search(initial: &Board, goal: &Board) -> Result<SearchResult, PuzzleError> {
    let started = Instant::now();
    if initial == goal {
        return Ok(SearchResult::found(Vec::new(), 0, started.elapsed()));
    }
    debug!("starting breadth-first search");

    let mut arena = StateArena::new();
    let mut frontier = VecDeque::new();
    let mut visited = FnvHashSet::default();

    let root = arena.push(*initial, None, None, 0, 0);
    frontier.push_back(root);
    visited.insert(initial.canonical_hash());

    let mut nodes_expanded = 0usize;
    while let Some(current_id) = frontier.pop_front() {
        nodes_expanded += 1;
        let current_board = arena[current_id].board;
        let current_g = arena[current_id].g;

        for (mov, successor) in current_board.possible_moves()? {
            if successor == *goal {
                let goal_id = arena.push(successor, Some(current_id), Some(mov), current_g + 1, 0);
                let path = solution_path(&arena, goal_id);
                debug!("breadth-first search reached the goal after {} expansions", nodes_expanded);
                return Ok(SearchResult::found(path, nodes_expanded, started.elapsed()));
            }
            if visited.insert(successor.canonical_hash()) {
                let id = arena.push(successor, Some(current_id), Some(mov), current_g + 1, 0);
                frontier.push_back(id);
            }
        }
    }

    debug!("breadth-first search exhausted the frontier after {} expansions", nodes_expanded);
    Ok(SearchResult::not_found(nodes_expanded, started.elapsed()))
}

/// Solves the puzzle by depth-limited depth-first search.
///
/// The frontier is a LIFO stack of `(state, depth)` pairs. Boards are marked
/// visited at generation time with the same policy as
/// [`breadth_first_search`], which avoids duplicate work but makes the
/// result first-found rather than shortest. On every pop the board is
/// checked against the goal; expansion only happens while `depth` is below
/// `max_depth`. Successors are pushed in reversed emission order so the
/// stack pops them in the original up, down, left, right order, keeping
/// traversal reproducible.
///
/// A failure record means the stack emptied: either no path of length at
/// most `max_depth` exists or the puzzle is unsolvable, and the two causes
/// are indistinguishable from the result alone.
///
/// # Errors
/// Returns [`PuzzleError::InvariantViolation`] for a malformed initial
/// board, as with [`breadth_first_search`].
pub fn depth_first_search(
    initial: &Board,
    goal: &Board,
    max_depth: u32,
) -> Result<SearchResult, PuzzleError> {
    let started = Instant::now();
    if initial == goal {
        return Ok(SearchResult::found(Vec::new(), 0, started.elapsed()));
    }
    debug!("starting depth-first search with depth limit {}", max_depth);

    let mut arena = StateArena::new();
    let mut stack: Vec<(StateId, u32)> = Vec::new();
    let mut visited = FnvHashSet::default();

    let root = arena.push(*initial, None, None, 0, 0);
    stack.push((root, 0));
    visited.insert(initial.canonical_hash());

    let mut nodes_expanded = 0usize;
    while let Some((current_id, depth)) = stack.pop() {
        nodes_expanded += 1;
        let current_board = arena[current_id].board;

        if current_board == *goal {
            let path = solution_path(&arena, current_id);
            debug!("depth-first search reached the goal after {} expansions", nodes_expanded);
            return Ok(SearchResult::found(path, nodes_expanded, started.elapsed()));
        }

        if depth < max_depth {
            let current_g = arena[current_id].g;
            for (mov, successor) in current_board.possible_moves()?.into_iter().rev() {
                if visited.insert(successor.canonical_hash()) {
                    let id = arena.push(successor, Some(current_id), Some(mov), current_g + 1, 0);
                    stack.push((id, depth + 1));
                }
            }
        }
    }

    debug!("depth-first search exhausted the stack after {} expansions", nodes_expanded);
    Ok(SearchResult::not_found(nodes_expanded, started.elapsed()))
}

/// Solves the puzzle by A* search under the supplied heuristic.
///
/// The frontier is a min-priority heap ordered by `(f, h)`; a parallel map
/// records the best `f` seen per board. The heap cannot decrease-key, so an
/// improved route pushes a duplicate entry and the superseded one is
/// discarded lazily when popped with an `f` worse than the recorded best.
/// Goal detection happens on pop, which is what makes the result optimal
/// whenever `heuristic` never overestimates: both crate heuristics qualify
/// (`heuristics::manhattan_distance`, `heuristics::misplaced_tiles`), as
/// does any other `Fn(&Board, &Board) -> u32`.
///
/// When several optimal paths exist, which one is returned depends on
/// frontier tie-handling between states of equal `(f, h)`; the length is
/// optimal either way.
///
/// # Errors
/// Returns [`PuzzleError::InvariantViolation`] for a malformed initial
/// board, as with [`breadth_first_search`].
pub fn a_star_search<H>(
    initial: &Board,
    goal: &Board,
    heuristic: H,
) -> Result<SearchResult, PuzzleError>
where
    H: Fn(&Board, &Board) -> u32,
{
    let started = Instant::now();
    if initial == goal {
        return Ok(SearchResult::found(Vec::new(), 0, started.elapsed()));
    }
    debug!("starting A* search");

    let mut arena = StateArena::new();
    let mut open = BinaryHeap::new();
    let mut best_f: FnvHashMap<u64, u32> = FnvHashMap::default();

    let root_h = heuristic(initial, goal);
    let root = arena.push(*initial, None, None, 0, root_h);
    open.push(Reverse(QueueEntry {
        f: arena[root].f,
        h: root_h,
        id: root,
    }));
    best_f.insert(initial.canonical_hash(), arena[root].f);

    let mut nodes_expanded = 0usize;
    while let Some(Reverse(entry)) = open.pop() {
        nodes_expanded += 1;
        let current_board = arena[entry.id].board;

        // Lazy deletion: a better route to this board was already relaxed.
        let key = current_board.canonical_hash();
        if best_f.get(&key).map_or(false, |&best| entry.f > best) {
            continue;
        }

        if current_board == *goal {
            let path = solution_path(&arena, entry.id);
            debug!("A* search reached the goal after {} expansions", nodes_expanded);
            return Ok(SearchResult::found(path, nodes_expanded, started.elapsed()));
        }

        let current_g = arena[entry.id].g;
        for (mov, successor) in current_board.possible_moves()? {
            let g = current_g + 1;
            let h = heuristic(&successor, goal);
            let f = g + h;
            let successor_key = successor.canonical_hash();

            let improves = best_f.get(&successor_key).map_or(true, |&best| f < best);
            if improves {
                best_f.insert(successor_key, f);
                let id = arena.push(successor, Some(entry.id), Some(mov), g, h);
                open.push(Reverse(QueueEntry { f, h, id }));
            }
        }
    }

    debug!("A* search exhausted the frontier after {} expansions", nodes_expanded);
    Ok(SearchResult::not_found(nodes_expanded, started.elapsed()))
}
