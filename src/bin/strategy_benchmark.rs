use env_logger::Env;
use eight_puzzle_solver::engine::{Board, PuzzleError};
use eight_puzzle_solver::heuristics::{manhattan_distance, misplaced_tiles};
use eight_puzzle_solver::solver::{
    a_star_search, breadth_first_search, depth_first_search, SearchResult, DEFAULT_DEPTH_LIMIT,
};

type StrategyFn = Box<dyn Fn(&Board, &Board) -> Result<SearchResult, PuzzleError>>;

fn strategies() -> Vec<(&'static str, StrategyFn)> {
    vec![
        (
            "BFS",
            Box::new(|initial: &Board, goal: &Board| breadth_first_search(initial, goal)),
        ),
        (
            "DFS",
            Box::new(|initial: &Board, goal: &Board| {
                depth_first_search(initial, goal, DEFAULT_DEPTH_LIMIT)
            }),
        ),
        (
            "A* manhattan",
            Box::new(|initial: &Board, goal: &Board| {
                a_star_search(initial, goal, manhattan_distance)
            }),
        ),
        (
            "A* misplaced",
            Box::new(|initial: &Board, goal: &Board| {
                a_star_search(initial, goal, misplaced_tiles)
            }),
        ),
    ]
}

fn benchmark_boards() -> Vec<(&'static str, Board)> {
    vec![
        // A few moves from the goal; every strategy finishes instantly.
        ("easy", Board::from_grid([[3, 2, 1], [4, 0, 8], [7, 5, 6]])),
        // A worst-case instance, 31 moves from the goal.
        ("hard", Board::from_grid([[8, 6, 7], [2, 5, 4], [3, 0, 1]])),
    ]
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let goal = Board::from_grid([[1, 2, 3], [4, 5, 6], [7, 8, 0]]);
    let strategies = strategies();
    let boards = benchmark_boards();

    println!(
        "Comparing {} strategies on {} boards...",
        strategies.len(),
        boards.len()
    );

    for (label, initial) in &boards {
        println!("\nBoard '{}':\n{}", label, initial);

        for (name, run) in &strategies {
            match run(initial, &goal) {
                Ok(result) if result.success => {
                    println!(
                        "  {:<13} Steps: {:<4} Nodes: {:<8} Time: {:?}",
                        name, result.steps, result.nodes_expanded, result.time_taken
                    );
                }
                Ok(result) => {
                    println!(
                        "  {:<13} no path found (Nodes: {}, Time: {:?})",
                        name, result.nodes_expanded, result.time_taken
                    );
                }
                Err(e) => println!("  {:<13} failed: {}", name, e),
            }
        }
    }

    println!("\n--- Benchmark Complete ---");
}
