use clap::{Parser, ValueEnum};
use env_logger::Env;
use eight_puzzle_solver::engine::Board;
use eight_puzzle_solver::heuristics::{manhattan_distance, misplaced_tiles};
use eight_puzzle_solver::solver::{
    a_star_search, breadth_first_search, depth_first_search, SearchResult, DEFAULT_DEPTH_LIMIT,
};
use eight_puzzle_solver::utils::board_from_str_array;
use std::fs;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Strategy {
    /// Breadth-first search, shortest path guaranteed
    Bfs,
    /// Depth-first search bounded by --depth
    Dfs,
    /// A* under the heuristic chosen by --heuristic
    Astar,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Heuristic {
    /// Sum of tile Manhattan distances to their goal cells
    Manhattan,
    /// Count of tiles off their goal cells
    Misplaced,
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Search strategy to run
    #[clap(short, long, value_enum, default_value = "astar")]
    strategy: Strategy,

    /// Heuristic for the A* strategy
    #[clap(long, value_enum, default_value = "manhattan")]
    heuristic: Heuristic,

    /// Depth limit for the DFS strategy
    #[clap(short, long, default_value_t = DEFAULT_DEPTH_LIMIT)]
    depth: u32,

    /// Path to the initial board file (three rows of digits, 0 for the blank)
    initial_file: PathBuf,

    /// Optional goal board file; defaults to the ordered board with the
    /// blank in the bottom-right corner
    goal_file: Option<PathBuf>,
}

fn read_board_file(path: &PathBuf) -> Result<Board, String> {
    let content = fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;

    let lines: Vec<&str> = content
        .lines()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();

    board_from_str_array(&lines).map_err(|e| format!("Invalid board format: {}", e))
}

fn print_result(result: &SearchResult) {
    if result.success {
        if result.path.is_empty() {
            println!("The initial board already matches the goal.\n");
        } else {
            println!("Solution found:\n");
            for (i, (mov, board)) in result.path.iter().enumerate() {
                println!("Step {}: move {}\n{}\n", i + 1, mov, board);
            }
        }
    } else {
        println!("No solution found.\n");
    }

    println!("Steps:          {}", result.steps);
    println!("Nodes expanded: {}", result.nodes_expanded);
    println!("Time taken:     {:?}", result.time_taken);
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let initial = read_board_file(&args.initial_file).expect(&format!(
        "Failed to read board from file: {}",
        args.initial_file.display()
    ));
    let goal = match &args.goal_file {
        Some(path) => read_board_file(path).expect(&format!(
            "Failed to read board from file: {}",
            path.display()
        )),
        None => Board::from_grid([[1, 2, 3], [4, 5, 6], [7, 8, 0]]),
    };

    println!("Loaded board from {}\n", args.initial_file.display());
    println!("Initial board:\n{}\n", initial);
    println!("Goal board:\n{}\n", goal);
    match args.strategy {
        Strategy::Bfs => println!("Searching with breadth-first search...\n"),
        Strategy::Dfs => println!(
            "Searching with depth-first search (depth limit {})...\n",
            args.depth
        ),
        Strategy::Astar => println!("Searching with A* ({:?} heuristic)...\n", args.heuristic),
    }

    let result = match args.strategy {
        Strategy::Bfs => breadth_first_search(&initial, &goal),
        Strategy::Dfs => depth_first_search(&initial, &goal, args.depth),
        Strategy::Astar => match args.heuristic {
            Heuristic::Manhattan => a_star_search(&initial, &goal, manhattan_distance),
            Heuristic::Misplaced => a_star_search(&initial, &goal, misplaced_tiles),
        },
    }
    .expect("Search failed: the initial board is malformed");

    print_result(&result);
}
