//! 8-puzzle solver CLI
//!
//! Finds an optimal slide sequence between two 3x3 tile arrangements
//! with uniform cost search or A*, and reports how much work the search
//! did. Arrangements are given as nine digits in row-major order with 0
//! for the blank, e.g. 123456780.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rand::thread_rng;

use eight_puzzle::board::Board;
use eight_puzzle::heuristic::Heuristic;
use eight_puzzle::scramble;
use eight_puzzle::search::{self, SolveReport};

/// The conventional finished arrangement.
const CLASSIC_GOAL: &str = "123456780";

#[derive(Parser)]
#[command(name = "eight-puzzle")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Find an optimal move sequence from a start to a goal arrangement.
    Solve {
        /// Start arrangement, nine digits row-major with 0 as the blank.
        start: String,
        /// Goal arrangement.
        #[arg(default_value = CLASSIC_GOAL)]
        goal: String,
        /// Search algorithm to run.
        #[arg(short, long, value_enum, default_value = "astar")]
        algorithm: Algorithm,
        /// Heuristic used by A*; ignored by uniform cost search.
        #[arg(long, value_enum, default_value = "manhattan")]
        heuristic: HeuristicName,
    },
    /// Print a random arrangement that can reach the goal.
    Random {
        /// Goal arrangement the scramble must be able to reach.
        #[arg(default_value = CLASSIC_GOAL)]
        goal: String,
    },
    /// Report whether a start arrangement can reach the goal at all.
    Check {
        /// Start arrangement to test.
        start: String,
        /// Goal arrangement.
        #[arg(default_value = CLASSIC_GOAL)]
        goal: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Algorithm {
    /// Uniform cost search, no heuristic guidance.
    Uc,
    /// A* with the selected heuristic.
    Astar,
}

#[derive(Clone, Copy, ValueEnum)]
enum HeuristicName {
    /// Count of tiles not on their goal cell.
    Misplaced,
    /// Summed row and column offsets of every tile.
    Manhattan,
}

impl From<HeuristicName> for Heuristic {
    fn from(name: HeuristicName) -> Self {
        match name {
            HeuristicName::Misplaced => Heuristic::MisplacedTiles,
            HeuristicName::Manhattan => Heuristic::ManhattanDistance,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Solve {
            start,
            goal,
            algorithm,
            heuristic,
        } => run_solve(&start, &goal, algorithm, heuristic.into()),
        Command::Random { goal } => run_random(&goal),
        Command::Check { start, goal } => run_check(&start, &goal),
    }
}

fn parse_board(label: &str, digits: &str) -> Result<Board> {
    digits
        .parse()
        .with_context(|| format!("invalid {label} arrangement {digits:?}"))
}

fn run_solve(start: &str, goal: &str, algorithm: Algorithm, heuristic: Heuristic) -> Result<()> {
    let start = parse_board("start", start)?;
    let goal = parse_board("goal", goal)?;

    print!("{start}");
    if !scramble::is_solvable(&start, &goal) {
        eprintln!("Warning: tile parity differs from the goal; the search can only prove there is no solution.");
    }

    let report = match algorithm {
        Algorithm::Uc => search::uniform_cost(start, goal),
        Algorithm::Astar => search::astar(start, goal, heuristic),
    };

    println!("{}", describe_outcome(&start, &goal, &report));
    let [_, expansions, max_queue_len, elapsed_ms] = report.stats.as_array();
    println!("Expanded {expansions} states, peak frontier {max_queue_len}, {elapsed_ms} ms");
    Ok(())
}

/// One-line outcome summary for a finished solve.
fn describe_outcome(start: &Board, goal: &Board, report: &SolveReport) -> String {
    if !report.path.is_empty() {
        format!(
            "Solution: {} ({} moves)",
            report.path, report.stats.path_length
        )
    } else if start.is_goal(goal) {
        "Already solved.".to_string()
    } else {
        "No solution.".to_string()
    }
}

fn run_random(goal: &str) -> Result<()> {
    let goal = parse_board("goal", goal)?;
    let scrambled = scramble::random_solvable(&mut thread_rng(), &goal);
    print!("{scrambled}");
    println!("{}", scrambled.to_digits());
    Ok(())
}

fn run_check(start: &str, goal: &str) -> Result<()> {
    let start = parse_board("start", start)?;
    let goal = parse_board("goal", goal)?;
    if scramble::is_solvable(&start, &goal) {
        println!("Solvable: the goal is reachable from this arrangement.");
    } else {
        println!("Unsolvable: tile parity differs from the goal.");
    }
    Ok(())
}
