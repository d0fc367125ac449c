//! 8-Puzzle Search Engine
//!
//! Solves the classic 3x3 sliding-tile puzzle: given a start arrangement
//! of eight numbered tiles and one blank, find an optimal sequence of
//! slide moves reaching a goal arrangement, using uniform cost search or
//! A* with a misplaced-tiles or Manhattan-distance heuristic. Every solve
//! also reports search telemetry: solution length, states expanded, peak
//! frontier size, and elapsed milliseconds.
//!
//! Arrangements cross the boundary as nine-digit strings, row-major with
//! 0 for the blank. A move string over {U, D, L, R} names the directions
//! the blank slides; it is empty when no solution exists or when the
//! start already matched the goal.
//!
//! ```
//! use eight_puzzle::{solve_astar, Heuristic};
//!
//! let report = solve_astar("123405786", "123456780", Heuristic::ManhattanDistance)?;
//! assert_eq!(report.path, "RD");
//! assert_eq!(report.stats.path_length, 2);
//! # Ok::<(), eight_puzzle::ParseBoardError>(())
//! ```

pub mod board;
pub mod frontier;
pub mod heuristic;
pub mod moves;
pub mod scramble;
pub mod search;

pub use board::{Board, BoardKey, ParseBoardError};
pub use heuristic::Heuristic;
pub use moves::Move;
pub use search::{SearchStats, SolveReport};

/// Solves with uniform cost search.
///
/// Both arrangements are validated before any search work; a malformed
/// string is an error, an unreachable goal is a normal report with an
/// empty path.
pub fn solve_uniform_cost(start: &str, goal: &str) -> Result<SolveReport, ParseBoardError> {
    let start: Board = start.parse()?;
    let goal: Board = goal.parse()?;
    Ok(search::uniform_cost(start, goal))
}

/// Solves with A* under the given heuristic.
///
/// Same boundary contract as [`solve_uniform_cost`].
pub fn solve_astar(
    start: &str,
    goal: &str,
    heuristic: Heuristic,
) -> Result<SolveReport, ParseBoardError> {
    let start: Board = start.parse()?;
    let goal: Board = goal.parse()?;
    Ok(search::astar(start, goal, heuristic))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_solves_and_reports() {
        let report = solve_uniform_cost("123450786", "123456780").unwrap();
        assert_eq!(report.path, "D");

        let [path_length, expansions, max_queue_len, _elapsed] = report.stats.as_array();
        assert_eq!(path_length, 1);
        assert!(expansions > 0);
        assert!(max_queue_len >= 1);
    }

    #[test]
    fn test_boundary_start_equals_goal() {
        let report = solve_astar("123456780", "123456780", Heuristic::MisplacedTiles).unwrap();
        assert_eq!(report.path, "");
        assert_eq!(report.stats.path_length, 0);
        assert_eq!(report.stats.expansions, 0);
    }

    #[test]
    fn test_boundary_rejects_malformed_input() {
        assert_eq!(
            solve_uniform_cost("12345678", "123456780").unwrap_err(),
            ParseBoardError::WrongLength(8)
        );
        assert_eq!(
            solve_astar("123456789", "123456780", Heuristic::ManhattanDistance).unwrap_err(),
            ParseBoardError::InvalidTile('9')
        );
        assert_eq!(
            solve_uniform_cost("123456780", "112345678").unwrap_err(),
            ParseBoardError::DuplicateTile(1)
        );
    }
}
