//! The graph-search engine shared by uniform cost search and A*.
//!
//! The 8-puzzle state space is a graph with cycles: every move has an
//! inverse, so a naive tree search revisits the same arrangements
//! indefinitely. Both algorithms therefore keep a set of expanded state
//! keys and never expand a state twice. They differ only in how frontier
//! priorities are computed.

use std::time::Instant;

use rustc_hash::FxHashSet;

use crate::board::{Board, BoardKey};
use crate::frontier::{Frontier, SearchNode};
use crate::heuristic::{Estimator, Heuristic};
use crate::moves::Move;

/// Telemetry accumulated over one solve call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Moves in the returned solution; 0 when no solution was found.
    pub path_length: u32,
    /// States popped and expanded. Successors merely generated do not
    /// count, and neither does the final goal pop.
    pub expansions: u32,
    /// Largest frontier size observed, sampled after every push.
    pub max_queue_len: u32,
    /// Wall-clock duration of the search, in whole milliseconds.
    pub elapsed_ms: u32,
}

impl SearchStats {
    /// The fixed four-integer layout callers copy out:
    /// `[path_length, expansions, max_queue_len, elapsed_ms]`.
    pub fn as_array(&self) -> [u32; 4] {
        [
            self.path_length,
            self.expansions,
            self.max_queue_len,
            self.elapsed_ms,
        ]
    }
}

/// Outcome of one solve call: the move letters plus the telemetry.
///
/// The path is empty both when no solution exists and when the start
/// already matched the goal; callers distinguish the two by comparing
/// their inputs. The caller owns the path outright.
#[derive(Debug, Clone)]
pub struct SolveReport {
    pub path: String,
    pub stats: SearchStats,
}

/// Runs uniform cost search: the frontier is ordered by path cost alone.
pub fn uniform_cost(start: Board, goal: Board) -> SolveReport {
    run(start, goal, None)
}

/// Runs A*: the frontier is ordered by path cost plus the heuristic
/// estimate of the distance still to cover.
pub fn astar(start: Board, goal: Board, heuristic: Heuristic) -> SolveReport {
    run(start, goal, Some(Estimator::new(heuristic, &goal)))
}

fn run(start: Board, goal: Board, estimator: Option<Estimator>) -> SolveReport {
    let timer = Instant::now();
    let mut stats = SearchStats::default();
    let mut frontier = Frontier::new();
    let mut expanded: FxHashSet<BoardKey> = FxHashSet::default();

    let root_priority = match &estimator {
        Some(estimator) => estimator.estimate(&start),
        None => 0,
    };
    frontier.push(SearchNode {
        board: start,
        g: 0,
        priority: root_priority,
        path: String::new(),
    });
    stats.max_queue_len = frontier.len() as u32;

    let mut solution = String::new();
    while let Some(node) = frontier.pop() {
        if node.board.is_goal(&goal) {
            stats.path_length = node.g;
            solution = node.path;
            break;
        }

        // a state can sit in the frontier several times, queued from
        // different parents before either was expanded; only the first
        // pop expands it
        if !expanded.insert(node.board.key()) {
            continue;
        }
        stats.expansions += 1;

        let blank = node.board.blank_index();
        for mv in Move::ALL {
            if !mv.applicable_from(blank) {
                continue;
            }
            let successor = node.board.apply(mv);
            if expanded.contains(&successor.key()) {
                continue;
            }
            let g = node.g + 1;
            let priority = match &estimator {
                Some(estimator) => g + estimator.estimate(&successor),
                None => g,
            };
            let mut path = node.path.clone();
            path.push(mv.letter());
            frontier.push(SearchNode {
                board: successor,
                g,
                priority,
                path,
            });
            stats.max_queue_len = stats.max_queue_len.max(frontier.len() as u32);
        }
    }

    stats.elapsed_ms = timer.elapsed().as_millis() as u32;
    SolveReport {
        path: solution,
        stats,
    }
}
