//! Admissible cost estimates for A* search.
//!
//! Neither heuristic ever overestimates the true remaining move count, so
//! A* keeps returning optimal paths. Manhattan distance dominates misplaced
//! tiles: its estimate is never the smaller of the two, and A* guided by it
//! expands no more states on any instance.

use crate::board::{Board, BoardKey, CELLS, SIDE};

/// Heuristic selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heuristic {
    /// Count of non-blank tiles not on their goal cell. Each such tile
    /// needs at least one move.
    MisplacedTiles,
    /// Summed row and column offsets of every non-blank tile from its goal
    /// cell.
    ManhattanDistance,
}

/// Evaluator bound to one goal arrangement.
///
/// Built once per solve: the value-to-goal-cell table means estimating a
/// board never rescans the goal.
#[derive(Debug, Clone)]
pub struct Estimator {
    kind: Heuristic,
    goal: BoardKey,
    /// Goal cell of each value, indexed by tile value.
    cell_of: [u8; CELLS],
}

impl Estimator {
    pub fn new(kind: Heuristic, goal: &Board) -> Self {
        let goal = goal.key();
        let mut cell_of = [0u8; CELLS];
        for (cell, &value) in goal.iter().enumerate() {
            cell_of[value as usize] = cell as u8;
        }
        Self { kind, goal, cell_of }
    }

    /// Estimated moves from `board` to the goal. The blank contributes 0.
    pub fn estimate(&self, board: &Board) -> u32 {
        let tiles = board.key();
        match self.kind {
            Heuristic::MisplacedTiles => tiles
                .iter()
                .zip(self.goal.iter())
                .filter(|&(&tile, &goal)| tile != 0 && tile != goal)
                .count() as u32,
            Heuristic::ManhattanDistance => {
                let mut total = 0;
                for (cell, &tile) in tiles.iter().enumerate() {
                    if tile == 0 {
                        continue;
                    }
                    let goal_cell = self.cell_of[tile as usize] as usize;
                    let rows = (cell / SIDE).abs_diff(goal_cell / SIDE);
                    let cols = (cell % SIDE).abs_diff(goal_cell % SIDE);
                    total += (rows + cols) as u32;
                }
                total
            }
        }
    }
}
