//! Solvability pre-checks and random scramble generation.
//!
//! Slide moves never change the inversion parity of the tile values, so
//! the half of the 9! arrangements sharing the goal's parity are exactly
//! the ones that can reach it. Hosts run the pre-check before searching to
//! warn about inputs that would only exhaust the frontier.

use rand::Rng;

use crate::board::Board;

/// Whether `start` can reach `goal` at all.
pub fn is_solvable(start: &Board, goal: &Board) -> bool {
    start.inversions() % 2 == goal.inversions() % 2
}

/// Draws a uniformly random arrangement that can reach `goal`.
///
/// Shuffles the nine values and redraws until the parity matches; each
/// draw lands in the solvable half with probability 1/2.
pub fn random_solvable<R: Rng + ?Sized>(rng: &mut R, goal: &Board) -> Board {
    loop {
        let candidate = goal.shuffled(rng);
        if is_solvable(&candidate, goal) {
            return candidate;
        }
    }
}
