use crate::prelude::*;

mod naive_iddfs;
pub use naive_iddfs::*;

mod mitm;
pub use mitm::*;

/// Finds a move sequence that solves an encoded cube.
///
/// `facelets` is the 54-character face-label encoding produced by
/// [`Cube::to_canonical_string`]. The answer is whitespace-separated move
/// tokens, empty if the cube is already solved.
pub trait Solver: Send + Sync {
    fn solve(&self, facelets: &str) -> Result<String, SolveFailure>;
}

fn format_solution(moves: &[Move]) -> String {
    moves
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
