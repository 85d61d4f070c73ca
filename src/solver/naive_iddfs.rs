use crate::prelude::*;

use smallvec::SmallVec;

type MoveStack = SmallVec<[Move; 16]>;

/// Iterative deepening over all 18 moves. Finds a shortest solution, but
/// only practical for short scrambles.
pub struct NaiveIddfs {
    pub max_depth: u8,
}

impl NaiveIddfs {
    pub fn new(max_depth: u8) -> Self {
        NaiveIddfs { max_depth }
    }

    fn find_solution(&self, remaining_moves: u8, cube: &Cube, stack: &mut MoveStack) -> bool {
        if remaining_moves == 0 {
            return cube.is_solved();
        }

        let last = stack.last().copied();
        for move_ in Move::all() {
            if let Some(prev) = last {
                if !move_.could_follow(&prev) {
                    continue;
                }
            }

            stack.push(move_);
            if self.find_solution(remaining_moves - 1, &cube.apply(move_), stack) {
                return true;
            }
            stack.pop();
        }
        false
    }
}

impl Solver for NaiveIddfs {
    fn solve(&self, facelets: &str) -> Result<String, SolveFailure> {
        let cube = Cube::from_canonical(facelets)?;

        let mut stack = MoveStack::new();
        for depth in 0..=self.max_depth {
            log::debug!("iddfs: searching depth {}", depth);
            if self.find_solution(depth, &cube, &mut stack) {
                log::info!("iddfs: found {} move solution", stack.len());
                return Ok(super::format_solution(&stack));
            }
        }

        Err(SolveFailure::NoSolution {
            max_depth: self.max_depth,
        })
    }
}
