use crate::prelude::*;

use std::collections::HashMap;

/// Meet in the middle: grows one frontier from the scramble and one from
/// the solved cube until they share a state.
pub struct Mitm {
    pub max_depth: u8,
}

impl Mitm {
    pub fn new(max_depth: u8) -> Self {
        Mitm { max_depth }
    }
}

impl Solver for Mitm {
    fn solve(&self, facelets: &str) -> Result<String, SolveFailure> {
        let cube = Cube::from_canonical(facelets)?;

        let mut state = SolveState::default();
        for depth in 0..=self.max_depth {
            if let Some(solution) = state.expand(&cube) {
                log::info!(
                    "mitm: found {} move solution, frontiers {} / {}",
                    solution.len(),
                    state.forward.len(),
                    state.reverse.len()
                );
                return Ok(super::format_solution(&solution));
            }
            log::debug!(
                "mitm: depth {} exhausted, frontiers {} / {}",
                depth,
                state.forward.len(),
                state.reverse.len()
            );
        }

        Err(SolveFailure::NoSolution {
            max_depth: self.max_depth,
        })
    }
}

#[derive(Default)]
struct SolveState {
    forward: HashMap<Cube, Vec<Move>>,
    reverse: HashMap<Cube, Vec<Move>>,
    expand_forward: bool,
}

impl SolveState {
    /// Each call after the first grows one frontier by a single move, so
    /// the n-th call checks every solution of length n - 1.
    fn expand(&mut self, initial: &Cube) -> Option<Vec<Move>> {
        if self.forward.is_empty() {
            if initial.is_solved() {
                return Some(Vec::new());
            }

            self.forward.insert(*initial, Vec::new());
            self.reverse.insert(Cube::solved(), Vec::new());
            self.expand_forward = true;
            return None;
        }

        let found = if self.expand_forward {
            Self::expand_mut(&mut self.forward, &self.reverse)
        } else {
            Self::expand_mut(&mut self.reverse, &self.forward).map(|(r, f)| (f, r))
        };
        self.expand_forward = !self.expand_forward;

        found.map(|(forward, rev)| forward.into_iter().chain(Move::inverse_seq(&rev)).collect())
    }

    fn expand_mut(
        this: &mut HashMap<Cube, Vec<Move>>,
        other: &HashMap<Cube, Vec<Move>>,
    ) -> Option<(Vec<Move>, Vec<Move>)> {
        let expand = this
            .drain()
            .flat_map(|(cube, moves)| {
                Move::all()
                    .filter(|m| moves.last().map_or(true, |prev| m.could_follow(prev)))
                    .map(|move_| {
                        let mut m = moves.clone();
                        m.push(move_);
                        (cube.apply(move_), m)
                    })
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        for (cube, moves) in expand {
            if let Some(other) = other.get(&cube) {
                return Some((moves, other.clone()));
            }

            this.entry(cube).or_insert(moves);
        }

        None
    }
}
