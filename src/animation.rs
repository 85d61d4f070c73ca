use crate::prelude::*;

use serde::Serialize;

/// Everything a client needs to show a scramble being solved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolveReport {
    pub solution: String,
    pub scrambled_cube: Cube,
    pub solved_cube: Cube,
    /// The scrambled state followed by the state after each solution move.
    pub animation: Vec<Cube>,
    /// Whether the last frame has every face a single color.
    pub solved: bool,
}

/// Scrambles a solved cube, asks `solver` for a solution and replays it.
pub fn solve_and_animate(scramble: &str, solver: &dyn Solver) -> Result<SolveReport, Error> {
    let scramble = Move::parse_sequence(scramble)?;
    if scramble.is_empty() {
        return Err(Error::EmptyScramble);
    }

    let scrambled = Cube::solved().apply_all(scramble.iter().copied());
    let facelets = scrambled.to_canonical_string()?;
    log::debug!("Scrambled {} moves to {}", scramble.len(), facelets);

    let solution = solver.solve(&facelets)?;
    let moves = Move::parse_sequence(&solution)?;
    log::info!("Solution: {:?} ({} moves)", solution, moves.len());

    let replay = scrambled.apply_sequence(&moves);
    let solved = replay.last.is_solved();
    if !solved {
        log::warn!("Solution {:?} does not solve the cube", solution);
    }

    let mut animation = Vec::with_capacity(moves.len() + 1);
    animation.push(scrambled);
    animation.extend(replay.states);

    Ok(SolveReport {
        solution,
        scrambled_cube: scrambled,
        solved_cube: replay.last,
        animation,
        solved,
    })
}

/// Applies a single token to a client-supplied state.
pub fn apply_single_move(cube: &Cube, token: &str) -> Result<Cube, Error> {
    let move_: Move = token.trim().parse()?;
    log::trace!("Applying {} to\n{}", move_, cube);
    Ok(cube.apply(move_))
}
