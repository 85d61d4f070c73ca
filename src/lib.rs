//! Sticker-level model of a 3x3x3 cube, a face-turn engine over it, and the
//! scramble -> solve -> replay pipeline that produces animation frames.

pub mod animation;
pub mod config;
pub mod cube;
pub mod error;
pub mod r#move;
pub mod solver;

mod prelude;


pub use animation::{apply_single_move, solve_and_animate, SolveReport};
pub use config::{SolveConfig, SolverKind};
pub use cube::{Color, Cube, Face, Replay};
pub use error::{EncodingError, Error, InvalidMoveToken, SolveFailure};
pub use r#move::{Direction, Move};
pub use solver::{Mitm, NaiveIddfs, Solver};
