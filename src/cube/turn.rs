use crate::prelude::*;

use std::collections::HashMap;

/// Three sticker positions on one face.
#[derive(Clone, Copy)]
struct Strip {
    face: Face,
    indices: [u8; 3],
}

const fn strip(face: Face, indices: [u8; 3]) -> Strip {
    Strip { face, indices }
}

/// Neighbouring strips of each face in cycle order. A clockwise quarter turn
/// moves the stickers of strip `k` into strip `k + 1`, position by position.
const ADJACENT: [[Strip; 4]; 6] = {
    use crate::cube::Face::*;
    [
        // Up
        [
            strip(Front, [0, 1, 2]),
            strip(Left, [0, 1, 2]),
            strip(Back, [0, 1, 2]),
            strip(Right, [0, 1, 2]),
        ],
        // Right
        [
            strip(Front, [2, 5, 8]),
            strip(Up, [2, 5, 8]),
            strip(Back, [6, 3, 0]),
            strip(Down, [2, 5, 8]),
        ],
        // Front
        [
            strip(Up, [6, 7, 8]),
            strip(Right, [0, 3, 6]),
            strip(Down, [2, 1, 0]),
            strip(Left, [8, 5, 2]),
        ],
        // Down
        [
            strip(Front, [6, 7, 8]),
            strip(Right, [6, 7, 8]),
            strip(Back, [6, 7, 8]),
            strip(Left, [6, 7, 8]),
        ],
        // Left
        [
            strip(Up, [0, 3, 6]),
            strip(Front, [0, 3, 6]),
            strip(Down, [0, 3, 6]),
            strip(Back, [8, 5, 2]),
        ],
        // Back
        [
            strip(Up, [0, 1, 2]),
            strip(Left, [6, 3, 0]),
            strip(Down, [8, 7, 6]),
            strip(Right, [2, 5, 8]),
        ],
    ]
};

/// Source position of each sticker of a face grid rotated a clockwise
/// quarter: `new[i] = old[CLOCKWISE[i]]`.
const CLOCKWISE: [u8; 9] = [6, 3, 0, 7, 4, 1, 8, 5, 2];

/// `new[i] = old[self.0[i]]` over all 54 stickers.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Permutation([u8; 54]);

impl Permutation {
    fn identity() -> Self {
        let mut perm = [0; 54];
        for (i, p) in perm.iter_mut().enumerate() {
            *p = i as u8;
        }
        Permutation(perm)
    }

    fn quarter(face: Face) -> Self {
        let mut perm = Self::identity();
        let base = face.index() * 9;
        for (i, src) in CLOCKWISE.iter().enumerate() {
            perm.0[base + i] = (base + *src as usize) as u8;
        }

        let strips = &ADJACENT[face.index()];
        for k in 0..4 {
            let from = strips[k];
            let to = strips[(k + 1) % 4];
            for j in 0..3 {
                let target = to.face.index() * 9 + to.indices[j] as usize;
                let source = from.face.index() * 9 + from.indices[j] as usize;
                perm.0[target] = source as u8;
            }
        }
        perm
    }

    /// Applies `self`, then `next`.
    fn then(&self, next: &Permutation) -> Permutation {
        let mut perm = [0; 54];
        for (i, p) in perm.iter_mut().enumerate() {
            *p = self.0[next.0[i] as usize];
        }
        Permutation(perm)
    }

    fn power(&self, n: usize) -> Permutation {
        (0..n).fold(Self::identity(), |acc, _| acc.then(self))
    }
}

lazy_static::lazy_static! {
    static ref PERMUTATIONS: HashMap<Move, Permutation> = Move::all()
        .map(|m| {
            let quarter = Permutation::quarter(m.face);
            let turns = match m.direction {
                Direction::Single => 1,
                Direction::Double => 2,
                Direction::Reverse => 3,
            };
            (m, quarter.power(turns))
        })
        .collect();
}

/// States visited while replaying a move sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replay {
    /// State after the last move, or the starting state if there were none.
    pub last: Cube,
    /// `states[i]` is the state right after move `i`.
    pub states: Vec<Cube>,
}

impl Cube {
    pub fn apply(&self, move_: Move) -> Cube {
        let perm = &PERMUTATIONS[&move_];
        Cube::from_facelets(|i| self.facelet(perm.0[i] as usize))
    }

    pub fn apply_all(self, moves: impl IntoIterator<Item = Move>) -> Cube {
        moves.into_iter().fold(self, |cube, m| cube.apply(m))
    }

    pub fn apply_sequence(&self, moves: &[Move]) -> Replay {
        let mut states = Vec::with_capacity(moves.len());
        let mut last = *self;
        for m in moves {
            last = last.apply(*m);
            states.push(last);
        }
        Replay { last, states }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    fn quarters(cube: &Cube, face: Face, n: usize) -> Cube {
        let single = Move {
            face,
            direction: Direction::Single,
        };
        (0..n).fold(*cube, |c, _| c.apply(single))
    }

    #[test]
    fn clockwise_moves_corner_to_corner() {
        assert_eq!(CLOCKWISE[2], 0);
        assert_eq!(CLOCKWISE[8], 2);
        assert_eq!(CLOCKWISE[4], 4);
    }

    #[test]
    fn quarter_moves_twenty_stickers() {
        for face in Face::all() {
            let moved = Permutation::quarter(face)
                .0
                .iter()
                .enumerate()
                .filter(|(i, p)| *i != **p as usize)
                .count();
            // The center stays put.
            assert_eq!(moved, 8 + 12, "{}", face);
        }
    }

    #[test]
    fn quarter_is_a_permutation() {
        for face in Face::all() {
            let mut seen = Permutation::quarter(face).0.to_vec();
            seen.sort();
            assert_eq!(seen, Permutation::identity().0.to_vec());
        }
    }

    #[test]
    fn four_quarters_are_identity() {
        for face in Face::all() {
            assert_eq!(Permutation::quarter(face).power(4), Permutation::identity());
        }
    }

    #[test]
    fn single_move_is_not_solved() {
        assert_ne!(Cube::solved().apply("F2".parse().unwrap()), Cube::solved());
    }

    #[test]
    fn apply_leaves_input_untouched() {
        let before = *SCRAMBLED;
        let _ = before.apply("R".parse().unwrap());
        assert_eq!(before, *SCRAMBLED);
    }

    #[test]
    fn turns_keep_centers() {
        for m in Move::all() {
            let cube = Cube::solved().apply(m);
            for face in Face::all() {
                assert_eq!(cube.center(face), face.color());
            }
        }
    }

    #[test]
    fn front_turn_moves_up_row_onto_right() {
        let cube = cube_with_moves("F");
        let right = cube.face_colors(Face::Right);
        assert_eq!([right[0], right[3], right[6]], [Color::White; 3]);
        assert_eq!(cube.face_colors(Face::Up)[6..], [Color::Orange; 3]);
        assert_eq!(cube.face_colors(Face::Down)[0..3], [Color::Red; 3]);
    }

    #[test]
    fn prime_is_three_quarters() {
        for face in Face::all() {
            let prime = Move {
                face,
                direction: Direction::Reverse,
            };
            assert_eq!(SCRAMBLED.apply(prime), quarters(&SCRAMBLED, face, 3));
        }
    }

    #[test]
    fn double_is_two_quarters() {
        for face in Face::all() {
            let double = Move {
                face,
                direction: Direction::Double,
            };
            assert_eq!(SCRAMBLED.apply(double), quarters(&SCRAMBLED, face, 2));
        }
    }

    #[test]
    fn move_then_inverse_is_identity() {
        for m in Move::all() {
            assert_eq!(SCRAMBLED.apply(m).apply(m.inverse()), *SCRAMBLED);
        }
    }

    #[test]
    fn all_moves_are_distinct() {
        let mut states = Move::all()
            .map(|m| Cube::solved().apply(m))
            .collect::<Vec<_>>();
        assert_eq!(states.len(), 18);
        states.sort_by_key(|c| c.to_canonical_string().unwrap());
        states.dedup();
        assert_eq!(states.len(), 18);
    }

    #[test]
    fn commutator_has_order_six() {
        let replay = Cube::solved().apply_sequence(&moves(&"R U R' U' ".repeat(6)));
        assert_eq!(replay.states.len(), 24);
        assert_eq!(replay.last, Cube::solved());

        let four = Cube::solved().apply_sequence(&moves("R U R' U' R U R' U' R U R' U' R U R' U'"));
        assert_ne!(four.last, Cube::solved());
    }

    #[test]
    fn sune_has_order_six() {
        let sune = "R U R' U R U2 R' ";
        assert_eq!(cube_with_moves(&sune.repeat(6)), Cube::solved());
    }

    #[test]
    fn replay_of_nothing_is_the_start() {
        let replay = SCRAMBLED.apply_sequence(&[]);
        assert!(replay.states.is_empty());
        assert_eq!(replay.last, *SCRAMBLED);
    }

    #[quickcheck]
    fn moves_conserve_colors(moves: Vec<Move>) -> bool {
        let cube = Cube::solved().apply_all(moves);
        cube.color_count().values().all(|n| *n == 9)
    }

    #[quickcheck]
    fn replay_matches_fold(moves: Vec<Move>) -> bool {
        let replay = SCRAMBLED.apply_sequence(&moves);
        replay.states.len() == moves.len()
            && replay.last == SCRAMBLED.apply_all(moves.iter().copied())
            && replay
                .states
                .iter()
                .zip(moves.iter())
                .enumerate()
                .all(|(i, (state, m))| {
                    let before = if i == 0 { *SCRAMBLED } else { replay.states[i - 1] };
                    before.apply(*m) == *state
                })
    }

    #[quickcheck]
    fn inverse_sequence_undoes(moves: Vec<Move>) -> bool {
        let cube = Cube::solved().apply_all(moves.iter().copied());
        cube.apply_all(Move::inverse_seq(&moves)) == Cube::solved()
    }
}
