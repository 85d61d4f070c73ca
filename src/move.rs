use crate::cube::*;
use crate::error::InvalidMoveToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub face: Face,
    pub direction: Direction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, enum_iterator::Sequence)]
pub enum Direction {
    Single,
    Double,
    Reverse,
}

impl Direction {
    pub fn inverse(self) -> Direction {
        match self {
            Direction::Single => Direction::Reverse,
            Direction::Reverse => Direction::Single,
            Direction::Double => Direction::Double,
        }
    }
}

impl Move {
    /// Splits on whitespace; the first bad token fails the whole sequence.
    pub fn parse_sequence(s: &str) -> Result<Vec<Move>, InvalidMoveToken> {
        s.split_whitespace().map(|s| s.parse()).collect()
    }

    pub fn all() -> impl Iterator<Item = Move> {
        Face::all().flat_map(|face| {
            enum_iterator::all::<Direction>().map(move |direction| Move { face, direction })
        })
    }

    pub fn inverse(self) -> Move {
        Move {
            face: self.face,
            direction: self.direction.inverse(),
        }
    }

    pub fn inverse_seq(seq: &[Move]) -> Vec<Move> {
        seq.iter().rev().map(|m| m.inverse()).collect()
    }

    /// Whether `self` is worth trying right after `prev` in a search: never
    /// the same face twice, and opposite faces only in encoding order.
    pub fn could_follow(&self, prev: &Move) -> bool {
        if self.face == prev.face {
            return false;
        }
        !(Face::same_axis(self.face, prev.face) && self.face < prev.face)
    }
}

impl core::str::FromStr for Move {
    type Err = InvalidMoveToken;

    fn from_str(s: &str) -> Result<Move, InvalidMoveToken> {
        let mut chars = s.chars();
        let face = chars
            .next()
            .and_then(Face::from_letter)
            .ok_or_else(|| InvalidMoveToken::new(s))?;

        let direction = match (chars.next(), chars.next()) {
            (None, _) => Direction::Single,
            (Some('\''), None) => Direction::Reverse,
            (Some('2'), None) => Direction::Double,
            _ => return Err(InvalidMoveToken::new(s)),
        };

        Ok(Move { face, direction })
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let suffix = match self.direction {
            Direction::Single => "",
            Direction::Double => "2",
            Direction::Reverse => "'",
        };
        write!(f, "{}{}", self.face, suffix)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Move {
    fn arbitrary<G: quickcheck::Gen>(g: &mut G) -> Move {
        use rand::seq::SliceRandom;
        let all = Move::all().collect::<Vec<_>>();
        *all.choose(g).unwrap()
    }
}
