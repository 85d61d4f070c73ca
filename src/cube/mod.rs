use serde::{Deserialize, Serialize};

mod encoding;
mod surface;
mod turn;

pub use surface::{Cube, FaceColors};
pub use turn::Replay;

/// Face labels, declared in the order the solver encoding walks them.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    enum_iterator::Sequence,
    Serialize,
    Deserialize,
)]
pub enum Face {
    #[serde(rename = "U")]
    Up,
    #[serde(rename = "R")]
    Right,
    #[serde(rename = "F")]
    Front,
    #[serde(rename = "D")]
    Down,
    #[serde(rename = "L")]
    Left,
    #[serde(rename = "B")]
    Back,
}

impl Face {
    pub fn all() -> impl Iterator<Item = Face> {
        enum_iterator::all()
    }

    pub fn letter(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Right => 'R',
            Face::Front => 'F',
            Face::Down => 'D',
            Face::Left => 'L',
            Face::Back => 'B',
        }
    }

    pub fn from_letter(c: char) -> Option<Face> {
        Face::all().find(|f| f.letter() == c)
    }

    /// Color of this face's stickers on a solved cube.
    pub fn color(self) -> Color {
        match self {
            Face::Up => Color::White,
            Face::Down => Color::Yellow,
            Face::Left => Color::Orange,
            Face::Right => Color::Red,
            Face::Front => Color::Green,
            Face::Back => Color::Blue,
        }
    }

    pub fn opposite(self) -> Face {
        match self {
            Face::Up => Face::Down,
            Face::Down => Face::Up,
            Face::Left => Face::Right,
            Face::Right => Face::Left,
            Face::Front => Face::Back,
            Face::Back => Face::Front,
        }
    }

    pub fn same_axis(a: Face, b: Face) -> bool {
        a == b || a.opposite() == b
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    enum_iterator::Sequence,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Yellow,
    Orange,
    Red,
    Green,
    Blue,
}

impl Color {
    pub fn all() -> impl Iterator<Item = Color> {
        enum_iterator::all()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let c = match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Orange => 'O',
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Blue => 'B',
        };
        write!(f, "{}", c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faces_in_encoding_order() {
        let letters: String = Face::all().map(Face::letter).collect();
        assert_eq!(letters, "URFDLB");
    }

    #[test]
    fn letters_round_trip() {
        for face in Face::all() {
            assert_eq!(Face::from_letter(face.letter()), Some(face));
        }
        assert_eq!(Face::from_letter('u'), None);
        assert_eq!(Face::from_letter('X'), None);
    }

    #[test]
    fn every_face_has_its_own_color() {
        let mut colors = Face::all().map(Face::color).collect::<Vec<_>>();
        colors.sort();
        colors.dedup();
        assert_eq!(colors.len(), 6);
    }

    #[test]
    fn opposite_faces_share_an_axis() {
        for face in Face::all() {
            assert_eq!(face.opposite().opposite(), face);
            assert!(Face::same_axis(face, face.opposite()));
        }
        assert!(!Face::same_axis(Face::Up, Face::Front));
    }

    #[test]
    fn colors_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&Color::Orange).unwrap(), "\"orange\"");
        assert_eq!(serde_json::to_string(&Face::Back).unwrap(), "\"B\"");
    }
}
