use crate::prelude::*;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sticker-level cube state: six 3x3 faces, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "FaceColors", try_from = "FaceColors")]
pub struct Cube {
    pub(super) surfaces: [Surface; 6],
}

impl Cube {
    pub fn solved() -> Cube {
        let mut surfaces = [Surface::from(Color::White); 6];
        for face in Face::all() {
            surfaces[face.index()] = Surface::from(face.color());
        }
        Cube { surfaces }
    }

    pub fn face_colors(&self, face: Face) -> &[Color; 9] {
        &self.surfaces[face.index()].0
    }

    pub fn center(&self, face: Face) -> Color {
        self.surfaces[face.index()].center()
    }

    /// Occurrences of each color. Any reachable state has nine of each.
    pub fn color_count(&self) -> BTreeMap<Color, usize> {
        let mut counts = BTreeMap::new();
        for color in self.surfaces.iter().flat_map(|s| s.0.iter()) {
            *counts.entry(*color).or_insert(0) += 1;
        }
        counts
    }

    /// Every face is a single color, whichever colors the centers hold.
    pub fn is_solved(&self) -> bool {
        self.surfaces.iter().all(Surface::is_monochrome)
    }

    /// Sticker at `index` counting faces in encoding order, 9 per face.
    pub(super) fn facelet(&self, index: usize) -> Color {
        self.surfaces[index / 9].0[index % 9]
    }

    pub(super) fn from_facelets(mut facelet: impl FnMut(usize) -> Color) -> Cube {
        let mut surfaces = [Surface::from(Color::White); 6];
        for (f, surface) in surfaces.iter_mut().enumerate() {
            for (i, sticker) in surface.0.iter_mut().enumerate() {
                *sticker = facelet(f * 9 + i);
            }
        }
        Cube { surfaces }
    }
}

impl Default for Cube {
    fn default() -> Self {
        Cube::solved()
    }
}

impl std::fmt::Display for Cube {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let rows = |face: Face| {
            let s = &self.surfaces[face.index()];
            [s.row(0), s.row(1), s.row(2)]
        };

        for row in rows(Face::Up).iter() {
            writeln!(f, "    {}", row)?;
        }

        let middle = [Face::Left, Face::Front, Face::Right, Face::Back]
            .iter()
            .map(|face| rows(*face))
            .collect::<Vec<_>>();

        for index in 0..3 {
            let line = middle
                .iter()
                .map(|rows| rows[index].to_string())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", line)?;
        }

        for row in rows(Face::Down).iter() {
            writeln!(f, "    {}", row)?;
        }

        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub(super) struct Surface(pub(super) [Color; 9]);

impl Surface {
    fn center(&self) -> Color {
        self.0[4]
    }

    fn is_monochrome(&self) -> bool {
        self.0.iter().all(|c| *c == self.center())
    }

    fn row(&self, row: usize) -> Row {
        Row([self.0[row * 3], self.0[row * 3 + 1], self.0[row * 3 + 2]])
    }
}

impl From<Color> for Surface {
    fn from(color: Color) -> Surface {
        Surface([color; 9])
    }
}

struct Row([Color; 3]);

impl std::fmt::Display for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}{}", self.0[0], self.0[1], self.0[2])
    }
}

/// Transport shape of a cube: face label to its nine colors, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FaceColors(pub BTreeMap<Face, Vec<Color>>);

impl From<Cube> for FaceColors {
    fn from(cube: Cube) -> Self {
        FaceColors(
            Face::all()
                .map(|face| (face, cube.face_colors(face).to_vec()))
                .collect(),
        )
    }
}

impl TryFrom<FaceColors> for Cube {
    type Error = EncodingError;

    fn try_from(faces: FaceColors) -> Result<Cube, EncodingError> {
        let mut surfaces = [Surface::from(Color::White); 6];
        for face in Face::all() {
            let colors = faces.0.get(&face).ok_or(EncodingError::MissingFace(face))?;
            surfaces[face.index()] = Surface(colors.as_slice().try_into().map_err(|_| {
                EncodingError::StickerCount {
                    face,
                    count: colors.len(),
                }
            })?);
        }
        Ok(Cube { surfaces })
    }
}
