use crate::prelude::*;

impl Cube {
    /// Encodes the state as 54 face labels in U, R, F, D, L, B order.
    ///
    /// Each sticker is written as the label of the face whose center holds
    /// the sticker's color, so the result does not depend on which color
    /// scheme the cube uses.
    pub fn to_canonical_string(&self) -> Result<String, EncodingError> {
        let mut centers: Vec<(Color, Face)> = Vec::with_capacity(6);
        for face in Face::all() {
            let color = self.center(face);
            if let Some((_, first)) = centers.iter().find(|(c, _)| *c == color) {
                return Err(EncodingError::DuplicateCenter {
                    color,
                    first: *first,
                    second: face,
                });
            }
            centers.push((color, face));
        }

        let mut encoded = String::with_capacity(54);
        for face in Face::all() {
            for (index, color) in self.face_colors(face).iter().enumerate() {
                let home = centers
                    .iter()
                    .find(|(c, _)| c == color)
                    .map(|(_, f)| *f)
                    .ok_or(EncodingError::UnknownColor {
                        face,
                        index,
                        color: *color,
                    })?;
                encoded.push(home.letter());
            }
        }
        Ok(encoded)
    }

    /// Builds the cube an encoded string describes, using the standard
    /// color of each label.
    pub fn from_canonical(encoded: &str) -> Result<Cube, EncodingError> {
        let labels = encoded
            .chars()
            .enumerate()
            .map(|(position, label)| {
                Face::from_letter(label).ok_or(EncodingError::UnknownLabel { label, position })
            })
            .collect::<Result<Vec<_>, _>>()?;
        if labels.len() != 54 {
            return Err(EncodingError::WrongLength(labels.len()));
        }

        Ok(Cube::from_facelets(|i| labels[i].color()))
    }
}
