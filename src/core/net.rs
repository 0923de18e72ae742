//! core::net
//!
//! Exploded ("net") view of a cube state.
//!
//! The six 3×3 faces are laid out in a 9×12 grid:
//!
//! ```text
//!       [ Up  ]
//! [Left][Front][Right][Back]
//!       [Down ]
//! ```
//!
//! Cells outside every face block hold `None`. The projection is a pure
//! re-indexing of a [`CubeState`]; it carries no state of its own.

use serde::{Deserialize, Serialize};

use super::cube::{CubeState, FACE_SIZE};
use super::types::{Colour, Face};

/// Rows in the net.
pub const NET_ROWS: usize = 9;

/// Columns in the net.
pub const NET_COLS: usize = 12;

/// Top-left corner `(row, col)` of each face's block in the net.
pub const NET_OFFSETS: [(Face, (usize, usize)); Face::COUNT] = [
    (Face::Up, (0, 3)),
    (Face::Left, (3, 0)),
    (Face::Front, (3, 3)),
    (Face::Right, (3, 6)),
    (Face::Back, (3, 9)),
    (Face::Down, (6, 3)),
];

/// A 9×12 exploded view. Serializes as nested arrays of colour codes and
/// `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Net {
    cells: [[Option<Colour>; NET_COLS]; NET_ROWS],
}

impl Net {
    /// Project `state` into the net layout.
    pub fn from_state(state: &CubeState) -> Self {
        let mut cells = [[None; NET_COLS]; NET_ROWS];

        for (face, (top, left)) in NET_OFFSETS {
            for (r, row) in state.face(face).iter().enumerate() {
                for (c, &colour) in row.iter().enumerate() {
                    cells[top + r][left + c] = Some(colour);
                }
            }
        }

        Self { cells }
    }

    /// Colour at `(row, col)`, or `None` for empty cells and coordinates
    /// outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<Colour> {
        self.cells.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    /// All rows, top to bottom.
    pub fn rows(&self) -> &[[Option<Colour>; NET_COLS]; NET_ROWS] {
        &self.cells
    }

    /// Face whose block contains `(row, col)`, if any.
    pub fn face_at(row: usize, col: usize) -> Option<Face> {
        NET_OFFSETS.iter().find_map(|&(face, (top, left))| {
            let inside = (top..top + FACE_SIZE).contains(&row)
                && (left..left + FACE_SIZE).contains(&col);
            inside.then_some(face)
        })
    }
}

impl From<&CubeState> for Net {
    fn from(state: &CubeState) -> Self {
        Self::from_state(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cube::Cube;

    #[test]
    fn solved_corners_are_empty() {
        let net = Net::from_state(&CubeState::solved());
        assert_eq!(net.get(0, 0), None);
        assert_eq!(net.get(0, 11), None);
        assert_eq!(net.get(8, 0), None);
        assert_eq!(net.get(8, 11), None);
    }

    #[test]
    fn solved_centres() {
        let net = Net::from_state(&CubeState::solved());
        assert_eq!(net.get(1, 4), Some(Colour::White));
        assert_eq!(net.get(4, 1), Some(Colour::Orange));
        assert_eq!(net.get(4, 4), Some(Colour::Green));
        assert_eq!(net.get(4, 7), Some(Colour::Red));
        assert_eq!(net.get(4, 10), Some(Colour::Blue));
        assert_eq!(net.get(7, 4), Some(Colour::Yellow));
    }

    #[test]
    fn exactly_fifty_four_cells_filled() {
        let net = Net::from_state(&CubeState::solved());
        let filled = net.rows().iter().flatten().filter(|c| c.is_some()).count();
        assert_eq!(filled, 54);
    }

    #[test]
    fn out_of_range_is_none() {
        let net = Net::from_state(&CubeState::solved());
        assert_eq!(net.get(9, 0), None);
        assert_eq!(net.get(0, 12), None);
    }

    #[test]
    fn face_at_matches_offsets() {
        assert_eq!(Net::face_at(0, 3), Some(Face::Up));
        assert_eq!(Net::face_at(5, 11), Some(Face::Back));
        assert_eq!(Net::face_at(8, 5), Some(Face::Down));
        assert_eq!(Net::face_at(0, 0), None);
        assert_eq!(Net::face_at(6, 6), None);
    }

    #[test]
    fn follows_face_orientation() {
        let mut cube = Cube::new();
        cube.turn(Face::Front, true);
        let state = cube.snapshot();
        let net = Net::from_state(&state);
        for (face, (top, left)) in NET_OFFSETS {
            for r in 0..FACE_SIZE {
                for c in 0..FACE_SIZE {
                    assert_eq!(net.get(top + r, left + c), Some(state.sticker(face, r, c)));
                }
            }
        }
    }

    #[test]
    fn json_shape() {
        let net = Net::from_state(&CubeState::solved());
        let value = serde_json::to_value(net).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), NET_ROWS);
        assert!(rows.iter().all(|r| r.as_array().unwrap().len() == NET_COLS));
        assert!(rows[0][0].is_null());
        assert_eq!(rows[1][4], Colour::White.code());
        assert_eq!(rows[4][4], Colour::Green.code());
    }
}
