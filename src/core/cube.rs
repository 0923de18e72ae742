//! core::cube
//!
//! The cube state engine.
//!
//! # Representation
//!
//! [`CubeState`] holds six independent 3×3 grids, one per [`Face`], indexed
//! by the face's wire code. It is a `Copy` value type: a snapshot is a plain
//! copy and can never alias the engine's live grid.
//!
//! # Turning
//!
//! A quarter turn is two steps applied together:
//!
//! 1. The turned face's own grid rotates 90° through a temporary copy.
//! 2. The four edge strips bordering that face, read from [`ADJACENCY`],
//!    are all buffered and then written back shifted one slot around the
//!    face.
//!
//! # Invariants
//!
//! - Every reachable state has exactly nine stickers of each colour.
//! - Centre stickers never move.
//! - Four identical turns, or a turn followed by its inverse, are the
//!   identity.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use super::types::{Colour, Face, Turn, TypeError};

/// Number of stickers along one edge of a face.
pub const FACE_SIZE: usize = 3;

/// One face's stickers, `grid[row][col]`.
pub type FaceGrid = [[Colour; FACE_SIZE]; FACE_SIZE];

/// Orientation of an edge strip on its neighbour face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Row,
    Col,
}

/// A row or column of a neighbour face that borders a turned face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strip {
    /// Neighbour face the strip lives on.
    pub face: Face,
    /// Fixed row or column index on that face.
    pub index: usize,
    /// Whether `index` names a row or a column.
    pub line: Line,
}

impl Strip {
    const fn row(face: Face, index: usize) -> Self {
        Self {
            face,
            index,
            line: Line::Row,
        }
    }

    const fn col(face: Face, index: usize) -> Self {
        Self {
            face,
            index,
            line: Line::Col,
        }
    }

    /// Grid coordinate of the `offset`-th sticker along this strip.
    const fn cell(self, offset: usize) -> (usize, usize) {
        match self.line {
            Line::Row => (self.index, offset),
            Line::Col => (offset, self.index),
        }
    }
}

/// The four strips bordering each face, listed clockwise around it and
/// indexed by [`Face::index`].
pub static ADJACENCY: [[Strip; 4]; Face::COUNT] = [
    // Up
    [
        Strip::row(Face::Back, 0),
        Strip::row(Face::Right, 0),
        Strip::row(Face::Front, 0),
        Strip::row(Face::Left, 0),
    ],
    // Down
    [
        Strip::row(Face::Front, 2),
        Strip::row(Face::Right, 2),
        Strip::row(Face::Back, 2),
        Strip::row(Face::Left, 2),
    ],
    // Front
    [
        Strip::row(Face::Up, 2),
        Strip::col(Face::Right, 0),
        Strip::row(Face::Down, 0),
        Strip::col(Face::Left, 2),
    ],
    // Back
    [
        Strip::row(Face::Up, 0),
        Strip::col(Face::Left, 0),
        Strip::row(Face::Down, 2),
        Strip::col(Face::Right, 2),
    ],
    // Right
    [
        Strip::col(Face::Up, 2),
        Strip::col(Face::Back, 0),
        Strip::col(Face::Down, 2),
        Strip::col(Face::Front, 2),
    ],
    // Left
    [
        Strip::col(Face::Up, 0),
        Strip::col(Face::Front, 0),
        Strip::col(Face::Down, 0),
        Strip::col(Face::Back, 2),
    ],
];

/// Neighbour strips of `face`, clockwise.
pub fn adjacent_strips(face: Face) -> &'static [Strip; 4] {
    &ADJACENCY[face.index()]
}

/// Full sticker state: six 3×3 grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubeState {
    faces: [FaceGrid; Face::COUNT],
}

impl CubeState {
    /// The solved configuration: every face filled with its own colour.
    pub fn solved() -> Self {
        Self {
            faces: Face::ALL.map(|face| [[face.solved_colour(); FACE_SIZE]; FACE_SIZE]),
        }
    }

    /// Grid of one face.
    pub fn face(&self, face: Face) -> &FaceGrid {
        &self.faces[face.index()]
    }

    /// Sticker at `(row, col)` on `face`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not below [`FACE_SIZE`].
    pub fn sticker(&self, face: Face, row: usize, col: usize) -> Colour {
        self.faces[face.index()][row][col]
    }

    /// Per-colour sticker counts, indexed by [`Colour::code`].
    pub fn colour_counts(&self) -> [usize; 6] {
        let mut counts = [0usize; 6];
        for grid in &self.faces {
            for row in grid {
                for colour in row {
                    counts[colour.code() as usize] += 1;
                }
            }
        }
        counts
    }

    /// Whether each colour appears exactly nine times.
    pub fn has_valid_colour_counts(&self) -> bool {
        self.colour_counts()
            .iter()
            .all(|&n| n == FACE_SIZE * FACE_SIZE)
    }

    fn read_strip(&self, strip: Strip) -> [Colour; FACE_SIZE] {
        std::array::from_fn(|offset| {
            let (row, col) = strip.cell(offset);
            self.faces[strip.face.index()][row][col]
        })
    }

    fn write_strip(&mut self, strip: Strip, values: [Colour; FACE_SIZE]) {
        for (offset, colour) in values.into_iter().enumerate() {
            let (row, col) = strip.cell(offset);
            self.faces[strip.face.index()][row][col] = colour;
        }
    }

    /// Rotate the face's own grid 90°.
    fn rotate_face_tiles(&mut self, face: Face, clockwise: bool) {
        let original = self.faces[face.index()];
        let grid = &mut self.faces[face.index()];

        for (row, tiles) in original.iter().enumerate() {
            for (col, &tile) in tiles.iter().enumerate() {
                if clockwise {
                    grid[col][FACE_SIZE - 1 - row] = tile;
                } else {
                    grid[FACE_SIZE - 1 - col][row] = tile;
                }
            }
        }
    }

    /// Shift the four bordering strips one slot around the face.
    fn cycle_edge_strips(&mut self, face: Face, clockwise: bool) {
        let strips = adjacent_strips(face);
        let extracted: [[Colour; FACE_SIZE]; 4] =
            std::array::from_fn(|slot| self.read_strip(strips[slot]));

        // Target slot t takes the strip from (t - shift) mod 4.
        let shift = if clockwise { 1 } else { 3 };
        for (target, &strip) in strips.iter().enumerate() {
            self.write_strip(strip, extracted[(target + 4 - shift) % 4]);
        }
    }

    fn turn(&mut self, face: Face, clockwise: bool) {
        self.rotate_face_tiles(face, clockwise);
        self.cycle_edge_strips(face, clockwise);
    }
}

impl Default for CubeState {
    fn default() -> Self {
        Self::solved()
    }
}

impl Index<(Face, usize, usize)> for CubeState {
    type Output = Colour;

    fn index(&self, (face, row, col): (Face, usize, usize)) -> &Colour {
        &self.faces[face.index()][row][col]
    }
}

impl IndexMut<(Face, usize, usize)> for CubeState {
    fn index_mut(&mut self, (face, row, col): (Face, usize, usize)) -> &mut Colour {
        &mut self.faces[face.index()][row][col]
    }
}

/// The cube engine.
///
/// Owns one [`CubeState`] and mutates it only through quarter turns. Readers
/// get copies via [`Cube::snapshot`].
///
/// # Example
///
/// ```
/// use cubework::core::cube::{Cube, CubeState};
/// use cubework::core::types::{Colour, Face};
///
/// let mut cube = Cube::new();
/// cube.turn(Face::Front, true);
/// assert_eq!(cube.snapshot().sticker(Face::Up, 2, 0), Colour::Orange);
///
/// cube.reset();
/// assert_eq!(cube.snapshot(), CubeState::solved());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Cube {
    state: CubeState,
}

impl Cube {
    /// Create a cube in the solved configuration.
    pub fn new() -> Self {
        Self {
            state: CubeState::solved(),
        }
    }

    /// Apply one quarter turn of `face`.
    pub fn turn(&mut self, face: Face, clockwise: bool) {
        self.state.turn(face, clockwise);
    }

    /// Apply one quarter turn of the face with wire code `face`.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidFace` if `face` is not in `0..6`. The cube
    /// is left untouched in that case.
    pub fn turn_index(&mut self, face: usize, clockwise: bool) -> Result<(), TypeError> {
        let face = Face::from_index(face)?;
        self.turn(face, clockwise);
        Ok(())
    }

    /// Apply a [`Turn`].
    pub fn apply(&mut self, turn: Turn) {
        self.turn(turn.face, turn.clockwise);
    }

    /// Apply a sequence of turns in order.
    pub fn apply_all<'a>(&mut self, turns: impl IntoIterator<Item = &'a Turn>) {
        for turn in turns {
            self.apply(*turn);
        }
    }

    /// Independent copy of the current state.
    pub fn snapshot(&self) -> CubeState {
        self.state
    }

    /// Discard the current state and start again from solved.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Per-colour sticker counts of the live state.
    pub fn colour_counts(&self) -> [usize; 6] {
        self.state.colour_counts()
    }
}
