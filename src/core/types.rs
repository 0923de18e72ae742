//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`Face`] - One of the six cube faces
//! - [`Colour`] - One of the six sticker colours
//! - [`Turn`] - A quarter turn of one face in one direction
//!
//! # Validation
//!
//! Faces and colours are closed enums, so an out-of-range identifier can only
//! arrive through one of the parsing entry points (`FromStr`, `TryFrom<u8>`,
//! [`Face::from_index`]). Those entry points fail with a [`TypeError`]
//! instead of clamping or defaulting.
//!
//! # Examples
//!
//! ```
//! use cubework::core::types::{Face, Turn};
//!
//! let turn: Turn = "F'".parse().unwrap();
//! assert_eq!(turn.face, Face::Front);
//! assert!(!turn.clockwise);
//!
//! assert!(Face::from_index(6).is_err());
//! assert!("X".parse::<Turn>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid face identifier: {0}")]
    InvalidFace(String),

    #[error("invalid colour: {0}")]
    InvalidColour(String),

    #[error("invalid turn: {0}")]
    InvalidTurn(String),
}

/// One of the six faces of the cube.
///
/// The discriminants are the numeric wire codes used by the exploded-view
/// service: Up=0, Down=1, Front=2, Back=3, Right=4, Left=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Face {
    Up = 0,
    Down = 1,
    Front = 2,
    Back = 3,
    Right = 4,
    Left = 5,
}

impl Face {
    /// Every face, in wire-code order.
    pub const ALL: [Face; 6] = [
        Face::Up,
        Face::Down,
        Face::Front,
        Face::Back,
        Face::Right,
        Face::Left,
    ];

    /// Number of faces on the cube.
    pub const COUNT: usize = 6;

    /// Numeric wire code of this face, also its slot in per-face tables.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Resolve a numeric wire code.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidFace` for any code outside `0..6`.
    pub fn from_index(index: usize) -> Result<Self, TypeError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| TypeError::InvalidFace(index.to_string()))
    }

    /// Colour this face carries on a solved cube.
    pub const fn solved_colour(self) -> Colour {
        match self {
            Face::Up => Colour::White,
            Face::Down => Colour::Yellow,
            Face::Front => Colour::Green,
            Face::Back => Colour::Blue,
            Face::Right => Colour::Red,
            Face::Left => Colour::Orange,
        }
    }

    /// Singmaster letter (U, D, F, B, R, L).
    pub const fn letter(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Down => 'D',
            Face::Front => 'F',
            Face::Back => 'B',
            Face::Right => 'R',
            Face::Left => 'L',
        }
    }

    /// Full face name.
    pub const fn name(self) -> &'static str {
        match self {
            Face::Up => "Up",
            Face::Down => "Down",
            Face::Front => "Front",
            Face::Back => "Back",
            Face::Right => "Right",
            Face::Left => "Left",
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Face {
    type Err = TypeError;

    /// Parse a face from its name or Singmaster letter, ignoring case.
    ///
    /// A bare number is accepted as a wire code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<usize>() {
            return Self::from_index(code);
        }
        Self::ALL
            .into_iter()
            .find(|face| {
                trimmed.eq_ignore_ascii_case(face.name())
                    || (trimmed.len() == 1 && trimmed.eq_ignore_ascii_case(&face.letter().to_string()))
            })
            .ok_or_else(|| TypeError::InvalidFace(s.to_string()))
    }
}

impl TryFrom<u8> for Face {
    type Error = TypeError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_index(code as usize)
    }
}

/// One of the six sticker colours.
///
/// Discriminants are the numeric wire codes: White=0, Yellow=1, Red=2,
/// Orange=3, Blue=4, Green=5. Serializes as the code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Colour {
    White = 0,
    Yellow = 1,
    Red = 2,
    Orange = 3,
    Blue = 4,
    Green = 5,
}

impl Colour {
    /// Every colour, in wire-code order.
    pub const ALL: [Colour; 6] = [
        Colour::White,
        Colour::Yellow,
        Colour::Red,
        Colour::Orange,
        Colour::Blue,
        Colour::Green,
    ];

    /// Numeric wire code.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Single-letter abbreviation (W, Y, R, O, B, G).
    pub const fn letter(self) -> char {
        match self {
            Colour::White => 'W',
            Colour::Yellow => 'Y',
            Colour::Red => 'R',
            Colour::Orange => 'O',
            Colour::Blue => 'B',
            Colour::Green => 'G',
        }
    }

    /// Full colour name.
    pub const fn name(self) -> &'static str {
        match self {
            Colour::White => "White",
            Colour::Yellow => "Yellow",
            Colour::Red => "Red",
            Colour::Orange => "Orange",
            Colour::Blue => "Blue",
            Colour::Green => "Green",
        }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Colour {
    type Error = TypeError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(code as usize)
            .copied()
            .ok_or_else(|| TypeError::InvalidColour(code.to_string()))
    }
}

impl From<Colour> for u8 {
    fn from(colour: Colour) -> Self {
        colour.code()
    }
}

impl FromStr for Colour {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|colour| {
                trimmed.eq_ignore_ascii_case(colour.name())
                    || (trimmed.len() == 1
                        && trimmed.eq_ignore_ascii_case(&colour.letter().to_string()))
            })
            .ok_or_else(|| TypeError::InvalidColour(s.to_string()))
    }
}

/// A single quarter turn.
///
/// Displays and parses in Singmaster notation: `F` is a clockwise turn of
/// the front face, `F'` the counter-clockwise one. Full face names are also
/// accepted when parsing (`front`, `front'`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Turn {
    /// Face being turned.
    pub face: Face,
    /// Direction, viewed from outside the face.
    pub clockwise: bool,
}

impl Turn {
    /// Create a turn.
    pub const fn new(face: Face, clockwise: bool) -> Self {
        Self { face, clockwise }
    }

    /// Clockwise turn of `face`.
    pub const fn cw(face: Face) -> Self {
        Self::new(face, true)
    }

    /// Counter-clockwise turn of `face`.
    pub const fn ccw(face: Face) -> Self {
        Self::new(face, false)
    }

    /// The turn that undoes this one.
    pub const fn inverse(self) -> Self {
        Self::new(self.face, !self.clockwise)
    }

    /// Parse a whitespace-separated move sequence such as `"F U' R"`.
    ///
    /// # Errors
    ///
    /// Returns the first `TypeError` encountered; nothing is returned for
    /// the tokens that did parse.
    pub fn parse_sequence(input: &str) -> Result<Vec<Turn>, TypeError> {
        input.split_whitespace().map(str::parse).collect()
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.clockwise {
            write!(f, "{}", self.face.letter())
        } else {
            write!(f, "{}'", self.face.letter())
        }
    }
}

impl FromStr for Turn {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (face_part, clockwise) = match trimmed.strip_suffix('\'') {
            Some(rest) => (rest, false),
            None => (trimmed, true),
        };

        if face_part.is_empty() || face_part.ends_with('\'') {
            return Err(TypeError::InvalidTurn(s.to_string()));
        }

        // Numeric wire codes are a service concern, not notation.
        if face_part.chars().all(|c| c.is_ascii_digit()) {
            return Err(TypeError::InvalidTurn(s.to_string()));
        }

        let face = face_part
            .parse::<Face>()
            .map_err(|_| TypeError::InvalidTurn(s.to_string()))?;
        Ok(Self::new(face, clockwise))
    }
}
