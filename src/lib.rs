//! Cubework - a quarter-turn state engine for the 3×3×3 cube
//!
//! Cubework keeps the 54 stickers of a Rubik's-style cube in memory, applies
//! quarter turns of any face, and projects the state into an unfolded 9×12
//! net for display.
//!
//! # Architecture
//!
//! The codebase follows a layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to engine)
//! - [`engine`] - Shared, lock-guarded cube service and the line protocol
//! - [`core`] - Domain types, the cube state engine, net projection, config
//! - [`ui`] - Output and rendering utilities
//!
//! # Correctness Invariants
//!
//! 1. Every reachable state holds exactly nine stickers of each colour
//! 2. A turn either applies completely or fails before touching state
//! 3. Readers receive copies, never references into the live state
//! 4. Concurrent callers are serialized around each whole operation

pub mod cli;
pub mod core;
pub mod engine;
pub mod ui;
