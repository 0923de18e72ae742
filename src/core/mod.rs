//! core
//!
//! Core domain types, the cube engine, and configuration.
//!
//! # Modules
//!
//! - [`types`] - Strong types: Face, Colour, Turn
//! - [`cube`] - Sticker state and the quarter-turn engine
//! - [`net`] - 9×12 exploded view projection
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid faces and colours at compile time
//! - The engine is a plain synchronous value type with no I/O
//! - Readers only ever see copies of the sticker state

pub mod config;
pub mod cube;
pub mod net;
pub mod types;
