//! ui
//!
//! User-facing output.
//!
//! # Modules
//!
//! - [`output`] - Verbosity-aware messages and tracing setup
//! - [`render`] - Net rendering (letters, ANSI, JSON)
//!
//! # Design
//!
//! All terminal output goes through this module so quiet mode and output
//! formats are handled in one place. Diagnostics go to stderr through
//! `tracing`; results go to stdout.

pub mod output;
pub mod render;
