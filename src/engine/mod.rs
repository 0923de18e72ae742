//! engine
//!
//! Shares the cube engine between callers and carries the external verbs.
//!
//! # Architecture
//!
//! - [`service`] - [`CubeService`], a lock-guarded cube exposing
//!   reset / move / view
//! - [`session`] - the line protocol that drives a service from any
//!   `BufRead` / `Write` pair
//!
//! # Invariants
//!
//! - Every verb runs to completion under the service lock
//! - A rejected move never mutates the cube
//! - Views are built from snapshots, never from the live state

pub mod service;
pub mod session;

pub use service::CubeService;
pub use session::{Flow, Request, Session, SessionError, SessionOptions, SessionStats};

use crate::core::config::Config;
use crate::ui::output::Verbosity;

/// Execution context for commands.
///
/// Contains global settings derived from CLI flags and the loaded config.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (minimal output).
    pub quiet: bool,
    /// Loaded configuration.
    pub config: Config,
}

impl Context {
    /// Output verbosity derived from the flags.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }
}
