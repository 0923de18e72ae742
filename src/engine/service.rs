//! engine::service
//!
//! Shared cube service exposing the three external verbs.
//!
//! # Verbs
//!
//! - [`CubeService::reset`] - start again from solved
//! - [`CubeService::turn`] / [`CubeService::turn_index`] - one quarter turn
//! - [`CubeService::view`] - the current state as a 9×12 net
//!
//! # Concurrency
//!
//! The service owns one [`Cube`] behind a `Mutex` and holds the lock for the
//! whole of each verb, so a reader can never observe a half-applied turn.
//! No verb blocks or performs I/O while the lock is held. Face identifiers
//! are resolved before the lock is taken; an invalid one never reaches the
//! cube.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use tracing::debug;

use crate::core::cube::{Cube, CubeState};
use crate::core::net::Net;
use crate::core::types::{Face, Turn, TypeError};

/// Thread-safe owner of a single cube.
///
/// Share it across threads with `Arc<CubeService>`.
#[derive(Debug, Default)]
pub struct CubeService {
    cube: Mutex<Cube>,
}

impl CubeService {
    /// Create a service holding a solved cube.
    pub fn new() -> Self {
        Self {
            cube: Mutex::new(Cube::new()),
        }
    }

    /// Restore the cube to its solved state.
    pub fn reset(&self) {
        let started = Instant::now();
        self.lock().reset();
        debug!(elapsed_us = started.elapsed().as_micros() as u64, "reset");
    }

    /// Perform one quarter turn of `face`.
    pub fn turn(&self, face: Face, clockwise: bool) {
        let started = Instant::now();
        self.lock().turn(face, clockwise);
        debug!(
            face = %face,
            clockwise,
            elapsed_us = started.elapsed().as_micros() as u64,
            "move"
        );
    }

    /// Perform one quarter turn of the face with wire code `face`.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidFace` if `face` is not a valid code; the
    /// cube is not touched.
    pub fn turn_index(&self, face: usize, clockwise: bool) -> Result<(), TypeError> {
        let face = Face::from_index(face).inspect_err(|e| debug!(error = %e, "move rejected"))?;
        self.turn(face, clockwise);
        Ok(())
    }

    /// Apply a [`Turn`].
    pub fn apply(&self, turn: Turn) {
        self.turn(turn.face, turn.clockwise);
    }

    /// Apply a sequence of turns as one locked operation.
    ///
    /// No other caller can observe the cube part-way through the sequence.
    pub fn apply_all(&self, turns: &[Turn]) {
        let started = Instant::now();
        self.lock().apply_all(turns);
        debug!(
            turns = turns.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "apply"
        );
    }

    /// Current state as an exploded net.
    pub fn view(&self) -> Net {
        Net::from_state(&self.snapshot())
    }

    /// Independent copy of the current state.
    pub fn snapshot(&self) -> CubeState {
        self.lock().snapshot()
    }

    fn lock(&self) -> MutexGuard<'_, Cube> {
        // Turns cannot panic part-way, so a poisoned cube is still consistent.
        self.cube.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
