//! Property-based tests for the cube engine.
//!
//! These tests use proptest to verify the group invariants hold from
//! arbitrary reachable states, not just from solved.

use proptest::prelude::*;

use cubework::core::cube::{Cube, CubeState};
use cubework::core::net::Net;
use cubework::core::types::{Colour, Face, Turn};
use cubework::engine::CubeService;

/// Strategy for generating a single face.
fn face() -> impl Strategy<Value = Face> {
    prop::sample::select(Face::ALL.to_vec())
}

/// Strategy for generating a single quarter turn.
fn turn() -> impl Strategy<Value = Turn> {
    (face(), any::<bool>()).prop_map(|(face, clockwise)| Turn::new(face, clockwise))
}

/// Strategy for generating move sequences.
fn sequence() -> impl Strategy<Value = Vec<Turn>> {
    prop::collection::vec(turn(), 0..60)
}

/// Cube reached from solved by `turns`.
fn reached(turns: &[Turn]) -> Cube {
    let mut cube = Cube::new();
    cube.apply_all(turns);
    cube
}

proptest! {
    /// Four identical quarter turns are the identity.
    #[test]
    fn four_turns_identity(setup in sequence(), face in face(), clockwise in any::<bool>()) {
        let mut cube = reached(&setup);
        let before = cube.snapshot();
        for _ in 0..4 {
            cube.turn(face, clockwise);
        }
        prop_assert_eq!(cube.snapshot(), before);
    }

    /// A turn followed by its inverse is the identity.
    #[test]
    fn turn_then_inverse_identity(setup in sequence(), turn in turn()) {
        let mut cube = reached(&setup);
        let before = cube.snapshot();
        cube.apply(turn);
        cube.apply(turn.inverse());
        prop_assert_eq!(cube.snapshot(), before);
    }

    /// Undoing a whole sequence in reverse returns to solved.
    #[test]
    fn reversed_inverse_sequence_solves(setup in sequence()) {
        let mut cube = reached(&setup);
        let undo: Vec<Turn> = setup.iter().rev().map(|t| t.inverse()).collect();
        cube.apply_all(&undo);
        prop_assert_eq!(cube.snapshot(), CubeState::solved());
    }

    /// Nine stickers of each colour in every reachable state.
    #[test]
    fn colour_counts_preserved(setup in sequence()) {
        let cube = reached(&setup);
        prop_assert_eq!(cube.colour_counts(), [9; 6]);
    }

    /// Centre stickers never move.
    #[test]
    fn centres_fixed(setup in sequence()) {
        let state = reached(&setup).snapshot();
        for face in Face::ALL {
            prop_assert_eq!(state.sticker(face, 1, 1), face.solved_colour());
        }
    }

    /// A turn only touches the turned face and its four neighbours.
    #[test]
    fn opposite_face_untouched(setup in sequence(), turn in turn()) {
        let opposite = match turn.face {
            Face::Up => Face::Down,
            Face::Down => Face::Up,
            Face::Front => Face::Back,
            Face::Back => Face::Front,
            Face::Left => Face::Right,
            Face::Right => Face::Left,
        };
        let mut cube = reached(&setup);
        let before = cube.snapshot();
        cube.apply(turn);
        let after = cube.snapshot();
        prop_assert_eq!(after.face(opposite), before.face(opposite));
    }

    /// Mutating a snapshot never leaks back into the engine.
    #[test]
    fn snapshot_is_a_copy(setup in sequence(), face in face(), row in 0usize..3, col in 0usize..3) {
        let cube = reached(&setup);
        let expected = cube.snapshot();
        let mut copy = cube.snapshot();
        let replacement = if copy[(face, row, col)] == Colour::Red {
            Colour::Blue
        } else {
            Colour::Red
        };
        copy[(face, row, col)] = replacement;
        prop_assert_ne!(copy, expected);
        prop_assert_eq!(cube.snapshot(), expected);
    }

    /// Reset reproduces the construction-time state from anywhere.
    #[test]
    fn reset_restores_initial(setup in sequence()) {
        let initial = Cube::new().snapshot();
        let mut cube = reached(&setup);
        cube.reset();
        prop_assert_eq!(cube.snapshot(), initial);
    }

    /// Out-of-range face codes fail and leave state unchanged.
    #[test]
    fn invalid_face_code_rejected(setup in sequence(), code in 6usize..10_000, clockwise in any::<bool>()) {
        let mut cube = reached(&setup);
        let before = cube.snapshot();
        prop_assert!(cube.turn_index(code, clockwise).is_err());
        prop_assert_eq!(cube.snapshot(), before);
    }

    /// The net holds exactly the snapshot's stickers plus empty cells.
    #[test]
    fn net_mirrors_snapshot(setup in sequence()) {
        let state = reached(&setup).snapshot();
        let net = Net::from_state(&state);
        let filled = net.rows().iter().flatten().filter(|c| c.is_some()).count();
        prop_assert_eq!(filled, 54);
        prop_assert_eq!(net.get(1, 4), Some(state.sticker(Face::Up, 1, 1)));
        prop_assert_eq!(net.get(5, 11), Some(state.sticker(Face::Back, 2, 2)));
    }

    /// The shared service and a bare engine agree on every sequence.
    #[test]
    fn service_matches_engine(setup in sequence()) {
        let service = CubeService::new();
        for turn in &setup {
            service.apply(*turn);
        }
        prop_assert_eq!(service.snapshot(), reached(&setup).snapshot());
    }

    /// Turn notation round-trips through Display.
    #[test]
    fn turn_notation_roundtrip(turn in turn()) {
        let parsed: Turn = turn.to_string().parse().unwrap();
        prop_assert_eq!(parsed, turn);
    }
}

#[test]
fn solved_state_matches_fixed_colours() {
    let state = CubeState::solved();
    assert_eq!(state.face(Face::Right), &[[Colour::Red; 3]; 3]);
    assert_eq!(state.face(Face::Left), &[[Colour::Orange; 3]; 3]);
}
