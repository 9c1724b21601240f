//! Formal verification of win detection using the Kani model checker.
//!
//! These proof harnesses check `detect_winner` against every possible
//! board, including boards normal play can never reach.

use super::win::detect_winner;
use crate::{Board, Cell};

/// A reported line is always three cells of the reported player.
#[kani::proof]
fn verify_reported_line_is_uniform() {
    let board: Board = kani::any();

    if let Some(win) = detect_winner(&board) {
        for pos in win.line() {
            assert_eq!(board.get(pos), Cell::Occupied(win.player()));
        }
    }
}

/// An empty cell is never part of a reported line.
#[kani::proof]
fn verify_empty_cells_never_win() {
    let board: Board = kani::any();

    if let Some(win) = detect_winner(&board) {
        assert!(win.line().iter().all(|pos| !board.is_empty(*pos)));
    }
}
