//! Turn order.

use super::Player;

/// The player to move after `step` accepted moves.
///
/// X moves on even steps and O on odd steps. History never stores a
/// current player; it is always recomputed from the step number.
pub fn side_to_move(step: usize) -> Player {
    if step % 2 == 0 { Player::X } else { Player::O }
}
