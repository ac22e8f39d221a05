//! Demo autopilot
//!
//! Plays the game from a frame snapshot: flip away when the next obstacle on
//! the cube's rail gets close.

use super::gravity::GravityDirection;
use super::state::{Frame, GameMode};
use crate::consts::PLAYER_SIZE;

/// Horizontal gap at which the autopilot reacts
pub const REACT_DISTANCE: f32 = 90.0;

/// Whether the autopilot would click this frame
pub fn wants_flip(frame: &Frame) -> bool {
    if frame.mode != GameMode::Playing {
        return false;
    }

    let player_left = frame.player.x - PLAYER_SIZE / 2.0;
    let player_right = frame.player.x + PLAYER_SIZE / 2.0;
    let on_top = frame.gravity == GravityDirection::Up;

    frame
        .obstacles
        .iter()
        .filter(|o| o.attached_top == on_top)
        .filter(|o| o.right_edge() >= player_left)
        .map(|o| o.x - o.width / 2.0 - player_right)
        .any(|gap| gap <= REACT_DISTANCE)
}
