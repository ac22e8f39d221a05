//! Data-driven game balance
//!
//! Every gameplay constant that is not tied to the fixed screen layout lives
//! here, so a settings file can override it without touching the simulation.

use serde::{Deserialize, Serialize};

/// Gameplay tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Obstacle scroll speed (units/s, leftward)
    pub obstacle_speed: f32,
    /// Time between obstacle spawns (s)
    pub spawn_interval: f32,
    /// Smallest obstacle height (inclusive)
    pub obstacle_min_height: u32,
    /// Largest obstacle height (inclusive)
    pub obstacle_max_height: u32,
    /// Gravity constant magnitude (units/s²)
    pub gravity: f32,
    /// Minimum time between two gravity flips (s)
    pub flip_cooldown: f32,
    /// Distance from a rail within which the cube snaps onto it
    pub snap_epsilon: f32,
    /// Fraction of the visual size used for collision boxes
    pub hitbox_scale: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            obstacle_speed: 120.0,
            spawn_interval: 2.4,
            obstacle_min_height: 50,
            obstacle_max_height: 110,
            // 1.4 units/frame² at 60 fps
            gravity: 1.4 * 60.0 * 60.0,
            flip_cooldown: 0.35,
            snap_epsilon: 2.0,
            hitbox_scale: 0.7,
        }
    }
}

impl Tuning {
    /// Clamp values that would break the simulation (negative speeds,
    /// inverted height range, zero interval)
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.obstacle_speed.is_finite() && self.obstacle_speed > 0.0) {
            self.obstacle_speed = defaults.obstacle_speed;
        }
        if !(self.spawn_interval.is_finite() && self.spawn_interval > 0.0) {
            self.spawn_interval = defaults.spawn_interval;
        }
        if self.obstacle_min_height > self.obstacle_max_height {
            std::mem::swap(&mut self.obstacle_min_height, &mut self.obstacle_max_height);
        }
        if !(self.gravity.is_finite() && self.gravity > 0.0) {
            self.gravity = defaults.gravity;
        }
        if !(self.flip_cooldown.is_finite() && self.flip_cooldown >= 0.0) {
            self.flip_cooldown = defaults.flip_cooldown;
        }
        if !(self.snap_epsilon.is_finite() && self.snap_epsilon >= 0.0) {
            self.snap_epsilon = defaults.snap_epsilon;
        }
        if !(self.hitbox_scale.is_finite() && self.hitbox_scale > 0.0) {
            self.hitbox_scale = defaults.hitbox_scale;
        }
        self
    }
}
