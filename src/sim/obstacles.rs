//! Scrolling obstacles
//!
//! Obstacles enter from the right edge, attached to either the floor or the
//! ceiling, and scroll left at constant speed. Each one that fully leaves the
//! screen is worth a point.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::Aabb;
use crate::consts::*;
use crate::tuning::Tuning;

/// Source of spawn randomness
pub trait SpawnSource {
    /// Obstacle height, uniform integer in `[min, max]`
    fn height(&mut self, min: u32, max: u32) -> u32;
    /// True to attach the obstacle to the ceiling
    fn attach_top(&mut self) -> bool;
}

/// Seeded PCG-backed spawn source
#[derive(Debug, Clone)]
pub struct RandomSpawns {
    rng: Pcg32,
}

impl RandomSpawns {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl SpawnSource for RandomSpawns {
    fn height(&mut self, min: u32, max: u32) -> u32 {
        self.rng.random_range(min..=max)
    }

    fn attach_top(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }
}

/// A single obstacle (center-based rectangle)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub attached_top: bool,
}

impl Obstacle {
    /// New obstacle just past the right edge, touching the floor or ceiling
    pub fn spawn(height: f32, attached_top: bool) -> Self {
        let y = if attached_top {
            SCREEN_HEIGHT - height / 2.0
        } else {
            height / 2.0
        };
        Self {
            x: SCREEN_WIDTH + OBSTACLE_WIDTH / 2.0,
            y,
            width: OBSTACLE_WIDTH,
            height,
            attached_top,
        }
    }

    #[inline]
    pub fn right_edge(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Full-size bounding box
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_size(Vec2::new(self.x, self.y), Vec2::new(self.width, self.height))
    }
}

/// The live obstacles, in spawn order
#[derive(Debug, Clone)]
pub struct ObstacleField {
    obstacles: Vec<Obstacle>,
    /// Time accumulated toward the next spawn
    spawn_timer: f32,
    speed: f32,
    spawn_interval: f32,
    min_height: u32,
    max_height: u32,
    hitbox_scale: f32,
}

impl ObstacleField {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            obstacles: Vec::new(),
            spawn_timer: 0.0,
            speed: tuning.obstacle_speed,
            spawn_interval: tuning.spawn_interval,
            min_height: tuning.obstacle_min_height,
            max_height: tuning.obstacle_max_height,
            hitbox_scale: tuning.hitbox_scale,
        }
    }

    /// Remove all obstacles and restart the spawn timer
    pub fn clear(&mut self) {
        self.obstacles.clear();
        self.spawn_timer = 0.0;
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Add an obstacle directly
    pub fn push(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    /// Accumulate `dt`; spawn one obstacle when the interval is reached
    pub fn maybe_spawn(&mut self, dt: f32, source: &mut dyn SpawnSource) -> Option<Obstacle> {
        self.spawn_timer += dt;
        if self.spawn_timer < self.spawn_interval {
            return None;
        }
        self.spawn_timer = 0.0;

        let height = source.height(self.min_height, self.max_height) as f32;
        let obstacle = Obstacle::spawn(height, source.attach_top());
        log::debug!(
            "Spawned obstacle h={} {}",
            height,
            if obstacle.attached_top { "top" } else { "bottom" }
        );
        self.obstacles.push(obstacle);
        Some(obstacle)
    }

    /// Scroll obstacles left; returns how many fully left the screen
    pub fn step(&mut self, dt: f32) -> u32 {
        let shift = self.speed * dt;
        for obstacle in &mut self.obstacles {
            obstacle.x -= shift;
        }

        let before = self.obstacles.len();
        self.obstacles.retain(|o| o.right_edge() >= 0.0);
        (before - self.obstacles.len()) as u32
    }

    /// Whether `player` (full-size box) hits any obstacle, using shrunk
    /// hitboxes on both sides
    pub fn collides_with(&self, player: &Aabb) -> bool {
        let player = player.shrunk(self.hitbox_scale);
        self.obstacles
            .iter()
            .any(|o| o.bounds().shrunk(self.hitbox_scale).overlaps(&player))
    }
}
