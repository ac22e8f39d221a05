//! Two-rail gravity simulation for the player cube
//!
//! The cube only ever moves vertically, between a bottom and a top rail.
//! Gravity pulls it toward one of them; flipping sends it across.

use crate::consts::*;
use crate::tuning::Tuning;

/// Which rail gravity pulls toward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GravityDirection {
    #[default]
    Down,
    Up,
}

impl GravityDirection {
    /// Sign of the gravity constant (+1 pulls down, -1 pulls up)
    pub fn sign(&self) -> f32 {
        match self {
            GravityDirection::Down => 1.0,
            GravityDirection::Up => -1.0,
        }
    }

    /// Rail the cube comes to rest on
    pub fn target_rail(&self) -> f32 {
        match self {
            GravityDirection::Down => GRAVITY_BOTTOM_Y,
            GravityDirection::Up => GRAVITY_TOP_Y,
        }
    }

    pub fn flipped(&self) -> Self {
        match self {
            GravityDirection::Down => GravityDirection::Up,
            GravityDirection::Up => GravityDirection::Down,
        }
    }
}

/// The player cube's vertical state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerBody {
    pub x: f32,
    pub y: f32,
    pub vy: f32,
}

impl Default for PlayerBody {
    fn default() -> Self {
        Self {
            x: PLAYER_X,
            y: GRAVITY_BOTTOM_Y,
            vy: 0.0,
        }
    }
}

/// Vertical integrator with snap-to-rail and flip cooldown
#[derive(Debug, Clone)]
pub struct GravitySimulation {
    body: PlayerBody,
    direction: GravityDirection,
    /// Time since the last successful flip (or run start)
    since_flip: f32,
    gravity: f32,
    flip_cooldown: f32,
    snap_epsilon: f32,
}

impl GravitySimulation {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            body: PlayerBody::default(),
            direction: GravityDirection::Down,
            since_flip: 0.0,
            gravity: tuning.gravity,
            flip_cooldown: tuning.flip_cooldown,
            snap_epsilon: tuning.snap_epsilon,
        }
    }

    /// Put the cube back on the bottom rail with gravity down
    pub fn reset(&mut self) {
        self.body = PlayerBody::default();
        self.direction = GravityDirection::Down;
        self.since_flip = 0.0;
    }

    pub fn body(&self) -> PlayerBody {
        self.body
    }

    pub fn direction(&self) -> GravityDirection {
        self.direction
    }

    /// True when the cube sits on the rail its gravity points to
    pub fn is_resting(&self) -> bool {
        (self.body.y - self.direction.target_rail()).abs() <= self.snap_epsilon
    }

    /// True when enough time has passed since the last flip
    pub fn cooldown_elapsed(&self) -> bool {
        self.since_flip >= self.flip_cooldown
    }

    /// Advance by `dt` seconds (semi-implicit Euler)
    pub fn step(&mut self, dt: f32) {
        self.since_flip += dt;

        let body = &mut self.body;
        body.vy -= self.gravity * self.direction.sign() * dt;
        body.y += body.vy * dt;

        // Rails act as walls
        if body.y < GRAVITY_BOTTOM_Y {
            body.y = GRAVITY_BOTTOM_Y;
            body.vy = 0.0;
        } else if body.y > GRAVITY_TOP_Y {
            body.y = GRAVITY_TOP_Y;
            body.vy = 0.0;
        }

        let target = self.direction.target_rail();
        if (body.y - target).abs() <= self.snap_epsilon {
            body.y = target;
            body.vy = 0.0;
        }
    }

    /// Reverse gravity if resting and off cooldown. Returns whether it flipped.
    pub fn flip(&mut self) -> bool {
        if !self.is_resting() || !self.cooldown_elapsed() {
            return false;
        }
        self.direction = self.direction.flipped();
        self.since_flip = 0.0;
        log::debug!("Gravity flipped {:?}", self.direction);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sim() -> GravitySimulation {
        GravitySimulation::new(&Tuning::default())
    }

    fn run(sim: &mut GravitySimulation, seconds: f32) {
        let steps = (seconds / SIM_DT).ceil() as u32;
        for _ in 0..steps {
            sim.step(SIM_DT);
        }
    }

    #[test]
    fn test_rests_on_bottom_rail() {
        let mut sim = sim();
        run(&mut sim, 1.0);
        assert_eq!(sim.body().y, GRAVITY_BOTTOM_Y);
        assert_eq!(sim.body().vy, 0.0);
        assert!(sim.is_resting());
    }

    #[test]
    fn test_flip_blocked_by_cooldown() {
        let mut sim = sim();
        sim.step(0.1);
        let before = (sim.body(), sim.direction());

        assert!(!sim.flip());
        assert_eq!((sim.body(), sim.direction()), before);
    }

    #[test]
    fn test_flip_after_cooldown() {
        let mut sim = sim();
        run(&mut sim, 0.4);
        assert!(sim.flip());
        assert_eq!(sim.direction(), GravityDirection::Up);
        assert_eq!(sim.direction().sign(), -1.0);
    }

    #[test]
    fn test_flip_travels_to_top_rail() {
        let mut sim = sim();
        run(&mut sim, 0.4);
        assert!(sim.flip());

        sim.step(SIM_DT);
        assert!(sim.body().y > GRAVITY_BOTTOM_Y);
        assert!(!sim.is_resting());
        // Airborne: flipping back is not allowed
        assert!(!sim.flip());

        run(&mut sim, 1.0);
        assert_eq!(sim.body().y, GRAVITY_TOP_Y);
        assert!(sim.is_resting());
        assert!(sim.flip());
        assert_eq!(sim.direction(), GravityDirection::Down);
    }

    #[test]
    fn test_reset() {
        let mut sim = sim();
        run(&mut sim, 0.4);
        sim.flip();
        run(&mut sim, 0.2);
        sim.reset();
        assert_eq!(sim.body(), PlayerBody::default());
        assert_eq!(sim.direction(), GravityDirection::Down);
        assert!(!sim.cooldown_elapsed());
    }

    proptest! {
        #[test]
        fn prop_stays_between_rails(
            steps in prop::collection::vec((0.0f32..0.25, any::<bool>()), 1..300)
        ) {
            let mut sim = sim();
            for (dt, flip) in steps {
                if flip {
                    sim.flip();
                }
                sim.step(dt);
                let y = sim.body().y;
                prop_assert!((GRAVITY_BOTTOM_Y..=GRAVITY_TOP_Y).contains(&y), "y = {}", y);
            }
        }
    }
}
