//! Frame-driven simulation module
//!
//! All gameplay logic lives here:
//! - Gravity and rail snapping for the cube
//! - Obstacle spawning, scrolling and scoring
//! - Mode state machine and input routing
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod gravity;
pub mod obstacles;
pub mod state;
pub mod tick;

pub use collision::Aabb;
pub use gravity::{GravityDirection, GravitySimulation, PlayerBody};
pub use obstacles::{Obstacle, ObstacleField, RandomSpawns, SpawnSource};
pub use state::{Frame, GameEvent, GameMode, GameState};
pub use tick::{InputEvent, Key, activate_skin, handle_input, tick};
