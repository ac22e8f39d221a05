//! Sticky Cubes - a gravity-flipping arcade dodger
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (gravity, obstacles, collisions, game modes)
//! - `skins`: Cosmetic skin catalog and purchase rules
//! - `persistence`: Save/load with integrity verification
//! - `tuning`: Data-driven game balance
//! - `ui`: Screen layout and hit testing
//! - `renderer` / `audio`: Presentation collaborators

pub mod audio;
pub mod persistence;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod skins;
pub mod tuning;
pub mod ui;

pub use settings::Settings;
pub use skins::SkinCatalog;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Screen dimensions (y-up, origin bottom-left)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Player cube edge length
    pub const PLAYER_SIZE: f32 = 26.0;
    /// Fixed horizontal position of the cube
    pub const PLAYER_X: f32 = 266.0; // a third of the screen, rounded down

    /// Obstacle width (height is randomized)
    pub const OBSTACLE_WIDTH: f32 = 30.0;

    /// Rail the cube rests on while gravity points down
    pub const GRAVITY_BOTTOM_Y: f32 = PLAYER_SIZE / 2.0 + 10.0;
    /// Rail the cube rests on while gravity points up
    pub const GRAVITY_TOP_Y: f32 = SCREEN_HEIGHT - PLAYER_SIZE / 2.0 - 10.0;
}
