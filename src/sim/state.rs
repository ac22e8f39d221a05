//! Game state and core simulation types
//!
//! `GameState` is the single owned context threaded through input handling
//! and ticking. Nothing outside it holds a mutable handle to its parts.

use std::path::Path;

use glam::Vec2;

use super::collision::Aabb;
use super::gravity::{GravityDirection, GravitySimulation, PlayerBody};
use super::obstacles::{Obstacle, ObstacleField, RandomSpawns, SpawnSource};
use crate::consts::*;
use crate::persistence::{ProgressRecord, SaveStore};
use crate::skins::{SkinCatalog, SkinDescriptor};
use crate::tuning::Tuning;
use crate::ui::MenuButton;

/// Top-level game mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    /// Title screen
    #[default]
    Menu,
    /// Active run
    Playing,
    /// Run frozen, can resume or abandon
    Paused,
    /// Run ended by a crash
    GameOver,
    /// Skin shop
    Skins,
}

/// Things that happened during input handling or a tick, for feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    ButtonPressed(MenuButton),
    RunStarted,
    GravityFlipped(GravityDirection),
    ObstaclePassed { score: u64 },
    Crashed { score: u64, coins_awarded: u64 },
    Paused,
    Resumed,
    RunAbandoned { score: u64 },
    SkinSelected(usize),
    SkinPurchased(usize),
    PurchaseDeclined(usize),
    QuitRequested,
}

/// Read-only snapshot handed to the renderer
#[derive(Debug, Clone)]
pub struct Frame {
    pub mode: GameMode,
    pub player: PlayerBody,
    pub gravity: GravityDirection,
    pub obstacles: Vec<Obstacle>,
    pub score: u64,
    pub coins: u64,
    pub best_score: u64,
    pub skins: Vec<SkinDescriptor>,
    pub selected_skin: usize,
}

/// Complete game context
pub struct GameState<S: SpawnSource = RandomSpawns> {
    /// Current mode
    pub mode: GameMode,
    /// Score of the current (or last) run
    pub score: u64,
    /// Spendable coins
    pub coins: u64,
    /// Best run score
    pub best_score: u64,
    pub gravity: GravitySimulation,
    pub field: ObstacleField,
    pub catalog: SkinCatalog,
    pub spawns: S,
    store: SaveStore,
    events: Vec<GameEvent>,
    quit: bool,
}

impl<S: SpawnSource> GameState<S> {
    /// Create a game in the menu, restoring saved progress from `store`
    pub fn new(tuning: &Tuning, store: SaveStore, spawns: S) -> Self {
        let mut state = Self {
            mode: GameMode::Menu,
            score: 0,
            coins: 0,
            best_score: 0,
            gravity: GravitySimulation::new(tuning),
            field: ObstacleField::new(tuning),
            catalog: SkinCatalog::new(),
            spawns,
            store,
            events: Vec::new(),
            quit: false,
        };

        let record = state.store.load(ProgressRecord::fresh(&state.catalog));
        state.apply_record(&record);
        state
    }

    fn apply_record(&mut self, record: &ProgressRecord) {
        self.coins = record.coins;
        self.best_score = record.best;
        for (index, &owned) in record.owned.iter().enumerate() {
            self.catalog.restore_owned(index, owned);
        }
        self.catalog.restore_selected(record.current);
    }

    /// Current progress as a persistable record
    pub fn progress(&self) -> ProgressRecord {
        ProgressRecord {
            best: self.best_score,
            coins: self.coins,
            current: self.catalog.selected_index(),
            owned: self.catalog.owned_flags(),
        }
    }

    /// Where progress is saved
    pub fn store_path(&self) -> &Path {
        self.store.path()
    }

    /// Write progress to disk (best-effort)
    pub fn save(&self) {
        self.store.save(&self.progress());
    }

    /// Begin a fresh run
    pub fn start_run(&mut self) {
        self.mode = GameMode::Playing;
        self.score = 0;
        self.gravity.reset();
        self.field.clear();
        self.push_event(GameEvent::RunStarted);
        log::info!("Run started");
    }

    /// Player's full-size box
    pub fn player_box(&self) -> Aabb {
        let body = self.gravity.body();
        Aabb::from_center_size(Vec2::new(body.x, body.y), Vec2::splat(PLAYER_SIZE))
    }

    /// Snapshot for rendering
    pub fn frame(&self) -> Frame {
        Frame {
            mode: self.mode,
            player: self.gravity.body(),
            gravity: self.gravity.direction(),
            obstacles: self.field.obstacles().to_vec(),
            score: self.score,
            coins: self.coins,
            best_score: self.best_score,
            skins: self.catalog.skins().to_vec(),
            selected_skin: self.catalog.selected_index(),
        }
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn request_quit(&mut self) {
        self.quit = true;
    }

    /// True once the quit control has been activated
    pub fn quit_requested(&self) -> bool {
        self.quit
    }
}
