//! Input dispatch and per-frame simulation tick
//!
//! Input is routed by mode, one handler per mode. Only `Playing` advances
//! the simulation.

use super::obstacles::SpawnSource;
use super::state::{GameEvent, GameMode, GameState};
use crate::skins::PurchaseOutcome;
use crate::ui::{self, MenuButton};

/// Discrete keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Pause / resume / back
    Escape,
    /// Leave a paused run for the menu
    M,
}

/// A single input event from the platform
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary-button click at screen coordinates (y-up)
    Click { x: f32, y: f32 },
    Key(Key),
}

/// Route one input event to the active mode's handler
pub fn handle_input<S: SpawnSource>(state: &mut GameState<S>, input: InputEvent) {
    match state.mode {
        GameMode::Menu => menu_input(state, input),
        GameMode::Playing => playing_input(state, input),
        GameMode::Paused => paused_input(state, input),
        GameMode::GameOver => game_over_input(state, input),
        GameMode::Skins => skins_input(state, input),
    }
}

fn menu_input<S: SpawnSource>(state: &mut GameState<S>, input: InputEvent) {
    let InputEvent::Click { x, y } = input else {
        return;
    };
    let Some(button) = ui::menu_hit(x, y) else {
        return;
    };

    state.push_event(GameEvent::ButtonPressed(button));
    match button {
        MenuButton::Start => state.start_run(),
        MenuButton::Skins => {
            state.mode = GameMode::Skins;
            log::info!("Entered skin shop");
        }
        MenuButton::Quit => {
            log::info!("Quit requested");
            state.request_quit();
            state.push_event(GameEvent::QuitRequested);
        }
    }
}

fn playing_input<S: SpawnSource>(state: &mut GameState<S>, input: InputEvent) {
    match input {
        InputEvent::Click { .. } => {
            if state.gravity.flip() {
                let direction = state.gravity.direction();
                state.push_event(GameEvent::GravityFlipped(direction));
            }
        }
        InputEvent::Key(Key::Escape) => {
            state.mode = GameMode::Paused;
            state.push_event(GameEvent::Paused);
            log::info!("Paused at score {}", state.score);
        }
        InputEvent::Key(Key::M) => {}
    }
}

fn paused_input<S: SpawnSource>(state: &mut GameState<S>, input: InputEvent) {
    match input {
        InputEvent::Key(Key::Escape) => {
            state.mode = GameMode::Playing;
            state.push_event(GameEvent::Resumed);
        }
        InputEvent::Key(Key::M) => {
            // Abandoned runs earn nothing
            let score = state.score;
            state.score = 0;
            state.field.clear();
            state.gravity.reset();
            state.mode = GameMode::Menu;
            state.push_event(GameEvent::RunAbandoned { score });
            log::info!("Run abandoned at score {}", score);
        }
        InputEvent::Click { .. } => {}
    }
}

fn game_over_input<S: SpawnSource>(state: &mut GameState<S>, input: InputEvent) {
    match input {
        InputEvent::Click { .. } => state.start_run(),
        InputEvent::Key(Key::Escape) => state.mode = GameMode::Menu,
        InputEvent::Key(Key::M) => {}
    }
}

fn skins_input<S: SpawnSource>(state: &mut GameState<S>, input: InputEvent) {
    match input {
        InputEvent::Click { x, y } => {
            if let Some(index) = ui::skin_hit(state.catalog.skins(), x, y) {
                activate_skin(state, index);
            }
        }
        InputEvent::Key(Key::Escape) => state.mode = GameMode::Menu,
        InputEvent::Key(Key::M) => {}
    }
}

/// Buy or select a skin from the shop
pub fn activate_skin<S: SpawnSource>(state: &mut GameState<S>, index: usize) -> PurchaseOutcome {
    let outcome = state.catalog.purchase(index, &mut state.coins);
    match outcome {
        PurchaseOutcome::Selected => state.push_event(GameEvent::SkinSelected(index)),
        PurchaseOutcome::Purchased => {
            log::info!("Purchased skin {} ({} coins left)", index, state.coins);
            state.push_event(GameEvent::SkinPurchased(index));
        }
        PurchaseOutcome::InsufficientFunds => {
            log::debug!("Cannot afford skin {} with {} coins", index, state.coins);
            state.push_event(GameEvent::PurchaseDeclined(index));
        }
        PurchaseOutcome::Unknown => {}
    }
    if outcome.changed() {
        state.save();
    }
    outcome
}

/// Advance the game by `dt` seconds
pub fn tick<S: SpawnSource>(state: &mut GameState<S>, dt: f32) {
    if state.mode != GameMode::Playing {
        return;
    }

    state.gravity.step(dt);
    state.field.maybe_spawn(dt, &mut state.spawns);

    let passed = state.field.step(dt);
    for _ in 0..passed {
        state.score = state.score.saturating_add(1);
        let score = state.score;
        state.push_event(GameEvent::ObstaclePassed { score });
    }

    if state.field.collides_with(&state.player_box()) {
        end_run(state);
    }
}

/// Bank the run's score and switch to the game-over screen
fn end_run<S: SpawnSource>(state: &mut GameState<S>) {
    let score = state.score;
    state.best_score = state.best_score.max(score);
    state.coins = state.coins.saturating_add(score);
    state.mode = GameMode::GameOver;
    state.save();
    state.push_event(GameEvent::Crashed {
        score,
        coins_awarded: score,
    });
    log::info!(
        "Crashed with score {} (best {}, coins {})",
        score,
        state.best_score,
        state.coins
    );
}
