//! Sticky Cubes entry point
//!
//! Runs a headless demo: the autopilot plays one run while frames are printed
//! as text, then the game returns to the menu and quits.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use sticky_cubes::Settings;
use sticky_cubes::audio::{AudioManager, AudioSink, SoundEffect};
use sticky_cubes::consts::*;
use sticky_cubes::persistence::SaveStore;
use sticky_cubes::renderer::{Renderer, TextRenderer};
use sticky_cubes::settings::SETTINGS_FILE;
use sticky_cubes::sim::{
    GameMode, GameState, InputEvent, Key, RandomSpawns, autopilot, handle_input, tick,
};
use sticky_cubes::ui::MenuButton;

/// Frames between printed snapshots
const PRINT_EVERY: u64 = 120;
/// Upper bound on demo length (3 minutes at 60 fps)
const MAX_FRAMES: u64 = 60 * 180;

/// Game instance holding all state
struct Game {
    state: GameState,
    audio: AudioManager,
    renderer: TextRenderer,
    accumulator: f32,
    frames: u64,
}

impl Game {
    fn new(settings: &Settings, seed: u64) -> Self {
        let store = SaveStore::new(settings.save_path());
        Self {
            state: GameState::new(&settings.tuning, store, RandomSpawns::new(seed)),
            audio: AudioManager::new(settings),
            renderer: TextRenderer::new(),
            accumulator: 0.0,
            frames: 0,
        }
    }

    fn input(&mut self, event: InputEvent) {
        handle_input(&mut self.state, event);
        self.dispatch_events();
    }

    fn click_button(&mut self, button: MenuButton) {
        let center = button.rect().center;
        self.input(InputEvent::Click {
            x: center.x,
            y: center.y,
        });
    }

    /// Run simulation ticks
    fn update(&mut self, dt: f32) {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut self.state, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        self.frames += 1;
        self.dispatch_events();
    }

    /// Feed this frame's events to the audio collaborator
    fn dispatch_events(&mut self) {
        for event in self.state.drain_events() {
            log::debug!("Event {:?}", event);
            if let Some(effect) = SoundEffect::for_event(&event) {
                self.audio.play(effect);
            }
        }
        // No playback backend on this platform
        let cues = self.audio.take_cues();
        if !cues.is_empty() {
            log::trace!("Dropped {} audio cues", cues.len());
        }
    }

    fn print_frame(&mut self) {
        self.renderer.render(&self.state.frame());
        println!("{}", self.renderer.output());
    }
}

fn main() {
    env_logger::init();
    log::info!("Sticky Cubes (headless demo) starting...");

    let settings = Settings::load(Path::new(SETTINGS_FILE));
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    let mut game = Game::new(&settings, seed);

    game.print_frame();
    game.click_button(MenuButton::Start);

    while game.state.mode == GameMode::Playing && game.frames < MAX_FRAMES {
        if autopilot::wants_flip(&game.state.frame()) {
            let body = game.state.gravity.body();
            game.input(InputEvent::Click {
                x: body.x,
                y: body.y,
            });
        }
        game.update(SIM_DT);

        if game.frames % PRINT_EVERY == 0 {
            game.print_frame();
        }
    }

    match game.state.mode {
        GameMode::GameOver => {
            game.print_frame();
            game.input(InputEvent::Key(Key::Escape));
        }
        GameMode::Playing => {
            log::info!("Demo time limit reached, abandoning run");
            game.input(InputEvent::Key(Key::Escape));
            game.input(InputEvent::Key(Key::M));
        }
        _ => {}
    }

    game.print_frame();
    game.click_button(MenuButton::Quit);
    if game.state.quit_requested() {
        log::info!(
            "Bye! {} coins, best score {}",
            game.state.coins,
            game.state.best_score
        );
    }
}
