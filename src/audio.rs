//! Audio feedback
//!
//! Sounds are described procedurally (a short tone sweep per effect). The
//! manager applies volume settings and queues cues for whatever backend the
//! platform provides; with no backend the cues are just logged.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Menu button or shop row activated
    Click,
    /// Skin bought
    Purchase,
    /// Gravity reversed
    Flip,
    /// Obstacle cleared
    Score,
    /// Run ended
    Crash,
}

/// Oscillator shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
}

/// A single synthesized tone: frequency sweep over a duration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub freq_start: f32,
    pub freq_end: f32,
    /// Seconds
    pub duration: f32,
    pub waveform: Waveform,
}

/// A tone ready for playback
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cue {
    pub effect: SoundEffect,
    pub tone: Tone,
    pub volume: f32,
}

impl SoundEffect {
    /// Feedback sound for a game event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::ButtonPressed(_)
            | GameEvent::SkinSelected(_)
            | GameEvent::PurchaseDeclined(_) => Some(SoundEffect::Click),
            GameEvent::SkinPurchased(_) => Some(SoundEffect::Purchase),
            GameEvent::GravityFlipped(_) => Some(SoundEffect::Flip),
            GameEvent::ObstaclePassed { .. } => Some(SoundEffect::Score),
            GameEvent::Crashed { .. } => Some(SoundEffect::Crash),
            _ => None,
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            // Quick bright blip
            SoundEffect::Click => Tone {
                freq_start: 880.0,
                freq_end: 880.0,
                duration: 0.05,
                waveform: Waveform::Square,
            },
            // Rising chime
            SoundEffect::Purchase => Tone {
                freq_start: 520.0,
                freq_end: 1040.0,
                duration: 0.3,
                waveform: Waveform::Sine,
            },
            SoundEffect::Flip => Tone {
                freq_start: 300.0,
                freq_end: 600.0,
                duration: 0.08,
                waveform: Waveform::Sine,
            },
            SoundEffect::Score => Tone {
                freq_start: 680.0,
                freq_end: 680.0,
                duration: 0.06,
                waveform: Waveform::Sine,
            },
            // Falling buzz
            SoundEffect::Crash => Tone {
                freq_start: 400.0,
                freq_end: 80.0,
                duration: 0.5,
                waveform: Waveform::Sawtooth,
            },
        }
    }
}

/// Anything that can play sound effects. Playback is fire-and-forget.
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Audio manager for the game
#[derive(Debug, Default)]
pub struct AudioManager {
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
    pending: Vec<Cue>,
}

impl AudioManager {
    pub fn new(settings: &Settings) -> Self {
        let mut audio = Self::default();
        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        audio.set_muted(settings.muted);
        audio
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Cues queued since the last call, for the playback backend
    pub fn take_cues(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.pending)
    }
}

impl AudioSink for AudioManager {
    fn play(&mut self, effect: SoundEffect) {
        let volume = self.effective_volume();
        if volume <= 0.0 {
            return;
        }
        let tone = effect.tone();
        log::debug!(
            "Sound {:?}: {:.0}->{:.0} Hz for {:.2}s at {:.2}",
            effect,
            tone.freq_start,
            tone.freq_end,
            tone.duration,
            volume
        );
        self.pending.push(Cue {
            effect,
            tone,
            volume,
        });
    }
}
