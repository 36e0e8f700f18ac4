//! Sound cues
//!
//! The core does not play audio. It turns tick events into play requests that
//! an audio backend resolves (and is free to drop if playback fails).

use serde::Serialize;

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SoundEffect {
    /// Flap consumed
    Flap,
    /// Obstacle passed
    Score,
    /// Any collision
    Hit,
    /// Follows a hit after a short delay
    Die,
    /// Session started
    Start,
    /// Looping background track
    Music,
}

impl SoundEffect {
    pub fn asset(&self) -> &'static str {
        match self {
            SoundEffect::Flap => "assets/sounds/flap.wav",
            SoundEffect::Score => "assets/sounds/score.wav",
            SoundEffect::Hit => "assets/sounds/hit.wav",
            SoundEffect::Die => "assets/sounds/die.wav",
            SoundEffect::Start => "assets/sounds/start.wav",
            SoundEffect::Music => "assets/sounds/bg.mp3",
        }
    }

    fn is_music(&self) -> bool {
        matches!(self, SoundEffect::Music)
    }
}

/// Delay between the hit and die cues
pub const DIE_DELAY_MS: u32 = 300;

/// Background music level before master volume
pub const MUSIC_LEVEL: f32 = 0.4;

/// A request for the audio backend
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SoundRequest {
    pub effect: SoundEffect,
    pub volume: f32,
    pub delay_ms: u32,
    pub looped: bool,
}

/// Volume state and event-to-cue mapping
#[derive(Debug, Clone)]
pub struct AudioCues {
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    muted: bool,
}

impl Default for AudioCues {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioCues {
    pub fn new() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 1.0,
            muted: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Set music volume (0.0 - 1.0)
    pub fn set_music_volume(&mut self, vol: f32) {
        self.music_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self, effect: SoundEffect) -> f32 {
        if self.muted {
            return 0.0;
        }
        if effect.is_music() {
            self.master_volume * self.music_volume * MUSIC_LEVEL
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    fn request(&self, effect: SoundEffect, delay_ms: u32) -> Option<SoundRequest> {
        let volume = self.effective_volume(effect);
        if volume <= 0.0 {
            return None;
        }
        Some(SoundRequest {
            effect,
            volume,
            delay_ms,
            looped: effect.is_music(),
        })
    }

    /// Play requests for a batch of events, in event order
    pub fn cues(&self, events: &[GameEvent]) -> Vec<SoundRequest> {
        let mut requests = Vec::new();
        for event in events {
            match event {
                GameEvent::SessionStarted => {
                    requests.extend(self.request(SoundEffect::Start, 0));
                    requests.extend(self.request(SoundEffect::Music, 0));
                }
                GameEvent::Flapped => requests.extend(self.request(SoundEffect::Flap, 0)),
                GameEvent::Scored { .. } => requests.extend(self.request(SoundEffect::Score, 0)),
                GameEvent::Collided(_) => {
                    requests.extend(self.request(SoundEffect::Hit, 0));
                    requests.extend(self.request(SoundEffect::Die, DIE_DELAY_MS));
                }
                GameEvent::Spawned { .. } => {}
            }
        }
        requests
    }
}
