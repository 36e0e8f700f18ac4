//! Session state and core simulation types
//!
//! Everything a tick mutates lives in [`Session`]. Settings stay outside and
//! are passed in explicitly.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::config::Settings;

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// No live session, waiting for a start request
    Idle,
    /// Ticks advance the world
    Running,
    /// Session ended; a start request begins a fresh one
    Over,
}

/// What ended a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionCause {
    Obstacle,
    Ground,
    /// Body left the world through the top edge
    Ceiling,
}

/// Things that happened during a tick, for sound and effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    SessionStarted,
    Flapped,
    Spawned { id: u32 },
    Scored { id: u32, score: u32 },
    Collided(CollisionCause),
}

/// The player-controlled body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Top edge
    pub y: f32,
    pub velocity: f32,
    /// Left edge, fixed for the session
    pub x: f32,
    pub width: f32,
    pub height: f32,
}

impl Body {
    /// Body centered vertically in the world, at rest
    pub fn spawn(settings: &Settings) -> Self {
        Self {
            y: settings.world_height / 2.0 - settings.body_height / 2.0,
            velocity: 0.0,
            x: settings.body_start_x,
            width: settings.body_width,
            height: settings.body_height,
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// A gated obstacle scrolling leftward
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Left edge
    pub x: f32,
    /// Where the passable gap begins
    pub gap_top: f32,
    /// Set once when the trailing edge passes the body
    pub scored: bool,
}

impl Obstacle {
    #[inline]
    pub fn right(&self, settings: &Settings) -> f32 {
        self.x + settings.obstacle_width
    }

    /// Blocking region from the world top down to the gap
    pub fn upper_rect(&self, settings: &Settings) -> Rect {
        Rect::from_span(self.x, settings.obstacle_width, 0.0, self.gap_top)
    }

    /// Blocking region from the gap bottom down to the ground
    pub fn lower_rect(&self, settings: &Settings) -> Rect {
        Rect::from_span(
            self.x,
            settings.obstacle_width,
            self.gap_top + settings.gap_height,
            settings.ground_top(),
        )
    }

    /// Fully past the left edge of the world
    #[inline]
    pub fn is_offscreen(&self, settings: &Settings) -> bool {
        self.right(settings) <= 0.0
    }
}

/// Cosmetic background animation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animation {
    pub frame: u32,
    pub counter: u32,
}

impl Animation {
    /// Advance one tick; frames only cycle when there is more than one and a cadence is set
    pub fn advance(&mut self, settings: &Settings) {
        if settings.background_frames <= 1 || settings.animation_cadence == 0 {
            return;
        }
        self.counter += 1;
        if self.counter >= settings.animation_cadence {
            self.frame = (self.frame + 1) % settings.background_frames;
            self.counter = 0;
        }
    }
}

/// Complete session state (deterministic given seed and inputs)
#[derive(Debug, Clone)]
pub struct Session {
    pub phase: SessionPhase,
    pub score: u32,
    /// Ticks advanced since start
    pub tick: u64,
    /// Set by input, consumed by the next physics step
    pub flap_requested: bool,
    pub animation: Animation,
    pub body: Body,
    /// Live obstacles, oldest first
    pub obstacles: Vec<Obstacle>,
    /// Obstacles generated since start, including removed ones
    pub spawned: u32,
    /// Set on the tick the session ended
    pub cause: Option<CollisionCause>,
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    next_id: u32,
}

impl Session {
    /// A session that has not started; ticks are no-ops until started
    pub fn idle(settings: &Settings) -> Self {
        Self {
            phase: SessionPhase::Idle,
            ..Self::start(settings, 0)
        }
    }

    /// Fresh running session. Every start goes through here so no state
    /// leaks from a previous run.
    pub fn start(settings: &Settings, seed: u64) -> Self {
        Self {
            phase: SessionPhase::Running,
            score: 0,
            tick: 0,
            flap_requested: false,
            animation: Animation::default(),
            body: Body::spawn(settings),
            obstacles: Vec::new(),
            spawned: 0,
            cause: None,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Allocate a new obstacle ID
    pub fn next_obstacle_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == SessionPhase::Running
    }

    /// End the session
    pub(crate) fn finish(&mut self, cause: CollisionCause) {
        self.phase = SessionPhase::Over;
        self.cause = Some(cause);
        log::info!(
            "Session over: score={}, ticks={}, cause={:?}",
            self.score,
            self.tick,
            cause
        );
    }
}
