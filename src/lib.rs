//! Flappy Engine - simulation core for a side-scrolling flap-through-the-gates game
//!
//! Core modules:
//! - `config`: Difficulty/map profiles and viewport-scaled settings
//! - `sim`: Deterministic simulation (physics, spawning, collisions, session state)
//! - `game`: Boundary-facing facade owning selection, settings and session
//! - `renderer`: Snapshot, semantic draw list and fallback geometry for an external renderer
//! - `audio`: Semantic sound cues for an external audio player

pub mod audio;
pub mod config;
pub mod game;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, Difficulty, MapKind, Selection, Settings, Viewport, resolve_settings};
pub use game::Game;
pub use sim::{GameEvent, Session, SessionPhase, TickResult, tick};

/// Logical layout every profile is authored against
pub mod consts {
    /// Logical world width
    pub const LOGICAL_WIDTH: f32 = 400.0;
    /// Logical world height
    pub const LOGICAL_HEIGHT: f32 = 600.0;

    /// Controlled body defaults
    pub const BODY_WIDTH: f32 = 50.0;
    pub const BODY_HEIGHT: f32 = 50.0;
    pub const BODY_START_X: f32 = 100.0;

    /// Ground strip thickness when the renderer supplies none
    pub const GROUND_THICKNESS: f32 = 60.0;

    /// Obstacle scroll speed (logical units per tick)
    pub const SCROLL_SPEED: f32 = 2.0;

    /// Score label font size at logical width
    pub const SCORE_FONT_SIZE: f32 = 25.0;
}
