//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed tick per call, no wall-clock time
//! - Seeded RNG only
//! - Obstacles iterated in creation order
//! - No rendering, audio or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod geometry;
pub mod physics;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{body_hits_obstacle, boundary_collision};
pub use geometry::Rect;
pub use state::{Animation, Body, CollisionCause, GameEvent, Obstacle, Session, SessionPhase};
pub use tick::{TickResult, cancel_session, request_flap, request_start, start_session, tick};
