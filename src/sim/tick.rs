//! Fixed timestep simulation tick
//!
//! One call to [`tick`] advances exactly one frame. The core never schedules
//! its own ticks; the caller delivers them while the session is running.

use serde::Serialize;

use super::collision::{advance_obstacles, boundary_collision, evaluate_obstacles};
use super::physics::integrate;
use super::spawn::spawn_obstacles;
use super::state::{CollisionCause, GameEvent, Session, SessionPhase};
use crate::config::Settings;

/// Outcome of a single tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickResult {
    pub phase: SessionPhase,
    pub score: u32,
    /// True only on the tick the session ended
    pub collided: bool,
    pub events: Vec<GameEvent>,
}

impl TickResult {
    fn unchanged(session: &Session) -> Self {
        Self {
            phase: session.phase,
            score: session.score,
            collided: false,
            events: Vec::new(),
        }
    }
}

/// Begin a fresh session
pub fn start_session(settings: &Settings, seed: u64) -> Session {
    log::info!(
        "Starting session: difficulty={}, map={}, seed={}, world={}x{}",
        settings.difficulty.as_str(),
        settings.map.as_str(),
        seed,
        settings.world_width,
        settings.world_height
    );
    Session::start(settings, seed)
}

/// Start from Idle or restart from Over. The old state is discarded whole.
/// Returns false (and leaves the session alone) while a session is running.
pub fn request_start(session: &mut Session, settings: &Settings, seed: u64) -> bool {
    if session.is_running() {
        log::warn!("Start requested while a session is running; ignored");
        return false;
    }
    *session = start_session(settings, seed);
    true
}

/// Queue a flap for the next tick. Ignored unless running; repeated requests
/// within one tick collapse into one.
pub fn request_flap(session: &mut Session) -> bool {
    if !session.is_running() {
        return false;
    }
    session.flap_requested = true;
    true
}

/// Abandon the current session and return to Idle
pub fn cancel_session(session: &mut Session, settings: &Settings) {
    if session.is_running() {
        log::info!("Session cancelled at tick {} (score {})", session.tick, session.score);
    }
    *session = Session::idle(settings);
}

/// Advance the session by one tick.
///
/// Order: animation, obstacle generation, scroll + removal, obstacle
/// collision and scoring, body physics, boundary check. A collision ends the
/// session on the spot and skips whatever work remains in the tick.
pub fn tick(session: &mut Session, settings: &Settings) -> TickResult {
    if !session.is_running() {
        return TickResult::unchanged(session);
    }

    let mut events = Vec::new();
    session.tick += 1;

    session.animation.advance(settings);

    if let Some(id) = spawn_obstacles(session, settings) {
        events.push(GameEvent::Spawned { id });
    }

    advance_obstacles(&mut session.obstacles, settings);

    if let Some(cause) = evaluate_obstacles(session, settings, &mut events) {
        return end_tick(session, cause, events);
    }

    if integrate(&mut session.body, &mut session.flap_requested, settings) {
        events.push(GameEvent::Flapped);
    }

    if let Some(cause) = boundary_collision(&session.body, settings) {
        return end_tick(session, cause, events);
    }

    log::trace!(
        "tick {}: y={:.2} v={:.2} obstacles={}",
        session.tick,
        session.body.y,
        session.body.velocity,
        session.obstacles.len()
    );

    TickResult {
        phase: session.phase,
        score: session.score,
        collided: false,
        events,
    }
}

fn end_tick(session: &mut Session, cause: CollisionCause, mut events: Vec<GameEvent>) -> TickResult {
    session.finish(cause);
    events.push(GameEvent::Collided(cause));
    TickResult {
        phase: session.phase,
        score: session.score,
        collided: true,
        events,
    }
}
