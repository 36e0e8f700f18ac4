//! Procedural obstacle generation
//!
//! One obstacle every `spawn_interval` ticks, entering at the right edge with
//! a gap-top drawn uniformly from [`Settings::gap_top_range`].

use rand::Rng;

use super::state::{Obstacle, Session};
use crate::config::Settings;

/// Whether the generator fires on this tick count
#[inline]
pub fn should_spawn(tick: u64, settings: &Settings) -> bool {
    settings.spawn_interval > 0 && tick % settings.spawn_interval as u64 == 0
}

/// Sample a gap-top height within the clamped range
pub fn sample_gap_top<R: Rng + ?Sized>(rng: &mut R, settings: &Settings) -> f32 {
    let (min, max) = settings.gap_top_range();
    if max <= min {
        return min;
    }
    rng.random_range(min..=max)
}

/// Run the generator for the session's current tick. Returns the new
/// obstacle's ID if one was spawned.
pub fn spawn_obstacles(session: &mut Session, settings: &Settings) -> Option<u32> {
    if !should_spawn(session.tick, settings) {
        return None;
    }

    let gap_top = sample_gap_top(&mut session.rng, settings);
    let id = session.next_obstacle_id();
    session.obstacles.push(Obstacle {
        id,
        x: settings.world_width,
        gap_top,
        scored: false,
    });
    session.spawned += 1;

    log::debug!("Spawned obstacle {} at tick {} (gap_top={:.1})", id, session.tick, gap_top);
    Some(id)
}
