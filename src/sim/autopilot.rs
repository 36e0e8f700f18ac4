//! Autopilot for attract mode and headless runs
//!
//! Aims at the bottom of the next gap the body has not yet passed and flaps
//! as soon as the next tick would carry the body's bottom edge past that line.
//! One flap lifts the body by roughly `impulse² / 2g`, which fits inside the
//! gap on the easier profiles; hard profiles leave almost no vertical slack,
//! so the autopilot is not expected to survive there.

use super::state::{Obstacle, Session};
use crate::config::Settings;

/// Logical clearance kept above the lower obstacle part
const GAP_MARGIN: f32 = 6.0;

/// The first obstacle whose right edge is still ahead of the body's left edge
pub fn next_obstacle<'a>(session: &'a Session, settings: &Settings) -> Option<&'a Obstacle> {
    session
        .obstacles
        .iter()
        .find(|o| o.right(settings) >= session.body.x)
}

/// Lowest y the body's bottom edge may reach on the next tick
pub fn flap_line(session: &Session, settings: &Settings) -> f32 {
    match next_obstacle(session, settings) {
        Some(o) => o.gap_top + settings.gap_height - GAP_MARGIN * settings.scale.y,
        None => (settings.ground_top() + settings.body_height) * 0.5,
    }
}

/// Whether to request a flap before the coming tick
pub fn wants_flap(session: &Session, settings: &Settings) -> bool {
    if !session.is_running() {
        return false;
    }
    let body = &session.body;
    let next_bottom = body.bottom() + body.velocity + settings.gravity;
    next_bottom > flap_line(session, settings)
}
