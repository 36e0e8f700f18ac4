//! Vertical integration of the controlled body
//!
//! Order per tick: consume flap (velocity = impulse), add gravity, move.
//! A flap tick therefore ends with `impulse + gravity`, not `impulse`.

use super::state::Body;
use crate::config::Settings;

/// Advance the body one tick. Returns true if a flap was consumed.
///
/// The position is not clamped; leaving the world is handled by the
/// boundary check.
pub fn integrate(body: &mut Body, flap_requested: &mut bool, settings: &Settings) -> bool {
    let flapped = std::mem::take(flap_requested);
    if flapped {
        body.velocity = settings.flap_impulse;
    }
    body.velocity += settings.gravity;
    body.y += body.velocity;
    flapped
}
