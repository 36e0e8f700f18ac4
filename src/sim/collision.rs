//! Collision detection and scoring
//!
//! Body vs obstacles uses strict AABB overlap against each obstacle's upper
//! and lower blocking rectangles. World bounds are the ground's top edge and
//! the world's top edge.

use super::geometry::Rect;
use super::state::{Body, CollisionCause, GameEvent, Obstacle, Session};
use crate::config::Settings;

/// Whether the body rectangle overlaps either blocking part of an obstacle
pub fn body_hits_obstacle(body: &Rect, obstacle: &Obstacle, settings: &Settings) -> bool {
    body.overlaps(&obstacle.upper_rect(settings)) || body.overlaps(&obstacle.lower_rect(settings))
}

/// Ground or ceiling contact
pub fn boundary_collision(body: &Body, settings: &Settings) -> Option<CollisionCause> {
    if body.bottom() > settings.ground_top() {
        Some(CollisionCause::Ground)
    } else if body.y < 0.0 {
        Some(CollisionCause::Ceiling)
    } else {
        None
    }
}

/// Trailing edge strictly past the body's fixed x
#[inline]
pub fn has_passed(obstacle: &Obstacle, body: &Body, settings: &Settings) -> bool {
    obstacle.right(settings) < body.x
}

/// Scroll obstacles left and drop the ones fully off screen
pub fn advance_obstacles(obstacles: &mut Vec<Obstacle>, settings: &Settings) {
    for obstacle in obstacles.iter_mut() {
        obstacle.x -= settings.scroll_speed;
    }
    obstacles.retain(|o| !o.is_offscreen(settings));
}

/// Test every live obstacle in creation order, scoring passed ones.
///
/// Stops at the first collision; anything scored earlier in the same pass
/// still counts.
pub fn evaluate_obstacles(
    session: &mut Session,
    settings: &Settings,
    events: &mut Vec<GameEvent>,
) -> Option<CollisionCause> {
    let body = session.body;
    let body_rect = body.rect();

    for obstacle in session.obstacles.iter_mut() {
        if body_hits_obstacle(&body_rect, obstacle, settings) {
            return Some(CollisionCause::Obstacle);
        }

        if !obstacle.scored && has_passed(obstacle, &body, settings) {
            obstacle.scored = true;
            session.score += 1;
            log::debug!("Passed obstacle {} (score {})", obstacle.id, session.score);
            events.push(GameEvent::Scored {
                id: obstacle.id,
                score: session.score,
            });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Difficulty, MapKind};

    fn settings() -> Settings {
        Settings::logical(Difficulty::Normal, MapKind::Classic)
    }

    fn obstacle(x: f32, gap_top: f32) -> Obstacle {
        Obstacle {
            id: 1,
            x,
            gap_top,
            scored: false,
        }
    }

    #[test]
    fn test_body_in_gap_is_safe() {
        let s = settings();
        // Gap 200..340, body 275..325
        let body = Body::spawn(&s);
        assert!(!body_hits_obstacle(&body.rect(), &obstacle(90.0, 200.0), &s));
    }

    #[test]
    fn test_body_hits_upper_and_lower() {
        let s = settings();
        let body = Body::spawn(&s);
        // Gap starts below the body top
        assert!(body_hits_obstacle(&body.rect(), &obstacle(90.0, 290.0), &s));
        // Gap ends above the body bottom
        assert!(body_hits_obstacle(&body.rect(), &obstacle(90.0, 150.0), &s));
    }

    #[test]
    fn test_no_hit_when_horizontally_apart() {
        let s = settings();
        let body = Body::spawn(&s);
        // Obstacle spans 150..220, body 100..150: touching only
        assert!(!body_hits_obstacle(&body.rect(), &obstacle(150.0, 0.0), &s));
    }

    #[test]
    fn test_boundaries() {
        let s = settings();
        let mut body = Body::spawn(&s);
        assert_eq!(boundary_collision(&body, &s), None);

        body.y = 540.0 - 50.0;
        assert_eq!(boundary_collision(&body, &s), None);
        body.y += 0.1;
        assert_eq!(boundary_collision(&body, &s), Some(CollisionCause::Ground));

        body.y = 0.0;
        assert_eq!(boundary_collision(&body, &s), None);
        body.y = -0.1;
        assert_eq!(boundary_collision(&body, &s), Some(CollisionCause::Ceiling));
    }

    #[test]
    fn test_offscreen_obstacle_removed() {
        let s = settings();
        let mut obstacles = vec![obstacle(-s.obstacle_width - 1.0, 0.0), obstacle(300.0, 200.0)];
        advance_obstacles(&mut obstacles, &s);
        assert_eq!(obstacles.len(), 1);
        assert_eq!(obstacles[0].x, 298.0);
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let s = settings();
        let mut session = Session::start(&s, 0);
        // Right edge at 99 < 100
        session.obstacles.push(obstacle(29.0, 200.0));
        let mut events = Vec::new();

        assert_eq!(evaluate_obstacles(&mut session, &s, &mut events), None);
        assert_eq!(session.score, 1);
        assert!(session.obstacles[0].scored);

        for _ in 0..10 {
            evaluate_obstacles(&mut session, &s, &mut events);
        }
        assert_eq!(session.score, 1);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_trailing_edge_at_body_x_not_yet_scored() {
        let s = settings();
        let mut session = Session::start(&s, 0);
        session.obstacles.push(obstacle(30.0, 200.0));
        let mut events = Vec::new();
        evaluate_obstacles(&mut session, &s, &mut events);
        assert_eq!(session.score, 0);
    }

    #[test]
    fn test_score_then_collide_same_pass() {
        let s = settings();
        let mut session = Session::start(&s, 0);
        session.obstacles.push(obstacle(20.0, 200.0));
        // Closed gap right on the body
        session.obstacles.push(Obstacle {
            id: 2,
            ..obstacle(120.0, 400.0)
        });
        let mut events = Vec::new();
        assert_eq!(
            evaluate_obstacles(&mut session, &s, &mut events),
            Some(CollisionCause::Obstacle)
        );
        assert_eq!(session.score, 1);
    }
}
