//! Read-only view of a session for rendering, and the semantic draw list

use glam::Vec2;
use serde::Serialize;

use super::vertex::colors;
use crate::config::Settings;
use crate::consts::SCORE_FONT_SIZE;
use crate::sim::{Rect, Session, SessionPhase};

/// Blocking rectangles of one obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ObstacleRects {
    pub id: u32,
    pub top: Rect,
    pub bottom: Rect,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub phase: SessionPhase,
    pub body: Rect,
    /// Oldest first
    pub obstacles: Vec<ObstacleRects>,
    pub ground: Rect,
    pub score: u32,
    pub background_frame: u32,
}

impl Snapshot {
    pub fn capture(session: &Session, settings: &Settings) -> Self {
        Self {
            phase: session.phase,
            body: session.body.rect(),
            obstacles: session
                .obstacles
                .iter()
                .map(|o| ObstacleRects {
                    id: o.id,
                    top: o.upper_rect(settings),
                    bottom: o.lower_rect(settings),
                })
                .collect(),
            ground: Rect::from_span(0.0, settings.world_width, settings.ground_top(), settings.world_height),
            score: session.score,
            background_frame: session.animation.frame,
        }
    }
}

/// A renderer-agnostic draw request. Asset keys are resolved (and fall back
/// to `fallback`) by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    Sprite {
        asset: String,
        rect: Rect,
        fallback: [f32; 4],
    },
    Text {
        text: String,
        pos: Vec2,
        size: f32,
        color: [f32; 4],
    },
}

fn asset_path(key: &str) -> String {
    format!("assets/{key}")
}

/// Ordered draw list for a frame: background, obstacles, ground, body, score
pub fn draw_list(snapshot: &Snapshot, settings: &Settings, skin: &str) -> Vec<DrawCommand> {
    let map = settings.map.profile();
    let world = Rect::new(0.0, 0.0, settings.world_width, settings.world_height);
    let mut commands = Vec::with_capacity(snapshot.obstacles.len() * 2 + 4);

    let frame = snapshot.background_frame as usize % map.backgrounds.len().max(1);
    if let Some(background) = map.backgrounds.get(frame) {
        commands.push(DrawCommand::Sprite {
            asset: asset_path(background),
            rect: world,
            fallback: colors::SKY,
        });
    }

    for obstacle in &snapshot.obstacles {
        commands.push(DrawCommand::Sprite {
            asset: asset_path(map.top_obstacle),
            rect: obstacle.top,
            fallback: colors::OBSTACLE,
        });
        commands.push(DrawCommand::Sprite {
            asset: asset_path(map.bottom_obstacle),
            rect: obstacle.bottom,
            fallback: colors::OBSTACLE,
        });
    }

    commands.push(DrawCommand::Sprite {
        asset: asset_path(map.ground),
        rect: snapshot.ground,
        fallback: colors::GROUND,
    });

    commands.push(DrawCommand::Sprite {
        asset: format!("assets/birds/{skin}"),
        rect: snapshot.body,
        fallback: colors::BODY,
    });

    commands.push(DrawCommand::Text {
        text: format!("SCORE: {}", snapshot.score),
        pos: Vec2::new(settings.world_width * 0.04, settings.world_height * 0.07),
        size: SCORE_FONT_SIZE * settings.scale.x,
        color: colors::TEXT,
    });

    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Difficulty, MapKind, Viewport};
    use crate::sim::{Obstacle, start_session};

    #[test]
    fn test_capture() {
        let s = Settings::logical(Difficulty::Normal, MapKind::Classic);
        let mut session = start_session(&s, 1);
        session.obstacles.push(Obstacle {
            id: 3,
            x: 250.0,
            gap_top: 100.0,
            scored: false,
        });
        let snap = Snapshot::capture(&session, &s);
        assert_eq!(snap.body, Rect::new(100.0, 275.0, 50.0, 50.0));
        assert_eq!(snap.ground, Rect::new(0.0, 540.0, 400.0, 60.0));
        assert_eq!(snap.obstacles.len(), 1);
        assert_eq!(snap.obstacles[0].top, Rect::new(250.0, 0.0, 70.0, 100.0));
        assert_eq!(snap.obstacles[0].bottom, Rect::new(250.0, 240.0, 70.0, 300.0));
    }

    #[test]
    fn test_draw_order_and_assets() {
        let s = Settings::logical(Difficulty::Easy, MapKind::City);
        let mut session = start_session(&s, 1);
        session.animation.frame = 1;
        session.obstacles.push(Obstacle {
            id: 1,
            x: 300.0,
            gap_top: 120.0,
            scored: false,
        });
        let commands = draw_list(&Snapshot::capture(&session, &s), &s, "bird2.png");
        assert_eq!(commands.len(), 6);
        match &commands[0] {
            DrawCommand::Sprite { asset, .. } => {
                assert_eq!(asset, "assets/maps/city/background_night.png")
            }
            other => panic!("unexpected {other:?}"),
        }
        match &commands[4] {
            DrawCommand::Sprite { asset, fallback, .. } => {
                assert_eq!(asset, "assets/birds/bird2.png");
                assert_eq!(*fallback, colors::BODY);
            }
            other => panic!("unexpected {other:?}"),
        }
        match &commands[5] {
            DrawCommand::Text { text, .. } => assert_eq!(text, "SCORE: 0"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_score_font_scales_with_width() {
        let vp = Viewport::new(800.0, 600.0).unwrap();
        let s = Settings::resolve(Difficulty::Normal, MapKind::Classic, vp);
        let session = start_session(&s, 1);
        let commands = draw_list(&Snapshot::capture(&session, &s), &s, "bird1.png");
        let size = commands.iter().find_map(|c| match c {
            DrawCommand::Text { size, .. } => Some(*size),
            _ => None,
        });
        assert_eq!(size, Some(50.0));
    }
}
