//! Fallback geometry: colored quads for draw commands whose asset is missing

use super::snapshot::DrawCommand;
use super::vertex::Vertex;
use crate::sim::Rect;

/// Two triangles covering a rectangle
pub fn rect(r: &Rect, color: [f32; 4]) -> [Vertex; 6] {
    let (x0, y0, x1, y1) = (r.left(), r.top(), r.right(), r.bottom());
    [
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Fill every sprite in the draw list with its fallback color.
///
/// `is_missing` decides per asset key; sprites with a loaded asset and text
/// commands produce no geometry. Empty rectangles are skipped.
pub fn fallback_quads<F>(commands: &[DrawCommand], mut is_missing: F) -> Vec<Vertex>
where
    F: FnMut(&str) -> bool,
{
    let mut vertices = Vec::with_capacity(commands.len() * 6);
    for command in commands {
        if let DrawCommand::Sprite {
            asset,
            rect: r,
            fallback,
        } = command
        {
            if r.size.x <= 0.0 || r.size.y <= 0.0 || !is_missing(asset.as_str()) {
                continue;
            }
            vertices.extend_from_slice(&rect(r, *fallback));
        }
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::vertex::colors;

    #[test]
    fn test_rect_corners() {
        let verts = rect(&Rect::new(10.0, 20.0, 30.0, 40.0), colors::GROUND);
        assert_eq!(verts[0].position, [10.0, 20.0]);
        assert_eq!(verts[5].position, [40.0, 60.0]);
        assert!(verts.iter().all(|v| v.color == colors::GROUND));
    }

    #[test]
    fn test_fallback_only_for_missing_assets() {
        let commands = vec![
            DrawCommand::Sprite {
                asset: "assets/a.png".to_string(),
                rect: Rect::new(0.0, 0.0, 5.0, 5.0),
                fallback: colors::SKY,
            },
            DrawCommand::Sprite {
                asset: "assets/b.png".to_string(),
                rect: Rect::new(0.0, 0.0, 5.0, 5.0),
                fallback: colors::BODY,
            },
            DrawCommand::Sprite {
                asset: "assets/b.png".to_string(),
                rect: Rect::new(0.0, 0.0, 5.0, 0.0),
                fallback: colors::BODY,
            },
        ];
        let verts = fallback_quads(&commands, |key| key.ends_with("b.png"));
        assert_eq!(verts.len(), 6);
        assert_eq!(verts[0].color, colors::BODY);
    }
}
