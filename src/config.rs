//! Difficulty and map profiles
//!
//! Profiles are authored against the logical 400x600 layout in [`crate::consts`]
//! and resolved once per session into viewport-scaled [`Settings`].

use std::fmt;
use std::str::FromStr;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Configuration failures. Nothing else in the core can fail.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    UnknownDifficulty(String),
    UnknownMap(String),
    InvalidViewport { width: f32, height: f32 },
    InvalidSelection(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownDifficulty(key) => write!(f, "unknown difficulty: {key:?}"),
            Self::UnknownMap(key) => write!(f, "unknown map: {key:?}"),
            Self::InvalidViewport { width, height } => {
                write!(f, "invalid viewport size: {width}x{height}")
            }
            Self::InvalidSelection(reason) => write!(f, "invalid selection: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }

    pub fn from_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Physics and obstacle tuning in logical units
    pub fn profile(&self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile {
                gravity: 0.5,
                flap_impulse: -8.0,
                obstacle_width: 65.0,
                gap_height: 160.0,
                spawn_interval: 150,
                min_gap_top: 70.0,
                max_gap_top_offset: 70.0,
                scroll_speed: SCROLL_SPEED,
            },
            Difficulty::Normal => DifficultyProfile {
                gravity: 0.6,
                flap_impulse: -9.0,
                obstacle_width: 70.0,
                gap_height: 140.0,
                spawn_interval: 130,
                min_gap_top: 60.0,
                max_gap_top_offset: 60.0,
                scroll_speed: SCROLL_SPEED,
            },
            Difficulty::Hard => DifficultyProfile {
                gravity: 0.7,
                flap_impulse: -10.0,
                obstacle_width: 75.0,
                gap_height: 120.0,
                spawn_interval: 110,
                min_gap_top: 50.0,
                max_gap_top_offset: 50.0,
                scroll_speed: SCROLL_SPEED,
            },
        }
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| ConfigError::UnknownDifficulty(s.to_string()))
    }
}

/// Per-difficulty tuning, logical units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyProfile {
    pub gravity: f32,
    /// Velocity set on flap (negative = upward)
    pub flap_impulse: f32,
    pub obstacle_width: f32,
    pub gap_height: f32,
    /// Ticks between obstacle spawns
    pub spawn_interval: u32,
    pub min_gap_top: f32,
    pub max_gap_top_offset: f32,
    pub scroll_speed: f32,
}

/// Selectable maps (cosmetic only, plus background animation cadence)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapKind {
    #[default]
    #[serde(rename = "default")]
    Classic,
    City,
    Forest,
}

impl MapKind {
    pub const ALL: [MapKind; 3] = [MapKind::Classic, MapKind::City, MapKind::Forest];

    pub fn as_str(&self) -> &'static str {
        match self {
            MapKind::Classic => "default",
            MapKind::City => "city",
            MapKind::Forest => "forest",
        }
    }

    pub fn from_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "default" => Some(MapKind::Classic),
            "city" => Some(MapKind::City),
            "forest" => Some(MapKind::Forest),
            _ => None,
        }
    }

    pub fn profile(&self) -> MapProfile {
        match self {
            MapKind::Classic => MapProfile {
                backgrounds: &["maps/default/background.png"],
                ground: "maps/default/ground.png",
                top_obstacle: "maps/default/toppipe.png",
                bottom_obstacle: "maps/default/botpipe.png",
                animation_cadence: 0,
            },
            MapKind::City => MapProfile {
                backgrounds: &[
                    "maps/city/background_day.png",
                    "maps/city/background_night.png",
                ],
                ground: "maps/city/ground_city.png",
                top_obstacle: "maps/city/toppipe_city.png",
                bottom_obstacle: "maps/city/botpipe_city.png",
                animation_cadence: 100,
            },
            MapKind::Forest => MapProfile {
                backgrounds: &["maps/forest/background_forest.png"],
                ground: "maps/forest/ground_forest.png",
                top_obstacle: "maps/forest/toppipe_forest.png",
                bottom_obstacle: "maps/forest/botpipe_forest.png",
                animation_cadence: 0,
            },
        }
    }
}

impl FromStr for MapKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| ConfigError::UnknownMap(s.to_string()))
    }
}

/// Asset keys for a map. Opaque to the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapProfile {
    /// Background frames, cycled when `animation_cadence > 0`
    pub backgrounds: &'static [&'static str],
    pub ground: &'static str,
    pub top_obstacle: &'static str,
    pub bottom_obstacle: &'static str,
    /// Ticks per background frame (0 = static)
    pub animation_cadence: u32,
}

/// Render surface size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const LOGICAL: Viewport = Viewport {
        width: LOGICAL_WIDTH,
        height: LOGICAL_HEIGHT,
    };

    pub fn new(width: f32, height: f32) -> Result<Self, ConfigError> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(ConfigError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    /// Scale factors relative to the logical layout
    pub fn scale(&self) -> Vec2 {
        Vec2::new(self.width / LOGICAL_WIDTH, self.height / LOGICAL_HEIGHT)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::LOGICAL
    }
}

/// Resolved, viewport-scaled settings for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub difficulty: Difficulty,
    pub map: MapKind,

    // === Physics ===
    pub gravity: f32,
    pub flap_impulse: f32,

    // === Obstacles ===
    pub obstacle_width: f32,
    pub gap_height: f32,
    pub spawn_interval: u32,
    pub min_gap_top: f32,
    pub max_gap_top_offset: f32,
    pub scroll_speed: f32,

    // === World ===
    pub world_width: f32,
    pub world_height: f32,
    pub ground_thickness: f32,

    // === Body ===
    pub body_width: f32,
    pub body_height: f32,
    pub body_start_x: f32,

    // === Cosmetic ===
    pub animation_cadence: u32,
    pub background_frames: u32,
    /// Viewport scale relative to the logical layout
    pub scale: Vec2,
}

impl Settings {
    /// Combine base layout, difficulty and map for the given viewport
    pub fn resolve(difficulty: Difficulty, map: MapKind, viewport: Viewport) -> Self {
        let profile = difficulty.profile();
        let map_profile = map.profile();
        let Vec2 { x: sx, y: sy } = viewport.scale();

        let settings = Self {
            difficulty,
            map,
            gravity: profile.gravity * sy,
            flap_impulse: profile.flap_impulse * sy,
            obstacle_width: profile.obstacle_width * sx,
            gap_height: profile.gap_height * sy,
            spawn_interval: profile.spawn_interval,
            min_gap_top: profile.min_gap_top * sy,
            max_gap_top_offset: profile.max_gap_top_offset * sy,
            scroll_speed: profile.scroll_speed * sx,
            world_width: viewport.width,
            world_height: viewport.height,
            ground_thickness: GROUND_THICKNESS * sy,
            body_width: BODY_WIDTH * sx,
            body_height: BODY_HEIGHT * sy,
            body_start_x: BODY_START_X * sx,
            animation_cadence: map_profile.animation_cadence,
            background_frames: map_profile.backgrounds.len() as u32,
            scale: Vec2::new(sx, sy),
        };

        log::info!(
            "Resolved settings: difficulty={}, map={}, viewport={}x{}",
            difficulty.as_str(),
            map.as_str(),
            viewport.width,
            viewport.height
        );
        settings
    }

    /// Settings at the logical layout (no scaling)
    pub fn logical(difficulty: Difficulty, map: MapKind) -> Self {
        Self::resolve(difficulty, map, Viewport::LOGICAL)
    }

    /// Y coordinate of the ground's top edge
    #[inline]
    pub fn ground_top(&self) -> f32 {
        self.world_height - self.ground_thickness
    }

    /// Closed sampling interval for an obstacle's gap-top.
    ///
    /// The upper bound is clamped to the lower one so the interval is never
    /// empty on short viewports.
    pub fn gap_top_range(&self) -> (f32, f32) {
        let min = self.min_gap_top;
        let max = self.ground_top() - self.gap_height - self.max_gap_top_offset;
        (min, max.max(min))
    }

    /// Horizontal distance between consecutive obstacles' leading edges
    pub fn obstacle_spacing(&self) -> f32 {
        self.spawn_interval as f32 * self.scroll_speed
    }
}

/// Resolve settings from raw keys, as delivered by a menu
pub fn resolve_settings(
    difficulty_key: &str,
    map_key: &str,
    viewport_width: f32,
    viewport_height: f32,
) -> Result<Settings, ConfigError> {
    let difficulty: Difficulty = difficulty_key.parse()?;
    let map: MapKind = map_key.parse()?;
    let viewport = Viewport::new(viewport_width, viewport_height)?;
    Ok(Settings::resolve(difficulty, map, viewport))
}

/// Player's menu choices
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub difficulty: Difficulty,
    pub map: MapKind,
    /// Body sprite asset, opaque to the simulation
    pub skin: String,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,
            map: MapKind::Classic,
            skin: "bird1.png".to_string(),
        }
    }
}

/// Wire form of [`Selection`]; keys are validated separately so unknown
/// values surface as the matching [`ConfigError`] variant.
#[derive(Deserialize)]
struct RawSelection {
    difficulty: Option<String>,
    map: Option<String>,
    skin: Option<String>,
}

impl Selection {
    /// Parse a stored selection. Missing fields take the defaults; unknown
    /// keys are errors.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawSelection =
            serde_json::from_str(json).map_err(|e| ConfigError::InvalidSelection(e.to_string()))?;
        let mut selection = Self::default();
        if let Some(key) = raw.difficulty {
            selection.difficulty = key.parse()?;
        }
        if let Some(key) = raw.map {
            selection.map = key.parse()?;
        }
        if let Some(skin) = raw.skin {
            selection.skin = skin;
        }
        Ok(selection)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string(self).map_err(|e| ConfigError::InvalidSelection(e.to_string()))
    }

    pub fn resolve(&self, viewport: Viewport) -> Settings {
        Settings::resolve(self.difficulty, self.map, viewport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logical_settings_match_profile() {
        let s = Settings::logical(Difficulty::Normal, MapKind::Classic);
        assert_eq!(s.gravity, 0.6);
        assert_eq!(s.flap_impulse, -9.0);
        assert_eq!(s.obstacle_width, 70.0);
        assert_eq!(s.gap_height, 140.0);
        assert_eq!(s.spawn_interval, 130);
        assert_eq!(s.world_width, 400.0);
        assert_eq!(s.world_height, 600.0);
        assert_eq!(s.ground_top(), 540.0);
        assert_eq!(s.body_start_x, 100.0);
    }

    #[test]
    fn test_scaling_per_axis() {
        let vp = Viewport::new(800.0, 300.0).unwrap();
        let s = Settings::resolve(Difficulty::Hard, MapKind::City, vp);
        // Horizontal x2
        assert!((s.obstacle_width - 150.0).abs() < 1e-4);
        assert!((s.body_width - 100.0).abs() < 1e-4);
        assert!((s.body_start_x - 200.0).abs() < 1e-4);
        assert!((s.scroll_speed - 4.0).abs() < 1e-4);
        // Vertical x0.5
        assert!((s.gap_height - 60.0).abs() < 1e-4);
        assert!((s.body_height - 25.0).abs() < 1e-4);
        assert!((s.ground_thickness - 30.0).abs() < 1e-4);
        assert!((s.gravity - 0.35).abs() < 1e-4);
        // Ticks are not scaled
        assert_eq!(s.spawn_interval, 110);
        assert_eq!(s.animation_cadence, 100);
        assert_eq!(s.background_frames, 2);
    }

    #[test]
    fn test_resolve_settings_unknown_keys() {
        assert_eq!(
            resolve_settings("insane", "default", 400.0, 600.0),
            Err(ConfigError::UnknownDifficulty("insane".to_string()))
        );
        assert_eq!(
            resolve_settings("easy", "moon", 400.0, 600.0),
            Err(ConfigError::UnknownMap("moon".to_string()))
        );
        assert!(matches!(
            resolve_settings("easy", "city", 0.0, 600.0),
            Err(ConfigError::InvalidViewport { .. })
        ));
        assert!(resolve_settings("HARD", "Forest", 400.0, 600.0).is_ok());
    }

    #[test]
    fn test_gap_top_range() {
        let s = Settings::logical(Difficulty::Normal, MapKind::Classic);
        assert_eq!(s.gap_top_range(), (60.0, 340.0));

        let vp = Viewport::new(400.0, 100.0).unwrap();
        for difficulty in Difficulty::ALL {
            let s = Settings::resolve(difficulty, MapKind::Classic, vp);
            let (min, max) = s.gap_top_range();
            assert!(min >= 0.0);
            assert!(max >= min);
        }

        let mut cramped = Settings::logical(Difficulty::Hard, MapKind::Classic);
        cramped.ground_thickness = 500.0;
        assert_eq!(cramped.gap_top_range(), (50.0, 50.0));
    }

    #[test]
    fn test_obstacles_never_overlap() {
        let viewports = [
            (400.0, 600.0),
            (320.0, 480.0),
            (1920.0, 1080.0),
            (200.0, 900.0),
            (3840.0, 400.0),
        ];
        for (w, h) in viewports {
            let vp = Viewport::new(w, h).unwrap();
            for difficulty in Difficulty::ALL {
                let s = Settings::resolve(difficulty, MapKind::Classic, vp);
                assert!(
                    s.obstacle_spacing() > s.obstacle_width,
                    "{} at {w}x{h}: spacing {} <= width {}",
                    difficulty.as_str(),
                    s.obstacle_spacing(),
                    s.obstacle_width
                );
            }
        }
    }

    #[test]
    fn test_selection_json() {
        let sel = Selection::from_json(r#"{"difficulty":"hard","map":"city"}"#).unwrap();
        assert_eq!(sel.difficulty, Difficulty::Hard);
        assert_eq!(sel.map, MapKind::City);
        assert_eq!(sel.skin, "bird1.png");

        let json = sel.to_json().unwrap();
        assert!(json.contains(r#""map":"city""#));
        let back = Selection::from_json(&json).unwrap();
        assert_eq!(back, sel);

        assert_eq!(
            Selection::from_json(r#"{"difficulty":"brutal"}"#),
            Err(ConfigError::UnknownDifficulty("brutal".to_string()))
        );
        assert!(matches!(
            Selection::from_json("not json"),
            Err(ConfigError::InvalidSelection(_))
        ));
    }

    #[test]
    fn test_map_key_round_trip() {
        for map in MapKind::ALL {
            assert_eq!(MapKind::from_key(map.as_str()), Some(map));
        }
        for difficulty in Difficulty::ALL {
            assert_eq!(Difficulty::from_key(difficulty.as_str()), Some(difficulty));
        }
    }

    #[test]
    fn test_map_keys_are_exact() {
        assert_eq!(MapKind::from_key("classic"), None);
        assert_eq!(MapKind::from_key("Default"), Some(MapKind::Classic));
        assert_eq!(
            "classic".parse::<MapKind>(),
            Err(ConfigError::UnknownMap("classic".to_string()))
        );
    }
}
