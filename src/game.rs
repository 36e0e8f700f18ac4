//! Boundary-facing game facade
//!
//! Owns the player's selection, the viewport, the settings of the current
//! session and the session itself. Menus write through `select_*`, input
//! arrives through [`Game::flap`] / [`Game::input`], and a scheduler calls
//! [`Game::tick`] once per frame while [`Game::is_running`] holds.

use crate::config::{ConfigError, Difficulty, MapKind, Selection, Settings, Viewport};
use crate::renderer::{DrawCommand, Snapshot, draw_list};
use crate::sim::{self, GameEvent, Session, SessionPhase, TickResult};

pub struct Game {
    selection: Selection,
    viewport: Viewport,
    /// Frozen for the lifetime of the current session
    settings: Settings,
    session: Session,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Selection::default(), Viewport::LOGICAL)
    }
}

impl Game {
    pub fn new(selection: Selection, viewport: Viewport) -> Self {
        let settings = selection.resolve(viewport);
        let session = Session::idle(&settings);
        Self {
            selection,
            viewport,
            settings,
            session,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn phase(&self) -> SessionPhase {
        self.session.phase
    }

    pub fn is_running(&self) -> bool {
        self.session.is_running()
    }

    /// Choose difficulty by menu key; applies from the next start
    pub fn select_difficulty(&mut self, key: &str) -> Result<Difficulty, ConfigError> {
        let difficulty: Difficulty = key.parse()?;
        self.selection.difficulty = difficulty;
        Ok(difficulty)
    }

    /// Choose map by menu key; applies from the next start
    pub fn select_map(&mut self, key: &str) -> Result<MapKind, ConfigError> {
        let map: MapKind = key.parse()?;
        self.selection.map = map;
        Ok(map)
    }

    pub fn select_skin(&mut self, skin: impl Into<String>) {
        self.selection.skin = skin.into();
    }

    /// New render surface size; applies from the next start
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), ConfigError> {
        self.viewport = Viewport::new(width, height)?;
        if self.is_running() {
            log::debug!("Viewport now {width}x{height}, takes effect on next start");
        }
        Ok(())
    }

    /// Start (or restart) a session with the current selection and viewport.
    /// Ignored while a session is running.
    pub fn start(&mut self, seed: u64) -> Option<GameEvent> {
        if self.is_running() {
            log::warn!("Start requested while a session is running; ignored");
            return None;
        }
        self.settings = self.selection.resolve(self.viewport);
        self.session = sim::start_session(&self.settings, seed);
        Some(GameEvent::SessionStarted)
    }

    /// Flap while running; no-op otherwise
    pub fn flap(&mut self) -> bool {
        sim::request_flap(&mut self.session)
    }

    /// Generic "tap": flaps while running, restarts after game over
    pub fn input(&mut self, seed: u64) -> Option<GameEvent> {
        match self.session.phase {
            SessionPhase::Running => {
                self.flap();
                None
            }
            SessionPhase::Over => self.start(seed),
            SessionPhase::Idle => None,
        }
    }

    pub fn tick(&mut self) -> TickResult {
        sim::tick(&mut self.session, &self.settings)
    }

    /// Drop the current session and return to the menu
    pub fn cancel(&mut self) {
        sim::cancel_session(&mut self.session, &self.settings);
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.session, &self.settings)
    }

    pub fn draw_list(&self) -> Vec<DrawCommand> {
        draw_list(&self.snapshot(), &self.settings, &self.selection.skin)
    }
}
