use crate::config::AppConfig;
use crate::data::TIMELINE;
use crate::domain::SlideId;
use crate::sequencer::SlideDeck;
use crate::timeline::TimelineMotion;
use ratatui::layout::Rect;
use ratatui::style::Color;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tachyonfx::{fx, Effect, Interpolation};
use tracing::debug;

const SLIDE_FADE_MS: u32 = 350;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Landing,
    Viewing,
}

pub struct App {
    pub running: bool,
    pub stage: Stage,
    pub deck: SlideDeck,
    pub motion: TimelineMotion,
    pub config: AppConfig,
    pub show_help: bool,
    /// Notice shown on the outro; cleared on every slide change.
    pub status_message: String,
    /// Full terminal area, kept current on resize for mouse hit-testing.
    pub area: Rect,
    pub last_frame: Instant,
    pub last_tick: Duration,
    pub slide_fx: Mutex<Option<Effect>>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("running", &self.running)
            .field("stage", &self.stage)
            .field("deck", &self.deck)
            .field("show_help", &self.show_help)
            .field("area", &self.area)
            .finish_non_exhaustive()
    }
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let reduced = config.reduced_motion;
        Self {
            running: true,
            stage: Stage::Landing,
            deck: SlideDeck::new(),
            motion: TimelineMotion::new(TIMELINE.len(), reduced),
            config,
            show_help: false,
            status_message: String::new(),
            area: Rect::new(0, 0, 80, 24),
            last_frame: Instant::now(),
            last_tick: Duration::ZERO,
            slide_fx: Mutex::new(None),
        }
    }

    pub fn current_slide(&self) -> Option<SlideId> {
        match self.stage {
            Stage::Landing => None,
            Stage::Viewing => Some(self.deck.current()),
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.area = Rect::new(0, 0, width, height);
        debug!(width, height, "terminal resized");
    }

    /// Advances animations by the wall-clock time since the last frame.
    pub fn update(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.tick(delta);
    }

    pub fn tick(&mut self, delta: Duration) {
        self.last_tick = delta;
        self.motion.advance(self.deck.timeline(), delta);
    }

    pub fn start(&mut self) {
        self.stage = Stage::Viewing;
        self.deck.restart();
        self.slide_changed();
    }

    /// Back to the landing screen, as the outro's restart does.
    pub fn restart(&mut self) {
        self.stage = Stage::Landing;
        self.deck.restart();
        self.slide_changed();
    }

    pub fn open_slide(&mut self, slide: SlideId) {
        self.stage = Stage::Viewing;
        self.deck.go_to(slide);
        self.slide_changed();
    }

    pub fn open_month(&mut self, month: usize) {
        self.stage = Stage::Viewing;
        self.deck.open_month(month);
        self.slide_changed();
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Slides are rebuilt on entry: springs restart at rest and the new
    /// slide fades in.
    pub fn slide_changed(&mut self) {
        self.motion = TimelineMotion::new(TIMELINE.len(), self.config.reduced_motion);
        self.status_message.clear();
        if self.config.reduced_motion {
            return;
        }
        let timing = (SLIDE_FADE_MS, Interpolation::QuadOut);
        if let Ok(mut effect) = self.slide_fx.lock() {
            *effect = Some(fx::fade_from_fg(Color::Black, timing));
        }
    }
}
