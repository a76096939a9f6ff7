use crate::domain::SlideId;
use crate::reveal::RevealGate;
use crate::timeline::{RadialTimeline, TimelineInput, TimelineResponse};
use tracing::info;

/// Ordered slides plus the local state of the slides that have any.
///
/// Slide-local state is rebuilt every time a slide is entered.
#[derive(Debug, Clone)]
pub struct SlideDeck {
    slides: &'static [SlideId],
    current: usize,
    gate: RevealGate,
    timeline: RadialTimeline,
}

impl Default for SlideDeck {
    fn default() -> Self {
        Self::new()
    }
}

impl SlideDeck {
    pub const fn new() -> Self {
        Self::with_slides(&SlideId::ALL)
    }

    pub const fn with_slides(slides: &'static [SlideId]) -> Self {
        Self {
            slides,
            current: 0,
            gate: RevealGate::Unrevealed,
            timeline: RadialTimeline::new(),
        }
    }

    pub fn current(&self) -> SlideId {
        self.slides[self.current.min(self.slides.len().saturating_sub(1))]
    }

    pub const fn index(&self) -> usize {
        self.current
    }

    pub const fn len(&self) -> usize {
        self.slides.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub const fn is_first(&self) -> bool {
        self.current == 0
    }

    pub const fn is_last(&self) -> bool {
        self.current + 1 >= self.slides.len()
    }

    pub const fn timeline(&self) -> &RadialTimeline {
        &self.timeline
    }

    pub const fn gate(&self) -> RevealGate {
        self.gate
    }

    pub fn toggle_gate(&mut self) {
        self.gate.toggle();
    }

    /// The deck-level prev/next buttons are hidden while the timeline owns
    /// navigation.
    pub fn shows_nav_buttons(&self) -> bool {
        self.current() != SlideId::Journey
    }

    /// One flag per slide: filled up to and including the current one.
    pub fn progress(&self) -> Vec<bool> {
        (0..self.slides.len())
            .map(|index| index <= self.current)
            .collect()
    }

    pub fn go_to_next(&mut self) -> bool {
        if self.current() == SlideId::SearchHabits && !self.gate.try_advance() {
            return false;
        }
        if self.is_last() {
            return false;
        }
        self.enter(self.current + 1);
        true
    }

    pub fn go_to_prev(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.enter(self.current - 1);
        true
    }

    pub fn go_to(&mut self, slide: SlideId) -> bool {
        match self.slides.iter().position(|candidate| *candidate == slide) {
            Some(index) => {
                self.enter(index);
                true
            }
            None => false,
        }
    }

    pub fn restart(&mut self) {
        self.enter(0);
    }

    /// Feeds the timeline; its completion signal advances the deck.
    pub fn handle_timeline(&mut self, input: TimelineInput) -> TimelineResponse {
        if self.current() != SlideId::Journey {
            return TimelineResponse::Ignored;
        }
        let response = self.timeline.handle(input);
        if response == TimelineResponse::Complete {
            self.go_to_next();
        }
        response
    }

    /// Opens the journey slide zoomed into `month`.
    pub fn open_month(&mut self, month: usize) {
        if self.go_to(SlideId::Journey) {
            self.timeline.jump_to(month);
        }
    }

    fn enter(&mut self, index: usize) {
        self.current = index.min(self.slides.len().saturating_sub(1));
        self.gate.reset();
        self.timeline = RadialTimeline::new();
        info!(
            slide = self.current().as_str(),
            index = self.current,
            "slide entered"
        );
    }
}
