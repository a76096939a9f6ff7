use std::time::Duration;

use super::cards;
use super::controller::RadialTimeline;
use crate::spring::{Spring, SpringConfig};

#[derive(Debug, Clone)]
struct CardMotion {
    y: Spring,
    scale: Spring,
}

/// Animated outputs of the timeline, chasing the controller's targets.
#[derive(Debug, Clone)]
pub struct TimelineMotion {
    rotation: Spring,
    scale: Spring,
    cards: Vec<CardMotion>,
    reduced: bool,
}

impl TimelineMotion {
    pub fn new(card_count: usize, reduced: bool) -> Self {
        Self {
            rotation: Spring::new(0.0, SpringConfig::ROTATION),
            scale: Spring::new(1.0, SpringConfig::SCALE),
            cards: (0..card_count)
                .map(|_| CardMotion {
                    y: Spring::new(0.0, SpringConfig::CARD),
                    scale: Spring::new(1.0, SpringConfig::CARD),
                })
                .collect(),
            reduced,
        }
    }

    pub fn rotation(&self) -> f64 {
        self.rotation.value()
    }

    pub fn scale(&self) -> f64 {
        self.scale.value()
    }

    /// Animated `(y, scale)` of a card, if it exists.
    pub fn card(&self, entry: usize) -> Option<(f64, f64)> {
        self.cards
            .get(entry)
            .map(|card| (card.y.value(), card.scale.value()))
    }

    pub fn is_settled(&self) -> bool {
        self.rotation.is_settled()
            && self.scale.is_settled()
            && self
                .cards
                .iter()
                .all(|card| card.y.is_settled() && card.scale.is_settled())
    }

    /// Retargets every spring from `timeline` and advances one frame.
    pub fn advance(&mut self, timeline: &RadialTimeline, delta: Duration) {
        self.rotation.set_target(timeline.rotation_target());
        self.scale.set_target(timeline.scale_target());

        let active = timeline.active_month();
        for (entry, card) in self.cards.iter_mut().enumerate() {
            // Cards leaving the window keep their last target.
            if let Some(placement) = cards::placement(entry, active) {
                card.y.set_target(placement.y);
                card.scale.set_target(placement.scale);
            }
        }

        if self.reduced {
            self.snap();
            return;
        }

        self.rotation.step(delta);
        self.scale.step(delta);
        for card in &mut self.cards {
            card.y.step(delta);
            card.scale.step(delta);
        }
    }

    pub fn snap(&mut self) {
        self.rotation.snap_to_target();
        self.scale.snap_to_target();
        for card in &mut self.cards {
            card.y.snap_to_target();
            card.scale.snap_to_target();
        }
    }
}
