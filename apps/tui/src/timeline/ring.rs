//! Derived rendering values for the ring: tick classification, geometry,
//! label placement and hit-testing. Pure functions of the controller state.
//!
//! Coordinates are screen-like: x grows right, y grows down, angles are in
//! degrees clockwise from the positive x axis. Tick 0 sits at the top.

use crate::data::timeline::month_color;
use crate::domain::{CardSize, TimelineEntry};
use ratatui::style::Color;

pub const TICK_COUNT: usize = 180;
/// Distance from a month tick's base to its label centre.
pub const LABEL_OFFSET: f64 = 85.0;
/// How far from a month tick a click still selects it.
pub const HIT_TOLERANCE: f64 = 14.0;

pub const FILLER_COLOR: Color = Color::Rgb(0x2a, 0x2a, 0x2a);

const MAX_RING_SIZE: f64 = 500.0;
const VIEWPORT_FRACTION: f64 = 0.7;
const RING_INSET: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub index: usize,
    /// Unrotated screen angle of the tick.
    pub angle: f64,
    pub month: Option<usize>,
    pub length: f64,
    pub width: f64,
    pub color: Color,
    pub opacity: f64,
    pub active: bool,
}

impl Tick {
    pub const fn is_month(&self) -> bool {
        self.month.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Segment {
    /// Shortest distance from `(x, y)` to the segment.
    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        let dx = self.x2 - self.x1;
        let dy = self.y2 - self.y1;
        let length_sq = dx.mul_add(dx, dy * dy);
        let t = if length_sq <= f64::EPSILON {
            0.0
        } else {
            ((x - self.x1).mul_add(dx, (y - self.y1) * dy) / length_sq).clamp(0.0, 1.0)
        };
        let px = t.mul_add(dx, self.x1);
        let py = t.mul_add(dy, self.y1);
        (x - px).hypot(y - py)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthLabel {
    pub month: usize,
    pub x: f64,
    pub y: f64,
    /// Rotation applied to the text to cancel the ring's rotation.
    pub counter_rotation: f64,
    pub active: bool,
}

/// Size and centre of the ring for a given viewport; recomputed on resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    pub center_x: f64,
    pub center_y: f64,
    pub size: f64,
    pub radius: f64,
}

impl RingGeometry {
    pub fn from_viewport(width: f64, height: f64) -> Self {
        let size = (width.min(height) * VIEWPORT_FRACTION).min(MAX_RING_SIZE);
        Self {
            center_x: width / 2.0,
            center_y: height / 2.0,
            size,
            radius: (size / 2.0 - RING_INSET).max(0.0),
        }
    }

    /// Point at `distance` from the centre along unrotated `angle`, after
    /// the ring is rotated by `rotation` degrees and scaled by `scale`.
    pub fn project(&self, angle: f64, distance: f64, rotation: f64, scale: f64) -> (f64, f64) {
        let radians = (angle + rotation).to_radians();
        (
            (distance * scale).mul_add(radians.cos(), self.center_x),
            (distance * scale).mul_add(radians.sin(), self.center_y),
        )
    }
}

pub fn tick_angle(index: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let fraction = index as f64 / TICK_COUNT as f64;
    fraction.mul_add(360.0, -90.0)
}

/// Month whose angle lands exactly on `tick`, if any.
pub fn month_at_tick(entries: &[TimelineEntry], tick: usize) -> Option<usize> {
    entries
        .iter()
        .position(|entry| usize::from(entry.angle_degree) == tick)
}

/// All ring ticks; `active` is the highlighted month while zoomed.
pub fn ticks(entries: &[TimelineEntry], active: Option<usize>) -> Vec<Tick> {
    (0..TICK_COUNT)
        .map(|index| {
            let month = month_at_tick(entries, index);
            let angle = tick_angle(index);
            match month {
                Some(month) => {
                    let is_active = active == Some(month);
                    Tick {
                        index,
                        angle,
                        month: Some(month),
                        length: match entries[month].card_size {
                            CardSize::Large => 50.0,
                            CardSize::Medium => 35.0,
                        },
                        width: 2.0,
                        color: month_color(month),
                        opacity: if is_active { 1.0 } else { 0.8 },
                        active: is_active,
                    }
                }
                None => Tick {
                    index,
                    angle,
                    month: None,
                    length: 20.0,
                    width: 1.0,
                    color: FILLER_COLOR,
                    opacity: 0.4,
                    active: false,
                },
            }
        })
        .collect()
}

pub fn tick_segment(tick: &Tick, geometry: &RingGeometry, rotation: f64, scale: f64) -> Segment {
    let (x1, y1) = geometry.project(tick.angle, geometry.radius, rotation, scale);
    let (x2, y2) = geometry.project(tick.angle, geometry.radius + tick.length, rotation, scale);
    Segment { x1, y1, x2, y2 }
}

pub fn month_labels(
    ticks: &[Tick],
    geometry: &RingGeometry,
    rotation: f64,
    scale: f64,
) -> Vec<MonthLabel> {
    ticks
        .iter()
        .filter_map(|tick| {
            let month = tick.month?;
            let (x, y) = geometry.project(
                tick.angle,
                geometry.radius + LABEL_OFFSET,
                rotation,
                scale,
            );
            Some(MonthLabel {
                month,
                x,
                y,
                counter_rotation: -rotation,
                active: tick.active,
            })
        })
        .collect()
}

/// Month whose tick is nearest to `(x, y)`, within [`HIT_TOLERANCE`].
/// Filler ticks are never clickable.
pub fn hit_test(
    ticks: &[Tick],
    geometry: &RingGeometry,
    rotation: f64,
    scale: f64,
    x: f64,
    y: f64,
) -> Option<usize> {
    ticks
        .iter()
        .filter_map(|tick| {
            let month = tick.month?;
            let distance = tick_segment(tick, geometry, rotation, scale).distance_to(x, y);
            (distance <= HIT_TOLERANCE).then_some((distance, month))
        })
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, month)| month)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::timeline::TIMELINE;

    fn geometry() -> RingGeometry {
        RingGeometry::from_viewport(1000.0, 800.0)
    }

    #[test]
    fn geometry_follows_viewport_and_caps_size() {
        let small = RingGeometry::from_viewport(600.0, 400.0);
        assert!((small.size - 280.0).abs() < 1e-9);
        assert!((small.radius - 100.0).abs() < 1e-9);
        assert!((small.center_x - 300.0).abs() < 1e-9);

        let large = RingGeometry::from_viewport(4000.0, 3000.0);
        assert!((large.size - 500.0).abs() < 1e-9);
        assert!((large.radius - 210.0).abs() < 1e-9);
    }

    #[test]
    fn eleven_month_ticks_fit_on_the_ring() {
        let ticks = ticks(&TIMELINE, None);
        assert_eq!(ticks.len(), TICK_COUNT);
        let months: Vec<usize> = ticks.iter().filter_map(|tick| tick.month).collect();
        // December sits at 180, one past the last tick.
        assert_eq!(months, (0..11).collect::<Vec<_>>());
        assert_eq!(month_at_tick(&TIMELINE, 131), Some(8));
        assert_eq!(month_at_tick(&TIMELINE, 132), None);
    }

    #[test]
    fn tick_styles_distinguish_months_and_fillers() {
        let ticks = ticks(&TIMELINE, Some(2));
        let filler = &ticks[1];
        assert!(!filler.is_month());
        assert!((filler.length - 20.0).abs() < f64::EPSILON);
        assert!((filler.opacity - 0.4).abs() < f64::EPSILON);
        assert_eq!(filler.color, FILLER_COLOR);

        let january = &ticks[0];
        assert!((january.length - 50.0).abs() < f64::EPSILON);
        assert!((january.opacity - 0.8).abs() < f64::EPSILON);
        assert!(!january.active);

        let february = &ticks[16];
        assert!((february.length - 35.0).abs() < f64::EPSILON);

        let march = &ticks[33];
        assert!(march.active);
        assert!((march.opacity - 1.0).abs() < f64::EPSILON);
        assert_eq!(ticks.iter().filter(|tick| tick.active).count(), 1);
    }

    #[test]
    fn first_tick_points_up() {
        let geometry = geometry();
        let ticks = ticks(&TIMELINE, None);
        let segment = tick_segment(&ticks[0], &geometry, 0.0, 1.0);
        assert!((segment.x1 - geometry.center_x).abs() < 1e-9);
        let top = geometry.center_y - geometry.radius;
        assert!((segment.y1 - top).abs() < 1e-9);
        assert!(segment.y2 < segment.y1);
    }

    #[test]
    fn rotation_brings_active_month_to_the_top() {
        let geometry = geometry();
        let ticks = ticks(&TIMELINE, Some(8));
        let rotation = crate::timeline::controller::rotation_for(8);
        let segment = tick_segment(&ticks[131], &geometry, rotation, 2.5);
        assert!((segment.x1 - geometry.center_x).abs() < 1e-6);
        assert!(segment.y1 < geometry.center_y);
    }

    #[test]
    fn labels_sit_outside_ticks_and_cancel_rotation() {
        let geometry = geometry();
        let ticks = ticks(&TIMELINE, None);
        let labels = month_labels(&ticks, &geometry, -64.0, 1.0);
        assert_eq!(labels.len(), 11);
        for label in &labels {
            let distance = (label.x - geometry.center_x).hypot(label.y - geometry.center_y);
            assert!((distance - (geometry.radius + LABEL_OFFSET)).abs() < 1e-6);
            assert!((label.counter_rotation - 64.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn hit_test_finds_month_ticks_only() {
        let geometry = geometry();
        let ticks = ticks(&TIMELINE, None);

        let september = tick_segment(&ticks[131], &geometry, 0.0, 1.0);
        let mid_x = (september.x1 + september.x2) / 2.0;
        let mid_y = (september.y1 + september.y2) / 2.0;
        assert_eq!(hit_test(&ticks, &geometry, 0.0, 1.0, mid_x, mid_y), Some(8));

        assert_eq!(
            hit_test(
                &ticks,
                &geometry,
                0.0,
                1.0,
                geometry.center_x,
                geometry.center_y
            ),
            None
        );

        // A filler tick half-way between two months.
        let filler = tick_segment(&ticks[8], &geometry, 0.0, 1.0);
        assert_eq!(
            hit_test(&ticks, &geometry, 0.0, 1.0, filler.x2, filler.y2),
            None
        );
    }

    #[test]
    fn hit_test_respects_rotation_and_scale() {
        let geometry = geometry();
        let ticks = ticks(&TIMELINE, Some(4));
        let rotation = crate::timeline::controller::rotation_for(4);
        let may = tick_segment(&ticks[65], &geometry, rotation, 2.5);
        assert_eq!(
            hit_test(&ticks, &geometry, rotation, 2.5, may.x1, may.y1),
            Some(4)
        );
    }

    #[test]
    fn segment_distance_clamps_to_endpoints() {
        let segment = Segment {
            x1: 0.0,
            y1: 0.0,
            x2: 10.0,
            y2: 0.0,
        };
        assert!((segment.distance_to(5.0, 3.0) - 3.0).abs() < 1e-9);
        assert!((segment.distance_to(-4.0, 3.0) - 5.0).abs() < 1e-9);
        assert!((segment.distance_to(13.0, 4.0) - 5.0).abs() < 1e-9);
    }
}
