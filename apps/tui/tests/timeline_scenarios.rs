use std::time::Duration;

use year_wrapped::data::{month_angle, TIMELINE};
use year_wrapped::timeline::cards;
use year_wrapped::timeline::ring::{self, RingGeometry};
use year_wrapped::timeline::TimelineMotion;
use year_wrapped::{
    RadialTimeline, SlideDeck, SlideId, TimelineInput, TimelineResponse, TimelineView,
};

fn september_click() -> usize {
    let geometry = RingGeometry::from_viewport(1200.0, 900.0);
    let ticks = ring::ticks(&TIMELINE, None);
    let angle = ring::tick_angle(usize::from(month_angle(8)));
    let (x, y) = geometry.project(angle, geometry.radius + 20.0, 0.0, 1.0);
    ring::hit_test(&ticks, &geometry, 0.0, 1.0, x, y).unwrap()
}

#[test]
fn one_large_wheel_event_opens_january() {
    let mut timeline = RadialTimeline::new();
    assert_eq!(
        timeline.handle(TimelineInput::Wheel(200.0)),
        TimelineResponse::Handled
    );
    assert_eq!(timeline.view(), TimelineView::MonthBrowser);
    assert_eq!(timeline.active_month(), 0);
    assert!(timeline.rotation_target().abs() < f64::EPSILON);
}

#[test]
fn backing_out_of_january_takes_two_gestures() {
    let mut timeline = RadialTimeline::new();
    let _ = timeline.handle(TimelineInput::Wheel(200.0));

    let _ = timeline.handle(TimelineInput::Wheel(-90.0));
    assert_eq!(timeline.view(), TimelineView::MonthBrowser);
    assert_eq!(timeline.active_month(), 0);

    let _ = timeline.handle(TimelineInput::Wheel(-90.0));
    assert_eq!(timeline.view(), TimelineView::Overview);
    assert!((timeline.scale_target() - 1.0).abs() < f64::EPSILON);
    assert!(timeline.wheel_pre_zoom().abs() < f64::EPSILON);
}

#[test]
fn clicking_september_on_the_ring_jumps_there() {
    let month = september_click();
    assert_eq!(month, 8);

    let mut timeline = RadialTimeline::new();
    let _ = timeline.handle(TimelineInput::SegmentClick(month));
    assert_eq!(timeline.view(), TimelineView::MonthBrowser);
    assert_eq!(timeline.active_month(), 8);
    assert!((timeline.scale_target() - 2.5).abs() < f64::EPSILON);
    assert!((timeline.rotation_target() + 262.0).abs() < f64::EPSILON);
}

#[test]
fn next_on_december_completes_once_and_advances_the_deck() {
    let mut deck = SlideDeck::new();
    deck.open_month(11);

    let response = deck.handle_timeline(TimelineInput::NextButton);
    assert_eq!(response, TimelineResponse::Complete);
    assert_eq!(deck.current(), SlideId::SearchHabits);

    // The timeline is gone with the slide; further input is ignored.
    assert_eq!(
        deck.handle_timeline(TimelineInput::NextButton),
        TimelineResponse::Ignored
    );
    assert_eq!(deck.current(), SlideId::SearchHabits);
}

#[test]
fn next_on_december_keeps_the_index() {
    let mut timeline = RadialTimeline::new();
    timeline.jump_to(11);
    assert_eq!(timeline.press_next(), TimelineResponse::Complete);
    assert_eq!(timeline.active_month(), 11);
}

#[test]
fn card_window_around_june() {
    let entries: Vec<usize> = {
        let mut entries: Vec<usize> = cards::stack(TIMELINE.len(), 5)
            .iter()
            .map(|card| card.entry)
            .collect();
        entries.sort_unstable();
        entries
    };
    assert_eq!(entries, vec![4, 5, 6, 7, 8]);
}

#[test]
fn rotation_targets_follow_month_angles() {
    for month in 0..TIMELINE.len() {
        let mut timeline = RadialTimeline::new();
        timeline.jump_to(month);
        let expected = -f64::from(TIMELINE[month].angle_degree) * 2.0;
        assert!((timeline.rotation_target() - expected).abs() < f64::EPSILON);
    }
}

#[test]
fn springs_settle_on_the_clicked_month() {
    let mut timeline = RadialTimeline::new();
    let _ = timeline.handle(TimelineInput::SegmentClick(3));

    let mut motion = TimelineMotion::new(TIMELINE.len(), false);
    for _ in 0..600 {
        motion.advance(&timeline, Duration::from_millis(16));
    }
    assert!(motion.is_settled());
    let lag = motion.rotation() - timeline.rotation_target();
    assert!(lag.abs() < 1e-3);
    assert!((motion.scale() - 2.5).abs() < 1e-3);
}

#[test]
fn search_habits_gate_then_journey_reset_on_return() {
    let mut deck = SlideDeck::new();
    deck.open_month(4);
    assert!(deck.go_to_next());
    assert_eq!(deck.current(), SlideId::SearchHabits);

    assert!(!deck.go_to_next());
    assert!(deck.gate().is_revealed());

    assert!(deck.go_to_prev());
    assert_eq!(deck.current(), SlideId::Journey);
    assert_eq!(deck.timeline().view(), TimelineView::Overview);
}
