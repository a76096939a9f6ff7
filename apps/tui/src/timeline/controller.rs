use crate::data::timeline::{month_angle, MONTH_COUNT};
use tracing::debug;

/// Wheel travel needed to zoom from the ring into the month browser.
pub const ZOOM_THRESHOLD: f64 = 150.0;
/// Wheel travel needed to step one month while browsing.
pub const MONTH_THRESHOLD: f64 = 80.0;
/// Pre-zoom travel given back by each backward gesture at the first month.
pub const EXIT_STEP: f64 = 50.0;
/// Below this pre-zoom progress the browser closes.
pub const EXIT_PROGRESS: f64 = 0.5;
pub const ZOOM_SCALE_RANGE: f64 = 1.5;
pub const ZOOMED_SCALE: f64 = 2.5;

const LAST_MONTH: usize = MONTH_COUNT - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineView {
    Overview,
    MonthBrowser,
}

/// Raw input the controller understands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimelineInput {
    Wheel(f64),
    /// Click on the ring; carries the month whose tick was hit.
    SegmentClick(usize),
    Escape,
    ArrowDown,
    ArrowUp,
    PrevButton,
    NextButton,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum TimelineResponse {
    /// The input does not apply in the current view.
    Ignored,
    /// The input was consumed; state may or may not have changed.
    Handled,
    /// The viewer asked to move past the last month.
    Complete,
}

/// Interaction state of the radial timeline.
///
/// All transitions are synchronous; the animated outputs only read
/// `rotation_target` and `scale_target`.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialTimeline {
    view: TimelineView,
    active_month: usize,
    wheel_pre_zoom: f64,
    wheel_month_nav: f64,
    rotation_target: f64,
    scale_target: f64,
}

impl Default for RadialTimeline {
    fn default() -> Self {
        Self::new()
    }
}

impl RadialTimeline {
    pub const fn new() -> Self {
        Self {
            view: TimelineView::Overview,
            active_month: 0,
            wheel_pre_zoom: 0.0,
            wheel_month_nav: 0.0,
            rotation_target: 0.0,
            scale_target: 1.0,
        }
    }

    pub const fn view(&self) -> TimelineView {
        self.view
    }

    pub fn is_zoomed(&self) -> bool {
        self.view == TimelineView::MonthBrowser
    }

    pub const fn active_month(&self) -> usize {
        self.active_month
    }

    pub const fn wheel_pre_zoom(&self) -> f64 {
        self.wheel_pre_zoom
    }

    pub const fn wheel_month_nav(&self) -> f64 {
        self.wheel_month_nav
    }

    pub const fn rotation_target(&self) -> f64 {
        self.rotation_target
    }

    pub const fn scale_target(&self) -> f64 {
        self.scale_target
    }

    pub fn zoom_progress(&self) -> f64 {
        (self.wheel_pre_zoom / ZOOM_THRESHOLD).min(1.0)
    }

    pub fn handle(&mut self, input: TimelineInput) -> TimelineResponse {
        match input {
            TimelineInput::Wheel(delta_y) => {
                self.on_wheel(delta_y);
                TimelineResponse::Handled
            }
            TimelineInput::SegmentClick(month) => {
                self.jump_to(month);
                TimelineResponse::Handled
            }
            TimelineInput::Escape => {
                self.zoom_out();
                TimelineResponse::Handled
            }
            TimelineInput::ArrowDown => {
                if self.is_zoomed() {
                    self.step_forward();
                    TimelineResponse::Handled
                } else {
                    TimelineResponse::Ignored
                }
            }
            TimelineInput::ArrowUp | TimelineInput::PrevButton => {
                if self.is_zoomed() {
                    self.step_back_or_close();
                    TimelineResponse::Handled
                } else {
                    TimelineResponse::Ignored
                }
            }
            TimelineInput::NextButton => self.press_next(),
        }
    }

    pub fn on_wheel(&mut self, delta_y: f64) {
        match self.view {
            TimelineView::Overview => self.wheel_towards_zoom(delta_y),
            TimelineView::MonthBrowser => self.wheel_through_months(delta_y),
        }
    }

    fn wheel_towards_zoom(&mut self, delta_y: f64) {
        self.wheel_pre_zoom = (self.wheel_pre_zoom + delta_y).clamp(0.0, ZOOM_THRESHOLD);
        let progress = self.zoom_progress();
        self.scale_target = progress.mul_add(ZOOM_SCALE_RANGE, 1.0);

        if progress >= 1.0 {
            debug!("timeline: wheel zoom reached month browser");
            self.view = TimelineView::MonthBrowser;
            self.wheel_month_nav = 0.0;
            self.go_to_month(0);
        }
    }

    fn wheel_through_months(&mut self, delta_y: f64) {
        self.wheel_month_nav += delta_y;

        if self.wheel_month_nav > MONTH_THRESHOLD {
            self.wheel_month_nav = 0.0;
            self.step_forward();
        } else if self.wheel_month_nav < -MONTH_THRESHOLD {
            self.wheel_month_nav = 0.0;
            if self.active_month > 0 {
                self.go_to_month(self.active_month - 1);
            } else {
                self.wheel_pre_zoom = (self.wheel_pre_zoom - EXIT_STEP).max(0.0);
                if self.wheel_pre_zoom / ZOOM_THRESHOLD < EXIT_PROGRESS {
                    self.zoom_out();
                }
            }
        }
    }

    /// Forces the month browser open on `month`, as a click on its tick does.
    pub fn jump_to(&mut self, month: usize) {
        debug!(month, "timeline: jump to month");
        self.view = TimelineView::MonthBrowser;
        self.wheel_pre_zoom = ZOOM_THRESHOLD;
        self.scale_target = ZOOMED_SCALE;
        self.go_to_month(month);
    }

    pub fn zoom_out(&mut self) {
        if self.is_zoomed() {
            debug!("timeline: zoom out");
        }
        self.wheel_pre_zoom = 0.0;
        self.wheel_month_nav = 0.0;
        self.scale_target = 1.0;
        self.rotation_target = 0.0;
        self.view = TimelineView::Overview;
        self.active_month = 0;
    }

    /// Next button: one month forward, or completion from the last month.
    pub fn press_next(&mut self) -> TimelineResponse {
        if !self.is_zoomed() {
            return TimelineResponse::Ignored;
        }
        if self.active_month < LAST_MONTH {
            self.go_to_month(self.active_month + 1);
            TimelineResponse::Handled
        } else {
            debug!("timeline: complete");
            TimelineResponse::Complete
        }
    }

    fn step_forward(&mut self) {
        self.go_to_month((self.active_month + 1).min(LAST_MONTH));
    }

    fn step_back_or_close(&mut self) {
        if self.active_month == 0 {
            self.zoom_out();
        } else {
            self.go_to_month(self.active_month - 1);
        }
    }

    fn go_to_month(&mut self, month: usize) {
        let month = month.min(LAST_MONTH);
        self.active_month = month;
        self.rotation_target = rotation_for(month);
    }
}

/// Ring rotation, in degrees, that brings `month` to the top.
pub fn rotation_for(month: usize) -> f64 {
    -f64::from(month_angle(month.min(LAST_MONTH))) * 2.0
}
