use crate::app::App;
use crate::data::TIMELINE;
use crate::timeline::ring::{self, MonthLabel, Tick};
use crate::timeline::{RingGeometry, TimelineView};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::canvas::{Canvas, Circle, Line as CanvasLine};
use ratatui::Frame;

use super::fade;

/// A terminal cell is treated as 8x16 virtual pixels so the ring stays round.
pub const CELL_WIDTH: f64 = 8.0;
pub const CELL_HEIGHT: f64 = 16.0;

pub fn viewport(area: Rect) -> (f64, f64) {
    (
        f64::from(area.width) * CELL_WIDTH,
        f64::from(area.height) * CELL_HEIGHT,
    )
}

pub fn geometry_for(area: Rect) -> RingGeometry {
    let (width, height) = viewport(area);
    RingGeometry::from_viewport(width, height)
}

/// Virtual coordinates of the centre of the cell at `(column, row)`.
pub fn to_virtual(area: Rect, column: u16, row: u16) -> Option<(f64, f64)> {
    if column < area.x || row < area.y || column >= area.right() || row >= area.bottom() {
        return None;
    }
    Some((
        (f64::from(column - area.x) + 0.5) * CELL_WIDTH,
        (f64::from(row - area.y) + 0.5) * CELL_HEIGHT,
    ))
}

/// Month under a click at `(column, row)` when the ring fills `area`.
pub fn month_at(app: &App, area: Rect, column: u16, row: u16) -> Option<usize> {
    let (x, y) = to_virtual(area, column, row)?;
    let geometry = geometry_for(area);
    let ticks = ring::ticks(&TIMELINE, active_month(app));
    ring::hit_test(
        &ticks,
        &geometry,
        app.motion.rotation(),
        app.motion.scale(),
        x,
        y,
    )
}

fn active_month(app: &App) -> Option<usize> {
    let timeline = app.deck.timeline();
    timeline.is_zoomed().then(|| timeline.active_month())
}

pub fn render_ring(app: &App, f: &mut Frame<'_>, area: Rect) {
    if area.width < 8 || area.height < 4 {
        return;
    }

    let (width, height) = viewport(area);
    let geometry = geometry_for(area);
    let rotation = app.motion.rotation();
    let scale = app.motion.scale();
    let ticks = ring::ticks(&TIMELINE, active_month(app));
    let labels = ring::month_labels(&ticks, &geometry, rotation, scale);
    let overview = app.deck.timeline().view() == TimelineView::Overview;

    f.render_widget(
        Canvas::default()
            .paint(|ctx| {
                // Canvas y grows upward; ring geometry grows downward.
                let flip = |y: f64| height - y;

                ctx.draw(&Circle {
                    x: geometry.center_x,
                    y: flip(geometry.center_y),
                    radius: geometry.radius * scale * 0.92,
                    color: Color::Rgb(0x1a, 0x1a, 0x1a),
                });

                for tick in &ticks {
                    draw_tick(ctx, tick, &geometry, rotation, scale, &flip);
                }

                ctx.layer();

                for label in &labels {
                    print_label(ctx, label, height);
                }

                if overview {
                    let title = TextLine::from(Span::styled(
                        "2025",
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ));
                    let x = geometry.center_x - 2.0 * CELL_WIDTH;
                    ctx.print(x, flip(geometry.center_y), title);
                }
            })
            .x_bounds([0.0, width])
            .y_bounds([0.0, height]),
        area,
    );
}

fn draw_tick(
    ctx: &mut ratatui::widgets::canvas::Context<'_>,
    tick: &Tick,
    geometry: &RingGeometry,
    rotation: f64,
    scale: f64,
    flip: &impl Fn(f64) -> f64,
) {
    let segment = ring::tick_segment(tick, geometry, rotation, scale);
    let color = fade(tick.color, tick.opacity);
    ctx.draw(&CanvasLine {
        x1: segment.x1,
        y1: flip(segment.y1),
        x2: segment.x2,
        y2: flip(segment.y2),
        color,
    });

    // Month ticks are twice as thick: a second stroke one dot to the side.
    if tick.width > 1.0 {
        let normal = (tick.angle + rotation + 90.0).to_radians();
        let (dx, dy) = (normal.cos() * 3.0, normal.sin() * 3.0);
        ctx.draw(&CanvasLine {
            x1: segment.x1 + dx,
            y1: flip(segment.y1 + dy),
            x2: segment.x2 + dx,
            y2: flip(segment.y2 + dy),
            color,
        });
    }
}

/// Terminal text is always upright, so `MonthLabel::counter_rotation` is
/// not needed here.
fn print_label(ctx: &mut ratatui::widgets::canvas::Context<'_>, label: &MonthLabel, height: f64) {
    let entry = &TIMELINE[label.month];
    let text = entry.short_label;
    #[allow(clippy::cast_precision_loss)]
    let half_width = text.chars().count() as f64 * CELL_WIDTH / 2.0;
    let mut style = Style::default().fg(fade(crate::data::month_color(label.month), 0.9));
    if label.active {
        style = style.fg(Color::White).add_modifier(Modifier::BOLD);
    }
    ctx.print(
        label.x - half_width,
        height - label.y,
        TextLine::from(Span::styled(text, style)),
    );
}
