use crate::app::App;
use crate::timeline::TimelineView;
use crate::ui::widgets::{cards, ring};
use ratatui::layout::Rect;
use ratatui::Frame;

use super::muted;

pub fn render_journey(app: &App, f: &mut Frame<'_>, area: Rect) {
    ring::render_ring(app, f, area);

    match app.deck.timeline().view() {
        TimelineView::Overview => {
            if area.height > 2 {
                let hint = muted("Scroll to explore").centered();
                f.render_widget(
                    hint,
                    Rect {
                        y: area.bottom() - 2,
                        height: 1,
                        ..area
                    },
                );
            }
        }
        TimelineView::MonthBrowser => cards::render_card_stack(app, f, area),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::domain::SlideId;
    use crate::ui::screens::test_support::draw;
    use std::time::Duration;

    #[test]
    fn overview_shows_the_scroll_hint() {
        let mut app = App::new(AppConfig::default());
        app.open_slide(SlideId::Journey);
        let text = draw(100, 30, |f| render_journey(&app, f, f.area()));
        assert!(text.contains("Scroll to explore"));
        assert!(text.contains("Jan"));
    }

    #[test]
    fn zoomed_view_shows_the_active_card() {
        let mut app = App::new(AppConfig::default());
        app.open_month(2);
        app.motion.advance(app.deck.timeline(), Duration::ZERO);
        app.motion.snap();
        let text = draw(100, 30, |f| render_journey(&app, f, f.area()));
        assert!(text.contains("Super User"));
        assert!(text.contains("March 2025"));
        assert!(!text.contains("Scroll to explore"));
    }
}
