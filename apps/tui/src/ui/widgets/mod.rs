pub mod buttons;
pub mod cards;
pub mod charts;
pub mod popup;
pub mod progress;
pub mod ring;

use ratatui::style::Color;

/// Terminals have no alpha channel; blend toward the black background.
pub fn fade(color: Color, opacity: f64) -> Color {
    let opacity = opacity.clamp(0.0, 1.0);
    match color {
        Color::Rgb(r, g, b) => {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let channel = |value: u8| (f64::from(value) * opacity).round() as u8;
            Color::Rgb(channel(r), channel(g), channel(b))
        }
        other if opacity < 0.5 => match other {
            Color::Reset => other,
            _ => Color::DarkGray,
        },
        other => other,
    }
}
