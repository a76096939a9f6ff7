// Static dataset for the year in review.
// Everything here is fixed at compile time and never mutated.

pub mod stats;
pub mod timeline;

pub use stats::{share_text, UserStats, USER_STATS};
pub use timeline::{month_angle, month_color, TIMELINE};
