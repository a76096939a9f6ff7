// Radial timeline: interaction state machine, animated outputs and the
// derived values the renderer draws from.

pub mod cards;
pub mod controller;
pub mod motion;
pub mod ring;

pub use controller::{RadialTimeline, TimelineInput, TimelineResponse, TimelineView};
pub use motion::TimelineMotion;
pub use ring::RingGeometry;
