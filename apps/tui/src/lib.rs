// Export our modules for use in the binary and integration tests
pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod domain;
pub mod event;
pub mod logging;
pub mod reveal;
pub mod sequencer;
pub mod spring;
pub mod terminal;
pub mod timeline;
pub mod ui;

pub use domain::{CardSize, LookupError, SlideId, TimelineEntry};
pub use sequencer::SlideDeck;
pub use timeline::{RadialTimeline, TimelineInput, TimelineResponse, TimelineView};
