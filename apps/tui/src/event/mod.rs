// Event module for year-wrapped
// Drives the frame loop and the headless report

pub mod headless;
pub mod loop_handler;

pub use headless::run_headless;
pub use loop_handler::run;
