// App module for year-wrapped
// Holds the viewer state and routes terminal input into it

pub mod input;
pub mod state;

pub use input::{handle_input, handle_mouse};
pub use state::{App, Stage};
