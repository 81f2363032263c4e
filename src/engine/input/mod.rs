// Input handling for the window driver
//
// Only two keys matter: one to start the run and one to leave. The gameplay
// core never sees key codes, it only receives the start trigger.

pub mod action;
pub mod config;

pub use action::{Action, InputSource};
pub use config::InputConfig;
