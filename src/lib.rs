// Dino Runner: an endless runner driven one tick at a time
//
// `game::runner` holds the gameplay core and its rendering seam; `engine`
// holds clip assets, collision and the plumbing the window driver needs.

pub mod engine;
pub mod game;

pub use engine::assets::{ClipCatalog, ClipProvider};
pub use game::runner::{
    RenderSink, RunnerConfig, RunnerError, RunnerState, RunnerStateMachine, Scene, SessionEnd,
};
