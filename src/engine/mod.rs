// Engine modules: assets, timing, input, collision

pub mod assets;
pub mod game_loop;
pub mod input;
pub mod physics;
