// Gameplay

pub mod runner;
